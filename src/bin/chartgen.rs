use anyhow::{Context, Result};
use chartgen::{ChartKind, ChartRequest, ColorTheme, DataSpec, PaletteSpec};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "chartgen",
    version,
    about = "Render themed SVG bar, pie & line charts for presentations"
)]
struct Cli {
    /// Chart type: bar, pie, or line
    #[arg(short = 't', long = "type", value_enum)]
    kind: KindArg,
    /// JSON data: {"labels": [...], "values": [...]}
    #[arg(short, long)]
    data: String,
    /// Output SVG file path (parent directories are created)
    #[arg(short, long)]
    output: PathBuf,
    /// Style JSON file with a `color_palette` object for theming
    #[arg(long)]
    style_file: Option<PathBuf>,
    /// Chart title (optional)
    #[arg(long)]
    title: Option<String>,
    /// Chart width in pixels
    #[arg(long, default_value_t = 600)]
    width: u32,
    /// Chart height in pixels
    #[arg(long, default_value_t = 400)]
    height: u32,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum KindArg {
    Bar,
    Pie,
    Line,
}

impl From<KindArg> for ChartKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Bar => ChartKind::Bar,
            KindArg::Pie => ChartKind::Pie,
            KindArg::Line => ChartKind::Line,
        }
    }
}

/// Style files carry more than colors (fonts, spacing); only the palette
/// matters here.
#[derive(Debug, Deserialize)]
struct StyleFile {
    color_palette: Option<PaletteSpec>,
}

/// Best-effort palette load: a missing or malformed style file logs a warning
/// and falls back to the default theme.
fn load_palette(path: Option<&Path>) -> Option<PaletteSpec> {
    let path = path?;
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            log::warn!(
                "could not read style file {}: {err}; using default colors",
                path.display()
            );
            return None;
        }
    };
    match serde_json::from_str::<StyleFile>(&text) {
        Ok(style) => style.color_palette,
        Err(err) => {
            log::warn!(
                "could not parse style file {}: {err}; using default colors",
                path.display()
            );
            None
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let data: DataSpec = serde_json::from_str(&cli.data)
        .context(r#"invalid --data, expected {"labels": [...], "values": [...]}"#)?;

    let palette = load_palette(cli.style_file.as_deref());
    let theme = ColorTheme::resolve(palette.as_ref());

    let mut request = ChartRequest::new(cli.kind.into(), data.labels, data.values)
        .with_size(cli.width, cli.height);
    if let Some(title) = cli.title {
        request = request.with_title(title);
    }

    let chart = chartgen::render_chart(&request, &theme)?;

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(&cli.output, &chart.svg)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    eprintln!("Wrote chart to {}", cli.output.display());
    println!("Suggested alt text: \"{}\"", chart.alt_text);
    Ok(())
}
