//! chartgen
//!
//! A lightweight Rust library for rendering small labeled data sets as
//! self-contained SVG charts, themed by a color palette. Pairs with the
//! `chartgen` CLI.
//!
//! ### Features
//! - Bar, pie, and line charts from an ordered labels/values series
//! - Theming via a partial palette merged over built-in defaults
//! - Deterministic: identical inputs produce byte-identical markup
//! - One-line alt text describing each chart
//!
//! ### Example
//! ```
//! use chartgen::{ChartKind, ChartRequest, ColorTheme};
//!
//! let request = ChartRequest::new(
//!     ChartKind::Bar,
//!     vec!["Q1".into(), "Q2".into()],
//!     vec![100.0, 150.0],
//! )
//! .with_title("Revenue");
//! let chart = chartgen::render_chart(&request, &ColorTheme::default())?;
//! assert!(chart.svg.starts_with("<svg"));
//! assert!(chart.alt_text.starts_with("Bar chart titled 'Revenue'"));
//! # Ok::<(), chartgen::ChartError>(())
//! ```
//!
//! The engine performs no I/O and keeps no state between calls; the caller
//! sources the palette and persists the output.

pub mod alt_text;
pub mod layout;
pub mod models;
pub mod render;
pub mod theme;

pub use models::{ChartError, ChartKind, ChartRequest, DataSpec, RenderedChart};
pub use theme::{ColorTheme, PaletteSpec};

use layout::ChartLayout;

/// Render a request into SVG markup plus alt text.
///
/// Validation runs first and is all-or-nothing: a rejected request produces
/// no layout and no output.
pub fn render_chart(
    request: &ChartRequest,
    theme: &ColorTheme,
) -> Result<RenderedChart, ChartError> {
    request.validate()?;
    let chart_layout = ChartLayout::compute(request, theme);
    Ok(RenderedChart {
        svg: render::to_svg(&chart_layout, theme),
        alt_text: alt_text::describe(request),
    })
}
