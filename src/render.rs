//! Serialization of chart layouts into self-contained SVG documents.
//!
//! A layout is first lowered into an ordered list of drawing primitives, then
//! each primitive is emitted as one line of markup. Drawing order is fixed:
//! background, title, defs, gridlines, data shapes, value labels,
//! category/axis labels, legend. Identical input yields byte-identical
//! output.

use crate::layout::{BarLayout, ChartLayout, Frame, Gridline, LineLayout, PieLayout};
use crate::theme::ColorTheme;

const AREA_GRADIENT_ID: &str = "areaGradient";

/// Text anchoring along the x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// A single drawing command. The serializer turns each into one SVG element.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: String,
        rx: Option<f64>,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: String,
        opacity: f64,
    },
    Path {
        d: String,
        fill: String,
    },
    Polygon {
        points: Vec<(f64, f64)>,
        fill: String,
    },
    Polyline {
        points: Vec<(f64, f64)>,
        stroke: String,
        stroke_width: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: String,
        stroke: String,
        stroke_width: f64,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        anchor: TextAnchor,
        size: u32,
        weight: Option<u32>,
        fill: String,
    },
    /// Vertical fade used under line charts, emitted as a `<defs>` block.
    AreaGradient {
        color: String,
    },
}

/// Serialize a computed layout into one SVG document.
pub fn to_svg(layout: &ChartLayout, theme: &ColorTheme) -> String {
    serialize(layout.frame(), &primitives(layout, theme))
}

/// Lower a layout into its ordered primitive sequence.
pub fn primitives(layout: &ChartLayout, theme: &ColorTheme) -> Vec<Primitive> {
    match layout {
        ChartLayout::Bar(l) => bar_primitives(l, theme),
        ChartLayout::Pie(l) => pie_primitives(l, theme),
        ChartLayout::Line(l) => line_primitives(l, theme),
    }
}

/// Escape the five markup-reserved characters. `&` must go first so entities
/// from later replacements survive.
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Plain decimal text: two decimals, trailing zeros and dot trimmed.
/// `90.0` prints as `90`, `136.666…` as `136.67`.
pub fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let s = format!("{v:.2}");
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Background rect plus the optional centered title row.
fn canvas_head(frame: &Frame, theme: &ColorTheme) -> Vec<Primitive> {
    let mut out = vec![Primitive::Rect {
        x: 0.0,
        y: 0.0,
        width: f64::from(frame.width),
        height: f64::from(frame.height),
        fill: theme.background.clone(),
        rx: None,
    }];
    if let Some(title) = &frame.title {
        out.push(Primitive::Text {
            x: f64::from(frame.width) / 2.0,
            y: 30.0,
            content: title.clone(),
            anchor: TextAnchor::Middle,
            size: 18,
            weight: Some(600),
            fill: theme.primary.clone(),
        });
    }
    out
}

fn gridline_lines(
    out: &mut Vec<Primitive>,
    layout_frame: &Frame,
    gridlines: &[Gridline],
    theme: &ColorTheme,
) {
    let m = &layout_frame.margins;
    for g in gridlines {
        out.push(Primitive::Line {
            x1: m.left,
            y1: g.y,
            x2: f64::from(layout_frame.width) - m.right,
            y2: g.y,
            stroke: theme.secondary.clone(),
            opacity: 0.2,
        });
    }
}

fn gridline_labels(
    out: &mut Vec<Primitive>,
    layout_frame: &Frame,
    gridlines: &[Gridline],
    theme: &ColorTheme,
) {
    let m = &layout_frame.margins;
    for g in gridlines {
        out.push(Primitive::Text {
            x: m.left - 10.0,
            y: g.y + 4.0,
            content: g.value.to_string(),
            anchor: TextAnchor::End,
            size: 12,
            weight: None,
            fill: theme.secondary.clone(),
        });
    }
}

fn bar_primitives(layout: &BarLayout, theme: &ColorTheme) -> Vec<Primitive> {
    let frame = &layout.frame;
    let mut out = canvas_head(frame, theme);

    gridline_lines(&mut out, frame, &layout.gridlines, theme);

    for bar in &layout.bars {
        out.push(Primitive::Rect {
            x: bar.x,
            y: bar.y,
            width: bar.width,
            height: bar.height,
            fill: bar.color.clone(),
            rx: Some(4.0),
        });
    }

    for bar in &layout.bars {
        out.push(Primitive::Text {
            x: bar.x + bar.width / 2.0,
            y: bar.y - 8.0,
            content: fmt_num(bar.value),
            anchor: TextAnchor::Middle,
            size: 12,
            weight: Some(600),
            fill: theme.primary.clone(),
        });
    }

    gridline_labels(&mut out, frame, &layout.gridlines, theme);

    let category_y = f64::from(frame.height) - frame.margins.bottom + 20.0;
    for bar in &layout.bars {
        out.push(Primitive::Text {
            x: bar.x + bar.width / 2.0,
            y: category_y,
            content: bar.category.clone(),
            anchor: TextAnchor::Middle,
            size: 12,
            weight: None,
            fill: theme.secondary.clone(),
        });
    }

    out
}

fn pie_primitives(layout: &PieLayout, theme: &ColorTheme) -> Vec<Primitive> {
    let mut out = canvas_head(&layout.frame, theme);

    for slice in &layout.slices {
        out.push(Primitive::Path {
            d: slice_path(
                layout.cx,
                layout.cy,
                layout.radius,
                slice.start_angle,
                slice.end_angle,
            ),
            fill: slice.color.clone(),
        });
    }

    for entry in &layout.legend {
        out.push(Primitive::Rect {
            x: entry.swatch_x,
            y: entry.swatch_y,
            width: 16.0,
            height: 16.0,
            fill: entry.color.clone(),
            rx: Some(2.0),
        });
        out.push(Primitive::Text {
            x: entry.swatch_x + 24.0,
            y: entry.swatch_y + 12.0,
            content: format!("{} ({}%)", entry.label, entry.percent),
            anchor: TextAnchor::Start,
            size: 12,
            weight: None,
            fill: theme.primary.clone(),
        });
    }

    out
}

/// Wedge path from the center along the start-angle radius, around the arc,
/// and back. The large-arc flag picks the longer arc for sweeps over 180 deg.
fn slice_path(cx: f64, cy: f64, r: f64, start_deg: f64, end_deg: f64) -> String {
    let (start, end) = (start_deg.to_radians(), end_deg.to_radians());
    let (x1, y1) = (cx + r * start.cos(), cy + r * start.sin());
    let (x2, y2) = (cx + r * end.cos(), cy + r * end.sin());
    let large_arc = i32::from(end_deg - start_deg > 180.0);
    format!(
        "M {},{} L {},{} A {},{} 0 {},1 {},{} Z",
        fmt_num(cx),
        fmt_num(cy),
        fmt_num(x1),
        fmt_num(y1),
        fmt_num(r),
        fmt_num(r),
        large_arc,
        fmt_num(x2),
        fmt_num(y2),
    )
}

fn line_primitives(layout: &LineLayout, theme: &ColorTheme) -> Vec<Primitive> {
    let frame = &layout.frame;
    let mut out = canvas_head(frame, theme);

    out.push(Primitive::AreaGradient {
        color: theme.accent.clone(),
    });

    gridline_lines(&mut out, frame, &layout.gridlines, theme);

    out.push(Primitive::Polygon {
        points: layout.area.clone(),
        fill: format!("url(#{AREA_GRADIENT_ID})"),
    });
    out.push(Primitive::Polyline {
        points: layout.points.iter().map(|p| (p.x, p.y)).collect(),
        stroke: theme.accent.clone(),
        stroke_width: 3.0,
    });
    for point in &layout.points {
        out.push(Primitive::Circle {
            cx: point.x,
            cy: point.y,
            r: 5.0,
            fill: theme.background.clone(),
            stroke: theme.accent.clone(),
            stroke_width: 2.0,
        });
    }

    for point in &layout.points {
        out.push(Primitive::Text {
            x: point.x,
            y: point.y - 12.0,
            content: fmt_num(point.value),
            anchor: TextAnchor::Middle,
            size: 11,
            weight: Some(600),
            fill: theme.primary.clone(),
        });
    }

    gridline_labels(&mut out, frame, &layout.gridlines, theme);

    let category_y = f64::from(frame.height) - frame.margins.bottom + 20.0;
    for point in &layout.points {
        out.push(Primitive::Text {
            x: point.x,
            y: category_y,
            content: point.category.clone(),
            anchor: TextAnchor::Middle,
            size: 12,
            weight: None,
            fill: theme.secondary.clone(),
        });
    }

    out
}

fn serialize(frame: &Frame, primitives: &[Primitive]) -> String {
    let mut lines = Vec::with_capacity(primitives.len() + 2);
    lines.push(format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\" \
         font-family=\"system-ui, -apple-system, sans-serif\">",
        frame.width, frame.height
    ));
    for p in primitives {
        lines.push(emit(p));
    }
    lines.push("</svg>".to_string());
    lines.join("\n")
}

fn join_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{},{}", fmt_num(*x), fmt_num(*y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn emit(primitive: &Primitive) -> String {
    match primitive {
        Primitive::Rect {
            x,
            y,
            width,
            height,
            fill,
            rx,
        } => {
            let rx = match rx {
                Some(r) => format!(" rx=\"{}\"", fmt_num(*r)),
                None => String::new(),
            };
            format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{fill}\"{rx}/>",
                fmt_num(*x),
                fmt_num(*y),
                fmt_num(*width),
                fmt_num(*height),
            )
        }
        Primitive::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            opacity,
        } => format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{stroke}\" \
             stroke-opacity=\"{}\"/>",
            fmt_num(*x1),
            fmt_num(*y1),
            fmt_num(*x2),
            fmt_num(*y2),
            fmt_num(*opacity),
        ),
        Primitive::Path { d, fill } => format!("<path d=\"{d}\" fill=\"{fill}\"/>"),
        Primitive::Polygon { points, fill } => format!(
            "<polygon points=\"{}\" fill=\"{fill}\"/>",
            join_points(points)
        ),
        Primitive::Polyline {
            points,
            stroke,
            stroke_width,
        } => format!(
            "<polyline points=\"{}\" fill=\"none\" stroke=\"{stroke}\" stroke-width=\"{}\" \
             stroke-linecap=\"round\" stroke-linejoin=\"round\"/>",
            join_points(points),
            fmt_num(*stroke_width),
        ),
        Primitive::Circle {
            cx,
            cy,
            r,
            fill,
            stroke,
            stroke_width,
        } => format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{fill}\" stroke=\"{stroke}\" \
             stroke-width=\"{}\"/>",
            fmt_num(*cx),
            fmt_num(*cy),
            fmt_num(*r),
            fmt_num(*stroke_width),
        ),
        Primitive::Text {
            x,
            y,
            content,
            anchor,
            size,
            weight,
            fill,
        } => {
            let weight = match weight {
                Some(w) => format!(" font-weight=\"{w}\""),
                None => String::new(),
            };
            format!(
                "<text x=\"{}\" y=\"{}\" text-anchor=\"{}\" font-size=\"{size}\"{weight} \
                 fill=\"{fill}\">{}</text>",
                fmt_num(*x),
                fmt_num(*y),
                anchor.as_str(),
                escape_xml(content),
            )
        }
        Primitive::AreaGradient { color } => format!(
            "<defs><linearGradient id=\"{AREA_GRADIENT_ID}\" x1=\"0%\" y1=\"0%\" x2=\"0%\" \
             y2=\"100%\"><stop offset=\"0%\" stop-color=\"{color}\" stop-opacity=\"0.3\"/>\
             <stop offset=\"100%\" stop-color=\"{color}\" stop-opacity=\"0.05\"/>\
             </linearGradient></defs>"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_the_five_reserved_characters() {
        assert_eq!(
            escape_xml(r#"<a & "b" & 'c'>"#),
            "&lt;a &amp; &quot;b&quot; &amp; &#39;c&#39;&gt;"
        );
    }

    #[test]
    fn escape_handles_ampersand_first() {
        assert_eq!(escape_xml("&lt;"), "&amp;lt;");
    }

    #[test]
    fn fmt_num_trims_trailing_zeros() {
        assert_eq!(fmt_num(90.0), "90");
        assert_eq!(fmt_num(10.5), "10.5");
        assert_eq!(fmt_num(136.666), "136.67");
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(-0.001), "0");
        assert_eq!(fmt_num(-3.5), "-3.5");
    }

    #[test]
    fn slice_path_sets_large_arc_flag_past_half_turn() {
        let minor = slice_path(0.0, 0.0, 10.0, -90.0, 0.0);
        let major = slice_path(0.0, 0.0, 10.0, -90.0, 120.0);
        assert!(minor.contains(" 0,1 "));
        assert!(major.contains(" 1,1 "));
    }

    #[test]
    fn slice_path_endpoints_on_the_circle() {
        // Quarter slice from 12 o'clock ends at 3 o'clock.
        let d = slice_path(100.0, 100.0, 50.0, -90.0, 0.0);
        assert_eq!(d, "M 100,100 L 100,50 A 50,50 0 0,1 150,100 Z");
    }
}
