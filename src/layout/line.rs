//! Line chart geometry: evenly spaced points, area polygon, markers.

use super::{Frame, Gridline, HEADROOM, Margins, value_gridlines};
use crate::models::ChartRequest;

#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    pub frame: Frame,
    pub gridlines: Vec<Gridline>,
    pub points: Vec<LinePoint>,
    /// Area-fill polygon: baseline anchor, the points, baseline anchor.
    pub area: Vec<(f64, f64)>,
}

/// One data point with its marker position, raw value, and category label.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub category: String,
}

// Unlike bars and slices, a line series has no per-datum color; the stroke
// and fill colors are taken from the theme at render time.
pub fn layout(request: &ChartRequest) -> LineLayout {
    let margins = Margins::for_request(request);
    let chart_w = margins.chart_width(request.width);
    let chart_h = margins.chart_height(request.height);
    let n = request.values.len();

    let data_max = request
        .values
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let data_min = request.values.iter().copied().fold(f64::INFINITY, f64::min);
    // The axis always includes zero unless all values are negative.
    let min_val = data_min.min(0.0);
    let mut max_val = data_max * HEADROOM;
    // Degenerate span (e.g. all zeros): floor to a unit range instead of
    // dividing by zero.
    if max_val - min_val <= 0.0 {
        max_val = min_val + 1.0;
    }
    let span = max_val - min_val;

    let points: Vec<LinePoint> = request
        .labels
        .iter()
        .zip(&request.values)
        .enumerate()
        .map(|(i, (label, &value))| {
            let x = if n > 1 {
                margins.left + (i as f64 / (n - 1) as f64) * chart_w
            } else {
                margins.left + chart_w / 2.0
            };
            LinePoint {
                x,
                y: margins.top + chart_h - ((value - min_val) / span) * chart_h,
                value,
                category: label.clone(),
            }
        })
        .collect();

    let baseline = margins.top + chart_h;
    let mut area = Vec::with_capacity(n + 2);
    area.push((points[0].x, baseline));
    area.extend(points.iter().map(|p| (p.x, p.y)));
    area.push((points[n - 1].x, baseline));

    LineLayout {
        frame: Frame::new(request, margins),
        gridlines: value_gridlines(&margins, chart_h, min_val, max_val),
        points,
        area,
    }
}
