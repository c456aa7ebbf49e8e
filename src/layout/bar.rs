//! Bar chart geometry: one slot per category, 70% bar / 15% gap split.

use super::{Frame, Gridline, Margins, headroom_max, value_gridlines};
use crate::models::ChartRequest;
use crate::theme::ColorTheme;

#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub frame: Frame,
    pub gridlines: Vec<Gridline>,
    pub bars: Vec<BarSlot>,
}

/// One bar: its rectangle, fill color, raw value, and category label.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSlot {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub value: f64,
    pub category: String,
}

pub fn layout(request: &ChartRequest, theme: &ColorTheme) -> BarLayout {
    let margins = Margins::for_request(request);
    let chart_w = margins.chart_width(request.width);
    let chart_h = margins.chart_height(request.height);
    let n = request.values.len();

    let max_val = headroom_max(&request.values);
    let slot_w = chart_w / n as f64;
    let bar_w = slot_w * 0.7;
    let gap = slot_w * 0.15;

    let bars = request
        .labels
        .iter()
        .zip(&request.values)
        .enumerate()
        .map(|(i, (label, &value))| {
            // Negative values clamp to zero height and sit on the baseline.
            let height = ((value / max_val) * chart_h).max(0.0);
            BarSlot {
                x: margins.left + i as f64 * slot_w + gap,
                y: margins.top + chart_h - height,
                width: bar_w,
                height,
                color: theme.series_color(i).to_string(),
                value,
                category: label.clone(),
            }
        })
        .collect();

    BarLayout {
        frame: Frame::new(request, margins),
        gridlines: value_gridlines(&margins, chart_h, 0.0, max_val),
        bars,
    }
}
