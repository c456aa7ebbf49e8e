//! Pie chart geometry: clockwise slices from 12 o'clock plus a legend column.

use super::{Frame, Margins};
use crate::models::ChartRequest;
use crate::theme::ColorTheme;

/// Horizontal shift of the pie center to the left of the canvas middle,
/// reserving the right-hand column for the legend.
const LEGEND_RESERVE: f64 = 80.0;
const LEGEND_GAP: f64 = 60.0;
const LEGEND_ROW_PITCH: f64 = 28.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PieLayout {
    pub frame: Frame,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub slices: Vec<PieSlice>,
    pub legend: Vec<LegendEntry>,
}

/// One slice, in degrees. 0 deg points right; slices start at -90 deg
/// (12 o'clock) and proceed clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: String,
}

impl PieSlice {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// One legend row: swatch position, raw label, rounded percentage share.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub swatch_x: f64,
    pub swatch_y: f64,
    pub label: String,
    pub percent: i64,
    pub color: String,
}

pub fn layout(request: &ChartRequest, theme: &ColorTheme) -> PieLayout {
    let margins = Margins::for_request(request);
    let width = f64::from(request.width);
    let height = f64::from(request.height);
    // Validation guarantees a nonzero total.
    let total: f64 = request.values.iter().sum();
    let n = request.values.len();

    let cx = width / 2.0 - LEGEND_RESERVE;
    let cy = margins.top + (height - margins.top) / 2.0;
    let radius = (cx - 40.0).min(cy - margins.top - 20.0).max(1.0);

    let mut slices = Vec::with_capacity(n);
    let mut start = -90.0;
    for (i, &value) in request.values.iter().enumerate() {
        let end = start + value / total * 360.0;
        slices.push(PieSlice {
            start_angle: start,
            end_angle: end,
            color: theme.series_color(i).to_string(),
        });
        start = end;
    }

    let legend_x = cx + radius + LEGEND_GAP;
    let legend_top = cy - n as f64 * 12.0;
    let legend = request
        .labels
        .iter()
        .zip(&request.values)
        .enumerate()
        .map(|(i, (label, &value))| LegendEntry {
            swatch_x: legend_x,
            swatch_y: legend_top + i as f64 * LEGEND_ROW_PITCH,
            label: label.clone(),
            percent: (value / total * 100.0).round() as i64,
            color: theme.series_color(i).to_string(),
        })
        .collect();

    PieLayout {
        frame: Frame::new(request, margins),
        cx,
        cy,
        radius,
        slices,
        legend,
    }
}
