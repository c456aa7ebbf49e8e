//! Geometry computation for each chart kind.
//!
//! A layout holds positions, angles, gridlines, label text, and color
//! references only. Escaping and number-to-text conversion happen in
//! [`crate::render`]; nothing here produces markup.

pub mod bar;
pub mod line;
pub mod pie;

pub use bar::{BarLayout, BarSlot};
pub use line::{LineLayout, LinePoint};
pub use pie::{LegendEntry, PieLayout, PieSlice};

use crate::models::{ChartKind, ChartRequest};
use crate::theme::ColorTheme;

/// Number of gridline intervals on the value axis (6 lines including the
/// baseline).
pub const GRIDLINE_STEPS: usize = 5;

/// Fraction of headroom added above the maximum data value so the tallest
/// bar or point does not touch the top edge.
pub const HEADROOM: f64 = 1.1;

/// Fixed margin model shared by all chart kinds. The top margin grows when a
/// title row is present; bottom and left reserve room for axis labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Margins {
    pub fn for_request(request: &ChartRequest) -> Self {
        Self {
            top: if request.title.is_some() { 60.0 } else { 30.0 },
            bottom: 60.0,
            left: 60.0,
            right: 30.0,
        }
    }

    pub fn chart_width(&self, width: u32) -> f64 {
        f64::from(width) - self.left - self.right
    }

    pub fn chart_height(&self, height: u32) -> f64 {
        f64::from(height) - self.top - self.bottom
    }
}

/// Canvas-level facts every layout carries: viewport size, optional title,
/// and the resolved margins.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub title: Option<String>,
    pub margins: Margins,
}

impl Frame {
    fn new(request: &ChartRequest, margins: Margins) -> Self {
        Self {
            width: request.width,
            height: request.height,
            title: request.title.clone(),
            margins,
        }
    }
}

/// A horizontal reference line on the value axis with its integer label.
#[derive(Debug, Clone, PartialEq)]
pub struct Gridline {
    pub y: f64,
    pub value: i64,
}

/// Type-tagged geometric layout, computed per render call and discarded after
/// serialization.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartLayout {
    Bar(BarLayout),
    Pie(PieLayout),
    Line(LineLayout),
}

impl ChartLayout {
    /// Compute the layout for a request that already passed validation.
    pub fn compute(request: &ChartRequest, theme: &ColorTheme) -> Self {
        match request.kind {
            ChartKind::Bar => ChartLayout::Bar(bar::layout(request, theme)),
            ChartKind::Pie => ChartLayout::Pie(pie::layout(request, theme)),
            ChartKind::Line => ChartLayout::Line(line::layout(request)),
        }
    }

    pub fn frame(&self) -> &Frame {
        match self {
            ChartLayout::Bar(l) => &l.frame,
            ChartLayout::Pie(l) => &l.frame,
            ChartLayout::Line(l) => &l.frame,
        }
    }
}

/// Scale ceiling with headroom, floored to 1.0 when the series has no
/// positive maximum (all-zero input must not divide by zero).
pub(crate) fn headroom_max(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let scaled = max * HEADROOM;
    if scaled > 0.0 { scaled } else { 1.0 }
}

/// Gridlines at fractions `i/GRIDLINE_STEPS` of the value range, baseline
/// first, each labeled with the floor of its value.
pub(crate) fn value_gridlines(
    margins: &Margins,
    chart_h: f64,
    min_val: f64,
    max_val: f64,
) -> Vec<Gridline> {
    (0..=GRIDLINE_STEPS)
        .map(|i| {
            let frac = i as f64 / GRIDLINE_STEPS as f64;
            Gridline {
                y: margins.top + chart_h - frac * chart_h,
                value: (min_val + (max_val - min_val) * frac).floor() as i64,
            }
        })
        .collect()
}
