use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default canvas size in pixels.
pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 400;

/// The closed set of chart kinds this crate can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
    Line,
}

impl ChartKind {
    /// Human-readable name used in alt text.
    pub fn display_name(self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar chart",
            ChartKind::Pie => "Pie chart",
            ChartKind::Line => "Line chart",
        }
    }
}

/// Labeled series payload as callers supply it, e.g. decoded from
/// `{"labels": ["Q1","Q2"], "values": [100, 150]}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataSpec {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Validated description of a chart to draw (one row = one category/value pair).
///
/// Construct with [`ChartRequest::new`] and the `with_*` builders, then pass to
/// [`crate::render_chart`]. The engine never mutates a request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartRequest {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub title: Option<String>,
    pub width: u32,
    pub height: u32,
}

impl ChartRequest {
    /// New request with default 600x400 dimensions and no title.
    pub fn new(kind: ChartKind, labels: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            kind,
            labels,
            values,
            title: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Check structural correctness before any geometry is computed.
    ///
    /// All-or-nothing: the first violated invariant is reported and no layout
    /// is produced for a rejected request.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.labels.len() != self.values.len() {
            return Err(ChartError::MismatchedLengths {
                labels: self.labels.len(),
                values: self.values.len(),
            });
        }
        if self.values.is_empty() {
            return Err(ChartError::EmptySeries);
        }
        if self.width == 0 || self.height == 0 {
            return Err(ChartError::NonPositiveDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.kind == ChartKind::Pie && self.values.iter().sum::<f64>() == 0.0 {
            return Err(ChartError::ZeroTotal);
        }
        Ok(())
    }
}

/// Everything a render call can fail with. All variants are terminal for the
/// call that raised them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("labels and values must have the same length (got {labels} labels, {values} values)")]
    MismatchedLengths { labels: usize, values: usize },
    #[error("chart data must contain at least one value")]
    EmptySeries,
    #[error("chart dimensions must be positive (got {width}x{height})")]
    NonPositiveDimension { width: u32, height: u32 },
    #[error("pie chart values sum to zero")]
    ZeroTotal,
}

/// Output of a successful render call: the SVG document plus a plain-text
/// description. Both are pure functions of (request, theme).
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    pub svg: String,
    pub alt_text: String,
}
