//! Plain-text chart descriptions, independent of SVG rendering.
//!
//! The text is raw prose for screen readers and captions. Labels and titles
//! appear verbatim; only the rendered markup escapes them.

use crate::models::ChartRequest;
use crate::render::fmt_num;

/// Beyond this many points the description switches from listing every pair
/// to a first-to-last range summary.
const LISTING_LIMIT: usize = 4;

/// One-sentence description of a validated request.
pub fn describe(request: &ChartRequest) -> String {
    let kind = request.kind.display_name();
    let subject = match &request.title {
        Some(title) => format!("{kind} titled '{title}'"),
        None => kind.to_string(),
    };

    let n = request.labels.len();
    if n <= LISTING_LIMIT {
        let pairs = request
            .labels
            .iter()
            .zip(&request.values)
            .map(|(label, value)| format!("{label}: {}", fmt_num(*value)))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{subject} showing {pairs}")
    } else {
        format!(
            "{subject} showing {n} data points from {} to {}",
            request.labels[0],
            request.labels[n - 1]
        )
    }
}
