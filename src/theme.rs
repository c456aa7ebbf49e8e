//! Color theme resolution: merge a partial palette over built-in defaults.
//!
//! The defaults match a neutral slate/blue presentation style. Callers that
//! extract a palette from a source deck only need to supply the entries they
//! actually found; everything else falls back here.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PRIMARY: &str = "#1e293b";
pub const DEFAULT_SECONDARY: &str = "#64748b";
pub const DEFAULT_ACCENT: &str = "#2563eb";
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

/// Cyclic series palette. Entry 0 is replaced by the resolved accent so the
/// first series always matches the theme.
const DEFAULT_SERIES: [&str; 6] = [
    "#2563eb", // blue
    "#7c3aed", // violet
    "#db2777", // pink
    "#ea580c", // orange
    "#16a34a", // green
    "#0891b2", // cyan
];

/// Partial palette as it appears in a style file's `color_palette` object.
/// Absent entries are fine; they resolve to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PaletteSpec {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
    pub background: Option<String>,
}

/// Fully resolved set of colors used for chart decoration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorTheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    /// Non-empty; indexed cyclically to color data points and slices.
    pub series_colors: Vec<String>,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self::resolve(None)
    }
}

impl ColorTheme {
    /// Merge an optional partial palette over the built-in defaults.
    pub fn resolve(spec: Option<&PaletteSpec>) -> Self {
        let pick = |value: Option<&String>, fallback: &str| {
            value.cloned().unwrap_or_else(|| fallback.to_string())
        };
        let (primary, secondary, accent, background) = match spec {
            Some(s) => (
                pick(s.primary.as_ref(), DEFAULT_PRIMARY),
                pick(s.secondary.as_ref(), DEFAULT_SECONDARY),
                pick(s.accent.as_ref(), DEFAULT_ACCENT),
                pick(s.background.as_ref(), DEFAULT_BACKGROUND),
            ),
            None => (
                DEFAULT_PRIMARY.to_string(),
                DEFAULT_SECONDARY.to_string(),
                DEFAULT_ACCENT.to_string(),
                DEFAULT_BACKGROUND.to_string(),
            ),
        };

        let mut series_colors: Vec<String> =
            DEFAULT_SERIES.iter().map(|c| (*c).to_string()).collect();
        series_colors[0] = accent.clone();

        Self {
            primary,
            secondary,
            accent,
            background,
            series_colors,
        }
    }

    /// Color for data point `i`, cycling through the series palette.
    pub fn series_color(&self, i: usize) -> &str {
        &self.series_colors[i % self.series_colors.len()]
    }
}

/// Lighten (positive delta) or darken (negative delta) a `#rrggbb` color by
/// adding `delta` to each channel, clamped to `[0, 255]`.
///
/// Callers use this to derive a secondary background tone (lighten a dark
/// theme, darken a light one). Input that does not look like a hex color is
/// returned unchanged; palettes are best-effort data.
pub fn adjust_shade(hex: &str, delta: i32) -> String {
    let raw = hex.strip_prefix('#').unwrap_or(hex);
    if raw.len() != 6 || !raw.chars().all(|c| c.is_ascii_hexdigit()) {
        return hex.to_string();
    }
    let channel = |range: &str| i32::from_str_radix(range, 16).unwrap_or(0);
    let r = (channel(&raw[0..2]) + delta).clamp(0, 255);
    let g = (channel(&raw[2..4]) + delta).clamp(0, 255);
    let b = (channel(&raw[4..6]) + delta).clamp(0, 255);
    format!("#{r:02x}{g:02x}{b:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_without_spec_uses_defaults() {
        let theme = ColorTheme::resolve(None);
        assert_eq!(theme.primary, DEFAULT_PRIMARY);
        assert_eq!(theme.secondary, DEFAULT_SECONDARY);
        assert_eq!(theme.accent, DEFAULT_ACCENT);
        assert_eq!(theme.background, DEFAULT_BACKGROUND);
        assert_eq!(theme.series_colors.len(), 6);
        assert_eq!(theme.series_colors[0], DEFAULT_ACCENT);
    }

    #[test]
    fn resolve_merges_partial_spec() {
        let spec = PaletteSpec {
            accent: Some("#ff0000".into()),
            ..PaletteSpec::default()
        };
        let theme = ColorTheme::resolve(Some(&spec));
        assert_eq!(theme.accent, "#ff0000");
        assert_eq!(theme.series_colors[0], "#ff0000");
        assert_eq!(theme.series_colors[1], "#7c3aed");
        assert_eq!(theme.primary, DEFAULT_PRIMARY);
    }

    #[test]
    fn series_colors_cycle() {
        let theme = ColorTheme::default();
        assert_eq!(theme.series_color(0), theme.series_color(6));
        assert_eq!(theme.series_color(1), theme.series_color(7));
    }

    #[test]
    fn adjust_shade_lightens_and_darkens() {
        assert_eq!(adjust_shade("#1e293b", 16), "#2e394b");
        assert_eq!(adjust_shade("#2e394b", -16), "#1e293b");
    }

    #[test]
    fn adjust_shade_clamps_channels() {
        assert_eq!(adjust_shade("#ffffff", 40), "#ffffff");
        assert_eq!(adjust_shade("#000000", -40), "#000000");
        assert_eq!(adjust_shade("#fa0005", 10), "#ff0a0f");
    }

    #[test]
    fn adjust_shade_passes_through_malformed_input() {
        assert_eq!(adjust_shade("tomato", 10), "tomato");
        assert_eq!(adjust_shade("#fff", 10), "#fff");
    }
}
