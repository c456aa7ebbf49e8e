use chartgen::{ChartError, ChartKind, ChartRequest, ColorTheme, render_chart};

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

fn quarterly_bar() -> ChartRequest {
    ChartRequest::new(
        ChartKind::Bar,
        labels(&["Q1", "Q2", "Q3", "Q4"]),
        vec![100.0, 150.0, 200.0, 180.0],
    )
}

fn budget_pie() -> ChartRequest {
    ChartRequest::new(
        ChartKind::Pie,
        labels(&["Sales", "Marketing", "R&D"]),
        vec![45.0, 30.0, 25.0],
    )
}

#[test]
fn output_is_a_self_contained_svg_document() {
    let chart = render_chart(&quarterly_bar(), &ColorTheme::default()).unwrap();
    assert!(
        chart
            .svg
            .starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\"")
    );
    assert!(chart.svg.contains("viewBox=\"0 0 600 400\""));
    assert!(chart.svg.ends_with("</svg>"));
}

#[test]
fn identical_inputs_produce_byte_identical_output() {
    let theme = ColorTheme::default();
    let req = quarterly_bar().with_title("Revenue");
    let a = render_chart(&req, &theme).unwrap();
    let b = render_chart(&req, &theme).unwrap();
    assert_eq!(a.svg, b.svg);
    assert_eq!(a.alt_text, b.alt_text);
}

#[test]
fn bar_chart_draws_one_rounded_rect_per_value() {
    let chart = render_chart(&quarterly_bar(), &ColorTheme::default()).unwrap();
    assert_eq!(chart.svg.matches("rx=\"4\"").count(), 4);
    // Top gridline label reflects the 10% headroom over the max value.
    assert!(chart.svg.contains(">220<"));
    // Value labels are plain decimal text.
    assert!(chart.svg.contains(">100<"));
    assert_eq!(
        chart.alt_text,
        "Bar chart showing Q1: 100, Q2: 150, Q3: 200, Q4: 180"
    );
}

#[test]
fn bar_chart_draws_six_gridlines() {
    let chart = render_chart(&quarterly_bar(), &ColorTheme::default()).unwrap();
    assert_eq!(chart.svg.matches("<line ").count(), 6);
    assert_eq!(chart.svg.matches("stroke-opacity=\"0.2\"").count(), 6);
}

#[test]
fn title_is_rendered_when_present_and_absent_otherwise() {
    let theme = ColorTheme::default();
    let untitled = render_chart(&quarterly_bar(), &theme).unwrap();
    assert!(!untitled.svg.contains("font-size=\"18\""));
    let titled = render_chart(&quarterly_bar().with_title("Revenue"), &theme).unwrap();
    assert!(titled.svg.contains("font-size=\"18\""));
    assert!(titled.svg.contains(">Revenue</text>"));
}

#[test]
fn labels_are_escaped_in_markup_but_verbatim_in_alt_text() {
    let req = ChartRequest::new(
        ChartKind::Bar,
        labels(&["A&B", "C<D", "E\"F"]),
        vec![1.0, 2.0, 3.0],
    )
    .with_title("Q's <Report>");
    let chart = render_chart(&req, &ColorTheme::default()).unwrap();
    assert!(chart.svg.contains("A&amp;B"));
    assert!(chart.svg.contains("C&lt;D"));
    assert!(chart.svg.contains("E&quot;F"));
    assert!(chart.svg.contains("Q&#39;s &lt;Report&gt;"));
    assert!(!chart.svg.contains("A&B"));
    assert!(chart.alt_text.contains("A&B: 1"));
    assert!(chart.alt_text.contains("Q's <Report>"));
}

#[test]
fn pie_chart_emits_slices_and_legend() {
    let chart = render_chart(&budget_pie(), &ColorTheme::default()).unwrap();
    assert_eq!(chart.svg.matches("<path ").count(), 3);
    assert!(chart.svg.contains("Sales (45%)"));
    assert!(chart.svg.contains("Marketing (30%)"));
    assert!(chart.svg.contains("R&amp;D (25%)"));
    // Legend swatches are small rounded rects.
    assert_eq!(chart.svg.matches("rx=\"2\"").count(), 3);
}

#[test]
fn pie_majority_slice_uses_large_arc_flag() {
    let req = ChartRequest::new(ChartKind::Pie, labels(&["Big", "Small"]), vec![3.0, 1.0]);
    let chart = render_chart(&req, &ColorTheme::default()).unwrap();
    assert!(chart.svg.contains(" 1,1 "));
}

#[test]
fn zero_total_pie_produces_no_output() {
    let req = ChartRequest::new(ChartKind::Pie, labels(&["A", "B"]), vec![0.0, 0.0]);
    assert_eq!(
        render_chart(&req, &ColorTheme::default()),
        Err(ChartError::ZeroTotal)
    );
}

#[test]
fn mismatched_request_produces_no_output() {
    let req = ChartRequest::new(ChartKind::Bar, labels(&["A"]), vec![1.0, 2.0]);
    assert!(matches!(
        render_chart(&req, &ColorTheme::default()),
        Err(ChartError::MismatchedLengths { .. })
    ));
}

#[test]
fn line_chart_draws_area_stroke_and_markers() {
    let req = ChartRequest::new(
        ChartKind::Line,
        labels(&["Jan", "Feb", "Mar", "Apr", "May"]),
        vec![10.0, 25.0, 15.0, 30.0, 45.0],
    );
    let chart = render_chart(&req, &ColorTheme::default()).unwrap();
    assert!(chart.svg.contains("url(#areaGradient)"));
    assert_eq!(chart.svg.matches("<polyline ").count(), 1);
    assert_eq!(chart.svg.matches("<polygon ").count(), 1);
    assert_eq!(chart.svg.matches("<circle ").count(), 5);
}

#[test]
fn all_zero_bar_chart_renders_without_errors() {
    let req = ChartRequest::new(ChartKind::Bar, labels(&["A", "B", "C"]), vec![0.0; 3]);
    let chart = render_chart(&req, &ColorTheme::default()).unwrap();
    assert_eq!(chart.svg.matches("rx=\"4\"").count(), 3);
    assert!(chart.svg.contains("height=\"0\""));
}

#[test]
fn theme_colors_flow_into_the_document() {
    let spec = chartgen::PaletteSpec {
        accent: Some("#ff2200".into()),
        background: Some("#101010".into()),
        ..Default::default()
    };
    let theme = ColorTheme::resolve(Some(&spec));
    let req = ChartRequest::new(ChartKind::Line, labels(&["A", "B"]), vec![1.0, 2.0]);
    let chart = render_chart(&req, &theme).unwrap();
    assert!(chart.svg.contains("fill=\"#101010\""));
    assert!(chart.svg.contains("stroke=\"#ff2200\""));
}
