//! SVG Chart Renderer
//!
//! Draws a [`ChartSpec`] as a standalone SVG document fragment on the
//! dashboard's dark background.

use std::fmt::Write;

use super::chart::{ChartKind, ChartSpec};
use super::escape;

const BACKGROUND: &str = "#000000";
const GRID: &str = "#333333";
const AXIS: &str = "#ffffff";

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 60.0;

/// Number of horizontal grid intervals
const Y_TICKS: i64 = 5;

/// Minimum horizontal room per x tick label, in px
const MIN_LABEL_SPACING: f64 = 40.0;

/// Render the chart into an SVG element sized by `viewBox`.
pub fn render_svg(spec: &ChartSpec, width: u32, height: u32) -> String {
    let width = f64::from(width);
    let height = f64::from(height);
    let plot_width = (width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
    let plot_height = (height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
    let bottom = MARGIN_TOP + plot_height;

    let step = y_step(spec.max_value());
    let y_max = (step * Y_TICKS) as f64;
    let y_of = |value: i64| bottom - (value.max(0) as f64 / y_max).min(1.0) * plot_height;

    let count = spec.points.len().max(1) as f64;
    let band = plot_width / count;
    let x_of = |index: usize| MARGIN_LEFT + band * (index as f64 + 0.5);

    let kind_class = match spec.kind {
        ChartKind::Line => "line",
        ChartKind::Bar => "bar",
    };

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="chart chart-{kind}" viewBox="0 0 {w} {h}" width="100%" role="img" aria-label="{title}">"#,
        kind = kind_class,
        w = width,
        h = height,
        title = escape(spec.title),
    );
    let _ = write!(
        svg,
        r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
        width, height, BACKGROUND
    );

    // Horizontal grid lines and y tick labels
    for i in 0..=Y_TICKS {
        let value = step * i;
        let y = y_of(value);
        let _ = write!(
            svg,
            r#"<line class="grid" x1="{x1:.1}" y1="{y:.1}" x2="{x2:.1}" y2="{y:.1}" stroke="{grid}" stroke-dasharray="3 3"/>"#,
            x1 = MARGIN_LEFT,
            x2 = MARGIN_LEFT + plot_width,
            y = y,
            grid = GRID,
        );
        let _ = write!(
            svg,
            r#"<text class="y-tick" x="{x:.1}" y="{y:.1}" fill="{axis}" font-size="12" text-anchor="end">{value}</text>"#,
            x = MARGIN_LEFT - 8.0,
            y = y + 4.0,
            axis = AXIS,
            value = value,
        );
    }

    // X tick labels with vertical grid lines
    let max_labels = (plot_width / MIN_LABEL_SPACING).floor() as usize;
    for index in spec.labelled_indices(max_labels) {
        let x = x_of(index);
        let _ = write!(
            svg,
            r#"<line class="grid" x1="{x:.1}" y1="{top:.1}" x2="{x:.1}" y2="{bottom:.1}" stroke="{grid}" stroke-dasharray="3 3"/>"#,
            x = x,
            top = MARGIN_TOP,
            bottom = bottom,
            grid = GRID,
        );
        let _ = write!(
            svg,
            r#"<text class="x-tick" x="{x:.1}" y="{y:.1}" fill="{axis}" font-size="12" text-anchor="middle">{label}</text>"#,
            x = x,
            y = bottom + 18.0,
            axis = AXIS,
            label = escape(&spec.points[index].label),
        );
    }

    // Axes
    let _ = write!(
        svg,
        r#"<line class="axis" x1="{l:.1}" y1="{b:.1}" x2="{r:.1}" y2="{b:.1}" stroke="{axis}"/><line class="axis" x1="{l:.1}" y1="{t:.1}" x2="{l:.1}" y2="{b:.1}" stroke="{axis}"/>"#,
        l = MARGIN_LEFT,
        r = MARGIN_LEFT + plot_width,
        t = MARGIN_TOP,
        b = bottom,
        axis = AXIS,
    );

    // Axis titles
    let _ = write!(
        svg,
        r#"<text class="x-label" x="{x:.1}" y="{y:.1}" fill="{axis}" font-size="13" text-anchor="middle">{label}</text>"#,
        x = MARGIN_LEFT + plot_width / 2.0,
        y = height - 12.0,
        axis = AXIS,
        label = escape(spec.x_label),
    );
    let _ = write!(
        svg,
        r#"<text class="y-label" x="{x:.1}" y="{y:.1}" fill="{axis}" font-size="13" text-anchor="middle" transform="rotate(-90 {x:.1} {y:.1})">{label}</text>"#,
        x = 18.0,
        y = MARGIN_TOP + plot_height / 2.0,
        axis = AXIS,
        label = escape(spec.y_label),
    );

    match spec.kind {
        ChartKind::Line => draw_line(&mut svg, spec, &x_of, &y_of),
        ChartKind::Bar => draw_bars(&mut svg, spec, band, bottom, &x_of, &y_of),
    }

    if spec.show_legend {
        draw_legend(&mut svg, spec, MARGIN_LEFT + plot_width);
    }

    svg.push_str("</svg>");
    svg
}

fn draw_line(
    svg: &mut String,
    spec: &ChartSpec,
    x_of: &dyn Fn(usize) -> f64,
    y_of: &dyn Fn(i64) -> f64,
) {
    if spec.points.is_empty() {
        return;
    }

    let path: Vec<String> = spec
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{:.1},{:.1}", x_of(i), y_of(p.value)))
        .collect();

    let _ = write!(
        svg,
        r#"<polyline class="series" points="{}" fill="none" stroke="{}" stroke-width="2"/>"#,
        path.join(" "),
        spec.color
    );

    for (i, point) in spec.points.iter().enumerate() {
        let _ = write!(
            svg,
            r#"<circle class="point" cx="{:.1}" cy="{:.1}" r="4" fill="{}"><title>{}: {} {}</title></circle>"#,
            x_of(i),
            y_of(point.value),
            spec.color,
            escape(&point.label),
            escape(spec.series_name),
            point.value
        );
    }
}

fn draw_bars(
    svg: &mut String,
    spec: &ChartSpec,
    band: f64,
    bottom: f64,
    x_of: &dyn Fn(usize) -> f64,
    y_of: &dyn Fn(i64) -> f64,
) {
    let bar_width = band * 0.7;

    for (i, point) in spec.points.iter().enumerate() {
        let top = y_of(point.value);
        let _ = write!(
            svg,
            r#"<rect class="bar" x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"><title>{}: {} {}</title></rect>"#,
            x_of(i) - bar_width / 2.0,
            top,
            bar_width,
            bottom - top,
            spec.color,
            escape(&point.label),
            escape(spec.series_name),
            point.value
        );
    }
}

fn draw_legend(svg: &mut String, spec: &ChartSpec, right: f64) {
    let text_x = right - 4.0;
    let swatch_x = text_x - 8.0 * spec.series_name.len() as f64 - 24.0;
    let y = MARGIN_TOP - 16.0;

    let _ = write!(
        svg,
        r#"<g class="legend"><line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="2"/><text x="{:.1}" y="{:.1}" fill="{}" font-size="12" text-anchor="end">{}</text></g>"#,
        swatch_x,
        y,
        swatch_x + 16.0,
        y,
        spec.color,
        text_x,
        y + 4.0,
        spec.color,
        escape(spec.series_name)
    );
}

/// Largest step whose `Y_TICKS` multiple still fits in an i64
const MAX_STEP: i64 = i64::MAX / Y_TICKS;

/// Round tick interval so that `Y_TICKS` steps cover `max`, capped at
/// `MAX_STEP` for counts near `i64::MAX`
fn y_step(max: i64) -> i64 {
    if max <= 0 {
        return 1;
    }

    let raw = max as f64 / Y_TICKS as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };

    ((nice * magnitude).round() as i64).clamp(1, MAX_STEP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::chart::ChartPoint;

    fn spec(kind: ChartKind, labels: &[&str], values: &[i64]) -> ChartSpec {
        ChartSpec {
            kind,
            title: "Trips by Hour of Day",
            x_label: "Hour of Day",
            y_label: "Trip Count",
            series_name: "Trip Count",
            color: "#82ca9d",
            points: labels
                .iter()
                .zip(values)
                .map(|(l, v)| ChartPoint::new(*l, *v))
                .collect(),
            label_every_category: kind == ChartKind::Bar,
            show_legend: kind == ChartKind::Line,
        }
    }

    #[test]
    fn test_y_step() {
        assert_eq!(y_step(0), 1);
        assert_eq!(y_step(3), 1);
        assert_eq!(y_step(10), 2);
        assert_eq!(y_step(23), 5);
        assert_eq!(y_step(4800), 1000);
    }

    #[test]
    fn test_y_step_near_i64_max() {
        for max in [6_000_000_000_000_000_000, i64::MAX] {
            let step = y_step(max);
            assert!(step.checked_mul(Y_TICKS).is_some());
            assert!(step > 0);
        }
    }

    #[test]
    fn test_huge_counts_render() {
        let svg = render_svg(
            &spec(ChartKind::Line, &["0", "1"], &[i64::MAX, 6_000_000_000_000_000_000]),
            960,
            500,
        );

        assert_eq!(svg.matches(r#"class="point""#).count(), 2);
        assert!(!svg.contains("NaN"));
        assert!(!svg.contains(">-"));
    }

    #[test]
    fn test_bar_chart_draws_every_bar_and_label() {
        let labels: Vec<String> = (0..24).map(|h| format!("{}:00", h)).collect();
        let label_refs: Vec<&str> = labels.iter().map(String::as_str).collect();
        let values: Vec<i64> = (0..24).collect();

        let svg = render_svg(&spec(ChartKind::Bar, &label_refs, &values), 400, 300);

        assert_eq!(svg.matches(r#"class="bar""#).count(), 24);
        assert_eq!(svg.matches(r#"class="x-tick""#).count(), 24);
        assert!(svg.contains(">23:00</text>"));
        assert!(svg.contains("Trip Count"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_line_chart_has_series_and_legend() {
        let svg = render_svg(&spec(ChartKind::Line, &["0", "1", "2"], &[5, 10, 3]), 800, 400);

        assert!(svg.contains(r#"class="series""#));
        assert_eq!(svg.matches(r#"class="point""#).count(), 3);
        assert!(svg.contains(r#"class="legend""#));
        assert!(svg.contains("<title>1: Trip Count 10</title>"));
    }

    #[test]
    fn test_line_chart_thins_crowded_labels() {
        let labels: Vec<String> = (0..200).map(|h| h.to_string()).collect();
        let label_refs: Vec<&str> = labels.iter().map(String::as_str).collect();
        let values = vec![1; 200];

        let svg = render_svg(&spec(ChartKind::Line, &label_refs, &values), 800, 400);

        let ticks = svg.matches(r#"class="x-tick""#).count();
        assert!(ticks < 200);
        assert!(ticks > 1);
    }

    #[test]
    fn test_labels_are_escaped() {
        let svg = render_svg(&spec(ChartKind::Bar, &["<b>"], &[1]), 400, 300);
        assert!(svg.contains("&lt;b&gt;"));
        assert!(!svg.contains("<b>"));
    }
}
