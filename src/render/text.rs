//! Terminal rendering for `bikeboard-cli`.

use std::fmt::Write;

use super::chart::ChartSpec;
use crate::view::{ChartView, ViewState};

/// Width of the longest bar, in characters
const BAR_WIDTH: usize = 40;

/// Render a view state as terminal text.
pub fn render_view_text<V: ChartView>(state: &ViewState<V::Row>) -> String {
    match state {
        ViewState::Loading => V::LOADING_MESSAGE.to_string(),
        ViewState::Failed(message) => format!("Error: {}", message),
        ViewState::Loaded(rows) if rows.is_empty() => V::EMPTY_MESSAGE.to_string(),
        ViewState::Loaded(rows) => render_table(&V::chart(rows)),
    }
}

/// Two-column table with a proportional bar per row
pub fn render_table(spec: &ChartSpec) -> String {
    let label_width = spec
        .points
        .iter()
        .map(|p| p.label.len())
        .chain(std::iter::once(spec.x_label.len()))
        .max()
        .unwrap_or(0);
    let value_width = spec
        .points
        .iter()
        .map(|p| p.value.to_string().len())
        .chain(std::iter::once(spec.y_label.len()))
        .max()
        .unwrap_or(0);
    let max = spec.max_value();

    let mut out = String::new();
    let _ = writeln!(out, "{}", spec.title);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<lw$}  {:>vw$}  {}",
        spec.x_label,
        spec.y_label,
        spec.series_name,
        lw = label_width,
        vw = value_width
    );
    let _ = writeln!(out, "{}", "-".repeat(label_width + value_width + 4 + BAR_WIDTH));

    for point in &spec.points {
        let bar_len = if max > 0 {
            ((point.value.max(0) as f64 / max as f64) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let _ = writeln!(
            out,
            "{:<lw$}  {:>vw$}  {}",
            point.label,
            point.value,
            "█".repeat(bar_len),
            lw = label_width,
            vw = value_width
        );
    }

    out
}
