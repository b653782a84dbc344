//! Rendering
//!
//! Turns view state into output:
//!
//! - **chart**: Declarative chart description built by each view
//! - **svg**: Self-contained SVG line/bar charts
//! - **html**: View fragments and dashboard pages
//! - **text**: Terminal tables for the CLI
//!
//! Everything here is plain string building so the same output can be
//! served by the dashboard server or injected by the WASM frontend.

pub mod chart;
pub mod html;
pub mod svg;
pub mod text;

pub use chart::{ChartKind, ChartPoint, ChartSpec};
pub use html::{render_not_found, render_page, render_view, APP_TITLE, DASHBOARD_CSS};
pub use svg::render_svg;
pub use text::render_view_text;

/// Escape text for HTML/SVG element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
