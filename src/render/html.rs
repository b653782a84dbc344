//! HTML Rendering
//!
//! View-state fragments and the dashboard page shell with its navigation bar.

use std::fmt::Write;

use super::escape;
use super::svg::render_svg;
use crate::view::{ChartView, ViewState, NAV_LINKS, ROOT_ROUTE};

/// Application name shown in the navigation bar and page title
pub const APP_TITLE: &str = "Biking Data Analyzer";

/// Chart canvas size in SVG user units
pub const CHART_WIDTH: u32 = 960;
pub const CHART_HEIGHT: u32 = 500;

/// Dashboard stylesheet, shared with the browser frontend
pub const DASHBOARD_CSS: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; background: #000000; color: #ffffff; font-family: system-ui, -apple-system, sans-serif; }
.navigation-bar { background: #1a1a1a; border-bottom: 1px solid #333333; }
.nav-container { max-width: 1200px; margin: 0 auto; padding: 0 20px; display: flex; align-items: center; justify-content: space-between; height: 64px; }
.nav-logo { color: #ffffff; text-decoration: none; }
.nav-logo h1 { font-size: 1.25rem; margin: 0; }
.nav-links { display: flex; gap: 8px; }
.nav-link { color: #cccccc; text-decoration: none; padding: 8px 16px; border-radius: 6px; }
.nav-link:hover { background: #333333; color: #ffffff; }
.nav-link.active { background: #333333; color: #ffffff; }
main { max-width: 1200px; margin: 0 auto; }
.view-status { color: #ffffff; padding: 20px; }
.view-error { color: red; padding: 20px; }
.chart-panel { width: 100%; padding: 20px; background: #000000; }
.chart-panel h2 { color: #ffffff; }
.not-found { text-align: center; padding: 80px 20px; }
.not-found a { color: #8884d8; }
"#;

/// Render the body of a chart view for its current state.
///
/// Loading and empty states show their indicator, a failure shows the
/// view's fixed message, and only loaded rows produce a chart.
pub fn render_view<V: ChartView>(state: &ViewState<V::Row>) -> String {
    match state {
        ViewState::Loading => status_div(V::LOADING_MESSAGE),
        ViewState::Failed(message) => {
            format!(r#"<div class="view-error">Error: {}</div>"#, escape(message))
        }
        ViewState::Loaded(rows) if rows.is_empty() => status_div(V::EMPTY_MESSAGE),
        ViewState::Loaded(rows) => {
            let chart = render_svg(&V::chart(rows), CHART_WIDTH, CHART_HEIGHT);
            format!(
                r#"<section class="chart-panel" data-view="{}"><h2>{}</h2>{}</section>"#,
                V::NAME,
                escape(V::TITLE),
                chart
            )
        }
    }
}

fn status_div(message: &str) -> String {
    format!(r#"<div class="view-status">{}</div>"#, escape(message))
}

/// Navigation bar with the link for `active_route` highlighted
pub fn render_nav(active_route: &str) -> String {
    let mut nav = String::new();
    let _ = write!(
        nav,
        r#"<nav class="navigation-bar"><div class="nav-container"><a href="{}" class="nav-logo"><h1>{}</h1></a><div class="nav-links">"#,
        ROOT_ROUTE, APP_TITLE
    );

    for (route, label) in NAV_LINKS {
        let class = if route == active_route {
            "nav-link active"
        } else {
            "nav-link"
        };
        let _ = write!(nav, r#"<a href="{}" class="{}">{}</a>"#, route, class, escape(label));
    }

    nav.push_str("</div></div></nav>");
    nav
}

/// Full HTML document: navigation bar plus `body` in the main area
pub fn render_page(active_route: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
<div class="App">
{nav}
<main>{body}</main>
</div>
</body>
</html>
"#,
        title = APP_TITLE,
        style = DASHBOARD_CSS,
        nav = render_nav(active_route),
        body = body,
    )
}

/// 404 page with a link back to the dashboard
pub fn render_not_found() -> String {
    render_page(
        "",
        &format!(
            r#"<div class="not-found"><h1>Page Not Found</h1><p>The page you're looking for doesn't exist.</p><a href="{}">Go to Dashboard</a></div>"#,
            ROOT_ROUTE
        ),
    )
}
