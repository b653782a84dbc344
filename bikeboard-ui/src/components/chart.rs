//! Chart Component
//!
//! Renders a [`ChartSpec`] as inline SVG using the core renderer.

use leptos::*;

use bikeboard::render::{render_svg, ChartSpec};

const CHART_WIDTH: u32 = 960;
const CHART_HEIGHT: u32 = 500;

/// Titled chart panel
#[component]
pub fn Chart(spec: ChartSpec) -> impl IntoView {
    let title = spec.title;
    let svg = render_svg(&spec, CHART_WIDTH, CHART_HEIGHT);

    view! {
        <section class="chart-panel">
            <h2>{title}</h2>
            <div class="chart" inner_html=svg />
        </section>
    }
}
