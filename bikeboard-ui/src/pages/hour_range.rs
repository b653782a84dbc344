//! Hour Range Page

use leptos::*;

use bikeboard::view::HourRange;

use super::chart_view::chart_page;

/// Bar chart of trips by hour of day
#[component]
pub fn HourRangePage() -> impl IntoView {
    chart_page::<HourRange>()
}
