//! Trip Duration Page

use leptos::*;

use bikeboard::view::TripDuration;

use super::chart_view::chart_page;

/// Line chart of trip counts by duration hour
#[component]
pub fn TripDurationPage() -> impl IntoView {
    chart_page::<TripDuration>()
}
