//! Loading Component

use leptos::*;

/// Loading indicator with the view's message
#[component]
pub fn Loading(message: &'static str) -> impl IntoView {
    view! {
        <div class="view-status">{message}</div>
    }
}
