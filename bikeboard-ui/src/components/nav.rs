//! Navigation Component
//!
//! Header navigation bar with the app title and one link per chart view.

use leptos::*;
use leptos_router::*;

use bikeboard::render::APP_TITLE;
use bikeboard::view::{NAV_LINKS, ROOT_ROUTE};

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="navigation-bar">
            <div class="nav-container">
                <A href=ROOT_ROUTE class="nav-logo">
                    <h1>{APP_TITLE}</h1>
                </A>

                <div class="nav-links">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| view! { <NavLink href=href label=label /> })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link, highlighted while its route is active
#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A href=href class="nav-link" active_class="active">
            {label}
        </A>
    }
}
