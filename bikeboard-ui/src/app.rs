//! App Root Component
//!
//! Navigation shell: the root path redirects to the trip duration view.

use leptos::*;
use leptos_router::*;

use bikeboard::render::DASHBOARD_CSS;
use bikeboard::view::{ChartView, HourRange, TripDuration, ROOT_ROUTE};

use crate::components::Nav;
use crate::pages::{HourRangePage, TripDurationPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <style>{DASHBOARD_CSS}</style>
            <div class="App">
                <Nav />

                <main>
                    <Routes>
                        <Route
                            path=ROOT_ROUTE
                            view=|| view! { <Redirect path=TripDuration::ROUTE /> }
                        />
                        <Route path=TripDuration::ROUTE view=TripDurationPage />
                        <Route path=HourRange::ROUTE view=HourRangePage />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href=ROOT_ROUTE>"Go to Dashboard"</A>
        </div>
    }
}
