//! Chart View Routes
//!
//! - GET / - Redirect to the trip duration view
//! - GET /trip-duration - Trip duration line chart
//! - GET /hour-range - Hour-of-day bar chart
//! - anything else - 404 page

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::api::{load_view, Fetch};
use crate::render::{render_not_found, render_page, render_view};
use crate::view::{ChartView, ChartViewModel, TripDuration};
use crate::web::state::AppState;

/// GET /
pub async fn index() -> Redirect {
    Redirect::to(TripDuration::ROUTE)
}

/// GET on a chart view's route.
///
/// Mounts a fresh view model for this request, loads it, and renders
/// whatever state it ends in. A failed load still renders a page carrying
/// the view's error message.
pub async fn chart_page<V: Fetch>(State(state): State<Arc<AppState>>) -> Html<String> {
    let model = Mutex::new(ChartViewModel::<V>::new());
    load_view(&model, state.source.as_ref()).await;

    let model = model.into_inner();
    Html(render_page(V::ROUTE, &render_view::<V>(model.state())))
}

/// Fallback for unknown paths
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(render_not_found()))
}
