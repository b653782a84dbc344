//! Chart View Page
//!
//! Mounts a [`ChartViewModel`] when the page is created, fetches once, and
//! unmounts on cleanup. A response that arrives after the user navigated
//! away is dropped by the model and never touches the page signal.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;

use bikeboard::stats::FetchError;
use bikeboard::view::{ChartView, ChartViewModel, MountToken, ViewState};

use crate::api;
use crate::components::{Chart, Loading};

/// Page body for chart view `V`
pub fn chart_page<V: ChartView>() -> impl IntoView {
    let model = Rc::new(RefCell::new(ChartViewModel::<V>::new()));
    let (state, set_state) = create_signal(ViewState::<V::Row>::Loading);

    let token = model.borrow_mut().mount();
    if let Some(token) = token {
        let model = Rc::clone(&model);
        spawn_local(async move {
            let result = api::fetch::<V>().await;
            if let Some(state) = apply_result(&model, &token, result) {
                set_state.set(state);
            }
        });
    }

    on_cleanup(move || model.borrow_mut().unmount());

    move || match state.get() {
        ViewState::Loading => view! { <Loading message=V::LOADING_MESSAGE /> }.into_view(),
        ViewState::Failed(message) => view! {
            <div class="view-error">"Error: " {message}</div>
        }
        .into_view(),
        ViewState::Loaded(rows) if rows.is_empty() => view! {
            <div class="view-status">{V::EMPTY_MESSAGE}</div>
        }
        .into_view(),
        ViewState::Loaded(rows) => view! { <Chart spec=V::chart(&rows) /> }.into_view(),
    }
}

/// Hand a fetch result to the model.
///
/// Returns the state to publish, or `None` when the model discarded the
/// result. Validation failures are written to the console here; transport
/// failures were already reported by the API client.
fn apply_result<V: ChartView>(
    model: &RefCell<ChartViewModel<V>>,
    token: &MountToken,
    result: Result<V::Response, FetchError>,
) -> Option<ViewState<V::Row>> {
    let mut model = model.borrow_mut();
    if !model.finish(token, result) {
        return None;
    }

    let invalid = model
        .failure_cause()
        .filter(|cause| matches!(cause, FetchError::Invalid(_)));
    if let Some(cause) = invalid {
        console_error(&format!("Invalid {} stats: {}", V::NAME, cause));
    }
    Some(model.state().clone())
}

#[cfg(target_arch = "wasm32")]
fn console_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn console_error(message: &str) {
    eprintln!("{}", message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikeboard::stats::{DurationStatsResponse, HourRangeStatsResponse};
    use bikeboard::view::{HourRange, TripDuration};
    use wasm_bindgen_test::*;

    fn rows_response() -> DurationStatsResponse {
        DurationStatsResponse {
            hours: vec![0, 1],
            count: vec![5, 10],
        }
    }

    #[wasm_bindgen_test]
    fn test_result_applied_while_mounted() {
        let model = RefCell::new(ChartViewModel::<TripDuration>::new());
        let token = model.borrow_mut().mount().unwrap();

        let state = apply_result(&model, &token, Ok(rows_response())).unwrap();
        assert_eq!(state.rows().map(|r| r.len()), Some(2));
    }

    #[wasm_bindgen_test]
    fn test_result_after_cleanup_stays_loading() {
        let model = RefCell::new(ChartViewModel::<TripDuration>::new());
        let token = model.borrow_mut().mount().unwrap();

        // Page cleanup runs before the fetch resolves
        model.borrow_mut().unmount();

        assert!(apply_result(&model, &token, Ok(rows_response())).is_none());
        assert!(model.borrow().state().is_loading());
    }

    #[wasm_bindgen_test]
    fn test_invalid_response_publishes_fixed_message() {
        let model = RefCell::new(ChartViewModel::<HourRange>::new());
        let token = model.borrow_mut().mount().unwrap();

        let state = apply_result(
            &model,
            &token,
            Ok(HourRangeStatsResponse {
                hour_bucket: vec![9],
                count: vec![Some(1), Some(2)],
            }),
        )
        .unwrap();

        assert_eq!(state, ViewState::Failed(HourRange::ERROR_MESSAGE));
        assert!(matches!(
            model.borrow().failure_cause(),
            Some(FetchError::Invalid(_))
        ));
    }
}
