//! View State Machine
//!
//! `ViewState` is what a view renders; `ChartViewModel` owns it for one view
//! instance and only accepts results presented with the live mount token.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::charts::ChartView;
use crate::stats::FetchError;

/// Render state of a chart view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<R> {
    /// Fetch in flight (initial state)
    Loading,
    /// Rows ready; an empty vector means "no data available"
    Loaded(Vec<R>),
    /// Fetch or transform failed; holds the view's fixed message
    Failed(&'static str),
}

impl<R> Default for ViewState<R> {
    fn default() -> Self {
        ViewState::Loading
    }
}

impl<R> ViewState<R> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// Loaded with zero rows
    pub fn is_empty(&self) -> bool {
        matches!(self, ViewState::Loaded(rows) if rows.is_empty())
    }

    /// Rows to chart, if loaded
    pub fn rows(&self) -> Option<&[R]> {
        match self {
            ViewState::Loaded(rows) => Some(rows.as_slice()),
            _ => None,
        }
    }

    /// User-facing failure message, if failed
    pub fn error(&self) -> Option<&'static str> {
        match self {
            ViewState::Failed(message) => Some(*message),
            _ => None,
        }
    }
}

/// Activity flag for one mount of a view.
///
/// Cloned into whatever awaits the fetch. Once the view unmounts the flag
/// is cleared, and the model rejects results carrying this token.
#[derive(Debug, Clone)]
pub struct MountToken {
    generation: u64,
    active: Arc<AtomicBool>,
}

impl MountToken {
    fn new(generation: u64) -> Self {
        Self {
            generation,
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Whether the mount that issued this token is still live
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn deactivate(&self) {
        self.active.store(false, Ordering::Release);
    }
}

/// State of one chart view instance across its mount cycles
#[derive(Debug)]
pub struct ChartViewModel<V: ChartView> {
    state: ViewState<V::Row>,
    /// Cause behind a `Failed` state; never shown to the user
    cause: Option<FetchError>,
    mounted: Option<MountToken>,
    generation: u64,
    _view: PhantomData<fn() -> V>,
}

impl<V: ChartView> Default for ChartViewModel<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ChartView> ChartViewModel<V> {
    pub fn new() -> Self {
        Self {
            state: ViewState::Loading,
            cause: None,
            mounted: None,
            generation: 0,
            _view: PhantomData,
        }
    }

    /// Activate the view and start a fresh load.
    ///
    /// Returns `None` when already mounted: the one-shot fetch of the
    /// current mount is not re-triggered.
    pub fn mount(&mut self) -> Option<MountToken> {
        if self.mounted.is_some() {
            tracing::debug!(view = V::NAME, "Ignoring mount of already mounted view");
            return None;
        }

        self.generation += 1;
        self.state = ViewState::Loading;
        self.cause = None;

        let token = MountToken::new(self.generation);
        self.mounted = Some(token.clone());

        tracing::debug!(view = V::NAME, generation = self.generation, "View mounted");
        Some(token)
    }

    /// Deactivate the view; any in-flight result will be discarded.
    pub fn unmount(&mut self) {
        if let Some(token) = self.mounted.take() {
            token.deactivate();
            tracing::debug!(view = V::NAME, generation = token.generation, "View unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn state(&self) -> &ViewState<V::Row> {
        &self.state
    }

    /// Error behind the current `Failed` state, for diagnostics
    pub fn failure_cause(&self) -> Option<&FetchError> {
        self.cause.as_ref()
    }

    /// Apply the outcome of the fetch started by `mount`.
    ///
    /// Returns `true` if the state changed. Results for an unmounted or
    /// superseded token, or a second result for the same mount, are
    /// dropped.
    pub fn finish(&mut self, token: &MountToken, result: Result<V::Response, FetchError>) -> bool {
        if !self.accepts(token) {
            tracing::debug!(
                view = V::NAME,
                generation = token.generation,
                "Discarding stats for inactive view"
            );
            return false;
        }
        if !self.state.is_loading() {
            tracing::debug!(view = V::NAME, "Discarding duplicate stats result");
            return false;
        }

        let outcome = result.and_then(|response| V::transform(response).map_err(FetchError::from));

        self.state = match outcome {
            Ok(rows) => {
                tracing::debug!(view = V::NAME, rows = rows.len(), "Chart data loaded");
                ViewState::Loaded(rows)
            }
            Err(err) => {
                tracing::error!(view = V::NAME, error = %err, "{}", V::ERROR_MESSAGE);
                self.cause = Some(err);
                ViewState::Failed(V::ERROR_MESSAGE)
            }
        };

        true
    }

    fn accepts(&self, token: &MountToken) -> bool {
        token.is_active()
            && self
                .mounted
                .as_ref()
                .map_or(false, |live| live.generation == token.generation)
    }
}

impl<V: ChartView> Drop for ChartViewModel<V> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{
        DurationRow, DurationStatsResponse, HourRangeRow, HourRangeStatsResponse, ValidationError,
    };
    use crate::view::{HourRange, TripDuration};

    fn network_error() -> FetchError {
        FetchError::Transport {
            url: "/api/trip-duration-stats".to_string(),
            message: "connection refused".to_string(),
        }
    }

    #[test]
    fn test_initial_state_is_loading() {
        let model = ChartViewModel::<TripDuration>::new();
        assert!(model.state().is_loading());
        assert!(!model.is_mounted());
    }

    #[test]
    fn test_duration_loaded() {
        let mut model = ChartViewModel::<TripDuration>::new();
        let token = model.mount().unwrap();

        let applied = model.finish(
            &token,
            Ok(DurationStatsResponse {
                hours: vec![0, 1, 2],
                count: vec![5, 10, 3],
            }),
        );

        assert!(applied);
        assert_eq!(
            model.state().rows().unwrap(),
            &[
                DurationRow { hour: 0, count: 5 },
                DurationRow { hour: 1, count: 10 },
                DurationRow { hour: 2, count: 3 },
            ]
        );
    }

    #[test]
    fn test_hour_range_loaded() {
        let mut model = ChartViewModel::<HourRange>::new();
        let token = model.mount().unwrap();

        model.finish(
            &token,
            Ok(HourRangeStatsResponse {
                hour_bucket: vec![9, 10],
                count: vec![Some(4)],
            }),
        );

        assert_eq!(
            model.state(),
            &ViewState::Loaded(vec![
                HourRangeRow { hour_bucket: "9:00".to_string(), count: 4 },
                HourRangeRow { hour_bucket: "10:00".to_string(), count: 0 },
            ])
        );
    }

    #[test]
    fn test_empty_response_is_not_an_error() {
        let mut model = ChartViewModel::<TripDuration>::new();
        let token = model.mount().unwrap();

        model.finish(&token, Ok(DurationStatsResponse::default()));

        assert!(model.state().is_empty());
        assert!(model.state().error().is_none());
    }

    #[test]
    fn test_fetch_failure_uses_fixed_message() {
        let mut model = ChartViewModel::<TripDuration>::new();
        let token = model.mount().unwrap();

        model.finish(&token, Err(network_error()));

        assert_eq!(
            model.state(),
            &ViewState::Failed("Failed to load trip duration statistics")
        );
        assert!(model.state().rows().is_none());
    }

    #[test]
    fn test_validation_failure_uses_fixed_message() {
        let mut model = ChartViewModel::<HourRange>::new();
        let token = model.mount().unwrap();

        model.finish(
            &token,
            Ok(HourRangeStatsResponse {
                hour_bucket: vec![1],
                count: vec![Some(1), Some(2)],
            }),
        );

        assert_eq!(model.state().error(), Some(HourRange::ERROR_MESSAGE));
        assert_eq!(
            model.failure_cause(),
            Some(&FetchError::Invalid(ValidationError::LengthMismatch {
                field: "count",
                expected: 1,
                actual: 2,
            }))
        );
    }

    #[test]
    fn test_remount_clears_failure_cause() {
        let mut model = ChartViewModel::<TripDuration>::new();
        let token = model.mount().unwrap();
        model.finish(&token, Err(network_error()));
        assert_eq!(model.failure_cause(), Some(&network_error()));

        model.unmount();
        model.mount().unwrap();
        assert!(model.failure_cause().is_none());
    }

    #[test]
    fn test_validation_error_propagates_through_fetch_error() {
        let err: FetchError = ValidationError::NegativeCount { index: 0, count: -1 }.into();
        let mut model = ChartViewModel::<TripDuration>::new();
        let token = model.mount().unwrap();

        model.finish(&token, Err(err));

        assert_eq!(model.state().error(), Some(TripDuration::ERROR_MESSAGE));
    }

    #[test]
    fn test_result_after_unmount_is_discarded() {
        let mut model = ChartViewModel::<TripDuration>::new();
        let token = model.mount().unwrap();

        model.unmount();
        assert!(!token.is_active());

        let applied = model.finish(
            &token,
            Ok(DurationStatsResponse {
                hours: vec![1],
                count: vec![1],
            }),
        );

        assert!(!applied);
        assert!(model.state().is_loading());
    }

    #[test]
    fn test_remount_starts_fresh_sequence() {
        let mut model = ChartViewModel::<TripDuration>::new();
        let first = model.mount().unwrap();
        model.finish(&first, Err(network_error()));
        model.unmount();

        let second = model.mount().unwrap();
        assert!(second.generation() > first.generation());
        assert!(model.state().is_loading());

        // Late result from the first mount must not land
        assert!(!model.finish(&first, Ok(DurationStatsResponse::default())));

        assert!(model.finish(
            &second,
            Ok(DurationStatsResponse {
                hours: vec![3],
                count: vec![7],
            })
        ));
        assert_eq!(model.state().rows().unwrap().len(), 1);
    }

    #[test]
    fn test_mount_while_mounted_is_ignored() {
        let mut model = ChartViewModel::<HourRange>::new();
        let token = model.mount().unwrap();

        assert!(model.mount().is_none());
        assert!(token.is_active());
    }

    #[test]
    fn test_second_result_for_same_mount_ignored() {
        let mut model = ChartViewModel::<TripDuration>::new();
        let token = model.mount().unwrap();

        assert!(model.finish(&token, Ok(DurationStatsResponse::default())));
        assert!(!model.finish(&token, Err(network_error())));
        assert!(model.state().is_empty());
    }

    #[test]
    fn test_drop_deactivates_token() {
        let mut model = ChartViewModel::<TripDuration>::new();
        let token = model.mount().unwrap();
        drop(model);
        assert!(!token.is_active());
    }
}
