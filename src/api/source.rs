//! Stats Sources
//!
//! The views depend on [`StatsSource`] rather than on the HTTP client, so the
//! dashboard and CLI can be exercised against an in-memory source.

use async_trait::async_trait;
use futures_util::future::BoxFuture;
use tokio::sync::Mutex;

use super::client::StatsClient;
use crate::stats::{DurationStatsResponse, FetchError, HourRangeStatsResponse};
use crate::view::{ChartView, ChartViewModel, HourRange, TripDuration};

/// Provider of the two statistics responses
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn fetch_duration_stats(&self) -> Result<DurationStatsResponse, FetchError>;

    async fn fetch_hour_range_stats(&self) -> Result<HourRangeStatsResponse, FetchError>;
}

#[async_trait]
impl StatsSource for StatsClient {
    async fn fetch_duration_stats(&self) -> Result<DurationStatsResponse, FetchError> {
        StatsClient::fetch_duration_stats(self).await
    }

    async fn fetch_hour_range_stats(&self) -> Result<HourRangeStatsResponse, FetchError> {
        StatsClient::fetch_hour_range_stats(self).await
    }
}

/// A chart view that knows which source call feeds it
pub trait Fetch: ChartView {
    fn fetch(source: &dyn StatsSource) -> BoxFuture<'_, Result<Self::Response, FetchError>>;
}

impl Fetch for TripDuration {
    fn fetch(source: &dyn StatsSource) -> BoxFuture<'_, Result<DurationStatsResponse, FetchError>> {
        source.fetch_duration_stats()
    }
}

impl Fetch for HourRange {
    fn fetch(source: &dyn StatsSource) -> BoxFuture<'_, Result<HourRangeStatsResponse, FetchError>> {
        source.fetch_hour_range_stats()
    }
}

/// Run one mount cycle of a view: mount, fetch, apply.
///
/// The model lock is not held across the fetch, so the view can be
/// unmounted while the request is in flight. Returns `true` if the result
/// was applied, `false` if the view was already mounted or was unmounted
/// before the response arrived.
pub async fn load_view<V: Fetch>(
    model: &Mutex<ChartViewModel<V>>,
    source: &dyn StatsSource,
) -> bool {
    let token = match model.lock().await.mount() {
        Some(token) => token,
        None => return false,
    };

    let result = V::fetch(source).await;

    model.lock().await.finish(&token, result)
}
