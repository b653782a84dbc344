//! Application State
//!
//! Shared, immutable state for all dashboard handlers. View state is never
//! shared: every page request mounts its own view model.

use std::sync::Arc;
use std::time::Instant;

use crate::api::StatsSource;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Where chart views load their statistics from
    pub source: Arc<dyn StatsSource>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(source: Arc<dyn StatsSource>) -> Self {
        Self {
            source,
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
