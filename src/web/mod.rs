//! Bikeboard Dashboard Server
//!
//! Server-rendered navigation shell, built with Axum. Each chart page
//! request mounts its own view, loads it from the [`StatsSource`] and
//! returns the rendered page.
//!
//! # Routes
//!
//! - `GET /` - Redirect to `/trip-duration`
//! - `GET /trip-duration` - Trip duration chart
//! - `GET /hour-range` - Trips by hour of day chart
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Status and uptime
//!
//! # Example
//!
//! ```rust,no_run
//! use bikeboard::api::StatsClient;
//! use bikeboard::web::{serve, AppState};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = StatsClient::new("http://localhost:8000/api/");
//!     serve(AppState::new(Arc::new(client)), "0.0.0.0:8084").await?;
//!     Ok(())
//! }
//! ```

pub mod routes;
pub mod state;

pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api::StatsSource;
use crate::view::{ChartView, HourRange, TripDuration, ROOT_ROUTE};

/// Dashboard server errors
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("Failed to bind {addr}: {source}")]
    Io {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(String),
}

/// Build the dashboard router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::status));

    Router::new()
        .route(ROOT_ROUTE, get(routes::views::index))
        .route(TripDuration::ROUTE, get(routes::views::chart_page::<TripDuration>))
        .route(HourRange::ROUTE, get(routes::views::chart_page::<HourRange>))
        .nest("/health", health_routes)
        .fallback(routes::views::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the dashboard server on `addr` and run until Ctrl+C or SIGTERM
pub async fn serve(state: AppState, addr: &str) -> Result<(), ServeError> {
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Io {
            addr: addr.to_string(),
            source,
        })?;

    tracing::info!("Bikeboard dashboard listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServeError::Server(e.to_string()))?;

    tracing::info!("Bikeboard dashboard shut down gracefully");
    Ok(())
}

/// Convenience for callers holding a concrete source
pub fn state_for(source: impl StatsSource + 'static) -> AppState {
    AppState::new(Arc::new(source))
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
