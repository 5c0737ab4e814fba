use axum::{Router, middleware, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::domain::Clock;
use crate::infrastructure::{GatekeeperConfig, StaticRateTable, StreamConfig};
use crate::presentation::middleware::gatekeeper;
use crate::presentation::stream;

/// Application state shared across handlers - uses concrete infrastructure types
pub struct AppState<C: Clock> {
    pub clock: Arc<C>,
    pub rate_provider: Arc<StaticRateTable>,
    pub stream: StreamConfig,
    pub gatekeeper: Arc<GatekeeperConfig>,
}

impl<C: Clock> AppState<C> {
    pub fn new(
        clock: Arc<C>,
        rate_provider: Arc<StaticRateTable>,
        stream: StreamConfig,
        gatekeeper: Arc<GatekeeperConfig>,
    ) -> Self {
        AppState {
            clock,
            rate_provider,
            stream,
            gatekeeper,
        }
    }
}

/// Create the gateway router.
///
/// The gatekeeper is attached with `Router::layer`, so it also runs for
/// requests that match no route (page paths served elsewhere fall through to
/// the 404 fallback only after the gate allows them).
pub fn create_router<C: Clock + 'static>(state: Arc<AppState<C>>) -> Router {
    Router::new()
        // Rate endpoints (public by route classification)
        .route("/api/rates", get(handlers::get_rates::<C>))
        .route("/api/rates/health", get(handlers::health))
        .route("/api/rates/stream", get(stream::stream_rates::<C>))
        // Middleware
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state.gatekeeper),
            gatekeeper::gatekeeper,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
