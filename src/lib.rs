//! Remittance Gateway
//!
//! The server-side core of a currency-exchange/remittance application: a
//! live exchange-rate feed and the request gatekeeper that fronts it.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture with clear separation of concerns:
//!
//! - **Domain**: Value objects and pure decision procedures (CurrencyPair,
//!   RateSnapshot, route classification, the gate decision)
//! - **Application**: Use cases and port interfaces (GetRates, StreamRates,
//!   RateProvider)
//! - **Infrastructure**: Implementations of ports (StaticRateTable,
//!   SystemClock, config loading)
//! - **Presentation**: REST handlers, the SSE broadcaster, and the
//!   gatekeeper middleware
//!
//! # Features
//!
//! - Single-shot rate lookups (`/api/rates`) with USD default base
//! - Server-sent rate stream (`/api/rates/stream`) with immediate first
//!   event, fixed refresh cadence, and a hard per-connection lifetime cap
//! - Deny-by-default request gate: exact-match public pages, prefix-match
//!   public APIs, everything else redirected to login
//!
//! # Example
//!
//! ```ignore
//! use remesa_gateway::{Gateway, GatewayConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let gateway = Gateway::new(GatewayConfig::default())?;
//!     gateway.run().await
//! }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types
pub use domain::{
    Clock, CurrencyCode, CurrencyPair, GateDecision, RateSnapshot, RouteClass, classify, decide,
};

pub use application::{
    GetRatesQuery, GetRatesUseCase, RateError, RateProvider, RatesError, RatesResult,
    StreamRatesUseCase,
};

pub use infrastructure::{
    ConfigError, FixedClock, GatekeeperConfig, GatewayConfig, ServerConfig, StaticRateTable,
    StreamConfig, SystemClock,
};

pub use presentation::{AppState, CloseReason, SessionState, StreamSession, create_router};

use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// The gateway server: configuration plus the wired state behind the router.
pub struct Gateway<C: Clock + 'static> {
    pub config: GatewayConfig,
    pub clock: Arc<C>,
    pub rate_provider: Arc<StaticRateTable>,
}

impl<C: Clock + 'static> Gateway<C> {
    /// Wire a gateway with the given clock. Rate seeds from the config are
    /// validated here, so a bad seed fails startup instead of a request.
    pub fn with_clock(config: GatewayConfig, clock: Arc<C>) -> Result<Self, ConfigError> {
        let seeds = config
            .rates
            .iter()
            .map(|seed| seed.to_domain())
            .collect::<Result<Vec<_>, _>>()?;
        let rate_provider = Arc::new(StaticRateTable::with_defaults().with_seeds(seeds));

        Ok(Gateway {
            config,
            clock,
            rate_provider,
        })
    }

    /// Create the router with all middleware attached.
    pub fn router(&self) -> Router {
        let state = Arc::new(AppState::new(
            Arc::clone(&self.clock),
            Arc::clone(&self.rate_provider),
            self.config.stream.clone(),
            Arc::new(self.config.gatekeeper.clone()),
        ));

        create_router(state)
    }

    /// Run the gateway server.
    pub async fn run(self) -> anyhow::Result<()> {
        let addr = format!("{}:{}", self.config.server.host, self.config.server.port);
        let router = self.router();

        tracing::info!("remittance gateway listening on {}", addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}

impl Gateway<SystemClock> {
    /// Create a gateway on the wall clock.
    pub fn new(config: GatewayConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }
}
