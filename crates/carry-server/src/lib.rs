//! # Carry Server
//!
//! REST server exposing carry-trade analytics for Argentine sovereign bonds.
//!
//! ## Endpoints
//!
//! - `GET /api/carry-data` — table rows, color limits, reference rate
//! - `GET /api/chart-data` — breakeven vs band-ceiling chart series
//! - `GET /api/health` — upstream reachability and cache stats
//! - `GET /api/cache/clear` — drop cached responses
//!
//! Responses are cached for a short TTL (default 30 s) so a burst of
//! requests costs one upstream round trip.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache;
pub mod config;
pub mod handlers;
pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use carry_analytics::CarryEngine;
use carry_core::BondReferenceTable;
use carry_market::{MarketError, MarketGateway};

use crate::cache::ResponseCache;
use crate::handlers::AppState;

pub use config::ServerConfig;

/// The carry analytics server.
pub struct Server {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl Server {
    /// Build a server from configuration: gateway, engine, built-in
    /// reference table, empty cache.
    pub fn new(config: ServerConfig) -> Result<Self, MarketError> {
        let gateway = MarketGateway::new(config.market.clone())?;
        let state = Arc::new(AppState {
            gateway,
            engine: CarryEngine::default(),
            table: BondReferenceTable::builtin(),
            cache: ResponseCache::new(),
            cache_ttl: config.cache_ttl(),
        });
        Ok(Self { config, state })
    }

    /// Build the router with CORS and request tracing applied.
    ///
    /// CORS is deliberately permissive: the table is embedded in third-party
    /// pages via iframes.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        routes::create_router(self.state.clone())
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Bind and serve until the process is stopped.
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let addr = SocketAddr::new(
            self.config.host.parse().unwrap_or([0, 0, 0, 0].into()),
            self.config.port,
        );

        info!("starting carry server on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await
    }
}
