//! Request handlers.
//!
//! Each data endpoint checks the response cache first, otherwise fetches a
//! fresh snapshot, runs the engine, shapes the response, and caches it.
//! Handlers never fail on upstream trouble: the gateway degrades instead,
//! so the worst case is an empty table at the fallback rate.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};
use tracing::info;

use carry_analytics::{to_chart_series, to_table_rows, CarryEngine};
use carry_core::BondReferenceTable;
use carry_market::MarketGateway;

use crate::cache::ResponseCache;

/// Cache key for the table response.
const CARRY_DATA_KEY: &str = "carry_data";
/// Cache key for the chart response.
const CHART_DATA_KEY: &str = "chart_data";

/// Application state.
pub struct AppState {
    /// Upstream market data gateway
    pub gateway: MarketGateway,
    /// The metrics engine
    pub engine: CarryEngine,
    /// Static bond reference table
    pub table: BondReferenceTable,
    /// Short-TTL response cache
    pub cache: ResponseCache,
    /// How long cached responses stay valid
    pub cache_ttl: Duration,
}

/// Carry table data: rows, color limits, and the reference rate.
pub async fn carry_data(State(state): State<Arc<AppState>>) -> Json<Value> {
    if let Some(cached) = state.cache.get(CARRY_DATA_KEY, state.cache_ttl) {
        info!("serving cached carry data");
        return Json(mark_cached(cached));
    }

    info!("computing fresh carry data");
    let snapshot = state.gateway.fetch_snapshot(&state.table).await;
    let today = Utc::now().date_naive();
    let (rows, color_limits) = state.engine.compute(&state.table, &snapshot, today);

    let body = json!({
        "data": to_table_rows(&rows),
        "color_limits": color_limits,
        "mep_rate": snapshot.reference_rate,
        "rate_status": snapshot.rate_status,
        "timestamp": Utc::now().to_rfc3339(),
        "cached": false,
    });
    state.cache.put(CARRY_DATA_KEY, body.clone());
    Json(body)
}

/// Chart data: breakeven vs band ceiling series.
pub async fn chart_data(State(state): State<Arc<AppState>>) -> Json<Value> {
    if let Some(cached) = state.cache.get(CHART_DATA_KEY, state.cache_ttl) {
        info!("serving cached chart data");
        return Json(mark_cached(cached));
    }

    info!("computing fresh chart data");
    let snapshot = state.gateway.fetch_snapshot(&state.table).await;
    let today = Utc::now().date_naive();
    let (rows, _) = state.engine.compute(&state.table, &snapshot, today);

    let body = json!({
        "chart_data": to_chart_series(&rows),
        "timestamp": Utc::now().to_rfc3339(),
        "cached": false,
    });
    state.cache.put(CHART_DATA_KEY, body.clone());
    Json(body)
}

/// Health check: verifies the gateway end to end and reports cache size.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    let rate = state.gateway.fetch_reference_rate().await;
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "mep_rate": rate.value,
        "rate_status": rate.status,
        "cache_size": state.cache.len(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Clear the response cache (debugging aid).
pub async fn clear_cache(State(state): State<Arc<AppState>>) -> Json<Value> {
    state.cache.clear();
    info!("cache cleared");
    Json(json!({
        "status": "cache cleared",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Flip the `cached` flag on a body served from cache.
fn mark_cached(mut body: Value) -> Value {
    if let Some(flag) = body.get_mut("cached") {
        *flag = Value::Bool(true);
    }
    body
}
