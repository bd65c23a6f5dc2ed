//! The market data gateway.

use chrono::Utc;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use carry_core::{BondReferenceTable, MarketSnapshot, RateStatus, RawQuote};

use crate::config::GatewayConfig;
use crate::error::MarketError;
use crate::extract;

/// A fetched reference rate plus its provenance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateQuote {
    /// The rate, always positive
    pub value: f64,
    /// Live feed or configured fallback
    pub status: RateStatus,
}

/// Gateway to the upstream market data feed.
///
/// All fetch methods are infallible by contract: upstream failures degrade
/// to the configured fallback rate or an empty quote set, logged but never
/// surfaced. Only construction can fail (TLS/client setup).
#[derive(Debug, Clone)]
pub struct MarketGateway {
    http: Client,
    config: GatewayConfig,
}

impl MarketGateway {
    /// Build a gateway with a bounded-timeout HTTP client.
    pub fn new(config: GatewayConfig) -> Result<Self, MarketError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { http, config })
    }

    /// The gateway's configuration.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Fetch the reference (MEP) exchange rate.
    ///
    /// Any failure, unrecognized payload, or non-positive extracted value
    /// yields the configured fallback with [`RateStatus::Fallback`].
    #[instrument(skip(self), level = "debug")]
    pub async fn fetch_reference_rate(&self) -> RateQuote {
        let url = self.config.rate_url();
        let result = match self.get_json(&url).await {
            Ok(body) => rate_from_body(&body),
            Err(err) => Err(err),
        };
        match result {
            Ok(value) => {
                debug!(rate = value, "reference rate fetched");
                RateQuote { value, status: RateStatus::Live }
            }
            Err(err) => {
                warn!(%err, fallback = self.config.fallback_rate, "using fallback reference rate");
                RateQuote { value: self.config.fallback_rate, status: RateStatus::Fallback }
            }
        }
    }

    /// Fetch quotes from both instrument endpoints (notes, then bonds) and
    /// concatenate them. A failing endpoint contributes nothing; the other
    /// endpoint's quotes survive.
    #[instrument(skip(self), level = "debug")]
    pub async fn fetch_instrument_quotes(&self) -> Vec<RawQuote> {
        let (mut notes, bonds) = tokio::join!(
            self.fetch_endpoint_quotes(self.config.notes_url()),
            self.fetch_endpoint_quotes(self.config.bonds_url()),
        );
        notes.extend(bonds);
        notes
    }

    /// Fetch a full snapshot: reference rate and quotes in parallel, quotes
    /// filtered to symbols present in the reference table.
    ///
    /// Never fails: every upstream failure mode degrades, so the returned
    /// snapshot is always structurally valid (possibly with zero quotes and
    /// a fallback rate).
    pub async fn fetch_snapshot(&self, table: &BondReferenceTable) -> MarketSnapshot {
        let (rate, quotes) = tokio::join!(self.fetch_reference_rate(), self.fetch_instrument_quotes());

        let total = quotes.len();
        let eligible: Vec<RawQuote> =
            quotes.into_iter().filter(|q| table.contains(&q.symbol)).collect();
        debug!(
            eligible = eligible.len(),
            total,
            rate = rate.value,
            degraded = rate.status.is_degraded(),
            "snapshot assembled"
        );

        MarketSnapshot::new(rate.value, rate.status, eligible, Utc::now())
    }

    async fn fetch_endpoint_quotes(&self, url: String) -> Vec<RawQuote> {
        match self.get_json(&url).await {
            Ok(Value::Array(records)) => {
                records.iter().filter_map(extract::instrument_quote).collect()
            }
            Ok(other) => {
                warn!(url, shape = shape_name(&other), "expected a list of instruments");
                Vec::new()
            }
            Err(err) => {
                warn!(url, %err, "instrument endpoint unavailable");
                Vec::new()
            }
        }
    }

    async fn get_json(&self, url: &str) -> Result<Value, MarketError> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

/// Extract and validate a rate from a parsed payload.
fn rate_from_body(body: &Value) -> Result<f64, MarketError> {
    let rate = extract::reference_rate(body)
        .ok_or_else(|| MarketError::MalformedPayload("no numeric rate field".to_string()))?;
    if rate <= 0.0 {
        return Err(MarketError::NonPositiveRate(rate));
    }
    Ok(rate)
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
