//! Market data snapshot types.
//!
//! A [`MarketSnapshot`] is the gateway's output: one reference exchange rate
//! plus the last prices of every eligible instrument, taken at a single
//! fetch. Snapshots are constructed fresh per fetch, never mutated, and never
//! persisted. The `reference_rate > 0` invariant is enforced by the gateway,
//! which substitutes a configured fallback instead of returning a
//! non-positive rate.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Provenance of the reference exchange rate in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateStatus {
    /// Rate extracted from the live upstream feed.
    Live,
    /// Upstream unavailable or unusable; rate is the configured fallback.
    Fallback,
}

impl RateStatus {
    /// Whether the rate is degraded (fallback constant rather than live).
    pub fn is_degraded(&self) -> bool {
        matches!(self, RateStatus::Fallback)
    }
}

/// Last traded price of a single instrument, as reported upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuote {
    /// Ticker symbol
    pub symbol: String,
    /// Last traded price
    pub last_price: Decimal,
}

impl RawQuote {
    /// Create a new quote.
    pub fn new(symbol: impl Into<String>, last_price: Decimal) -> Self {
        Self { symbol: symbol.into(), last_price }
    }
}

/// One fetch's worth of market data.
///
/// Invariants:
/// - `reference_rate` is always positive; `rate_status` records whether it
///   came from the live feed or the fallback constant.
/// - `quotes` only contains symbols present in the reference table the
///   snapshot was assembled against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Reference (MEP) exchange rate, pesos per dollar
    pub reference_rate: f64,
    /// Whether the rate is live or a fallback
    pub rate_status: RateStatus,
    /// Eligible quotes, keyed by symbol
    pub quotes: BTreeMap<String, RawQuote>,
    /// When the snapshot was fetched
    pub fetched_at: DateTime<Utc>,
}

impl MarketSnapshot {
    /// Assemble a snapshot from parts, indexing quotes by symbol.
    pub fn new(
        reference_rate: f64,
        rate_status: RateStatus,
        quotes: impl IntoIterator<Item = RawQuote>,
        fetched_at: DateTime<Utc>,
    ) -> Self {
        let quotes = quotes.into_iter().map(|q| (q.symbol.clone(), q)).collect();
        Self { reference_rate, rate_status, quotes, fetched_at }
    }

    /// Number of quoted instruments.
    pub fn quote_count(&self) -> usize {
        self.quotes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn snapshot_indexes_quotes_by_symbol() {
        let snapshot = MarketSnapshot::new(
            1190.5,
            RateStatus::Live,
            vec![RawQuote::new("S16E6", dec!(104.2)), RawQuote::new("T15D5", dec!(151.0))],
            Utc::now(),
        );
        assert_eq!(snapshot.quote_count(), 2);
        assert_eq!(snapshot.quotes["S16E6"].last_price, dec!(104.2));
    }

    #[test]
    fn fallback_status_is_degraded() {
        assert!(RateStatus::Fallback.is_degraded());
        assert!(!RateStatus::Live.is_degraded());
    }

    #[test]
    fn rate_status_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&RateStatus::Fallback).unwrap(), "\"fallback\"");
    }
}
