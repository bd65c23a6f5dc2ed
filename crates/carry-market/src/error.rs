//! Gateway error types.
//!
//! These never cross the gateway boundary: every variant is recovered
//! locally (fallback rate, empty quote list) and logged. They exist so the
//! recovery sites have something precise to log.

use thiserror::Error;

/// Errors raised while talking to, or interpreting, the upstream feed.
#[derive(Debug, Error)]
pub enum MarketError {
    /// Transport failure: timeout, connection error, or non-2xx status.
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Payload parsed as JSON but matched no known shape.
    #[error("malformed upstream payload: {0}")]
    MalformedPayload(String),

    /// A rate was extracted but is unusable (zero or negative).
    #[error("non-positive reference rate: {0}")]
    NonPositiveRate(f64),
}
