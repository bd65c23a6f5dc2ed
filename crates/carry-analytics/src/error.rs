//! Error types for the metrics engine.

use thiserror::Error;

/// Errors produced while computing carry metrics.
///
/// All variants are row-scoped: the engine recovers by excluding the
/// offending row, so none of them escape [`CarryEngine::compute`].
///
/// [`CarryEngine::compute`]: crate::engine::CarryEngine::compute
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    /// The rate formulas are undefined at zero days to expiration.
    #[error("{symbol}: rate formulas undefined at {days} days to expiration")]
    InvalidDuration {
        /// Ticker of the offending row.
        symbol: String,
        /// Days to expiration that triggered the error.
        days: i64,
    },

    /// Quoted price was zero or negative; payoff ratio is undefined.
    #[error("{symbol}: non-positive price {price}")]
    NonPositivePrice {
        /// Ticker of the offending row.
        symbol: String,
        /// The offending price.
        price: f64,
    },
}
