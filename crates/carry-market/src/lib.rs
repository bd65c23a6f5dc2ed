//! # Carry Market
//!
//! The market data gateway: fetches the reference (MEP) exchange rate and
//! live instrument quotes from the upstream feed and assembles them into a
//! [`carry_core::MarketSnapshot`].
//!
//! The upstream feed carries no stability guarantee on response shape, so
//! normalization is defensive: a priority-ordered chain of field extractors
//! probes each payload, and every failure mode (timeout, connection error,
//! non-2xx, unrecognized shape, non-positive rate) degrades to a fallback
//! value or an empty quote set. [`MarketGateway::fetch_snapshot`] never
//! returns an error: the caller always receives a structurally valid
//! snapshot, with [`carry_core::RateStatus`] recording whether the rate is
//! live or degraded.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod extract;
pub mod gateway;

pub use config::GatewayConfig;
pub use error::MarketError;
pub use gateway::{MarketGateway, RateQuote};
