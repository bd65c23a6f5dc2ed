//! # Carry Core
//!
//! Domain types and static reference data for the Carry analytics workspace.
//!
//! This crate provides the foundational building blocks shared by the market
//! gateway and the metrics engine:
//!
//! - **Reference data**: [`BondReference`] and the built-in
//!   [`BondReferenceTable`] of eligible tickers (expiration date plus
//!   contractual payoff at maturity)
//! - **Market data**: [`RawQuote`] and the assembled [`MarketSnapshot`]
//! - **Degradation signalling**: [`RateStatus`] marks whether the reference
//!   exchange rate came from the live feed or from the configured fallback
//!
//! No I/O happens here; everything is plain data with serde support.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod reference;
pub mod snapshot;

pub use reference::{BondReference, BondReferenceTable};
pub use snapshot::{MarketSnapshot, RateStatus, RawQuote};
