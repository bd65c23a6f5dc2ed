//! # Carry Analytics
//!
//! The carry-trade metrics engine for Argentine sovereign bonds.
//!
//! Given a static reference table (expiration date and payoff at maturity per
//! ticker) and one market snapshot (last prices plus a reference MEP rate),
//! the engine derives per-bond return metrics:
//!
//! - **TNA / TEA / TEM**: simple annualized, effective annual, and effective
//!   monthly rate conventions
//! - **Band ceiling**: the regulatory currency-band ceiling projected to each
//!   bond's expiration under a fixed crawling peg
//! - **Scenario carries**: dollar-denominated carry returns at a fixed list
//!   of hypothetical exit exchange rates, plus at the band ceiling
//! - **MEP breakeven**: the exit rate at which the trade returns exactly zero
//!
//! The engine is a pure function of its inputs plus one evaluation date:
//! recomputing with identical inputs yields identical output. Alongside the
//! rows it produces [`ColorLimits`], a symmetric diverging-scale range for
//! the presentation layer.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod band;
pub mod color;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod projection;

pub use band::CurrencyBand;
pub use color::ColorLimits;
pub use engine::{CarryEngine, CarryRow, ScenarioCarry};
pub use error::AnalyticsError;
pub use projection::{to_chart_series, to_table_rows, ChartSeries, TableRow};
