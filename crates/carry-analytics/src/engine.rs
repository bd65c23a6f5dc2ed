//! The carry metrics engine.
//!
//! [`CarryEngine::compute`] is a deterministic transform: reference table +
//! market snapshot + evaluation date in, ordered rows + color limits out.
//! The join between quotes and reference data is an inner join; symbols
//! missing on either side are silently excluded. Rows whose formulas are
//! undefined (zero days to expiration, non-positive price) are excluded and
//! logged, never fatal to the batch.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use carry_core::{BondReference, BondReferenceTable, MarketSnapshot, RawQuote};

use crate::band::CurrencyBand;
use crate::color::ColorLimits;
use crate::error::AnalyticsError;
use crate::metrics;

/// Carry return at one hypothetical exit exchange rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioCarry {
    /// Hypothetical exit exchange rate, pesos per dollar
    pub exit_rate: u32,
    /// Carry return at that rate
    pub carry: f64,
}

/// All derived metrics for one bond in one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarryRow {
    /// Ticker symbol
    pub symbol: String,
    /// Quoted price, rounded to 2 decimals for presentation
    pub price: Decimal,
    /// Expiration date
    pub expiration: NaiveDate,
    /// Days from the evaluation date to expiration (may be negative)
    pub days_to_expiration: i64,
    /// Payoff at maturity, per 100 nominal
    pub payoff: Decimal,
    /// Simple annualized nominal rate
    pub tna: f64,
    /// Effective annual rate
    pub tea: f64,
    /// Effective monthly rate
    pub tem: f64,
    /// Band ceiling at expiration, rounded to whole pesos
    pub band_ceiling: i64,
    /// Carry at each configured exit-rate scenario
    pub scenario_carries: Vec<ScenarioCarry>,
    /// Carry when exiting at the band ceiling
    pub carry_at_band_ceiling: f64,
    /// Exit exchange rate at which the trade breaks even
    pub mep_breakeven: f64,
}

/// The carry metrics engine: band parameters plus the scenario list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarryEngine {
    /// Currency-band model used for the ceiling projection
    pub band: CurrencyBand,
    /// Exit-rate scenarios, pesos per dollar
    pub scenarios: Vec<u32>,
}

impl Default for CarryEngine {
    fn default() -> Self {
        Self { band: CurrencyBand::default(), scenarios: vec![1000, 1100, 1200, 1300, 1400] }
    }
}

impl CarryEngine {
    /// Create an engine with explicit band parameters and scenarios.
    pub fn new(band: CurrencyBand, scenarios: Vec<u32>) -> Self {
        Self { band, scenarios }
    }

    /// Compute carry metrics for every bond present in both the reference
    /// table and the snapshot.
    ///
    /// Rows come back sorted ascending by days to expiration, ties broken by
    /// symbol. Rows whose formulas are undefined are skipped with a warning.
    /// Zero matching bonds is not an error: the result is empty rows and
    /// zero-width color limits.
    pub fn compute(
        &self,
        table: &BondReferenceTable,
        snapshot: &MarketSnapshot,
        evaluation_date: NaiveDate,
    ) -> (Vec<CarryRow>, ColorLimits) {
        let mut rows: Vec<CarryRow> = Vec::new();

        for (symbol, quote) in &snapshot.quotes {
            let Some(reference) = table.get(symbol) else {
                // Quoted upstream but not in the reference table: ineligible.
                continue;
            };
            match self.compute_row(symbol, reference, quote, snapshot.reference_rate, evaluation_date)
            {
                Ok(row) => rows.push(row),
                Err(err) => warn!(%symbol, %err, "skipping row"),
            }
        }

        rows.sort_by(|a, b| {
            a.days_to_expiration
                .cmp(&b.days_to_expiration)
                .then_with(|| a.symbol.cmp(&b.symbol))
        });

        let limits = ColorLimits::from_carries(rows.iter().flat_map(|row| {
            row.scenario_carries
                .iter()
                .map(|s| s.carry)
                .chain(std::iter::once(row.carry_at_band_ceiling))
        }));

        (rows, limits)
    }

    fn compute_row(
        &self,
        symbol: &str,
        reference: &BondReference,
        quote: &RawQuote,
        reference_rate: f64,
        evaluation_date: NaiveDate,
    ) -> Result<CarryRow, AnalyticsError> {
        let price = quote.last_price.to_f64().unwrap_or(0.0);
        if price <= 0.0 {
            return Err(AnalyticsError::NonPositivePrice { symbol: symbol.to_string(), price });
        }

        let days = (reference.expiration - evaluation_date).num_days();
        if days == 0 {
            return Err(AnalyticsError::InvalidDuration { symbol: symbol.to_string(), days });
        }

        let payoff = reference.payoff.to_f64().unwrap_or(0.0);
        let ratio = payoff / price;

        let band_ceiling = self.band.ceiling_at_rounded(reference.expiration);
        let scenario_carries = self
            .scenarios
            .iter()
            .map(|&exit_rate| ScenarioCarry {
                exit_rate,
                carry: metrics::carry_at(ratio, reference_rate, f64::from(exit_rate)),
            })
            .collect();

        Ok(CarryRow {
            symbol: symbol.to_string(),
            price: quote.last_price.round_dp(2),
            expiration: reference.expiration,
            days_to_expiration: days,
            payoff: reference.payoff,
            tna: metrics::tna(ratio, days),
            tea: metrics::tea(ratio, days),
            tem: metrics::tem(ratio, days),
            band_ceiling,
            scenario_carries,
            carry_at_band_ceiling: metrics::carry_at(ratio, reference_rate, band_ceiling as f64),
            mep_breakeven: metrics::mep_breakeven(ratio, reference_rate),
        })
    }
}
