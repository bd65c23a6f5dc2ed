//! Currency-band (crawling peg) model.
//!
//! The regulatory exchange-rate band opened on 2025-04-14 at 1400 pesos per
//! dollar and its ceiling crawls upward at 1% per 30-day month, compounding:
//!
//! ```text
//! ceiling(date) = base × (1 + monthly_rate) ^ (days_since_start / 30)
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Parameters of the currency-band ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrencyBand {
    /// Ceiling value on the start date, pesos per dollar
    pub base: f64,
    /// Compounding crawl rate per 30-day month
    pub monthly_rate: f64,
    /// Date the band took effect
    pub start: NaiveDate,
}

impl Default for CurrencyBand {
    fn default() -> Self {
        Self {
            base: 1400.0,
            monthly_rate: 0.01,
            start: NaiveDate::from_ymd_opt(2025, 4, 14).expect("valid band start date"),
        }
    }
}

impl CurrencyBand {
    /// Band ceiling projected to `date`.
    ///
    /// Dates before the start date extrapolate backwards along the same
    /// curve, which keeps the projection monotone over its whole domain.
    pub fn ceiling_at(&self, date: NaiveDate) -> f64 {
        let days_since_start = (date - self.start).num_days() as f64;
        self.base * (1.0 + self.monthly_rate).powf(days_since_start / 30.0)
    }

    /// Band ceiling rounded to the nearest whole peso, as published.
    pub fn ceiling_at_rounded(&self, date: NaiveDate) -> i64 {
        self.ceiling_at(date).round() as i64
    }
}
