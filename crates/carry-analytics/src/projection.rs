//! Presentation projections.
//!
//! Flat table rows and parallel-array chart series derived from computed
//! [`CarryRow`]s. Wire keys are the Spanish names the frontend has always
//! consumed (`precio`, `fecha_vencimiento`, `carry_techo`, ...); dates are
//! formatted `%d/%m/%Y`.

use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::engine::CarryRow;

/// One flat record for the web table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Ticker symbol
    pub ticker: String,
    /// Quoted price, 2 decimals
    pub precio: f64,
    /// Expiration date, `dd/mm/yyyy`
    pub fecha_vencimiento: String,
    /// Days to expiration
    pub dias_vencimiento: i64,
    /// Effective monthly rate
    pub tem: f64,
    /// Simple annualized nominal rate
    pub tna: f64,
    /// Effective annual rate
    pub tea: f64,
    /// `carry_<rate>` per scenario plus `carry_techo` at the band ceiling
    #[serde(flatten)]
    pub carries: BTreeMap<String, f64>,
}

/// Parallel arrays for the breakeven-vs-band-ceiling chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Ticker symbols, in row order
    pub tickers: Vec<String>,
    /// Band ceiling at each expiration
    pub band_ceiling: Vec<f64>,
    /// MEP breakeven per bond
    pub mep_breakeven: Vec<f64>,
    /// Days to expiration per bond
    pub days_to_exp: Vec<i64>,
}

/// Project computed rows into flat table records, preserving row order.
pub fn to_table_rows(rows: &[CarryRow]) -> Vec<TableRow> {
    rows.iter()
        .map(|row| {
            let mut carries: BTreeMap<String, f64> = row
                .scenario_carries
                .iter()
                .map(|s| (format!("carry_{}", s.exit_rate), s.carry))
                .collect();
            carries.insert("carry_techo".to_string(), row.carry_at_band_ceiling);

            TableRow {
                ticker: row.symbol.clone(),
                precio: row.price.to_f64().unwrap_or(0.0),
                fecha_vencimiento: row.expiration.format("%d/%m/%Y").to_string(),
                dias_vencimiento: row.days_to_expiration,
                tem: row.tem,
                tna: row.tna,
                tea: row.tea,
                carries,
            }
        })
        .collect()
}

/// Project computed rows into chart series, preserving row order.
pub fn to_chart_series(rows: &[CarryRow]) -> ChartSeries {
    ChartSeries {
        tickers: rows.iter().map(|r| r.symbol.clone()).collect(),
        band_ceiling: rows.iter().map(|r| r.band_ceiling as f64).collect(),
        mep_breakeven: rows.iter().map(|r| r.mep_breakeven).collect(),
        days_to_exp: rows.iter().map(|r| r.days_to_expiration).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use rust_decimal_macros::dec;

    use carry_core::{BondReference, BondReferenceTable, MarketSnapshot, RateStatus, RawQuote};

    use crate::engine::CarryEngine;

    fn computed_rows() -> Vec<CarryRow> {
        let eval = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let table: BondReferenceTable = [
            (
                "X".to_string(),
                BondReference {
                    expiration: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
                    payoff: dec!(110),
                },
            ),
            (
                "Y".to_string(),
                BondReference {
                    expiration: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
                    payoff: dec!(120),
                },
            ),
        ]
        .into_iter()
        .collect();
        let snapshot = MarketSnapshot::new(
            1200.0,
            RateStatus::Live,
            vec![RawQuote::new("X", dec!(100)), RawQuote::new("Y", dec!(101.555))],
            Utc::now(),
        );
        CarryEngine::default().compute(&table, &snapshot, eval).0
    }

    #[test]
    fn table_rows_carry_localized_dates_and_scenario_keys() {
        let rows = computed_rows();
        let table = to_table_rows(&rows);

        assert_eq!(table.len(), 2);
        assert_eq!(table[0].ticker, "X");
        assert_eq!(table[0].fecha_vencimiento, "01/07/2025");
        assert_eq!(table[0].dias_vencimiento, 30);
        let keys: Vec<_> = table[0].carries.keys().cloned().collect();
        assert_eq!(
            keys,
            ["carry_1000", "carry_1100", "carry_1200", "carry_1300", "carry_1400", "carry_techo"]
        );
    }

    #[test]
    fn table_row_price_is_rounded_to_two_decimals() {
        let rows = computed_rows();
        let table = to_table_rows(&rows);
        assert_eq!(table[1].precio, 101.56);
    }

    #[test]
    fn scenario_keys_flatten_into_the_record() {
        let rows = computed_rows();
        let json = serde_json::to_value(&to_table_rows(&rows)[0]).unwrap();
        assert!(json.get("carry_1200").is_some());
        assert!(json.get("carry_techo").is_some());
        assert!(json.get("carries").is_none());
    }

    #[test]
    fn chart_series_are_parallel_and_ordered() {
        let rows = computed_rows();
        let chart = to_chart_series(&rows);

        assert_eq!(chart.tickers, ["X", "Y"]);
        assert_eq!(chart.tickers.len(), chart.band_ceiling.len());
        assert_eq!(chart.tickers.len(), chart.mep_breakeven.len());
        assert_eq!(chart.tickers.len(), chart.days_to_exp.len());
        assert_eq!(chart.days_to_exp, [30, 92]);
    }

    #[test]
    fn empty_rows_project_to_empty_shapes() {
        assert!(to_table_rows(&[]).is_empty());
        assert_eq!(to_chart_series(&[]), ChartSeries::default());
    }
}
