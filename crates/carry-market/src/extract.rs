//! Tolerant field extraction from upstream payloads.
//!
//! The feed's response shapes have drifted before, so nothing here assumes a
//! schema. Extraction is a priority-ordered chain: named candidate fields
//! first, numeric introspection as the last resort. The reference rate over
//! a list payload takes the **median** of the matching column, not the mean;
//! one bad tick should not move the rate.

use rust_decimal::Decimal;
use serde_json::Value;

use carry_core::RawQuote;

/// Candidate field names for the reference rate, in priority order.
pub const RATE_FIELDS: [&str; 5] = ["close", "value", "price", "last", "rate"];

/// Candidate field names for an instrument's last price, in priority order.
/// The feed currently uses `c`.
pub const PRICE_FIELDS: [&str; 4] = ["c", "close", "last", "price"];

/// Extract the reference rate from a payload of unknown shape.
///
/// List payloads: the median of the first [`RATE_FIELDS`] column with any
/// numeric values, else the median of the first numeric column found by
/// introspection. Object payloads: the first matching [`RATE_FIELDS`] key,
/// else the first numeric field. Anything else: `None`.
pub fn reference_rate(payload: &Value) -> Option<f64> {
    match payload {
        Value::Array(records) => {
            for field in RATE_FIELDS {
                if let Some(rate) = median(column(records, field)) {
                    return Some(rate);
                }
            }
            // Introspection: first column (key order) with numeric values.
            for record in records {
                if let Value::Object(map) = record {
                    for key in map.keys() {
                        if let Some(rate) = median(column(records, key)) {
                            return Some(rate);
                        }
                    }
                }
            }
            None
        }
        Value::Object(map) => {
            for field in RATE_FIELDS {
                if let Some(rate) = map.get(field).and_then(Value::as_f64) {
                    return Some(rate);
                }
            }
            map.values().find_map(Value::as_f64)
        }
        _ => None,
    }
}

/// Extract one instrument quote from a record of unknown shape.
///
/// Needs a string `symbol` plus the first numeric [`PRICE_FIELDS`] match;
/// records missing either are dropped.
pub fn instrument_quote(record: &Value) -> Option<RawQuote> {
    let map = record.as_object()?;
    let symbol = map.get("symbol")?.as_str()?;
    let price = PRICE_FIELDS
        .iter()
        .find_map(|field| map.get(*field).and_then(Value::as_f64))?;
    Some(RawQuote::new(symbol, Decimal::from_f64_retain(price)?))
}

/// Values of `field` across all object records, non-numeric entries skipped.
fn column(records: &[Value], field: &str) -> Vec<f64> {
    records
        .iter()
        .filter_map(|record| record.get(field).and_then(Value::as_f64))
        .collect()
}

/// Median of a set of samples. Even-length sets average the middle pair.
fn median(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Some(values[mid])
    } else {
        Some((values[mid - 1] + values[mid]) / 2.0)
    }
}
