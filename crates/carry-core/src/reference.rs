//! Static bond reference data.
//!
//! The reference table maps each eligible ticker to its expiration date and
//! contractual payoff at maturity (per 100 nominal, in pesos). Reference data
//! is static: it is loaded once at process start and never mutated. A symbol
//! quoted upstream but absent from this table is not an error; it is simply
//! ineligible for computation.

use std::collections::btree_map;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Contractual terms of a single bond: when it expires and what it pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondReference {
    /// Expiration (maturity) date
    pub expiration: NaiveDate,
    /// Payoff at maturity, per 100 nominal
    pub payoff: Decimal,
}

/// Ordered map of ticker symbol to [`BondReference`].
///
/// Symbols present in this table are eligible for carry computation;
/// everything else is ignored. The map is ordered so that iteration (and any
/// output derived from it) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondReferenceTable {
    entries: BTreeMap<String, BondReference>,
}

impl BondReferenceTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table of Argentine fixed-rate notes (Lecaps) and bonds
    /// (Boncaps/Boncer duals) tracked by the service.
    pub fn builtin() -> Self {
        builtin_entries()
            .iter()
            .map(|&(symbol, (y, m, d), payoff)| {
                (symbol.to_string(), BondReference { expiration: ymd(y, m, d), payoff })
            })
            .collect()
    }

    /// Look up a symbol.
    pub fn get(&self, symbol: &str) -> Option<&BondReference> {
        self.entries.get(symbol)
    }

    /// Whether a symbol is eligible for computation.
    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.contains_key(symbol)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(symbol, reference)` pairs in symbol order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, BondReference> {
        self.entries.iter()
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, symbol: impl Into<String>, reference: BondReference) {
        self.entries.insert(symbol.into(), reference);
    }
}

impl FromIterator<(String, BondReference)> for BondReferenceTable {
    fn from_iter<I: IntoIterator<Item = (String, BondReference)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a BondReferenceTable {
    type Item = (&'a String, &'a BondReference);
    type IntoIter = btree_map::Iter<'a, String, BondReference>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date in builtin table")
}

/// Ticker, expiration `(y, m, d)`, payoff at maturity.
#[rustfmt::skip]
fn builtin_entries() -> [(&'static str, (i32, u32, u32), Decimal); 34] {
    [
        ("S16A5", (2025, 4, 16),  dec!(131.211)),
        ("S28A5", (2025, 4, 28),  dec!(130.813)),
        ("S16Y5", (2025, 5, 16),  dec!(136.861)),
        ("S30Y5", (2025, 5, 30),  dec!(136.331)),
        ("S18J5", (2025, 6, 18),  dec!(147.695)),
        ("S30J5", (2025, 6, 30),  dec!(146.607)),
        ("S31L5", (2025, 7, 31),  dec!(147.74)),
        ("S15G5", (2025, 8, 15),  dec!(146.794)),
        ("S29G5", (2025, 8, 29),  dec!(157.7)),
        ("S12S5", (2025, 9, 12),  dec!(158.977)),
        ("S30S5", (2025, 9, 30),  dec!(159.734)),
        ("T17O5", (2025, 10, 15), dec!(158.872)),
        ("S31O5", (2025, 10, 31), dec!(132.821)),
        ("S10N5", (2025, 11, 10), dec!(122.254)),
        ("S28N5", (2025, 11, 28), dec!(123.561)),
        ("T15D5", (2025, 12, 15), dec!(170.838)),
        ("S16E6", (2026, 1, 16),  dec!(119.06)),
        ("T30E6", (2026, 1, 30),  dec!(142.22)),
        ("T13F6", (2026, 2, 13),  dec!(144.97)),
        ("S27F6", (2026, 2, 27),  dec!(125.84)),
        ("S17A6", (2026, 4, 17),  dec!(109.94)),
        ("S30A6", (2026, 4, 30),  dec!(127.49)),
        ("S29Y6", (2026, 5, 29),  dec!(132.04)),
        ("T30J6", (2026, 6, 30),  dec!(144.90)),
        ("S31G6", (2026, 8, 31),  dec!(127.06)),
        ("S30O6", (2026, 10, 30), dec!(135.28)),
        ("S30N6", (2026, 11, 30), dec!(129.89)),
        ("T15E7", (2027, 1, 15),  dec!(160.18)),
        ("T30A7", (2027, 4, 30),  dec!(157.13)),
        ("T31Y7", (2027, 5, 31),  dec!(152.18)),
        ("TTM26", (2026, 3, 16),  dec!(135.238)),
        ("TTJ26", (2026, 6, 30),  dec!(144.629)),
        ("TTS26", (2026, 9, 15),  dec!(152.096)),
        ("TTD26", (2026, 12, 15), dec!(161.144)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_has_all_tickers() {
        let table = BondReferenceTable::builtin();
        assert_eq!(table.len(), 34);
        assert!(table.contains("S16A5"));
        assert!(table.contains("TTD26"));
        assert!(!table.contains("AL30"));
    }

    #[test]
    fn builtin_payoffs_are_positive() {
        let table = BondReferenceTable::builtin();
        for (symbol, reference) in &table {
            assert!(reference.payoff > Decimal::ZERO, "{symbol} has non-positive payoff");
        }
    }

    #[test]
    fn iteration_is_symbol_ordered() {
        let table = BondReferenceTable::builtin();
        let symbols: Vec<_> = table.iter().map(|(s, _)| s.clone()).collect();
        let mut sorted = symbols.clone();
        sorted.sort();
        assert_eq!(symbols, sorted);
    }

    #[test]
    fn lookup_returns_terms() {
        let table = BondReferenceTable::builtin();
        let t15d5 = table.get("T15D5").unwrap();
        assert_eq!(t15d5.expiration, NaiveDate::from_ymd_opt(2025, 12, 15).unwrap());
        assert_eq!(t15d5.payoff, dec!(170.838));
    }
}
