//! Per-bond rate and carry formulas.
//!
//! All formulas work on the payoff ratio `F/P` (payoff at maturity over
//! quoted price) and the integer days to expiration `d`:
//!
//! ```text
//! tna = (F/P − 1) / d × 365          simple annualized nominal rate
//! tea = (F/P) ^ (365/d) − 1          effective annual rate
//! tem = (F/P) ^ (1/(d/30)) − 1       effective monthly rate
//! carry(S) = (F/P) × R / S − 1       carry at exit exchange rate S
//! breakeven = R × (F/P)              exit rate with zero carry
//! ```
//!
//! `d` may be negative (a positive base raised to a negative exponent is
//! well defined) but must not be zero; callers guard that case before
//! reaching these functions.

/// Simple annualized nominal rate (TNA). `days` must be non-zero.
pub fn tna(payoff_ratio: f64, days: i64) -> f64 {
    (payoff_ratio - 1.0) / days as f64 * 365.0
}

/// Effective annual rate (TEA), compounding. `days` must be non-zero.
pub fn tea(payoff_ratio: f64, days: i64) -> f64 {
    payoff_ratio.powf(365.0 / days as f64) - 1.0
}

/// Effective monthly rate (TEM) over 30-day months. `days` must be non-zero.
pub fn tem(payoff_ratio: f64, days: i64) -> f64 {
    payoff_ratio.powf(1.0 / (days as f64 / 30.0)) - 1.0
}

/// Carry return when exiting at exchange rate `exit_rate`, having entered at
/// `reference_rate`.
pub fn carry_at(payoff_ratio: f64, reference_rate: f64, exit_rate: f64) -> f64 {
    payoff_ratio * reference_rate / exit_rate - 1.0
}

/// Exit exchange rate at which the carry is exactly zero.
pub fn mep_breakeven(payoff_ratio: f64, reference_rate: f64) -> f64 {
    reference_rate * payoff_ratio
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn tna_matches_reference_scenario() {
        // F=110, P=100, d=30: ((110/100)-1)/30*365 = 1.2167
        assert_relative_eq!(tna(1.1, 30), 1.216_666_666_666_666_7, epsilon = 1e-9);
    }

    #[test]
    fn tea_compounds_the_payoff_ratio() {
        assert_relative_eq!(tea(1.1, 365), 0.1, epsilon = 1e-9);
        assert_relative_eq!(tea(1.1, 30), 1.1f64.powf(365.0 / 30.0) - 1.0, epsilon = 1e-9);
    }

    #[test]
    fn tem_over_exactly_one_month_is_the_ratio() {
        assert_relative_eq!(tem(1.05, 30), 0.05, epsilon = 1e-9);
    }

    #[test]
    fn tem_matches_formula_for_arbitrary_days() {
        let ratio = 1.37;
        for days in [1i64, 7, 45, 180, 365, 730] {
            assert_relative_eq!(
                tem(ratio, days),
                ratio.powf(1.0 / (days as f64 / 30.0)) - 1.0,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn rates_are_defined_for_past_dated_bonds() {
        // Negative days: positive base, negative exponent. Finite, no NaN.
        assert!(tna(1.1, -10).is_finite());
        assert!(tea(1.1, -10).is_finite());
        assert!(tem(1.1, -10).is_finite());
    }

    #[test]
    fn carry_at_reference_scenario() {
        // (110/100) * 1200 / 1200 - 1 = 0.10
        assert_relative_eq!(carry_at(1.1, 1200.0, 1200.0), 0.10, epsilon = 1e-9);
    }

    #[test]
    fn carry_is_zero_at_breakeven() {
        let ratio = 1.234;
        let rate = 1185.0;
        let breakeven = mep_breakeven(ratio, rate);
        assert_relative_eq!(carry_at(ratio, rate, breakeven), 0.0, epsilon = 1e-12);
    }
}
