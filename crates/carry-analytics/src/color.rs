//! Diverging color-scale limits for the presentation layer.

use serde::{Deserialize, Serialize};

/// Fraction of the extreme carry magnitude used as the scale limit. The
/// published range is deliberately tighter than the data so mid-range values
/// still get visible color.
const SHRINK_FACTOR: f64 = 0.3;

/// Symmetric color-scale range over one snapshot's carry values.
///
/// `vmin == -limit` and `vmax == limit` always hold: the scale is centered
/// on zero regardless of the sign of the underlying extremes, so a diverging
/// palette maps zero carry to its neutral midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorLimits {
    /// Lower bound of the scale (always `-limit`)
    pub vmin: f64,
    /// Upper bound of the scale (always `limit`)
    pub vmax: f64,
    /// Half-width of the scale
    pub limit: f64,
}

impl ColorLimits {
    /// Zero-width limits, used when no rows were computed.
    pub fn empty() -> Self {
        Self { vmin: 0.0, vmax: 0.0, limit: 0.0 }
    }

    /// Compute limits from every scenario and band-ceiling carry value in a
    /// result set.
    pub fn from_carries(carries: impl IntoIterator<Item = f64>) -> Self {
        let mut vmin = f64::INFINITY;
        let mut vmax = f64::NEG_INFINITY;
        let mut seen = false;
        for value in carries {
            seen = true;
            vmin = vmin.min(value);
            vmax = vmax.max(value);
        }
        if !seen {
            return Self::empty();
        }
        let limit = vmin.abs().max(vmax.abs()) * SHRINK_FACTOR;
        Self { vmin: -limit, vmax: limit, limit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn limits_are_symmetric_and_shrunk() {
        let limits = ColorLimits::from_carries([-0.2, 0.05, 0.5]);
        assert_relative_eq!(limits.limit, 0.5 * 0.3, epsilon = 1e-12);
        assert_relative_eq!(limits.vmin, -limits.limit, epsilon = 1e-12);
        assert_relative_eq!(limits.vmax, limits.limit, epsilon = 1e-12);
    }

    #[test]
    fn all_negative_carries_still_center_on_zero() {
        let limits = ColorLimits::from_carries([-0.4, -0.1]);
        assert_relative_eq!(limits.limit, 0.4 * 0.3, epsilon = 1e-12);
        assert!(limits.vmax > 0.0);
    }

    #[test]
    fn no_carries_yield_zero_limits() {
        assert_eq!(ColorLimits::from_carries(Vec::new()), ColorLimits::empty());
    }

    proptest! {
        #[test]
        fn limits_are_always_symmetric(values in proptest::collection::vec(-10.0f64..10.0, 1..50)) {
            let limits = ColorLimits::from_carries(values.iter().copied());
            prop_assert!(limits.limit >= 0.0);
            prop_assert_eq!(limits.vmin, -limits.limit);
            prop_assert_eq!(limits.vmax, limits.limit);
        }
    }
}
