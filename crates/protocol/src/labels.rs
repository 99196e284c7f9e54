//! Display strings shown next to the sliders and in the metric panel.
//!
//! Numbers are rendered the way the browser's `Number.prototype.toFixed`
//! does: an exact half rounds away from zero, and non-finite values print as
//! `Infinity`, `-Infinity` or `NaN`.

use crate::wire::RateConstants;

/// Unit suffix used in the metric panel
pub const RATE_UNIT: &str = " min⁻¹";

/// Split a finite, positive `f64` into `mantissa * 2^exp`
fn decompose(x: f64) -> (u64, i32) {
    let bits = x.to_bits();
    let exp = i32::try_from((bits >> 52) & 0x7ff).unwrap_or(0);
    let frac = bits & ((1_u64 << 52) - 1);
    if exp == 0 {
        (frac, -1074)
    } else {
        (frac | (1_u64 << 52), exp - 1075)
    }
}

/// If `x` lies exactly halfway between two `digits`-decimal values, return
/// the larger one scaled by `10^digits`.
fn exact_half_up(x: f64, digits: u32) -> Option<u128> {
    let (mantissa, exp) = decompose(x);
    if mantissa == 0 || exp >= 0 {
        return None;
    }
    let shift = exp.unsigned_abs();
    let scaled = u128::from(mantissa) * 10_u128.pow(digits + 1);
    // x * 10^(digits+1) must be an integer ending in 5
    if scaled.trailing_zeros() < shift {
        return None;
    }
    let q = scaled >> shift;
    (q % 10 == 5).then_some(q / 10 + 1)
}

fn with_decimals(n: u128, digits: usize) -> String {
    let s = format!("{n:0>width$}", width = digits + 1);
    if digits == 0 {
        return s;
    }
    let (int, frac) = s.split_at(s.len() - digits);
    format!("{int}.{frac}")
}

/// `x` fixed to `digits` decimals, matching `toFixed`
pub fn to_fixed(x: f64, digits: u32) -> String {
    let width = digits as usize;
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        let s = if x > 0.0 { "Infinity" } else { "-Infinity" };
        return s.to_string();
    }
    if x == 0.0 {
        // -0 prints without a sign
        return format!("{:.width$}", 0.0);
    }

    let sign = if x < 0.0 { "-" } else { "" };
    match exact_half_up(x.abs(), digits) {
        Some(n) => format!("{sign}{}", with_decimals(n, width)),
        None => format!("{x:.width$}"),
    }
}

/// Rate constant fixed to 3 decimals
pub fn format_rate(k: f64) -> String {
    to_fixed(k, 3)
}

/// Rate constant with its unit, for the metric panel
pub fn format_rate_metric(k: f64) -> String {
    format!("{}{RATE_UNIT}", format_rate(k))
}

/// `k2 / k1` fixed to 2 decimals.
///
/// `k1 == 0` is not special-cased: the division yields `Infinity`,
/// `-Infinity` or `NaN`.
pub fn format_ratio(k1: f64, k2: f64) -> String {
    to_fixed(k2 / k1, 2)
}

/// All label text for one pair of slider values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub k1_value: String,
    pub k2_value: String,
    pub metric_k1: String,
    pub metric_k2: String,
    pub ratio: String,
}

impl Labels {
    pub fn from_rates(rates: &RateConstants) -> Self {
        Self {
            k1_value: format_rate(rates.k1),
            k2_value: format_rate(rates.k2),
            metric_k1: format_rate_metric(rates.k1),
            metric_k2: format_rate_metric(rates.k2),
            ratio: format_ratio(rates.k1, rates.k2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rate_pads_to_three_decimals() {
        assert_eq!(format_rate(0.1), "0.100");
        assert_eq!(format_rate(1.0), "1.000");
        assert_eq!(format_rate(0.0371), "0.037");
        assert_eq!(format_rate(0.12345), "0.123");
    }

    #[test]
    fn test_format_rate_metric_has_unit() {
        assert_eq!(format_rate_metric(0.05), "0.050 min⁻¹");
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(0.1, 0.05), "0.50");
        assert_eq!(format_ratio(0.03, 0.1), "3.33");
        assert_eq!(format_ratio(0.2, 0.2), "1.00");
    }

    #[test]
    fn test_format_ratio_zero_k1() {
        assert_eq!(format_ratio(0.0, 0.1), "Infinity");
        assert_eq!(format_ratio(0.0, -0.1), "-Infinity");
        assert_eq!(format_ratio(0.0, 0.0), "NaN");
    }

    #[test]
    fn test_exact_half_rounds_up() {
        assert_eq!(format_ratio(1.0, 0.125), "0.13");
        assert_eq!(format_ratio(1.0, 0.625), "0.63");
        assert_eq!(format_ratio(0.4, 0.05), "0.13");
        assert_eq!(format_rate(0.0625), "0.063");
        assert_eq!(format_rate_metric(0.0625), "0.063 min⁻¹");
        assert_eq!(to_fixed(2.5, 0), "3");
    }

    #[test]
    fn test_exact_half_negative_rounds_away_from_zero() {
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
        assert_eq!(to_fixed(-0.0625, 3), "-0.063");
    }

    #[test]
    fn test_near_half_uses_binary_value() {
        // 1.005 is stored slightly below the half, 0.035 slightly above
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(0.035, 2), "0.04");
    }

    #[test]
    fn test_zero_and_small_values() {
        assert_eq!(to_fixed(0.0, 2), "0.00");
        assert_eq!(to_fixed(-0.0, 3), "0.000");
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
        assert_eq!(format_rate(0.001), "0.001");
    }

    #[test]
    fn test_labels_from_rates() {
        let labels = Labels::from_rates(&RateConstants::new(0.25, 0.5));
        assert_eq!(labels.k1_value, "0.250");
        assert_eq!(labels.k2_value, "0.500");
        assert_eq!(labels.metric_k1, "0.250 min⁻¹");
        assert_eq!(labels.metric_k2, "0.500 min⁻¹");
        assert_eq!(labels.ratio, "2.00");
    }

    #[test]
    fn test_ratio_tracks_current_values() {
        for (k1, k2) in [(0.01, 0.99), (0.5, 0.125), (0.75, 0.3)] {
            let labels = Labels::from_rates(&RateConstants::new(k1, k2));
            assert_eq!(labels.ratio, format!("{:.2}", k2 / k1));
        }
    }
}
