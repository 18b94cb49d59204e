//! Display formatting for converted values and trigonometric ratios.
//!
//! Two independent policies are provided. [`format_number`] renders converted
//! angle values with precision that grows as the magnitude shrinks, and
//! [`format_trig`] renders trig ratios with a fixed six decimals, snapping
//! near-zero values to `"0"`.
//!
//! Rounding is half away from zero, applied to the decimal value before it is
//! rendered.

use crate::trig::TrigValue;

/// Magnitudes at or above this use two decimals with thousands separators.
pub const LARGE_THRESHOLD: f64 = 1_000.0;
/// Magnitudes at or above this (and below [`LARGE_THRESHOLD`]) use six decimals.
pub const UNIT_THRESHOLD: f64 = 1.0;
/// Magnitudes at or above this (and below [`UNIT_THRESHOLD`]) use ten decimals.
/// Anything smaller is rendered in scientific notation.
pub const SMALL_THRESHOLD: f64 = 0.000_001;
/// Trig ratios below this magnitude are displayed as `"0"`.
pub const TRIG_ZERO_THRESHOLD: f64 = 1e-10;

/// Format a converted angle value for display.
///
/// | magnitude      | rendering                               |
/// |----------------|-----------------------------------------|
/// | `>= 1000`      | 2 decimals, `,` thousands separator     |
/// | `>= 1`         | 6 decimals                              |
/// | `>= 0.000001`  | 10 decimals                             |
/// | otherwise      | scientific, 6 fractional digits         |
pub fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= LARGE_THRESHOLD {
        number_format(value, 2, Some(','))
    } else if magnitude >= UNIT_THRESHOLD {
        number_format(value, 6, None)
    } else if magnitude >= SMALL_THRESHOLD {
        number_format(value, 10, None)
    } else {
        scientific(value, 6)
    }
}

/// Format a trigonometric ratio for display.
///
/// `Undefined` renders as `"undefined"`. Values below `1e-10` in magnitude
/// render as `"0"`, values of magnitude 1000 or more use two decimals with
/// thousands separators, and everything else uses six decimals.
pub fn format_trig(value: TrigValue) -> String {
    match value {
        TrigValue::Undefined => TrigValue::UNDEFINED_LABEL.to_string(),
        TrigValue::Defined(x) => format_trig_number(x),
    }
}

/// Numeric half of [`format_trig`].
pub fn format_trig_number(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude < TRIG_ZERO_THRESHOLD {
        "0".to_string()
    } else if magnitude >= LARGE_THRESHOLD {
        number_format(value, 2, Some(','))
    } else {
        number_format(value, 6, None)
    }
}

/// Render `value` with a fixed number of decimals and an optional thousands
/// separator on the integer part.
pub fn number_format(value: f64, decimals: usize, thousands_sep: Option<char>) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = round_half_away(value, decimals);
    let digits = format!("{:.*}", decimals, rounded.abs());
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    // A value that rounds to zero is printed unsigned.
    if rounded < 0.0 {
        out.push('-');
    }
    match thousands_sep {
        Some(sep) => push_grouped(&mut out, int_part, sep),
        None => out.push_str(int_part),
    }
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Scientific notation with `precision` fractional digits and a signed
/// exponent, e.g. `5.000000e-7` or `0.000000e+0`.
pub fn scientific(value: f64, precision: usize) -> String {
    let text = format!("{:.*e}", precision, value);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

fn round_half_away(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    // f64::round already rounds halfway cases away from zero.
    scaled.round() / scale
}

fn push_grouped(out: &mut String, int_part: &str, sep: char) {
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_millions() {
        assert_eq!(format_number(1_500_000.0), "1,500,000.00");
        assert_eq!(format_number(-1_500_000.0), "-1,500,000.00");
    }

    #[test]
    fn test_format_number_thousands() {
        assert_eq!(format_number(1_000.0), "1,000.00");
        assert_eq!(format_number(10_800.0), "10,800.00");
        assert_eq!(format_number(648_000.0), "648,000.00");
    }

    #[test]
    fn test_format_number_units() {
        assert_eq!(format_number(1.0), "1.000000");
        assert_eq!(format_number(200.0), "200.000000");
        assert_eq!(format_number(999.9999), "999.999900");
        assert_eq!(format_number(std::f64::consts::PI), "3.141593");
    }

    #[test]
    fn test_format_number_fractions() {
        assert_eq!(format_number(0.5), "0.5000000000");
        assert_eq!(format_number(0.000001), "0.0000010000");
        assert_eq!(format_number(-0.25), "-0.2500000000");
    }

    #[test]
    fn test_format_number_scientific() {
        assert_eq!(format_number(0.0000005), "5.000000e-7");
        assert_eq!(format_number(1e-12), "1.000000e-12");
        assert_eq!(format_number(-2.5e-9), "-2.500000e-9");
    }

    #[test]
    fn test_format_number_zero() {
        assert_eq!(format_number(0.0), "0.000000e+0");
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(number_format(0.125, 2, None), "0.13");
        assert_eq!(number_format(-0.125, 2, None), "-0.13");
        assert_eq!(number_format(2.5, 0, None), "3");
    }

    #[test]
    fn test_negative_zero_after_rounding_is_unsigned() {
        assert_eq!(number_format(-0.001, 2, None), "0.00");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(number_format(999.0, 2, Some(',')), "999.00");
        assert_eq!(number_format(1_234_567.891, 2, Some(',')), "1,234,567.89");
        assert_eq!(number_format(123_456.0, 0, Some(',')), "123,456");
    }

    #[test]
    fn test_rounding_carries_into_grouping() {
        assert_eq!(number_format(999_999.999, 2, Some(',')), "1,000,000.00");
    }

    #[test]
    fn test_format_trig_tiers() {
        assert_eq!(format_trig_number(1e-11), "0");
        assert_eq!(format_trig_number(-1e-11), "0");
        assert_eq!(format_trig_number(0.5), "0.500000");
        assert_eq!(format_trig_number(-0.7071067811865476), "-0.707107");
        assert_eq!(format_trig_number(1_234.5678), "1,234.57");
        assert_eq!(format_trig_number(0.9999999999999999), "1.000000");
    }

    #[test]
    fn test_format_trig_tier_boundaries() {
        assert_eq!(format_trig_number(1_000.0), "1,000.00");
        assert_eq!(format_trig_number(999.999), "999.999000");
        // Exactly at the threshold the value is kept, not snapped to zero.
        assert_eq!(format_trig_number(1e-10), "0.000000");
        assert_eq!(format_trig_number(9.9e-11), "0");
    }

    #[test]
    fn test_format_trig_undefined() {
        assert_eq!(format_trig(TrigValue::Undefined), "undefined");
        assert_eq!(format_trig(TrigValue::Defined(1.0)), "1.000000");
    }

    #[test]
    fn test_trig_policy_differs_from_number_policy() {
        assert_eq!(format_number(0.5), "0.5000000000");
        assert_eq!(format_trig_number(0.5), "0.500000");
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert_eq!(number_format(f64::INFINITY, 2, None), "inf");
        assert_eq!(number_format(f64::NAN, 2, None), "NaN");
    }
}
