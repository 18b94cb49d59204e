//! Conversion between angle units.
//!
//! Every conversion goes through degrees:
//!
//! ```text
//! degrees = value * from.to_degrees_factor
//! result  = degrees / to.to_degrees_factor
//! ```
//!
//! No rounding happens here. Only the `formatted` strings are rounded, by
//! [`format_number`].

use serde::Serialize;

use crate::catalog::{self, Category, UnitDefinition};
use crate::error::AngleError;
use crate::format::format_number;

/// Degrees in one full turn.
pub const FULL_TURN_DEGREES: f64 = 360.0;

/// The input side of a conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitSnapshot {
    pub value: f64,
    pub unit: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
}

/// The output side of a conversion, with its display string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetSnapshot {
    pub value: f64,
    pub unit: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub formatted: String,
}

/// Result of converting one value between two units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub from: UnitSnapshot,
    pub to: TargetSnapshot,
    /// The input expressed in degrees, not yet normalized.
    pub degrees: f64,
    /// The input in degrees reduced to `[0, 360)`.
    pub normalized_degrees: f64,
}

/// One row of the common conversions summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommonConversion {
    pub unit: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub value: f64,
    pub formatted: String,
    pub category: Category,
}

/// Convert `value` from the unit `from_key` to the unit `to_key`.
///
/// Converting a unit to itself returns `value` unchanged.
///
/// # Errors
///
/// * [`AngleError::UnknownUnit`] if either key is not in the catalog.
/// * [`AngleError::InvalidInput`] if `value` is not finite, or if it
///   overflows when expressed in degrees or in the target unit.
pub fn convert(value: f64, from_key: &str, to_key: &str) -> Result<ConversionResult, AngleError> {
    let from = catalog::lookup(from_key)?;
    let to = catalog::lookup(to_key)?;
    convert_between(value, from, to)
}

/// [`convert`] with already-resolved units.
pub fn convert_between(
    value: f64,
    from: &'static UnitDefinition,
    to: &'static UnitDefinition,
) -> Result<ConversionResult, AngleError> {
    if !value.is_finite() {
        return Err(AngleError::InvalidInput(value.to_string()));
    }

    let degrees = from.to_degrees(value);
    if !degrees.is_finite() {
        return Err(AngleError::InvalidInput(format!(
            "{value:e} {} is out of range",
            from.key
        )));
    }

    let result = if from.key == to.key {
        value
    } else {
        to.from_degrees(degrees)
    };
    if !result.is_finite() {
        return Err(AngleError::InvalidInput(format!(
            "{value:e} {} is out of range in {}",
            from.key, to.key
        )));
    }
    let normalized_degrees = normalize_degrees(degrees);

    tracing::debug!(
        value,
        from = from.key,
        to = to.key,
        result,
        normalized_degrees,
        "converted angle"
    );

    Ok(ConversionResult {
        from: UnitSnapshot {
            value,
            unit: from.key,
            name: from.display_name,
            symbol: from.symbol,
        },
        to: TargetSnapshot {
            value: result,
            unit: to.key,
            name: to.display_name,
            symbol: to.symbol,
            formatted: format_number(result),
        },
        degrees,
        normalized_degrees,
    })
}

/// Reduce an angle in degrees to the half-open range `[0, 360)`.
///
/// The truncated remainder takes the sign of `degrees`, so negative
/// remainders are shifted up by a full turn: `-10` becomes `350`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let remainder = degrees % FULL_TURN_DEGREES;
    let normalized = if remainder < 0.0 {
        remainder + FULL_TURN_DEGREES
    } else {
        remainder
    };
    // A tiny negative remainder can round up to exactly 360.
    if normalized >= FULL_TURN_DEGREES {
        0.0
    } else {
        // Adding zero clears a negative zero.
        normalized + 0.0
    }
}

/// Express `degrees` in every unit flagged as common, in catalog order.
///
/// Rows are not range-checked; a degree value near `f64::MAX` overflows the
/// smaller units to infinity. [`evaluate`](crate::report::evaluate) rejects
/// such reports.
pub fn common_conversions(degrees: f64) -> Vec<CommonConversion> {
    catalog::common_units()
        .map(|unit| {
            let value = unit.from_degrees(degrees);
            CommonConversion {
                unit: unit.key,
                name: unit.display_name,
                symbol: unit.symbol,
                value,
                formatted: format_number(value),
                category: unit.category,
            }
        })
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn unit_strategy() -> impl Strategy<Value = &'static str> {
        (0..catalog::all().len()).prop_map(|i| catalog::all()[i].key)
    }

    proptest! {
        /// Property: converting there and back returns the starting value.
        #[test]
        fn prop_round_trip(
            value in -1.0e6f64..1.0e6,
            a in unit_strategy(),
            b in unit_strategy(),
        ) {
            let there = convert(value, a, b).unwrap();
            let back = convert(there.to.value, b, a).unwrap();
            let tolerance = 1e-9 * value.abs() + 1e-12;
            prop_assert!(
                (back.to.value - value).abs() <= tolerance,
                "{} {} -> {} -> {}", value, a, b, back.to.value
            );
        }

        /// Property: same-unit conversion is exact.
        #[test]
        fn prop_identity(value in -1.0e9f64..1.0e9, a in unit_strategy()) {
            prop_assert_eq!(convert(value, a, a).unwrap().to.value, value);
        }

        /// Property: normalized degrees lie in [0, 360) and are congruent to the input.
        #[test]
        fn prop_normalized_range(degrees in -1.0e6f64..1.0e6) {
            let n = normalize_degrees(degrees);
            prop_assert!((0.0..FULL_TURN_DEGREES).contains(&n), "{} -> {}", degrees, n);

            let turns = (degrees - n) / FULL_TURN_DEGREES;
            prop_assert!((turns - turns.round()).abs() < 1e-9, "{} -> {}", degrees, n);
        }

        /// Property: normalized degrees do not depend on the input unit.
        #[test]
        fn prop_normalization_ignores_target(
            value in -1.0e4f64..1.0e4,
            a in unit_strategy(),
            b in unit_strategy(),
        ) {
            let via_a = convert(value, a, "degree").unwrap();
            let via_b = convert(value, a, b).unwrap();
            prop_assert_eq!(via_a.normalized_degrees, via_b.normalized_degrees);
        }
    }
}
