//! Full conversion report: the conversion itself, the common conversions
//! summary, and the trig ratios of the angle.

use serde::Serialize;

use crate::catalog;
use crate::convert::{common_conversions, convert_between, CommonConversion, ConversionResult};
use crate::error::AngleError;
use crate::input::parse_input;
use crate::trig::{evaluate_trig, TrigResult};

/// Everything displayed for one conversion request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionReport {
    pub conversion: ConversionResult,
    pub common: Vec<CommonConversion>,
    pub trig: TrigResult,
}

/// Convert `value` and derive the summary and trig ratios from the
/// un-normalized degree value.
///
/// # Errors
///
/// Same as [`convert`](crate::convert::convert), plus
/// [`AngleError::InvalidInput`] if any common conversion overflows.
pub fn evaluate(value: f64, from_key: &str, to_key: &str) -> Result<ConversionReport, AngleError> {
    let from = catalog::lookup(from_key)?;
    let to = catalog::lookup(to_key)?;
    let conversion = convert_between(value, from, to)?;
    let degrees = conversion.degrees;

    let common = common_conversions(degrees);
    if let Some(row) = common.iter().find(|row| !row.value.is_finite()) {
        return Err(AngleError::InvalidInput(format!(
            "{value:e} {} is out of range in {}",
            from.key, row.unit
        )));
    }

    Ok(ConversionReport {
        conversion,
        common,
        trig: evaluate_trig(degrees),
    })
}

/// Evaluate text typed by a user.
///
/// Unit keys are checked first and an unknown key is always an error. Blank
/// or non-numeric text produces `Ok(None)` rather than an error.
///
/// # Errors
///
/// Returns [`AngleError::UnknownUnit`] if either key is not in the catalog.
pub fn convert_input(
    text: &str,
    from_key: &str,
    to_key: &str,
) -> Result<Option<ConversionReport>, AngleError> {
    catalog::lookup(from_key)?;
    catalog::lookup(to_key)?;

    let value = match parse_input(text) {
        Ok(value) => value,
        Err(err) => {
            tracing::trace!(%err, "no result for input");
            return Ok(None);
        }
    };

    match evaluate(value, from_key, to_key) {
        Ok(report) => Ok(Some(report)),
        Err(err) if err.is_invalid_input() => {
            tracing::trace!(%err, "no result for input");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
