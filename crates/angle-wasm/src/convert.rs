//! Conversion and trigonometry WASM bindings.
//!
//! This module exposes the stateless angle-core entry points to JavaScript.
//! Structured results are returned as plain objects; see the field names on
//! the corresponding core types.
//!
//! # Example
//!
//! ```typescript
//! import { convert, evaluate_trig, units_by_category } from '@angle/wasm';
//!
//! const report = convert('180', 'degree', 'radian');
//! if (report !== null) {
//!   console.log(report.conversion.to.formatted); // "3.141593"
//!   console.log(report.trig.tan.formatted);      // "0"
//! }
//!
//! const groups = units_by_category(); // { Primary: [...], Military: [...] }
//! ```

use crate::types::{error_to_js, to_js};
use angle_core::{
    catalog, common_conversions as core_common, convert_input, evaluate,
    evaluate_trig as core_trig, format_number as core_format_number, format_trig_number,
    TOOL_INFO,
};
use wasm_bindgen::prelude::*;

/// Convert user-entered text between two units.
///
/// # Arguments
///
/// * `value_text` - The text from the input field
/// * `from_unit` - Catalog key of the source unit (e.g. "degree")
/// * `to_unit` - Catalog key of the target unit (e.g. "radian")
///
/// # Returns
///
/// A report object with `conversion`, `common` and `trig` fields, or `null`
/// when the text is blank or not a number.
///
/// # Errors
///
/// Throws if either unit key is unknown.
#[wasm_bindgen]
pub fn convert(value_text: &str, from_unit: &str, to_unit: &str) -> Result<JsValue, JsValue> {
    match convert_input(value_text, from_unit, to_unit).map_err(error_to_js)? {
        Some(report) => to_js(&report),
        None => Ok(JsValue::NULL),
    }
}

/// Convert a number between two units.
///
/// # Errors
///
/// Throws if either unit key is unknown or the value is not finite.
#[wasm_bindgen]
pub fn convert_value(value: f64, from_unit: &str, to_unit: &str) -> Result<JsValue, JsValue> {
    let report = evaluate(value, from_unit, to_unit).map_err(error_to_js)?;
    to_js(&report)
}

/// Evaluate sin, cos, tan, cot, sec and csc for an angle in degrees.
///
/// Ratios at a pole have `value` and `formatted` both set to `"undefined"`.
#[wasm_bindgen]
pub fn evaluate_trig(degrees: f64) -> Result<JsValue, JsValue> {
    to_js(&core_trig(degrees))
}

/// Express an angle in degrees in every common unit.
#[wasm_bindgen]
pub fn common_conversions(degrees: f64) -> Result<JsValue, JsValue> {
    to_js(&core_common(degrees))
}

/// Format a converted value for display.
#[wasm_bindgen]
pub fn format_number(value: f64) -> String {
    core_format_number(value)
}

/// Format a trig ratio for display.
#[wasm_bindgen]
pub fn format_trig(value: f64) -> String {
    format_trig_number(value)
}

/// All units in catalog order.
#[wasm_bindgen]
pub fn list_units() -> Result<JsValue, JsValue> {
    to_js(catalog::all())
}

/// Units grouped by category label, for building a grouped `<select>`.
#[wasm_bindgen]
pub fn units_by_category() -> Result<JsValue, JsValue> {
    to_js(&catalog::group_by_category())
}

/// Catalog keys in order, as an array of strings.
#[wasm_bindgen]
pub fn unit_keys() -> js_sys::Array {
    catalog::all()
        .iter()
        .map(|unit| JsValue::from_str(unit.key))
        .collect()
}

/// Tool metadata (slug, title, description, keywords, related tools).
#[wasm_bindgen]
pub fn tool_info() -> Result<JsValue, JsValue> {
    to_js(&TOOL_INFO)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn field(value: &JsValue, name: &str) -> JsValue {
        js_sys::Reflect::get(value, &JsValue::from_str(name)).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_convert_returns_report() {
        let report = convert("180", "degree", "radian").unwrap();
        let to = field(&field(&report, "conversion"), "to");
        assert_eq!(field(&to, "formatted").as_string().unwrap(), "3.141593");
    }

    #[wasm_bindgen_test]
    fn test_convert_blank_is_null() {
        assert!(convert("", "degree", "radian").unwrap().is_null());
        assert!(convert("abc", "degree", "radian").unwrap().is_null());
    }

    #[wasm_bindgen_test]
    fn test_convert_unknown_unit_throws() {
        let err = convert("1", "bogus_unit", "degree").unwrap_err();
        assert_eq!(err.as_string().unwrap(), "Unknown angle unit: bogus_unit");
    }

    #[wasm_bindgen_test]
    fn test_convert_value_rejects_nan() {
        assert!(convert_value(f64::NAN, "degree", "radian").is_err());
    }

    #[wasm_bindgen_test]
    fn test_trig_undefined_marker() {
        let trig = evaluate_trig(90.0).unwrap();
        let tan = field(&trig, "tan");
        assert_eq!(field(&tan, "value").as_string().unwrap(), "undefined");
    }

    #[wasm_bindgen_test]
    fn test_units_by_category_is_plain_object() {
        let groups = units_by_category().unwrap();
        let primary = field(&groups, "Primary");
        assert!(js_sys::Array::is_array(&primary));
        assert_eq!(js_sys::Array::from(&primary).length(), 4);
    }

    #[wasm_bindgen_test]
    fn test_unit_keys() {
        let keys = unit_keys();
        assert_eq!(keys.length(), 19);
        assert_eq!(keys.get(0).as_string().unwrap(), "degree");
    }

    #[wasm_bindgen_test]
    fn test_common_conversions_length() {
        let rows = common_conversions(180.0).unwrap();
        assert_eq!(js_sys::Array::from(&rows).length(), 6);
    }

    #[wasm_bindgen_test]
    fn test_tool_info_slug() {
        let info = tool_info().unwrap();
        assert_eq!(field(&info, "slug").as_string().unwrap(), "angle-converter");
    }
}
