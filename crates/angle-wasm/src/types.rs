//! Conversions between core results and JavaScript values.
//!
//! Results are serialized with the JSON-compatible serializer so that maps
//! (such as units grouped by category) arrive as plain objects rather than
//! `Map` instances.

use angle_core::AngleError;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Serialize a core value into a plain JavaScript value.
pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Turn a core error into a thrown JavaScript string.
pub(crate) fn error_to_js(err: AngleError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
