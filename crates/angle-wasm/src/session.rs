//! Stateful converter WASM bindings.
//!
//! `JsAngleConverter` backs the interactive converter form. Bind the input
//! field and the two unit selects to its setter methods; each one reconverts, so
//! `results()` always reflects the latest edit.

use crate::types::{error_to_js, to_js};
use angle_core::ConverterSession;
use wasm_bindgen::prelude::*;

/// Interactive angle converter for JavaScript.
///
/// # Example (TypeScript)
/// ```typescript
/// const converter = new JsAngleConverter(); // "180" degree -> radian
/// converter.input_value = '90';
/// converter.set_to_unit('gradian'); // throws on an unknown key
/// converter.swap_units();
///
/// const results = converter.results(); // null when the input is not a number
///
/// converter.free();
/// ```
#[wasm_bindgen]
pub struct JsAngleConverter {
    inner: ConverterSession,
}

#[wasm_bindgen]
impl JsAngleConverter {
    /// Create a converter with the default input and units, already converted.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: ConverterSession::new(),
        }
    }

    /// Get the input text
    #[wasm_bindgen(getter)]
    pub fn input_value(&self) -> String {
        self.inner.input().to_string()
    }

    /// Set the input text
    #[wasm_bindgen(setter)]
    pub fn set_input_value(&mut self, value: String) {
        self.inner.set_input(value);
    }

    /// Get the source unit key
    #[wasm_bindgen(getter)]
    pub fn from_unit(&self) -> String {
        self.inner.from_unit().to_string()
    }

    /// Select the source unit key. Throws on an unknown key.
    pub fn set_from_unit(&mut self, key: String) -> Result<(), JsValue> {
        self.inner.set_from_unit(&key).map_err(error_to_js)
    }

    /// Get the target unit key
    #[wasm_bindgen(getter)]
    pub fn to_unit(&self) -> String {
        self.inner.to_unit().to_string()
    }

    /// Select the target unit key. Throws on an unknown key.
    pub fn set_to_unit(&mut self, key: String) -> Result<(), JsValue> {
        self.inner.set_to_unit(&key).map_err(error_to_js)
    }

    /// Exchange the source and target units.
    pub fn swap_units(&mut self) {
        self.inner.swap_units();
    }

    /// Whether the current input produced a result.
    #[wasm_bindgen(getter)]
    pub fn has_result(&self) -> bool {
        self.inner.report().is_some()
    }

    /// Formatted target value, or an empty string when there is no result.
    #[wasm_bindgen(getter)]
    pub fn formatted(&self) -> String {
        self.inner
            .report()
            .map(|report| report.conversion.to.formatted.clone())
            .unwrap_or_default()
    }

    /// The full report (`conversion`, `common`, `trig`), or `null`.
    pub fn results(&self) -> Result<JsValue, JsValue> {
        match self.inner.report() {
            Some(report) => to_js(report),
            None => Ok(JsValue::NULL),
        }
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl Default for JsAngleConverter {
    fn default() -> Self {
        Self::new()
    }
}
