//! Angle WASM - WebAssembly bindings for the angle converter
//!
//! This crate exposes the angle-core engine to JavaScript/TypeScript
//! applications.
//!
//! # Module Structure
//!
//! - `convert` - Stateless conversion, trigonometry, formatting and catalog queries
//! - `session` - Stateful converter backing the interactive form
//! - `types` - Serialization helpers between core results and JS values
//!
//! # Usage
//!
//! ```typescript
//! import init, { convert, JsAngleConverter } from '@angle/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const report = convert('1', 'turn', 'degree');
//! console.log(report.conversion.to.formatted); // "360.000000"
//! ```

use wasm_bindgen::prelude::*;

mod convert;
mod session;
mod types;

// Re-export public types
pub use convert::{
    common_conversions, convert, convert_value, evaluate_trig, format_number, format_trig,
    list_units, tool_info, unit_keys, units_by_category,
};
pub use session::JsAngleConverter;

/// Initialize the WASM module (called automatically on load).
///
/// Installs a panic hook and routes `tracing` events to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "angle-wasm ready");
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
