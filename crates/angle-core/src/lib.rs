//! Angle Core - Angle unit conversion and trigonometry
//!
//! This crate provides the numeric engine behind the angle converter:
//! a fixed catalog of angle units, conversion between any two of them through
//! degrees, trigonometric ratios with explicit undefined values at poles, and
//! display formatting for both.
//!
//! Everything here is synchronous and free of shared mutable state. The unit
//! catalog is a `static` table, and every operation is a pure function of its
//! arguments, so callers on any thread can use it without coordination.
//!
//! # Example
//!
//! ```ignore
//! use angle_core::{convert, evaluate_trig, format_number};
//!
//! let result = convert(180.0, "degree", "radian")?;
//! assert_eq!(result.to.formatted, "3.141593");
//!
//! let trig = evaluate_trig(90.0);
//! assert_eq!(trig.tan.formatted, "undefined");
//! ```

pub mod catalog;
pub mod config;
pub mod convert;
pub mod error;
pub mod format;
pub mod input;
pub mod report;
pub mod session;
pub mod trig;

pub use catalog::{
    all as list_units, group_by_category as group_units_by_category, lookup, Category,
    UnitDefinition,
};
pub use config::{ConverterDefaults, ToolInfo, TOOL_INFO};
pub use convert::{
    common_conversions, convert, normalize_degrees, CommonConversion, ConversionResult,
    TargetSnapshot, UnitSnapshot,
};
pub use error::AngleError;
pub use format::{format_number, format_trig, format_trig_number};
pub use input::parse_input;
pub use report::{convert_input, evaluate, ConversionReport};
pub use session::ConverterSession;
pub use trig::{evaluate_trig, TrigEntry, TrigRatio, TrigResult, TrigValue};
