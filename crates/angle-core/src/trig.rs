//! Trigonometric ratios of an angle in degrees.
//!
//! `tan`, `cot`, `sec` and `csc` have poles. Near odd multiples of 90° (for
//! `tan`/`sec`) or multiples of 180° (for `cot`/`csc`) floating-point `sin`
//! and `cos` return tiny residues instead of exact zeros, which would produce
//! huge but meaningless finite ratios. Any ratio whose denominator has
//! magnitude at or below [`SINGULARITY_THRESHOLD`] is reported as
//! [`TrigValue::Undefined`].

use serde::{Serialize, Serializer};

use crate::format::format_trig;

/// Denominators at or below this magnitude make a ratio undefined.
pub const SINGULARITY_THRESHOLD: f64 = 1e-10;

/// A trig ratio that may be undefined at a pole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrigValue {
    Defined(f64),
    Undefined,
}

impl TrigValue {
    /// Display text for [`TrigValue::Undefined`].
    pub const UNDEFINED_LABEL: &'static str = "undefined";

    /// `compute()` if `denominator` is clear of the singularity threshold,
    /// otherwise undefined.
    fn guarded(denominator: f64, compute: impl FnOnce() -> f64) -> Self {
        if denominator.abs() > SINGULARITY_THRESHOLD {
            TrigValue::Defined(compute())
        } else {
            TrigValue::Undefined
        }
    }

    /// The numeric value, if defined.
    pub fn value(self) -> Option<f64> {
        match self {
            TrigValue::Defined(x) => Some(x),
            TrigValue::Undefined => None,
        }
    }

    pub fn is_undefined(self) -> bool {
        matches!(self, TrigValue::Undefined)
    }
}

impl Serialize for TrigValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TrigValue::Defined(x) => serializer.serialize_f64(*x),
            TrigValue::Undefined => serializer.serialize_str(Self::UNDEFINED_LABEL),
        }
    }
}

/// The six trigonometric ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrigRatio {
    Sin,
    Cos,
    Tan,
    Cot,
    Sec,
    Csc,
}

impl TrigRatio {
    /// All ratios in display order.
    pub const ALL: [TrigRatio; 6] = [
        TrigRatio::Sin,
        TrigRatio::Cos,
        TrigRatio::Tan,
        TrigRatio::Cot,
        TrigRatio::Sec,
        TrigRatio::Csc,
    ];

    /// Full name, e.g. "Cosecant".
    pub fn name(self) -> &'static str {
        match self {
            TrigRatio::Sin => "Sine",
            TrigRatio::Cos => "Cosine",
            TrigRatio::Tan => "Tangent",
            TrigRatio::Cot => "Cotangent",
            TrigRatio::Sec => "Secant",
            TrigRatio::Csc => "Cosecant",
        }
    }

    /// Short key, e.g. "csc".
    pub fn key(self) -> &'static str {
        match self {
            TrigRatio::Sin => "sin",
            TrigRatio::Cos => "cos",
            TrigRatio::Tan => "tan",
            TrigRatio::Cot => "cot",
            TrigRatio::Sec => "sec",
            TrigRatio::Csc => "csc",
        }
    }
}

/// One evaluated ratio with its display string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrigEntry {
    pub ratio: TrigRatio,
    pub name: &'static str,
    pub value: TrigValue,
    pub formatted: String,
}

impl TrigEntry {
    fn new(ratio: TrigRatio, value: TrigValue) -> Self {
        Self {
            ratio,
            name: ratio.name(),
            value,
            formatted: format_trig(value),
        }
    }
}

/// All six ratios for one angle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrigResult {
    pub sin: TrigEntry,
    pub cos: TrigEntry,
    pub tan: TrigEntry,
    pub cot: TrigEntry,
    pub sec: TrigEntry,
    pub csc: TrigEntry,
}

impl TrigResult {
    /// Entry for a given ratio.
    pub fn get(&self, ratio: TrigRatio) -> &TrigEntry {
        match ratio {
            TrigRatio::Sin => &self.sin,
            TrigRatio::Cos => &self.cos,
            TrigRatio::Tan => &self.tan,
            TrigRatio::Cot => &self.cot,
            TrigRatio::Sec => &self.sec,
            TrigRatio::Csc => &self.csc,
        }
    }

    /// Entries in display order (sin, cos, tan, cot, sec, csc).
    pub fn entries(&self) -> impl Iterator<Item = &TrigEntry> {
        TrigRatio::ALL.into_iter().map(move |ratio| self.get(ratio))
    }
}

/// Evaluate all six ratios for an angle in degrees.
///
/// Never fails: poles are reported as [`TrigValue::Undefined`]. Non-finite
/// input propagates as `NaN` per IEEE-754.
pub fn evaluate_trig(degrees: f64) -> TrigResult {
    let radians = degrees.to_radians();
    let (sin, cos) = radians.sin_cos();

    let tan = TrigValue::guarded(cos, || radians.tan());
    let sec = TrigValue::guarded(cos, || 1.0 / cos);
    // cot is the reciprocal of tan but its pole is where sin vanishes.
    let cot = TrigValue::guarded(sin, || 1.0 / radians.tan());
    let csc = TrigValue::guarded(sin, || 1.0 / sin);

    if tan.is_undefined() || cot.is_undefined() {
        tracing::trace!(degrees, sin, cos, "angle lies on a trigonometric pole");
    }

    TrigResult {
        sin: TrigEntry::new(TrigRatio::Sin, TrigValue::Defined(sin)),
        cos: TrigEntry::new(TrigRatio::Cos, TrigValue::Defined(cos)),
        tan: TrigEntry::new(TrigRatio::Tan, tan),
        cot: TrigEntry::new(TrigRatio::Cot, cot),
        sec: TrigEntry::new(TrigRatio::Sec, sec),
        csc: TrigEntry::new(TrigRatio::Csc, csc),
    }
}
