//! The fixed catalog of supported angle units.
//!
//! Every unit stores a single scale factor to degrees, the base unit through
//! which all conversions are routed. Angles are a pure ratio scale, so there
//! are no offsets: `degrees = value * to_degrees_factor`.
//!
//! The catalog is a `static` table. It is never mutated, so concurrent reads
//! need no synchronization.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use serde::Serialize;

use crate::error::AngleError;

/// Presentation group for a unit.
///
/// Variants are declared in the order their first unit appears in the
/// catalog, so the derived `Ord` matches catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    Primary,
    Subdivisions,
    Military,
    Navigation,
    #[serde(rename = "Circle Fractions")]
    CircleFractions,
    Binary,
    #[serde(rename = "Time-based")]
    TimeBased,
}

impl Category {
    /// Human-readable label for the group.
    pub fn label(self) -> &'static str {
        match self {
            Category::Primary => "Primary",
            Category::Subdivisions => "Subdivisions",
            Category::Military => "Military",
            Category::Navigation => "Navigation",
            Category::CircleFractions => "Circle Fractions",
            Category::Binary => "Binary",
            Category::TimeBased => "Time-based",
        }
    }
}

/// Definition of a single angle unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitDefinition {
    /// Unique catalog key (e.g. "degree").
    pub key: &'static str,
    /// Display name (e.g. "Gradian (Gon)").
    pub display_name: &'static str,
    /// Short display symbol.
    pub symbol: &'static str,
    /// Degrees per one of this unit. Always strictly positive.
    pub to_degrees_factor: f64,
    pub category: Category,
    /// Included in the common conversions summary.
    pub is_common: bool,
}

impl UnitDefinition {
    const fn new(
        key: &'static str,
        display_name: &'static str,
        symbol: &'static str,
        to_degrees_factor: f64,
        category: Category,
        is_common: bool,
    ) -> Self {
        Self {
            key,
            display_name,
            symbol,
            to_degrees_factor,
            category,
            is_common,
        }
    }

    /// Express `value` of this unit in degrees.
    #[inline]
    pub fn to_degrees(&self, value: f64) -> f64 {
        value * self.to_degrees_factor
    }

    /// Express `degrees` in this unit.
    #[inline]
    pub fn from_degrees(&self, degrees: f64) -> f64 {
        degrees / self.to_degrees_factor
    }
}

/// Key of the base unit.
pub const BASE_UNIT: &str = "degree";

/// The catalog, in display order. Factors are exact: angular subdivisions
/// are fractions of a degree and the military, binary and circle-fraction
/// units are 360 divided by their count per turn.
static UNITS: [UnitDefinition; 19] = [
    UnitDefinition::new("degree", "Degree", "°", 1.0, Category::Primary, true),
    UnitDefinition::new("radian", "Radian", "rad", 180.0 / PI, Category::Primary, true),
    UnitDefinition::new("gradian", "Gradian (Gon)", "grad", 0.9, Category::Primary, true),
    UnitDefinition::new("turn", "Turn (Revolution)", "tr", 360.0, Category::Primary, true),
    UnitDefinition::new("arcminute", "Arcminute", "′", 1.0 / 60.0, Category::Subdivisions, true),
    UnitDefinition::new("arcsecond", "Arcsecond", "″", 1.0 / 3_600.0, Category::Subdivisions, true),
    UnitDefinition::new(
        "milliarcsecond",
        "Milliarcsecond",
        "mas",
        1.0 / 3_600_000.0,
        Category::Subdivisions,
        false,
    ),
    UnitDefinition::new(
        "microarcsecond",
        "Microarcsecond",
        "µas",
        1.0 / 3_600_000_000.0,
        Category::Subdivisions,
        false,
    ),
    UnitDefinition::new("mil_nato", "Mil (NATO)", "mil", 360.0 / 6_400.0, Category::Military, false),
    UnitDefinition::new("mil_soviet", "Mil (Soviet)", "mil", 360.0 / 6_000.0, Category::Military, false),
    UnitDefinition::new(
        "mil_swedish",
        "Streck (Swedish)",
        "streck",
        360.0 / 6_300.0,
        Category::Military,
        false,
    ),
    UnitDefinition::new("point", "Point (Navigation)", "point", 11.25, Category::Navigation, false),
    UnitDefinition::new("quadrant", "Quadrant", "quad", 90.0, Category::CircleFractions, false),
    UnitDefinition::new("sextant", "Sextant", "sxt", 60.0, Category::CircleFractions, false),
    UnitDefinition::new("octant", "Octant", "oct", 45.0, Category::CircleFractions, false),
    UnitDefinition::new("sign", "Sign (Zodiac)", "sign", 30.0, Category::CircleFractions, false),
    UnitDefinition::new(
        "binary_degree",
        "Binary Degree",
        "brad",
        360.0 / 256.0,
        Category::Binary,
        false,
    ),
    UnitDefinition::new("minute_of_time", "Minute of Time", "mot", 0.25, Category::TimeBased, false),
    UnitDefinition::new("hour_angle", "Hour Angle", "HA", 15.0, Category::TimeBased, false),
];

/// Look up a unit by its key.
///
/// # Errors
///
/// Returns [`AngleError::UnknownUnit`] if `key` is not in the catalog.
pub fn lookup(key: &str) -> Result<&'static UnitDefinition, AngleError> {
    UNITS
        .iter()
        .find(|unit| unit.key == key)
        .ok_or_else(|| AngleError::UnknownUnit(key.to_string()))
}

/// All units in catalog order.
pub fn all() -> &'static [UnitDefinition] {
    &UNITS
}

/// Units grouped by category. Catalog order is kept within each group, and
/// groups iterate in the order they first appear.
pub fn group_by_category() -> BTreeMap<Category, Vec<&'static UnitDefinition>> {
    let mut grouped: BTreeMap<Category, Vec<&'static UnitDefinition>> = BTreeMap::new();
    for unit in UNITS.iter() {
        grouped.entry(unit.category).or_default().push(unit);
    }
    grouped
}

/// Units flagged for the common conversions summary, in catalog order.
pub fn common_units() -> impl Iterator<Item = &'static UnitDefinition> {
    UNITS.iter().filter(|unit| unit.is_common)
}
