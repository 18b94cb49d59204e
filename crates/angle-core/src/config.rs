//! Static configuration: tool metadata and converter defaults.

use serde::Serialize;

/// Descriptive metadata for the angle converter tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolInfo {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    /// Slugs of related converter tools.
    pub related_tools: &'static [&'static str],
}

pub const TOOL_INFO: ToolInfo = ToolInfo {
    slug: "angle-converter",
    title: "Angle Converter - Convert Degrees, Radians, Gradians & More",
    description: "Convert between all angle units including degrees, radians, gradians, \
                  turns, arcminutes, and arcseconds. Perfect for mathematics, engineering, \
                  navigation, astronomy, and trigonometry calculations.",
    keywords: &[
        "angle converter",
        "degrees to radians",
        "radians to degrees",
        "gradian converter",
        "angle conversion",
        "trigonometry",
        "navigation angles",
    ],
    related_tools: &[
        "speed-converter",
        "pressure-converter",
        "digital-storage-converter",
    ],
};

/// Initial state of a converter session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConverterDefaults {
    pub input: &'static str,
    pub from_unit: &'static str,
    pub to_unit: &'static str,
}

impl Default for ConverterDefaults {
    fn default() -> Self {
        Self {
            input: "180",
            from_unit: "degree",
            to_unit: "radian",
        }
    }
}
