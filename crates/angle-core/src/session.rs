//! Interactive converter state.
//!
//! A session holds the text the user typed and the two selected units, and
//! keeps a report current as any of them change. Every change recomputes the
//! report from scratch; the latest change wins.

use crate::catalog;
use crate::config::ConverterDefaults;
use crate::error::AngleError;
use crate::report::{convert_input, ConversionReport};

#[derive(Debug, Clone)]
pub struct ConverterSession {
    input: String,
    from_unit: &'static str,
    to_unit: &'static str,
    report: Option<ConversionReport>,
}

impl ConverterSession {
    /// Start a session from the default input and units, already converted.
    pub fn new() -> Self {
        let defaults = ConverterDefaults::default();
        let mut session = Self {
            input: defaults.input.to_string(),
            from_unit: defaults.from_unit,
            to_unit: defaults.to_unit,
            report: None,
        };
        session.refresh();
        session
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn from_unit(&self) -> &'static str {
        self.from_unit
    }

    pub fn to_unit(&self) -> &'static str {
        self.to_unit
    }

    /// The current report, or `None` if the input is blank or not a number.
    pub fn report(&self) -> Option<&ConversionReport> {
        self.report.as_ref()
    }

    /// Replace the input text and reconvert.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.refresh();
    }

    /// Select the source unit and reconvert.
    ///
    /// # Errors
    ///
    /// Returns [`AngleError::UnknownUnit`] and leaves the session unchanged if
    /// `key` is not in the catalog.
    pub fn set_from_unit(&mut self, key: &str) -> Result<(), AngleError> {
        self.from_unit = catalog::lookup(key)?.key;
        self.refresh();
        Ok(())
    }

    /// Select the target unit and reconvert.
    ///
    /// # Errors
    ///
    /// Returns [`AngleError::UnknownUnit`] and leaves the session unchanged if
    /// `key` is not in the catalog.
    pub fn set_to_unit(&mut self, key: &str) -> Result<(), AngleError> {
        self.to_unit = catalog::lookup(key)?.key;
        self.refresh();
        Ok(())
    }

    /// Exchange the source and target units and reconvert.
    pub fn swap_units(&mut self) {
        std::mem::swap(&mut self.from_unit, &mut self.to_unit);
        self.refresh();
    }

    fn refresh(&mut self) {
        // Both keys were resolved against the catalog when they were set.
        self.report = convert_input(&self.input, self.from_unit, self.to_unit)
            .ok()
            .flatten();
    }
}

impl Default for ConverterSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_new_session_is_converted() {
        let session = ConverterSession::new();
        assert_eq!(session.input(), "180");
        assert_eq!(session.from_unit(), "degree");
        assert_eq!(session.to_unit(), "radian");
        let report = session.report().unwrap();
        assert_relative_eq!(report.conversion.to.value, PI, epsilon = 1e-12);
    }

    #[test]
    fn test_set_input_reconverts() {
        let mut session = ConverterSession::new();
        session.set_input("90");
        let report = session.report().unwrap();
        assert_relative_eq!(report.conversion.to.value, PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_blank_input_clears_report() {
        let mut session = ConverterSession::new();
        session.set_input("");
        assert!(session.report().is_none());
        session.set_input("abc");
        assert!(session.report().is_none());
        session.set_input("45");
        assert!(session.report().is_some());
    }

    #[test]
    fn test_swap_units() {
        let mut session = ConverterSession::new();
        session.set_input("1");
        session.swap_units();
        assert_eq!(session.from_unit(), "radian");
        assert_eq!(session.to_unit(), "degree");
        let report = session.report().unwrap();
        assert_relative_eq!(report.conversion.to.value, 180.0 / PI, epsilon = 1e-12);
    }

    #[test]
    fn test_unknown_unit_leaves_session_unchanged() {
        let mut session = ConverterSession::new();
        let before = session.report().cloned();

        let err = session.set_from_unit("bogus_unit").unwrap_err();
        assert_eq!(err, AngleError::UnknownUnit("bogus_unit".to_string()));
        assert_eq!(session.from_unit(), "degree");
        assert_eq!(session.report().cloned(), before);

        assert!(session.set_to_unit("nope").is_err());
        assert_eq!(session.to_unit(), "radian");
    }

    #[test]
    fn test_set_units() {
        let mut session = ConverterSession::new();
        session.set_from_unit("turn").unwrap();
        session.set_to_unit("gradian").unwrap();
        session.set_input("0.25");
        let report = session.report().unwrap();
        assert_relative_eq!(report.conversion.to.value, 100.0, epsilon = 1e-12);
        assert_eq!(report.conversion.normalized_degrees, 90.0);
    }
}
