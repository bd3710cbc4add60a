//! Generator options
//!
//! Options are plain data that can be loaded from JSON and are validated
//! before a generator accepts them.

use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::{
    constants::generator::{DEFAULT_PADDING_ROUNDS, MAX_PADDING_ROUNDS},
    error::Error,
};

/// What to do when a word's reduced score is zero
///
/// The perturbation step divides by the reduced score, so a zero score
/// cannot be perturbed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZeroScorePolicy {
    /// Keep the zero score and skip the perturbation
    #[default]
    Skip,
    /// Report [`Error::DivisionByZero`]
    Fault,
}

/// Tunable behaviour of a [`Generator`](crate::generator::Generator)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Options {
    /// Handling of zero word scores
    #[garde(skip)]
    pub zero_score: ZeroScorePolicy,

    /// Maximum number of consecutive padding rounds during which the clock
    /// does not advance
    ///
    /// A moving clock resets the count, so only a frozen clock can exhaust it.
    #[garde(range(min = 1, max = MAX_PADDING_ROUNDS))]
    pub max_padding_rounds: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            zero_score: ZeroScorePolicy::default(),
            max_padding_rounds: DEFAULT_PADDING_ROUNDS,
        }
    }
}

impl Options {
    /// Parses and validates options from a JSON document
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`] if the document is malformed or a
    /// value is out of range.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let options: Self =
            serde_json::from_str(json).map_err(|e| Error::InvalidOptions(e.to_string()))?;
        options.checked()
    }

    /// Validates the options, returning them unchanged when they are usable
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`] describing the first failed check.
    pub fn checked(self) -> Result<Self, Error> {
        self.validate()
            .map_err(|report| Error::InvalidOptions(report.to_string()))?;
        Ok(self)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_valid() {
        let options = Options::default();
        assert_eq!(options.zero_score, ZeroScorePolicy::Skip);
        assert_eq!(options.max_padding_rounds, DEFAULT_PADDING_ROUNDS);
        assert!(options.checked().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let options = Options::from_json(r#"{"zero_score": "Fault"}"#).unwrap();
        assert_eq!(options.zero_score, ZeroScorePolicy::Fault);
        assert_eq!(options.max_padding_rounds, DEFAULT_PADDING_ROUNDS);
    }

    #[test]
    fn test_from_json_empty_object() {
        assert_eq!(Options::from_json("{}").unwrap(), Options::default());
    }

    #[test]
    fn test_from_json_rejects_zero_rounds() {
        let result = Options::from_json(r#"{"max_padding_rounds": 0}"#);
        assert!(matches!(result, Err(Error::InvalidOptions(_))));
    }

    #[test]
    fn test_from_json_rejects_excessive_rounds() {
        let json = format!(r#"{{"max_padding_rounds": {}}}"#, MAX_PADDING_ROUNDS + 1);
        assert!(matches!(
            Options::from_json(&json),
            Err(Error::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            Options::from_json("not json"),
            Err(Error::InvalidOptions(_))
        ));
        assert!(matches!(
            Options::from_json(r#"{"zero_score": "Crash"}"#),
            Err(Error::InvalidOptions(_))
        ));
    }
}
