//! Regular expression rule

use regex::Regex;
use serde_json::Value;

use crate::foundation::{Validate, ValidationError, pattern_subject};

/// Validates that a value's text matches a regular expression.
///
/// The text is taken from [`pattern_subject`], so numbers and booleans are
/// matched by their canonical form. Matching is unanchored, as with
/// [`Regex::is_match`]; anchor the pattern to require a full match.
///
/// # Examples
///
/// ```
/// use formgate_validator::validators::matches;
/// use formgate_validator::foundation::Validate;
/// use serde_json::json;
///
/// let digits = matches(r"^\d+$").unwrap();
/// assert!(digits.validate(&json!("42")).is_ok());
/// assert!(digits.validate(&json!(42)).is_ok());
/// assert!(digits.validate(&json!("abc")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Matches {
    pattern: Regex,
}

impl Matches {
    /// Wraps an already compiled pattern.
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }

    /// Compiles `pattern` and wraps it.
    pub fn parse(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Returns the wrapped pattern.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

impl From<Regex> for Matches {
    fn from(pattern: Regex) -> Self {
        Self::new(pattern)
    }
}

impl Validate for Matches {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        if self.pattern.is_match(&pattern_subject(Some(input))) {
            Ok(())
        } else {
            Err(
                ValidationError::new("invalid_format", "Value does not match the required pattern")
                    .with_param("pattern", self.pattern.as_str().to_owned()),
            )
        }
    }
}

/// Compiles a `Matches` rule.
pub fn matches(pattern: &str) -> Result<Matches, regex::Error> {
    Matches::parse(pattern)
}
