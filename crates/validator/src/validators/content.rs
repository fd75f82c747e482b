//! Content rules
//!
//! Rules for common kinds of text input. Each rule reads the value through
//! [`pattern_subject`], so a JSON number `42` is checked as the text `"42"`.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::foundation::{Validate, ValidationError, pattern_subject};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());

// ============================================================================
// EMAIL
// ============================================================================

/// Validates email format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Email;

impl Validate for Email {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        if EMAIL_REGEX.is_match(&pattern_subject(Some(input))) {
            Ok(())
        } else {
            Err(ValidationError::new("invalid_format", "Invalid email address")
                .with_param("expected", "email"))
        }
    }
}

/// Creates an `Email` rule.
#[must_use]
pub fn email() -> Email {
    Email
}

// ============================================================================
// URL
// ============================================================================

/// Validates http(s) URL format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Url;

impl Validate for Url {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        if URL_REGEX.is_match(&pattern_subject(Some(input))) {
            Ok(())
        } else {
            Err(ValidationError::new("invalid_format", "Invalid URL").with_param("expected", "url"))
        }
    }
}

/// Creates a `Url` rule.
#[must_use]
pub fn url() -> Url {
    Url
}

// ============================================================================
// NON-BLANK
// ============================================================================

/// Validates that the text contains something besides whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NonBlank;

impl Validate for NonBlank {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        if pattern_subject(Some(input)).trim().is_empty() {
            Err(ValidationError::new("non_blank", "Value must not be blank"))
        } else {
            Ok(())
        }
    }
}

/// Creates a `NonBlank` rule.
#[must_use]
pub fn non_blank() -> NonBlank {
    NonBlank
}

// ============================================================================
// NUMERIC
// ============================================================================

/// Validates that a value is a JSON number or non-empty numeric text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Numeric;

impl Validate for Numeric {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        let ok = match input {
            Value::Number(_) => true,
            Value::String(s) => !s.is_empty() && s.chars().all(char::is_numeric),
            _ => false,
        };
        if ok {
            Ok(())
        } else {
            Err(ValidationError::new("numeric", "Value must contain only numbers"))
        }
    }
}

/// Creates a `Numeric` rule.
#[must_use]
pub fn numeric() -> Numeric {
    Numeric
}

// ============================================================================
// TESTS
// ============================================================================
