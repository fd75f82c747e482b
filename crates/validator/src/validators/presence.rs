//! Presence rule

use serde_json::Value;

use crate::foundation::{Validate, ValidationError, is_filled};

/// Validates that a value is filled out.
///
/// Follows [`is_filled`]: `null`, `false`, zero and `""` are empty.
///
/// # Examples
///
/// ```
/// use formgate_validator::validators::filled;
/// use formgate_validator::foundation::Validate;
/// use serde_json::json;
///
/// assert!(filled().validate(&json!("x")).is_ok());
/// assert!(filled().validate(&json!("")).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Filled;

impl Validate for Filled {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        if is_filled(Some(input)) {
            Ok(())
        } else {
            Err(ValidationError::new("required", "This field is required"))
        }
    }
}

/// Creates a `Filled` rule.
#[must_use]
pub fn filled() -> Filled {
    Filled
}
