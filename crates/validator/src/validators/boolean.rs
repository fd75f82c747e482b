//! Boolean rules

use serde_json::Value;

use crate::foundation::{Validate, ValidationError};

/// Validates that a value is exactly `true` (a ticked checkbox).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Accepted;

impl Validate for Accepted {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        if matches!(input, Value::Bool(true)) {
            Ok(())
        } else {
            Err(ValidationError::new("accepted", "Value must be accepted"))
        }
    }
}

/// Creates an `Accepted` rule.
#[must_use]
pub fn accepted() -> Accepted {
    Accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepted() {
        assert!(accepted().validate(&json!(true)).is_ok());
        assert!(accepted().validate(&json!(false)).is_err());
        assert!(accepted().validate(&json!("true")).is_err());
    }
}
