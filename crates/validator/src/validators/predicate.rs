//! Closure adapter
//!
//! Lifts a plain `Fn(&Value) -> bool` into a rule so it composes with the
//! built-ins.

use std::fmt;

use serde_json::Value;

use crate::foundation::{Validate, ValidationError};

/// A rule backed by a boolean closure.
///
/// # Examples
///
/// ```
/// use formgate_validator::validators::predicate;
/// use formgate_validator::foundation::Validate;
/// use serde_json::json;
///
/// let is_ok = predicate(|v| v == "ok");
/// assert!(is_ok.validate(&json!("ok")).is_ok());
/// assert_eq!(is_ok.validate(&json!("no")).unwrap_err().code, "custom");
/// ```
#[derive(Clone, Copy)]
pub struct Predicate<F> {
    check: F,
}

impl<F> Predicate<F>
where
    F: Fn(&Value) -> bool,
{
    /// Wraps `check`.
    pub fn new(check: F) -> Self {
        Self { check }
    }
}

impl<F> fmt::Debug for Predicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("check", &"<function>")
            .finish()
    }
}

impl<F> Validate for Predicate<F>
where
    F: Fn(&Value) -> bool,
{
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        if (self.check)(input) {
            Ok(())
        } else {
            Err(ValidationError::custom("Custom validation failed"))
        }
    }
}

/// Creates a `Predicate` rule.
pub fn predicate<F>(check: F) -> Predicate<F>
where
    F: Fn(&Value) -> bool,
{
    Predicate::new(check)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::filled;
    use serde_json::json;

    #[test]
    fn test_predicate() {
        let even = predicate(|v| v.as_i64().is_some_and(|n| n % 2 == 0));
        assert!(even.validate(&json!(4)).is_ok());
        assert!(even.validate(&json!(3)).is_err());
    }

    #[test]
    fn test_predicate_composes() {
        let rule = filled().and(predicate(|v| v.as_str().is_some_and(|s| s.len() < 4)));
        assert!(rule.validate(&json!("abc")).is_ok());
        assert_eq!(rule.validate(&json!("")).unwrap_err().code, "required");
        assert_eq!(rule.validate(&json!("abcd")).unwrap_err().code, "custom");
    }
}
