//! Core traits for the rule system
//!
//! This module defines the fundamental traits that all rules implement.

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all rules implement.
///
/// Generic over the input type so a rule only ever sees what it was written
/// for. Rules return `Result<(), ValidationError>` for a consistent API.
///
/// # Examples
///
/// ```
/// use formgate_validator::foundation::{Validate, ValidationError};
///
/// struct ShortText {
///     max: usize,
/// }
///
/// impl Validate for ShortText {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.chars().count() <= self.max {
///             Ok(())
///         } else {
///             Err(ValidationError::new("too_long", "Text is too long"))
///         }
///     }
/// }
///
/// assert!(ShortText { max: 3 }.validate("abc").is_ok());
/// assert!(ShortText { max: 3 }.validate("abcd").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Shorthand for `self.validate(input).is_ok()`.
    fn check(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for rules.
///
/// Automatically implemented for every `Validate` type.
///
/// # Examples
///
/// ```
/// use formgate_validator::prelude::*;
/// use serde_json::json;
///
/// let rule = filled().and(numeric());
/// assert!(rule.validate(&json!("123")).is_ok());
/// assert!(rule.validate(&json!("")).is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two rules with logical AND.
    ///
    /// Both rules must pass for the combined rule to succeed.
    /// Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Err(ValidationError::new("always_fails", "Always fails"))
        }
    }

    #[test]
    fn test_validator_trait() {
        assert!(AlwaysValid.validate("test").is_ok());
        assert!(AlwaysValid.check("test"));
        assert!(!AlwaysFails.check("test"));
    }

    #[test]
    fn test_boxed_dyn_validator() {
        let rules: Vec<Box<dyn Validate<Input = str>>> =
            vec![Box::new(AlwaysValid), Box::new(AlwaysFails)];
        let passed: Vec<bool> = rules.iter().map(|r| r.check("x")).collect();
        assert_eq!(passed, vec![true, false]);
    }

    #[test]
    fn test_reference_is_validator() {
        let rule = &AlwaysFails;
        assert_eq!(rule.validate("x").unwrap_err().code, "always_fails");
    }
}
