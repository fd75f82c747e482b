//! AND combinator - logical conjunction of rules
//!
//! Both rules must pass for the combined rule to succeed. The default field
//! policy is `filled().and(matches(..))`.
//!
//! # Examples
//!
//! ```
//! use formgate_validator::combinators::And;
//! use formgate_validator::foundation::Validate;
//! use formgate_validator::validators::{filled, numeric};
//! use serde_json::json;
//!
//! let rule = And::new(filled(), numeric());
//! assert!(rule.validate(&json!("12")).is_ok());
//! assert!(rule.validate(&json!("")).is_err());
//! ```

use crate::foundation::{Validate, ValidationError};

/// Combines two rules with logical AND.
///
/// The error is taken from the first failing rule; the right rule does not
/// run when the left one fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left rule.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right rule.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right rules.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

/// Creates an `And` combinator from two rules.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}
