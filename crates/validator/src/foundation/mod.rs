//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the rule system:
//!
//! - **Traits**: `Validate`, `ValidateExt`
//! - **Errors**: `ValidationError`, `ValidationErrors`
//! - **Values**: truthiness and pattern-subject helpers for `serde_json::Value`
//!
//! # Examples
//!
//! ```
//! use formgate_validator::foundation::{Validate, ValidationError};
//! use serde_json::Value;
//!
//! struct NotNull;
//!
//! impl Validate for NotNull {
//!     type Input = Value;
//!
//!     fn validate(&self, input: &Value) -> Result<(), ValidationError> {
//!         if input.is_null() {
//!             Err(ValidationError::new("not_null", "Value must not be null"))
//!         } else {
//!             Ok(())
//!         }
//!     }
//! }
//!
//! assert!(NotNull.validate(&Value::Bool(false)).is_ok());
//! assert!(NotNull.validate(&Value::Null).is_err());
//! ```

pub mod error;
pub mod traits;
pub mod value;

pub use error::{ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};
pub use value::{is_filled, pattern_subject};

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A validation result that can contain multiple errors.
pub type ValidationResultMulti<T> = Result<T, ValidationErrors>;
