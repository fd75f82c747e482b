//! Prelude module for convenient imports.
//!
//! ```
//! use formgate_validator::prelude::*;
//! use serde_json::json;
//!
//! let rule = filled().and(email());
//! assert!(rule.validate(&json!("a@b.io")).is_ok());
//! ```

pub use crate::foundation::{
    Validate, ValidateExt, ValidationError, ValidationErrors, is_filled, pattern_subject,
};

pub use crate::validators::{
    Accepted, Email, Filled, Matches, NonBlank, Numeric, Predicate, Url, accepted, email, filled,
    matches, non_blank, numeric, predicate, url,
};

pub use crate::combinators::{And, and};
