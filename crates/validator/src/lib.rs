//! # formgate-validator
//!
//! Composable rules over `serde_json::Value` used by the formgate field
//! pipeline to decide whether a resolved field value passes.
//!
//! ## Quick Start
//!
//! ```
//! use formgate_validator::prelude::*;
//! use serde_json::json;
//!
//! let digits = filled().and(matches(r"^\d+$").unwrap());
//! assert!(digits.validate(&json!("42")).is_ok());
//! assert!(digits.validate(&json!("abc")).is_err());
//! assert!(digits.validate(&json!("")).is_err());
//! ```
//!
//! ## Built-in Rules
//!
//! - **Presence**: [`Filled`](validators::Filled) (truthiness)
//! - **Pattern**: [`Matches`](validators::Matches)
//! - **Content**: [`Email`](validators::Email), [`Url`](validators::Url),
//!   [`NonBlank`](validators::NonBlank), [`Numeric`](validators::Numeric)
//! - **Boolean**: [`Accepted`](validators::Accepted)
//! - **Adapter**: [`Predicate`](validators::Predicate) for plain closures

// ValidationError is the fundamental error type for all rules; boxing it
// would add indirection to every call.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
pub mod prelude;
pub mod validators;
