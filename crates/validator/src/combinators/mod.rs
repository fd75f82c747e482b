//! Rule combinators
//!
//! Combinators compose rules without boxing. Use them through
//! [`ValidateExt`](crate::foundation::ValidateExt) or the free functions.

pub mod and;

pub use and::{And, and};
