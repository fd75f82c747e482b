//! Built-in rules
//!
//! Every rule here validates a `serde_json::Value`, the shape field values
//! take once resolved out of a node tree.
//!
//! # Categories
//!
//! - **Presence**: filled-out check
//! - **Pattern**: regular expression match
//! - **Content**: email, URL, non-blank text, numeric text
//! - **Boolean**: accepted checkbox
//! - **Adapter**: arbitrary boolean predicates

pub mod boolean;
pub mod content;
pub mod pattern;
pub mod predicate;
pub mod presence;

pub use boolean::{Accepted, accepted};
pub use content::{Email, NonBlank, Numeric, Url, email, non_blank, numeric, url};
pub use pattern::{Matches, matches};
pub use predicate::{Predicate, predicate};
pub use presence::{Filled, filled};
