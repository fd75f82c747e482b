//! Truthiness and pattern-subject rules for `serde_json::Value`.
//!
//! An unresolved value is `None`. It behaves exactly like `Value::Null`
//! under both helpers.

use std::borrow::Cow;

use serde_json::Value;

/// Returns `true` when the value counts as filled out.
///
/// Empty: `None`, `null`, `false`, numeric zero and `""`.
/// Filled: everything else, including whitespace-only strings, empty arrays
/// and empty objects.
///
/// # Examples
///
/// ```
/// use formgate_validator::foundation::is_filled;
/// use serde_json::json;
///
/// assert!(is_filled(Some(&json!("x"))));
/// assert!(is_filled(Some(&json!([]))));
/// assert!(!is_filled(Some(&json!(0))));
/// assert!(!is_filled(None));
/// ```
#[must_use]
pub fn is_filled(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// Text a pattern is matched against.
///
/// Strings are used as-is, numbers and booleans by their canonical text,
/// arrays and objects by their compact JSON text. `null` and unresolved
/// values match against the empty string.
#[must_use]
pub fn pattern_subject(value: Option<&Value>) -> Cow<'_, str> {
    match value {
        None | Some(Value::Null) => Cow::Borrowed(""),
        Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
        Some(Value::Bool(true)) => Cow::Borrowed("true"),
        Some(Value::Bool(false)) => Cow::Borrowed("false"),
        Some(Value::Number(n)) => Cow::Owned(n.to_string()),
        Some(other) => Cow::Owned(other.to_string()),
    }
}
