//! Validity evaluation
//!
//! Decides pass/fail for each resolved field:
//!
//! - not required: valid, nothing else runs;
//! - custom validator present: its answer on the raw value;
//! - otherwise: the value must be filled and, when a pattern is set, match it.

use formgate_validator::foundation::{Validate, ValidateExt, ValidationError};
use formgate_validator::validators::{Matches, filled};
use serde_json::Value;

use crate::node::UNDEFINED;
use crate::resolve::ResolvedField;

/// A [`ResolvedField`] with its verdict.
#[derive(Debug, Clone)]
pub struct ValidatedField<'a> {
    /// The field as resolved.
    pub field: ResolvedField<'a>,
    /// Whether the field passes.
    pub is_valid: bool,
    /// Why the field failed. `None` when valid.
    pub error: Option<ValidationError>,
}

impl<'a> ValidatedField<'a> {
    /// The raw value the verdict was computed from.
    #[must_use]
    pub fn value(&self) -> Option<&'a Value> {
        self.field.value()
    }

    /// The attribute that holds the value.
    #[must_use]
    pub fn field_key(&self) -> &'a str {
        self.field.config.field_key
    }

    /// Whether the node asked for validation.
    #[must_use]
    pub fn requires_validation(&self) -> bool {
        self.field.config.requires_validation
    }
}

/// Computes the verdict for one field.
///
/// # Examples
///
/// ```
/// use formgate_form::{Node, collect_fields, evaluate_field, resolve_fields};
///
/// let nodes = [Node::new().required().prop("value", "")];
/// let resolved = resolve_fields(collect_fields(&nodes));
/// let verdict = evaluate_field(resolved[0]);
/// assert!(!verdict.is_valid);
/// assert_eq!(verdict.error.unwrap().code, "required");
/// ```
#[must_use]
pub fn evaluate_field(field: ResolvedField<'_>) -> ValidatedField<'_> {
    let config = &field.config;
    if !config.requires_validation {
        return ValidatedField {
            field,
            is_valid: true,
            error: None,
        };
    }

    let value = field.value();
    let outcome = match (config.validator, config.pattern) {
        (Some(validator), _) => {
            if validator.call(value) {
                Ok(())
            } else {
                Err(ValidationError::custom("Custom validation failed"))
            }
        }
        (None, Some(pattern)) => filled()
            .and(Matches::new(pattern.clone()))
            .validate(value.unwrap_or(&UNDEFINED)),
        (None, None) => filled().validate(value.unwrap_or(&UNDEFINED)),
    };

    let error = outcome
        .err()
        .map(|e| e.with_field(config.field_key.to_owned()));
    tracing::trace!(
        field_key = config.field_key,
        resolved = field.resolved_props.is_some(),
        is_valid = error.is_none(),
        "field evaluated"
    );

    ValidatedField {
        field,
        is_valid: error.is_none(),
        error,
    }
}

/// Evaluates every field, preserving order.
///
/// Works on its own list; the caller's nodes are never touched.
#[must_use]
pub fn evaluate_fields(fields: Vec<ResolvedField<'_>>) -> Vec<ValidatedField<'_>> {
    fields.into_iter().map(evaluate_field).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::collect_fields;
    use crate::node::Node;
    use crate::resolve::resolve_fields;
    use regex::Regex;
    use rstest::rstest;
    use serde_json::json;

    fn verdict(node: &Node) -> ValidatedField<'_> {
        let resolved = resolve_fields(collect_fields(std::slice::from_ref(node)));
        evaluate_field(resolved[0])
    }

    #[rstest]
    #[case(json!(""), false)]
    #[case(json!("x"), true)]
    #[case(json!(null), false)]
    #[case(json!(0), false)]
    #[case(json!(false), false)]
    #[case(json!(3), true)]
    fn required_without_pattern(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(verdict(&Node::new().required().prop("value", value)).is_valid, expected);
    }

    #[rstest]
    #[case(json!(""))]
    #[case(json!(null))]
    #[case(json!("anything"))]
    fn not_required_is_always_valid(#[case] value: Value) {
        let node = Node::new().prop("value", value).validator(|_: Option<&Value>| false);
        let field = verdict(&node);
        assert!(field.is_valid);
        assert!(field.error.is_none());
    }

    #[rstest]
    #[case("42", true)]
    #[case("abc", false)]
    #[case("", false)]
    fn pattern_enforced(#[case] value: &str, #[case] expected: bool) {
        let node = Node::new()
            .required()
            .pattern(Regex::new(r"^\d+$").unwrap())
            .prop("value", value);
        assert_eq!(verdict(&node).is_valid, expected);
    }

    #[test]
    fn custom_validator_overrides_pattern_and_emptiness() {
        let ok = |v: Option<&Value>| v == Some(&json!("ok"));
        let with_pattern = |value: &str| {
            Node::new()
                .required()
                .pattern(Regex::new(r"^\d+$").unwrap())
                .validator(ok)
                .prop("value", value)
        };
        assert!(verdict(&with_pattern("ok")).is_valid);
        let node = with_pattern("42");
        let rejected = verdict(&node);
        assert!(!rejected.is_valid);
        assert_eq!(rejected.error.unwrap().code, "custom");

        let accepts_missing = Node::new().required().validator(|v: Option<&Value>| v.is_none());
        assert!(verdict(&accepts_missing).is_valid);
    }

    #[test]
    fn unresolved_required_field_fails_without_panicking() {
        let node = Node::new().required().child(Node::new().prop("label", "x"));
        let field = verdict(&node);
        assert!(field.field.resolved_props.is_none());
        assert!(!field.is_valid);
        let error = field.error.unwrap();
        assert_eq!(error.code, "required");
        assert_eq!(error.field.as_deref(), Some("value"));
    }

    #[test]
    fn pattern_failure_names_the_pattern() {
        let node = Node::new()
            .required()
            .field_key("zip")
            .pattern(Regex::new(r"^\d{5}$").unwrap())
            .prop("zip", "12");
        let error = verdict(&node).error.unwrap();
        assert_eq!(error.code, "invalid_format");
        assert_eq!(error.param("pattern"), Some(r"^\d{5}$"));
        assert_eq!(error.field.as_deref(), Some("zip"));
    }
}
