//! Integration tests for the built-in rules through the public prelude.

use formgate_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

// ============================================================================
// DEFAULT FIELD POLICY: filled AND pattern
// ============================================================================

#[rstest]
#[case(json!("42"), true)]
#[case(json!(42), true)]
#[case(json!("abc"), false)]
#[case(json!(""), false)]
#[case(json!(0), false)]
#[case(json!(null), false)]
fn digits_policy(#[case] value: Value, #[case] expected: bool) {
    let rule = filled().and(matches(r"^\d+$").unwrap());
    assert_eq!(rule.check(&value), expected);
}

#[test]
fn empty_value_reports_required_before_pattern() {
    let rule = filled().and(matches(r"^\d+$").unwrap());
    let err = rule.validate(&json!("")).unwrap_err();
    assert_eq!(err.code, "required");
}

#[test]
fn pattern_failure_reports_invalid_format() {
    let rule = filled().and(matches(r"^\d+$").unwrap());
    let err = rule.validate(&json!("abc")).unwrap_err();
    assert_eq!(err.code, "invalid_format");
    assert_eq!(err.param("pattern"), Some(r"^\d+$"));
}

// ============================================================================
// CONTENT RULES
// ============================================================================

#[rstest]
#[case(json!("user@example.com"), true)]
#[case(json!("user.name+tag@sub.example.org"), true)]
#[case(json!("not-an-email"), false)]
#[case(json!(12), false)]
fn email_rule(#[case] value: Value, #[case] expected: bool) {
    assert_eq!(email().check(&value), expected);
}

#[test]
fn boxed_rules_share_one_input_type() {
    let rules: Vec<Box<dyn Validate<Input = Value>>> = vec![
        Box::new(filled()),
        Box::new(non_blank()),
        Box::new(numeric()),
        Box::new(predicate(|v| v.as_str() != Some("13"))),
    ];

    let failures: Vec<String> = rules
        .iter()
        .filter_map(|r| r.validate(&json!("13")).err())
        .map(|e| e.code.into_owned())
        .collect();

    assert_eq!(failures, vec!["custom".to_owned()]);
}

#[test]
fn errors_collect_in_order() {
    let value = json!("");
    let errors: ValidationErrors = [
        filled().validate(&value),
        accepted().validate(&value),
        url().validate(&value),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect();

    let codes: Vec<&str> = errors.errors().iter().map(|e| e.code.as_ref()).collect();
    assert_eq!(codes, vec!["required", "accepted", "invalid_format"]);
}
