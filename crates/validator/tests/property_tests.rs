//! Property-based tests for formgate-validator.

use formgate_validator::prelude::*;
use proptest::prelude::*;
use serde_json::{Value, json};

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        ".{0,12}".prop_map(Value::String),
    ]
}

proptest! {
    #[test]
    fn filled_agrees_with_truthiness(v in scalar()) {
        prop_assert_eq!(filled().check(&v), is_filled(Some(&v)));
    }

    #[test]
    fn and_fails_iff_either_fails(v in scalar()) {
        let a = filled();
        let b = matches(r"^\d+$").unwrap();
        let combined = a.and(b.clone());
        prop_assert_eq!(combined.check(&v), a.check(&v) && b.check(&v));
    }

    #[test]
    fn rules_are_idempotent(v in scalar()) {
        let rule = filled().and(non_blank());
        prop_assert_eq!(rule.check(&v), rule.check(&v));
    }

    #[test]
    fn digit_strings_match_digit_pattern(s in "[0-9]{1,10}") {
        let rule = filled().and(matches(r"^\d+$").unwrap());
        prop_assert!(rule.check(&Value::String(s)));
    }
}
