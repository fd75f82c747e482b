//! Property tests over generated node trees.

use formgate_form::{Node, validate_tree};
use proptest::prelude::*;
use serde_json::{Value, json};

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-z0-9]{0,6}".prop_map(Value::String),
    ]
}

fn arb_node() -> impl Strategy<Value = Node> {
    let leaf = (any::<bool>(), prop::option::of(arb_value())).prop_map(|(required, value)| {
        let node = if required { Node::new().required() } else { Node::new() };
        match value {
            Some(value) => node.prop("value", value),
            None => node,
        }
    });
    leaf.prop_recursive(3, 16, 4, |inner| {
        (any::<bool>(), prop::collection::vec(inner, 0..4)).prop_map(|(required, children)| {
            let node = if required { Node::new().required() } else { Node::new() };
            node.children(children)
        })
    })
}

proptest! {
    #[test]
    fn one_verdict_per_top_level_node(nodes in prop::collection::vec(arb_node(), 0..8)) {
        let result = validate_tree(&nodes);
        prop_assert_eq!(result.fields.len(), nodes.len());
        for (field, node) in result.fields.iter().zip(&nodes) {
            prop_assert!(std::ptr::eq(field.field.config.source_node, node));
        }
    }

    #[test]
    fn aggregate_is_and_of_verdicts(nodes in prop::collection::vec(arb_node(), 0..8)) {
        let result = validate_tree(&nodes);
        prop_assert_eq!(result.is_valid, result.fields.iter().all(|f| f.is_valid));
    }

    #[test]
    fn non_required_nodes_always_pass(nodes in prop::collection::vec(arb_node(), 0..8)) {
        let result = validate_tree(&nodes);
        for field in result.fields.iter().filter(|f| !f.requires_validation()) {
            prop_assert!(field.is_valid);
            prop_assert!(field.error.is_none());
        }
    }

    #[test]
    fn validation_is_repeatable(nodes in prop::collection::vec(arb_node(), 0..8)) {
        let first = validate_tree(&nodes).report();
        let second = validate_tree(&nodes).report();
        prop_assert_eq!(first, second);
    }
}
