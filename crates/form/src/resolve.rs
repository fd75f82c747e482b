//! Value resolution
//!
//! Finds the attribute bag that carries a field's value. The search is
//! depth-first and checks a node's own attributes before its children.
//! When several siblings in a sequence resolve, the last one in document
//! order wins.

use serde_json::Value;

use crate::collect::FieldConfig;
use crate::node::{Children, Node, Props};

/// A [`FieldConfig`] together with the attribute bag holding its value.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedField<'a> {
    /// The collected configuration.
    pub config: FieldConfig<'a>,
    /// Attributes of the node (self or descendant) that carries the field
    /// key, or `None` when no node in the subtree does.
    pub resolved_props: Option<&'a Props>,
}

impl<'a> ResolvedField<'a> {
    /// The raw value under the field key. `None` when unresolved.
    #[must_use]
    pub fn value(&self) -> Option<&'a Value> {
        self.resolved_props
            .and_then(|props| props.get(self.config.field_key))
    }
}

/// Resolves the attribute bag holding `key` in the subtree rooted at `node`.
///
/// - The node's own attributes win if they contain `key`, even when the
///   value there is `null`.
/// - A single child is searched directly.
/// - Every child of a sequence is searched; the last one that resolves wins.
/// - Anything else, including an empty sequence, yields `None`.
#[must_use]
pub fn resolve_props<'a>(node: &'a Node, key: &str) -> Option<&'a Props> {
    if node.props().contains_key(key) {
        return Some(node.props());
    }

    match node.children_ref() {
        Children::None => None,
        Children::One(child) => resolve_props(child, key),
        Children::Many(children) => children
            .iter()
            .fold(None, |found, child| resolve_props(child, key).or(found)),
    }
}

/// Resolves every collected field, preserving order.
#[must_use]
pub fn resolve_fields(fields: Vec<FieldConfig<'_>>) -> Vec<ResolvedField<'_>> {
    fields
        .into_iter()
        .map(|config| {
            let resolved_props = resolve_props(config.source_node, config.field_key);
            if resolved_props.is_none() {
                tracing::trace!(field_key = config.field_key, "field value not found in subtree");
            }
            ResolvedField {
                config,
                resolved_props,
            }
        })
        .collect()
}
