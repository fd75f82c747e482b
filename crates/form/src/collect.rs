//! Field collection
//!
//! One [`FieldConfig`] per top-level node, in the same order. Nothing is
//! filtered out here: nodes that do not ask for validation still get an
//! entry so results line up with the input.

use regex::Regex;

use crate::node::{FieldValidator, Node};

/// Validation configuration read off a top-level node.
#[derive(Debug, Clone, Copy)]
pub struct FieldConfig<'a> {
    /// Copied from the node's `is_required` flag.
    pub requires_validation: bool,
    /// The node the field was collected from.
    pub source_node: &'a Node,
    /// Pattern for the default policy.
    pub pattern: Option<&'a Regex>,
    /// Attribute that holds the value.
    pub field_key: &'a str,
    /// Custom validator, replacing the default policy.
    pub validator: Option<&'a FieldValidator>,
}

impl<'a> FieldConfig<'a> {
    /// Reads the config of a single node. Never fails.
    #[must_use]
    pub fn from_node(node: &'a Node) -> Self {
        let config = node.config();
        Self {
            requires_validation: config.is_required,
            source_node: node,
            pattern: config.reg_exp.as_ref(),
            field_key: &config.field_to_be_validated,
            validator: config.validation_function.as_ref(),
        }
    }
}

/// Collects one [`FieldConfig`] per node, preserving order.
#[must_use]
pub fn collect_fields(nodes: &[Node]) -> Vec<FieldConfig<'_>> {
    let fields: Vec<_> = nodes.iter().map(FieldConfig::from_node).collect();
    tracing::trace!(
        fields = fields.len(),
        required = fields.iter().filter(|f| f.requires_validation).count(),
        "collected field configs"
    );
    fields
}
