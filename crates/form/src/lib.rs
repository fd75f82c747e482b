//! # formgate-form
//!
//! Validates a tree of input-bearing nodes before a submission proceeds.
//!
//! The pipeline runs in four synchronous stages over the top-level nodes:
//!
//! 1. [`collect_fields`] reads each node's [`NodeConfig`].
//! 2. [`resolve_fields`] descends into children to find the attribute bag
//!    holding the field's value.
//! 3. [`evaluate_fields`] applies the custom validator or the default
//!    filled-and-matches policy.
//! 4. [`aggregate`] ANDs the per-field verdicts.
//!
//! [`validate_tree`] composes all four. [`Form`] wraps it in a submission
//! gate that only calls the submit handler when the tree passes.
//!
//! ## Quick Start
//!
//! ```
//! use formgate_form::{Node, validate_tree};
//! use regex::Regex;
//!
//! let nodes = vec![
//!     Node::new().required().child(Node::new().prop("value", "42")),
//!     Node::new()
//!         .required()
//!         .pattern(Regex::new(r"^\d+$").unwrap())
//!         .prop("value", "abc"),
//!     Node::new().prop("value", ""),
//! ];
//!
//! let result = validate_tree(&nodes);
//! assert!(!result.is_valid);
//! let verdicts: Vec<bool> = result.fields.iter().map(|f| f.is_valid).collect();
//! assert_eq!(verdicts, vec![true, false, true]);
//! ```

pub mod aggregate;
pub mod collect;
pub mod document;
pub mod error;
pub mod evaluate;
pub mod form;
pub mod node;
pub mod registry;
pub mod resolve;

pub use aggregate::{FieldReport, ValidationReport, ValidationResult, aggregate};
pub use collect::{FieldConfig, collect_fields};
pub use document::{ChildrenDocument, NodeDocument, load_nodes};
pub use error::FormError;
pub use evaluate::{ValidatedField, evaluate_field, evaluate_fields};
pub use form::{Form, SubmitHandler, SubmitOutcome, Submission};
pub use node::{Children, DEFAULT_FIELD_KEY, FieldValidator, Node, NodeConfig, Props};
pub use registry::ValidatorRegistry;
pub use resolve::{ResolvedField, resolve_fields, resolve_props};

/// Runs the full pipeline over the top-level `nodes`.
///
/// Every node is represented in the result, in input order, whether or not
/// it asks for validation. An empty slice is vacuously valid.
#[tracing::instrument(level = "debug", skip_all, fields(nodes = nodes.len()))]
pub fn validate_tree(nodes: &[Node]) -> ValidationResult<'_> {
    let result = aggregate(evaluate_fields(resolve_fields(collect_fields(nodes))));
    tracing::debug!(
        is_valid = result.is_valid,
        invalid = result.invalid_count(),
        "node tree validated"
    );
    result
}
