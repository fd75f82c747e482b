//! JSON document format for node trees
//!
//! Lets callers outside Rust describe a tree:
//!
//! ```json
//! {
//!   "nodes": [
//!     { "isRequired": true, "regExp": "^\\d+$",
//!       "children": [ { "props": { "label": "Age" } },
//!                     { "props": { "value": "42" } } ] }
//!   ]
//! }
//! ```
//!
//! Every key is optional and defaults as in [`NodeConfig`]. `children` may be
//! absent, `null`, one node object or an array of nodes. Patterns compile and
//! validator names resolve at load time, so a loaded tree cannot fail later.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FormError;
use crate::node::{Children, DEFAULT_FIELD_KEY, Node, NodeConfig, Props};
use crate::registry::ValidatorRegistry;

/// One node as it appears in a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NodeDocument {
    #[serde(default)]
    pub props: Props,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reg_exp: Option<String>,
    #[serde(default = "default_field_key")]
    pub field_to_be_validated: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_function: Option<String>,
    #[serde(default)]
    pub children: ChildrenDocument,
}

/// The `children` entry of a [`NodeDocument`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChildrenDocument {
    #[default]
    None,
    Many(Vec<NodeDocument>),
    One(Box<NodeDocument>),
}

fn default_field_key() -> String {
    DEFAULT_FIELD_KEY.to_owned()
}

impl Default for NodeDocument {
    fn default() -> Self {
        Self {
            props: Props::new(),
            is_required: false,
            reg_exp: None,
            field_to_be_validated: default_field_key(),
            validation_function: None,
            children: ChildrenDocument::None,
        }
    }
}

impl NodeDocument {
    /// Builds the node tree, compiling patterns and looking up validators.
    pub fn into_node(self, registry: &ValidatorRegistry) -> Result<Node, FormError> {
        self.build(registry, "node")
    }

    fn build(self, registry: &ValidatorRegistry, path: &str) -> Result<Node, FormError> {
        let reg_exp = self
            .reg_exp
            .map(|pattern| {
                Regex::new(&pattern).map_err(|source| FormError::InvalidPattern {
                    path: path.to_owned(),
                    pattern,
                    source,
                })
            })
            .transpose()?;

        let validation_function = self
            .validation_function
            .map(|name| {
                registry
                    .get(&name)
                    .cloned()
                    .ok_or_else(|| FormError::UnknownValidator {
                        path: path.to_owned(),
                        name,
                    })
            })
            .transpose()?;

        let children = match self.children {
            ChildrenDocument::None => Children::None,
            ChildrenDocument::One(child) => {
                Children::One(Box::new(child.build(registry, &format!("{path}.children"))?))
            }
            ChildrenDocument::Many(children) => Children::Many(
                children
                    .into_iter()
                    .enumerate()
                    .map(|(i, child)| child.build(registry, &format!("{path}.children[{i}]")))
                    .collect::<Result<_, _>>()?,
            ),
        };

        Ok(Node::with_props(self.props)
            .config_with(NodeConfig {
                is_required: self.is_required,
                reg_exp,
                field_to_be_validated: self.field_to_be_validated,
                validation_function,
            })
            .with_children(children))
    }
}

/// Parses a document and builds its top-level nodes.
///
/// Accepts either a bare array of nodes or an object with a `nodes` array.
///
/// # Examples
///
/// ```
/// use formgate_form::{ValidatorRegistry, load_nodes, validate_tree};
///
/// let nodes = load_nodes(
///     r#"[{"isRequired": true, "validationFunction": "email",
///          "children": {"props": {"value": "ada@example.com"}}}]"#,
///     &ValidatorRegistry::with_builtins(),
/// )
/// .unwrap();
/// assert!(validate_tree(&nodes).is_valid);
/// ```
pub fn load_nodes(json: &str, registry: &ValidatorRegistry) -> Result<Vec<Node>, FormError> {
    let documents: Vec<NodeDocument> = match serde_json::from_str::<Value>(json)? {
        Value::Object(mut map) if map.contains_key("nodes") => {
            serde_json::from_value(map.remove("nodes").unwrap_or(Value::Null))?
        }
        other => serde_json::from_value(other)?,
    };

    let nodes = documents
        .into_iter()
        .enumerate()
        .map(|(i, doc)| doc.build(registry, &format!("nodes[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(nodes = nodes.len(), "loaded node document");
    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_keys_take_defaults() {
        let doc: NodeDocument = serde_json::from_value(json!({})).unwrap();
        assert_eq!(doc, NodeDocument::default());
    }

    #[test]
    fn children_shapes_deserialize() {
        let none: NodeDocument = serde_json::from_value(json!({"children": null})).unwrap();
        assert_eq!(none.children, ChildrenDocument::None);

        let one: NodeDocument = serde_json::from_value(json!({"children": {}})).unwrap();
        assert!(matches!(one.children, ChildrenDocument::One(_)));

        let many: NodeDocument = serde_json::from_value(json!({"children": [{}, {}]})).unwrap();
        assert!(matches!(many.children, ChildrenDocument::Many(ref c) if c.len() == 2));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(serde_json::from_value::<NodeDocument>(json!({"required": true})).is_err());
    }

    #[test]
    fn into_node_carries_config() {
        let doc: NodeDocument = serde_json::from_value(json!({
            "props": {"text": "hi"},
            "isRequired": true,
            "regExp": "^h",
            "fieldToBeValidated": "text",
            "validationFunction": "non_blank"
        }))
        .unwrap();
        let node = doc.into_node(&ValidatorRegistry::with_builtins()).unwrap();
        let config = node.config();
        assert!(config.is_required);
        assert_eq!(config.reg_exp.as_ref().map(Regex::as_str), Some("^h"));
        assert_eq!(config.field_to_be_validated, "text");
        assert!(config.validation_function.is_some());
        assert_eq!(node.get("text"), Some(&json!("hi")));
    }

    #[test]
    fn errors_carry_the_path() {
        let registry = ValidatorRegistry::new();
        let err = load_nodes(r#"[{}, {"children": [{}, {"regExp": "("}]}]"#, &registry).unwrap_err();
        assert_eq!(err.path(), Some("nodes[1].children[1]"));

        let err = load_nodes(r#"{"nodes": [{"validationFunction": "zip"}]}"#, &registry).unwrap_err();
        assert!(matches!(err, FormError::UnknownValidator { ref name, .. } if name == "zip"));
    }

    #[test]
    fn syntax_errors_are_parse_errors() {
        let err = load_nodes("[{", &ValidatorRegistry::new()).unwrap_err();
        assert!(matches!(err, FormError::Parse(_)));
    }
}
