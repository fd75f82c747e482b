//! Node tree model
//!
//! A [`Node`] carries an attribute bag ([`Props`]), the validation settings
//! it declares ([`NodeConfig`]) and zero, one or many children. Nodes are
//! plain immutable inputs; the pipeline only ever borrows them.

use std::fmt;
use std::sync::Arc;

use formgate_validator::foundation::Validate;
use indexmap::IndexMap;
use regex::Regex;
use serde_json::Value;

/// Attribute bag of a node, in insertion order.
pub type Props = IndexMap<String, Value>;

/// Attribute that holds a field's value unless a node says otherwise.
pub const DEFAULT_FIELD_KEY: &str = "value";

/// Stand-in handed to rules when a field's value could not be resolved.
pub(crate) static UNDEFINED: Value = Value::Null;

// ============================================================================
// CUSTOM VALIDATOR
// ============================================================================

/// A custom check stored as node configuration.
///
/// Receives exactly the raw resolved value: `None` when no node in the
/// subtree carries the field's attribute. The closure must not panic; a
/// panic propagates out of [`validate_tree`](crate::validate_tree).
#[derive(Clone)]
pub struct FieldValidator(Arc<dyn Fn(Option<&Value>) -> bool + Send + Sync>);

impl FieldValidator {
    /// Wraps a boolean closure.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(Option<&Value>) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(check))
    }

    /// Wraps a rule. Unresolved values reach the rule as `null`.
    pub fn from_rule<V>(rule: V) -> Self
    where
        V: Validate<Input = Value> + Send + Sync + 'static,
    {
        Self::new(move |value| rule.check(value.unwrap_or(&UNDEFINED)))
    }

    /// Runs the check.
    pub fn call(&self, value: Option<&Value>) -> bool {
        (self.0)(value)
    }
}

impl fmt::Debug for FieldValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FieldValidator(<function>)")
    }
}

impl<F> From<F> for FieldValidator
where
    F: Fn(Option<&Value>) -> bool + Send + Sync + 'static,
{
    fn from(check: F) -> Self {
        Self::new(check)
    }
}

// ============================================================================
// NODE CONFIG
// ============================================================================

/// Validation settings a node declares.
///
/// | field | default |
/// |---|---|
/// | `is_required` | `false` |
/// | `reg_exp` | `None` |
/// | `field_to_be_validated` | `"value"` |
/// | `validation_function` | `None` |
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Whether the node's value is checked at all.
    pub is_required: bool,
    /// Pattern the value must match under the default policy.
    pub reg_exp: Option<Regex>,
    /// Name of the attribute holding the value.
    pub field_to_be_validated: String,
    /// Replaces the default policy when present.
    pub validation_function: Option<FieldValidator>,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            is_required: false,
            reg_exp: None,
            field_to_be_validated: DEFAULT_FIELD_KEY.to_owned(),
            validation_function: None,
        }
    }
}

// ============================================================================
// CHILDREN
// ============================================================================

/// The nested-children relation of a node.
#[derive(Debug, Clone, Default)]
pub enum Children {
    /// No children.
    #[default]
    None,
    /// A single child, not wrapped in a sequence.
    One(Box<Node>),
    /// An ordered sequence of children.
    Many(Vec<Node>),
}

impl Children {
    /// Number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::One(_) => 1,
            Self::Many(nodes) => nodes.len(),
        }
    }

    /// Whether there are no direct children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Node> for Children {
    fn from(node: Node) -> Self {
        Self::One(Box::new(node))
    }
}

impl From<Vec<Node>> for Children {
    fn from(nodes: Vec<Node>) -> Self {
        Self::Many(nodes)
    }
}

// ============================================================================
// NODE
// ============================================================================

/// An entry in the input tree: one field, or a wrapper grouping others.
///
/// # Examples
///
/// ```
/// use formgate_form::{Children, Node};
///
/// let row = Node::new()
///     .required()
///     .field_key("text")
///     .children(vec![
///         Node::new().prop("label", "Name"),
///         Node::new().prop("text", "Ada"),
///     ]);
///
/// assert!(row.config().is_required);
/// assert!(matches!(row.children_ref(), Children::Many(c) if c.len() == 2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Node {
    props: Props,
    config: NodeConfig,
    children: Children,
}

impl Node {
    /// Creates a node with no attributes, default config and no children.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a node from an existing attribute bag.
    #[must_use]
    pub fn with_props(props: Props) -> Self {
        Self {
            props,
            ..Self::default()
        }
    }

    /// Sets one attribute.
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Replaces the children with a single child.
    pub fn child(mut self, child: Node) -> Self {
        self.children = Children::One(Box::new(child));
        self
    }

    /// Replaces the children with an ordered sequence.
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children = Children::Many(children.into_iter().collect());
        self
    }

    /// Replaces the children relation as-is.
    pub fn with_children(mut self, children: impl Into<Children>) -> Self {
        self.children = children.into();
        self
    }

    /// Replaces the whole validation config.
    pub fn config_with(mut self, config: NodeConfig) -> Self {
        self.config = config;
        self
    }

    /// Marks the node as requiring validation.
    pub fn required(mut self) -> Self {
        self.config.is_required = true;
        self
    }

    /// Sets the pattern checked by the default policy.
    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.config.reg_exp = Some(pattern);
        self
    }

    /// Sets the attribute that holds the value.
    pub fn field_key(mut self, key: impl Into<String>) -> Self {
        self.config.field_to_be_validated = key.into();
        self
    }

    /// Sets a custom validator, replacing the default policy.
    pub fn validator(mut self, validator: impl Into<FieldValidator>) -> Self {
        self.config.validation_function = Some(validator.into());
        self
    }

    /// The node's own attribute bag.
    #[must_use]
    pub fn props(&self) -> &Props {
        &self.props
    }

    /// Looks up one of the node's own attributes.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    /// The node's validation config.
    #[must_use]
    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// The node's children.
    #[must_use]
    pub fn children_ref(&self) -> &Children {
        &self.children
    }
}
