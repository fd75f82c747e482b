//! Submission gate
//!
//! [`Form`] owns the top-level nodes and a submit handler. Each call to
//! [`Form::validate`] runs the pipeline once and decides whether the
//! handler fires:
//!
//! | `should_validate` | tree valid | handler | outcome |
//! |---|---|---|---|
//! | `false` | any | called | [`SubmitOutcome::SubmittedUnchecked`] |
//! | `true` | yes | called | [`SubmitOutcome::Submitted`] |
//! | `true` | no | skipped | [`SubmitOutcome::Blocked`] |
//!
//! The per-field list comes back either way so invalid nodes can be
//! highlighted.

use std::fmt;

use serde::Serialize;

use crate::aggregate::ValidationResult;
use crate::evaluate::ValidatedField;
use crate::node::Node;
use crate::validate_tree;

// ============================================================================
// SUBMIT HANDLER
// ============================================================================

/// Callback fired when a submission goes through.
///
/// The default handler does nothing but log a warning, so a form without
/// an integrator-supplied callback still works.
#[derive(Default)]
pub struct SubmitHandler(Option<Box<dyn FnMut() + Send>>);

impl SubmitHandler {
    /// Wraps a callback.
    pub fn new<F>(submit: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        Self(Some(Box::new(submit)))
    }

    /// Whether an integrator-supplied callback is present.
    #[must_use]
    pub fn is_defined(&self) -> bool {
        self.0.is_some()
    }

    fn call(&mut self) {
        match &mut self.0 {
            Some(submit) => submit(),
            None => tracing::warn!("submit handler is not defined"),
        }
    }
}

impl fmt::Debug for SubmitHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SubmitHandler")
            .field(&if self.is_defined() { "<function>" } else { "<noop>" })
            .finish()
    }
}

// ============================================================================
// SUBMISSION
// ============================================================================

/// What the gate did with a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Validation passed and the handler ran.
    Submitted,
    /// Validation was switched off; the handler ran regardless.
    SubmittedUnchecked,
    /// Validation failed; the handler did not run.
    Blocked,
}

impl SubmitOutcome {
    /// Whether the handler ran.
    #[must_use]
    pub fn is_submitted(self) -> bool {
        !matches!(self, Self::Blocked)
    }
}

/// Result of one [`Form::validate`] call.
#[derive(Debug, Clone)]
pub struct Submission<'a> {
    pub outcome: SubmitOutcome,
    pub result: ValidationResult<'a>,
}

impl<'a> Submission<'a> {
    /// Per-field verdicts, in node order.
    #[must_use]
    pub fn fields(&self) -> &[ValidatedField<'a>] {
        &self.result.fields
    }

    /// Whether the handler ran.
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.outcome.is_submitted()
    }
}

// ============================================================================
// FORM
// ============================================================================

/// Top-level nodes plus the policy for submitting them.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// use formgate_form::{Form, Node, SubmitOutcome};
///
/// let sent = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&sent);
///
/// let mut form = Form::new(vec![Node::new().required().prop("value", "")])
///     .should_validate(true)
///     .on_submit(move || {
///         counter.fetch_add(1, Ordering::SeqCst);
///     });
///
/// let submission = form.validate();
/// assert_eq!(submission.outcome, SubmitOutcome::Blocked);
/// assert!(!submission.fields()[0].is_valid);
/// assert_eq!(sent.load(Ordering::SeqCst), 0);
/// ```
#[derive(Debug, Default)]
pub struct Form {
    nodes: Vec<Node>,
    should_validate: bool,
    submit: SubmitHandler,
}

impl Form {
    /// Creates a form over `nodes` with validation off and the default
    /// handler.
    #[must_use]
    pub fn new(nodes: Vec<Node>) -> Self {
        Self {
            nodes,
            ..Self::default()
        }
    }

    /// Switches validation on or off.
    pub fn should_validate(mut self, should_validate: bool) -> Self {
        self.should_validate = should_validate;
        self
    }

    /// Sets the submit callback.
    pub fn on_submit<F>(mut self, submit: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.submit = SubmitHandler::new(submit);
        self
    }

    /// The managed nodes.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Mutable access to the managed nodes, e.g. to update values between
    /// attempts.
    pub fn nodes_mut(&mut self) -> &mut Vec<Node> {
        &mut self.nodes
    }

    /// Whether validation is switched on.
    #[must_use]
    pub fn validates(&self) -> bool {
        self.should_validate
    }

    /// Validates without submitting.
    #[must_use]
    pub fn check(&self) -> ValidationResult<'_> {
        validate_tree(&self.nodes)
    }

    /// Runs one submission attempt.
    ///
    /// The tree is validated every time, even with validation switched off,
    /// so the returned fields always reflect the current values.
    pub fn validate(&mut self) -> Submission<'_> {
        let Self {
            nodes,
            should_validate,
            submit,
        } = self;

        let result = validate_tree(nodes);

        let outcome = if !*should_validate {
            tracing::debug!("validation switched off, submitting");
            submit.call();
            SubmitOutcome::SubmittedUnchecked
        } else if result.is_valid {
            tracing::debug!("form is valid, submitting");
            submit.call();
            SubmitOutcome::Submitted
        } else {
            tracing::debug!(invalid = ?result.invalid_indices(), "form is invalid, submission blocked");
            SubmitOutcome::Blocked
        };

        Submission { outcome, result }
    }
}
