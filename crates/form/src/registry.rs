//! Named custom validators
//!
//! Documents cannot hold closures, so a `validationFunction` entry names a
//! validator registered here.

use std::collections::HashMap;

use formgate_validator::validators::{accepted, email, non_blank, numeric, url};

use crate::node::FieldValidator;

/// Name → validator table consulted when loading documents.
#[derive(Debug, Clone, Default)]
pub struct ValidatorRegistry {
    entries: HashMap<String, FieldValidator>,
}

impl ValidatorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding `email`, `url`, `non_blank`, `numeric`
    /// and `accepted`.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("email", FieldValidator::from_rule(email()));
        registry.register("url", FieldValidator::from_rule(url()));
        registry.register("non_blank", FieldValidator::from_rule(non_blank()));
        registry.register("numeric", FieldValidator::from_rule(numeric()));
        registry.register("accepted", FieldValidator::from_rule(accepted()));
        registry
    }

    /// Registers `validator` under `name`, returning any validator it
    /// replaces.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        validator: impl Into<FieldValidator>,
    ) -> Option<FieldValidator> {
        self.entries.insert(name.into(), validator.into())
    }

    /// Looks up a validator by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValidator> {
        self.entries.get(name)
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
