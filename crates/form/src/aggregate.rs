//! Aggregation
//!
//! Reduces per-field verdicts to one boolean and keeps the full, ordered
//! field list so callers can map verdicts back onto their nodes.

use formgate_validator::foundation::{ValidationError, ValidationErrors};
use serde::Serialize;
use serde_json::Value;

use crate::evaluate::ValidatedField;

/// Outcome of one validation pass.
#[derive(Debug, Clone)]
pub struct ValidationResult<'a> {
    /// `true` iff every field is valid. Vacuously `true` for no fields.
    pub is_valid: bool,
    /// One entry per top-level node, in input order.
    pub fields: Vec<ValidatedField<'a>>,
}

impl<'a> ValidationResult<'a> {
    /// Number of fields that failed.
    #[must_use]
    pub fn invalid_count(&self) -> usize {
        self.fields.iter().filter(|f| !f.is_valid).count()
    }

    /// Failing fields with their position among the top-level nodes.
    pub fn invalid_fields(&self) -> impl Iterator<Item = (usize, &ValidatedField<'a>)> {
        self.fields.iter().enumerate().filter(|(_, f)| !f.is_valid)
    }

    /// Positions of the failing fields.
    #[must_use]
    pub fn invalid_indices(&self) -> Vec<usize> {
        self.invalid_fields().map(|(i, _)| i).collect()
    }

    /// All failures, with field paths of the form `[index].key`.
    #[must_use]
    pub fn errors(&self) -> ValidationErrors {
        self.invalid_fields()
            .filter_map(|(i, f)| {
                f.error
                    .clone()
                    .map(|e| e.with_field(format!("[{i}].{}", f.field_key())))
            })
            .collect()
    }

    /// Owned, serializable snapshot of this result.
    #[must_use]
    pub fn report(&self) -> ValidationReport {
        ValidationReport {
            is_valid: self.is_valid,
            fields: self
                .fields
                .iter()
                .enumerate()
                .map(|(index, f)| FieldReport {
                    index,
                    field_key: f.field_key().to_owned(),
                    requires_validation: f.requires_validation(),
                    is_valid: f.is_valid,
                    value: f.value().cloned(),
                    error: f.error.clone(),
                })
                .collect(),
        }
    }
}

/// Serializable form of a [`ValidationResult`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub fields: Vec<FieldReport>,
}

/// Serializable form of a [`ValidatedField`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldReport {
    pub index: usize,
    pub field_key: String,
    pub requires_validation: bool,
    pub is_valid: bool,
    /// `None` when the value could not be resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidationError>,
}

/// ANDs the verdicts of `fields`.
#[must_use]
pub fn aggregate(fields: Vec<ValidatedField<'_>>) -> ValidationResult<'_> {
    ValidationResult {
        is_valid: fields.iter().all(|f| f.is_valid),
        fields,
    }
}
