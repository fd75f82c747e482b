/// Errors raised while building a node tree from a document.
///
/// Validation itself never fails: a bad value is a verdict, not an error.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// The document is not valid JSON or does not have the node shape.
    #[error("failed to parse node document: {0}")]
    Parse(#[from] serde_json::Error),

    /// A `regExp` entry does not compile.
    #[error("invalid pattern `{pattern}` at {path}: {source}")]
    InvalidPattern {
        path: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A `validationFunction` entry names nothing in the registry.
    #[error("unknown validation function `{name}` at {path}")]
    UnknownValidator { path: String, name: String },
}

impl FormError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Parse(_) => "FORM_PARSE",
            Self::InvalidPattern { .. } => "FORM_INVALID_PATTERN",
            Self::UnknownValidator { .. } => "FORM_UNKNOWN_VALIDATOR",
        }
    }

    /// Location in the document the error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Parse(_) => None,
            Self::InvalidPattern { path, .. } | Self::UnknownValidator { path, .. } => Some(path),
        }
    }
}
