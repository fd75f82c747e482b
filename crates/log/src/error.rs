//! Logger setup errors

/// Errors raised while installing the subscriber.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogError {
    /// The level directive does not parse.
    #[error("invalid log filter `{directive}`: {reason}")]
    Filter { directive: String, reason: String },

    /// A global subscriber is already installed.
    #[error("failed to install logger: {0}")]
    Init(String),
}

/// Result type for logger setup.
pub type LogResult<T> = Result<T, LogError>;
