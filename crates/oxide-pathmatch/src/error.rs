//! Error types for routing.

use thiserror::Error;

/// Router-specific errors.
///
/// Matching itself never fails; these come from the auxiliary operations
/// (requiring a match, validating patterns, building paths).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// No route matched the path.
    #[error("no route matched: {path}")]
    NotFound { path: String },

    /// The pattern can never match the way it is written.
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// A parameter needed to build a path was not supplied.
    #[error("missing parameter '{name}' for route '{pattern}'")]
    MissingParam { pattern: String, name: String },

    /// Wildcards have no value to substitute when building a path.
    #[error("cannot build a path from wildcard route '{pattern}'")]
    WildcardNotReversible { pattern: String },
}

/// Result type alias for router operations.
pub type Result<T> = std::result::Result<T, RouterError>;
