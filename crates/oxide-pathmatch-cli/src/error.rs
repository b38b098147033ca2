//! Error types for the command-line tool.

use std::path::PathBuf;

/// Errors that can occur while loading a route table.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The routes file could not be read.
    #[error("Failed to read routes file '{path}': {source}")]
    Io {
        /// Path to the routes file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The routes file is not a JSON array of route objects.
    #[error("Failed to parse routes file '{path}': {source}")]
    Parse {
        /// Path to the routes file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// A route payload uses a key that match results already write.
    #[error("Route '{route}' has reserved payload field '{field}'")]
    ReservedField {
        /// Pattern of the offending route.
        route: String,
        /// The reserved field name.
        field: String,
    },

    /// One or more patterns failed validation.
    #[error("Invalid route table:\n{}", .0.iter().map(|e| format!("  - {e}")).collect::<Vec<_>>().join("\n"))]
    InvalidRoutes(Vec<oxide_pathmatch::RouterError>),
}

/// Result type for the command-line tool.
pub type Result<T> = std::result::Result<T, CliError>;
