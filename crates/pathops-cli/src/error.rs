//! Error types for the pathops CLI

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur before an action runs.
///
/// Action outcomes themselves are never errors; they are printed and
/// reflected in the exit code.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from pathops-core (config loading)
    #[error(transparent)]
    Core(#[from] pathops_core::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
