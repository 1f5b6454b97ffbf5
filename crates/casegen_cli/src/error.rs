//! CLI error type and result alias.

use thiserror::Error;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the casegen binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the configuration or writing an output file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The YAML case configuration could not be parsed.
    #[error("Failed to parse case configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Case validation or generation failed.
    #[error(transparent)]
    Model(#[from] casegen_model::grid::ModelError),

    /// Property compaction failed.
    #[error(transparent)]
    Compact(#[from] casegen_core::types::error::CompactError),

    /// Writing the summary file failed.
    #[error("Failed to write summary: {0}")]
    Summary(#[from] csv::Error),
}
