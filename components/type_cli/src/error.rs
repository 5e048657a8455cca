//! Error types for the CLI

use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O error
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// Input is not well-formed JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A `$`-marker carries a payload it cannot be built from
    #[error("Literal error: {0}")]
    Literal(String),

    /// Top-level input is not a JSON array
    #[error("Input must be a JSON array of values")]
    NotASequence,

    /// REPL error
    #[error("REPL error: {0}")]
    Repl(String),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
