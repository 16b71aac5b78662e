//! CLI-specific error types

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors; all are fatal to the process
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Server failed to start or crashed
    #[error("Server error: {0}")]
    Server(String),
}

impl CliError {
    /// Config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Server error
    pub fn server(msg: impl Into<String>) -> Self {
        Self::Server(msg.into())
    }
}
