//! CLI error types

use std::path::PathBuf;

use starkbal_sdk::SdkError;
use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// No configuration for the requested environment
    #[error("Unknown environment '{name}' (configured: {available})")]
    UnknownEnvironment {
        /// Requested name
        name: String,
        /// Comma-separated configured names
        available: String,
    },

    /// Environment cannot sign transactions
    #[error("Environment '{0}' has no account; set account_address and private_key in its config table")]
    NoAccount(String),

    /// Config error
    #[error("Config error: {0}")]
    Config(String),

    /// ABI file could not be read
    #[error("Cannot read ABI file {}: {source}", path.display())]
    AbiRead {
        /// File that was read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// ABI file is not a valid ABI document
    #[error("Invalid ABI file {}: {source}", path.display())]
    AbiParse {
        /// File that was parsed
        path: PathBuf,
        /// Underlying parse error
        source: SdkError,
    },

    /// SDK error
    #[error("SDK error: {0}")]
    Sdk(#[from] SdkError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
