//! CLI error types

use std::io;

use thiserror::Error;

use crate::load::LoadError;
use crate::schema::SchemaError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Schema(#[from] SchemaError),

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("no index at slot {0}")]
    NoIndex(usize),

    #[error("key {key:?} is not a valid {field} value: {reason}")]
    InvalidKey {
        key: String,
        field: String,
        reason: String,
    },

    #[error("no record for key {0:?}")]
    KeyNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Stable error code for JSON error output
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Schema(e) => e.code().code(),
            CliError::Load(e) => e.code().code(),
            CliError::NoIndex(_) => "RF_CLI_NO_INDEX",
            CliError::InvalidKey { .. } => "RF_CLI_INVALID_KEY",
            CliError::KeyNotFound(_) => "RF_CLI_KEY_NOT_FOUND",
            CliError::Io(_) => "RF_CLI_IO_ERROR",
            CliError::Json(_) => "RF_CLI_JSON_ERROR",
        }
    }
}
