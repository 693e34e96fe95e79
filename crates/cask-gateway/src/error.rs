//! Error types for cask-gateway

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GatewayError>;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid catalog record {nr}: {reason}")]
    InvalidRecord { nr: u64, reason: String },

    #[error("Invalid value for '{key}': {value}")]
    InvalidParam { key: String, value: String },

    #[error("Fixture gateway selected but no fixture_path is configured")]
    MissingFixturePath,
}
