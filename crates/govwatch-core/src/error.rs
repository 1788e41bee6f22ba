//! Error types for the edges of GovWatch. Event matching itself never fails.

use thiserror::Error;

/// Errors from loading or validating a [`crate::MonitorConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid governance address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("Config parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors from turning a JSON-RPC receipt into a transaction context.
#[derive(Debug, Error)]
pub enum ReceiptError {
    #[error("Receipt parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unrecognised receipt status: {value}")]
    InvalidStatus { value: String },
}
