//! Error types for imgui-bridge.

use thiserror::Error;

/// The main error type for imgui-bridge operations.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// An option value is outside its accepted range.
    #[error("invalid option '{name}': {reason}")]
    InvalidOption { name: &'static str, reason: String },

    /// A draw command references indices or vertices outside its draw list.
    #[error("draw command {command} out of range: {reason}")]
    CommandOutOfRange { command: usize, reason: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for imgui-bridge operations.
pub type Result<T> = std::result::Result<T, BridgeError>;
