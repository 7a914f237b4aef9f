//! @acp:module "Errors"
//! @acp:summary "Error types for validation, remote generation and I/O"
//! @acp:domain cli
//! @acp:layer utility

use thiserror::Error;

/// Result type used across the library
pub type Result<T> = std::result::Result<T, BriefError>;

/// @acp:summary "Top-level library error"
#[derive(Debug, Error)]
pub enum BriefError {
    /// Input rejected before any classification ran
    #[error("{0}")]
    Validation(String),

    /// Remote generation failed; callers recover with the fallback composer
    #[error("Remote generation failed: {0}")]
    Remote(#[from] RemoteError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// @acp:summary "Failure modes of the completion endpoint call"
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteError {
    /// Remote generation disabled, or no API key could be resolved
    #[error("remote generation is not configured")]
    NotConfigured,

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("API Error: {code} - {message}")]
    Status { code: u16, message: String },

    #[error("Invalid API response format: {0}")]
    MalformedResponse(String),
}

impl BriefError {
    /// True when the error came from the remote adapter
    pub fn is_remote(&self) -> bool {
        matches!(self, BriefError::Remote(_))
    }
}
