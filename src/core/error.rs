//! Error Types
//!
//! One enum per concern. Callers propagate these unchanged; the TUI turns
//! them into notifications.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors from the lore generation service client.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Invalid API base URL '{url}': {source}")]
    #[diagnostic(
        code(lore_engine::api::base_url),
        help("set LORE_API_URL to an absolute URL such as http://localhost:8000")
    )]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Request to lore service failed: {0}")]
    #[diagnostic(
        code(lore_engine::api::transport),
        help("is the lore service running and reachable?")
    )]
    Transport(#[from] reqwest::Error),

    #[error("Lore service returned {status}: {detail}")]
    #[diagnostic(code(lore_engine::api::status))]
    Status { status: u16, detail: String },

    #[error("Unexpected response from lore service: {0}")]
    #[diagnostic(code(lore_engine::api::decode))]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for API operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Errors from serializing or writing exports.
#[derive(Error, Diagnostic, Debug)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    #[diagnostic(code(lore_engine::export::serialize))]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write export to {path}: {source}")]
    #[diagnostic(
        code(lore_engine::export::write),
        help("check that the export directory is writable")
    )]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from the clipboard sink.
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Errors from loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError::Figment(Box::new(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ApiError::Status {
            status: 500,
            detail: "Failed to generate factions".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Lore service returned 500: Failed to generate factions"
        );
    }

    #[test]
    fn test_invalid_url_has_help() {
        let source = url::Url::parse("not a url").unwrap_err();
        let err = ApiError::InvalidBaseUrl {
            url: "not a url".to_string(),
            source,
        };
        assert!(err.help().is_some());
        assert!(err.to_string().contains("not a url"));
    }
}
