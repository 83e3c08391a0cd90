//! Domain error types
//!
//! This module defines the error hierarchy for Scribe.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Scribe error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum ScribeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Notion API errors
    #[error("Notion error: {0}")]
    Notion(#[from] NotionError),

    /// Export process errors
    #[error("Export error: {0}")]
    Export(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl ScribeError {
    /// Whether the error invalidates the whole run rather than a single record
    ///
    /// Configuration and authentication problems affect every request the
    /// exporter would make, so there is no point continuing with siblings.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ScribeError::Configuration(_)
                | ScribeError::Notion(NotionError::AuthenticationFailed(_))
        )
    }
}

/// Notion-specific errors
///
/// Errors that occur when talking to the Notion REST API.
/// These errors don't expose the HTTP client's types.
#[derive(Debug, Error)]
pub enum NotionError {
    /// Failed to reach the API
    #[error("Failed to connect to Notion API: {0}")]
    ConnectionFailed(String),

    /// Missing or rejected integration token (401/403)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Database, page or block not found or not shared with the integration
    #[error("Object not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded (429)
    #[error("Rate limit exceeded, retry after: {0}")]
    RateLimited(String),

    /// Response body did not match the expected shape
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },
}

impl NotionError {
    /// Map a non-success HTTP status and its body to an error
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => NotionError::AuthenticationFailed(message),
            404 => NotionError::NotFound(message),
            429 => NotionError::RateLimited(message),
            400..=499 => NotionError::ClientError { status, message },
            _ => NotionError::ServerError { status, message },
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for ScribeError {
    fn from(err: std::io::Error) -> Self {
        ScribeError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ScribeError {
    fn from(err: serde_json::Error) -> Self {
        ScribeError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ScribeError {
    fn from(err: toml::de::Error) -> Self {
        ScribeError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scribe_error_display() {
        let err = ScribeError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_notion_error_conversion() {
        let notion_err = NotionError::ConnectionFailed("Network error".to_string());
        let err: ScribeError = notion_err.into();
        assert!(matches!(err, ScribeError::Notion(_)));
        assert!(err.to_string().contains("Network error"));
    }

    #[test]
    fn test_from_status_mapping() {
        assert!(matches!(
            NotionError::from_status(401, "unauthorized".to_string()),
            NotionError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            NotionError::from_status(403, "restricted".to_string()),
            NotionError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            NotionError::from_status(404, "missing".to_string()),
            NotionError::NotFound(_)
        ));
        assert!(matches!(
            NotionError::from_status(429, "slow down".to_string()),
            NotionError::RateLimited(_)
        ));
        assert!(matches!(
            NotionError::from_status(400, "bad".to_string()),
            NotionError::ClientError { status: 400, .. }
        ));
        assert!(matches!(
            NotionError::from_status(502, "gateway".to_string()),
            NotionError::ServerError { status: 502, .. }
        ));
    }

    #[test]
    fn test_is_fatal() {
        assert!(ScribeError::Configuration("x".to_string()).is_fatal());
        assert!(
            ScribeError::Notion(NotionError::AuthenticationFailed("x".to_string())).is_fatal()
        );
        assert!(!ScribeError::Io("disk full".to_string()).is_fatal());
        assert!(!ScribeError::Notion(NotionError::NotFound("x".to_string())).is_fatal());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: ScribeError = io_err.into();
        assert!(matches!(err, ScribeError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: ScribeError = json_err.into();
        assert!(matches!(err, ScribeError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: ScribeError = toml_err.into();
        assert!(matches!(err, ScribeError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }
}
