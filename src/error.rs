//! Error types for tubefeed
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for tubefeed
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Protocol Errors
    // ============================================================================
    /// Neither the initial-tab shape nor the continuation shape resolved to an
    /// item list. Distinct from exhaustion: the server did not say "done", we
    /// failed to understand the response.
    #[error("Unrecognized browse response shape: {message}")]
    ProtocolShape { message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
}

impl Error {
    /// Create a protocol-shape error
    pub fn protocol_shape(message: impl Into<String>) -> Self {
        Self::ProtocolShape {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Check if this error came from the transport rather than response parsing
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_) | Error::HttpStatus { .. })
    }
}

/// Result type alias for tubefeed
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::protocol_shape("no item list found");
        assert_eq!(
            err.to_string(),
            "Unrecognized browse response shape: no item list found"
        );

        let err = Error::http_status(403, "Forbidden");
        assert_eq!(err.to_string(), "HTTP 403: Forbidden");
    }

    #[test]
    fn test_is_transport() {
        assert!(Error::http_status(500, "").is_transport());
        assert!(!Error::protocol_shape("bad shape").is_transport());
    }
}
