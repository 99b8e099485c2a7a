//! Authentication and authorization errors.

use thiserror::Error;

/// Errors related to API credentials.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The configured key cannot be sent (e.g. not a valid header name).
    #[error("Invalid API key format")]
    InvalidKeyFormat,

    /// Server rejected the credentials (HTTP 401).
    #[error("Authentication failed: {message}")]
    AuthenticationFailed {
        /// Error message from the server.
        message: String,
    },

    /// Credentials were accepted but do not grant access (HTTP 403).
    #[error("Insufficient permissions: {operation}")]
    InsufficientPermissions {
        /// The endpoint id that was denied.
        operation: String,
    },
}
