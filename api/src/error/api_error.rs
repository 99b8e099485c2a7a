//! Top-level API error type.

use super::{AuthError, ClientError, ConfigError, ValidationError};
use thiserror::Error;

/// Top-level error type for all API operations.
///
/// Callers that only need a message can rely on `Display`; callers that
/// react to specific failures match on the inner category.
///
/// ## Examples
///
/// ```rust,ignore
/// use api::ApiError;
///
/// match err {
///     ApiError::Client(e) if e.status_code() == Some(404) => { /* gone */ }
///     ApiError::Auth(e) => eprintln!("check GALAXY_API_KEY: {e}"),
///     other => return Err(other),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP client errors (network failures, non-success statuses).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Response bodies that could not be parsed into the endpoint's type.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Authentication and authorization errors.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Endpoint or client configuration errors.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// Returns the HTTP status of the failed response, if there was one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Client(e) => e.status_code(),
            Self::Auth(AuthError::AuthenticationFailed { .. }) => Some(401),
            Self::Auth(AuthError::InsufficientPermissions { .. }) => Some(403),
            _ => None,
        }
    }
}
