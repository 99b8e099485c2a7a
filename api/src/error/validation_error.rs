//! Response parsing errors.

use thiserror::Error;

/// Errors turning a successful response body into the endpoint's type.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// JSON parsing failed, or the JSON did not match the expected shape.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Empty response body when content was expected.
    #[error("Empty response body")]
    EmptyBody,
}
