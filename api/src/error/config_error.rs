//! Endpoint and client configuration errors.

use thiserror::Error;

/// Errors in endpoint definitions or client settings.
///
/// These indicate a programmer or deployment mistake rather than a server
/// failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The base URL cannot carry a path (e.g. `mailto:`).
    #[error("Base URL cannot take path segments: {url}")]
    CannotBeABase {
        /// The offending base URL.
        url: String,
    },

    /// A `{name}` placeholder had no value at call time.
    #[error("Endpoint {endpoint} is missing path parameter `{name}`")]
    MissingPathParam {
        /// The endpoint being resolved.
        endpoint: String,
        /// The placeholder with no value.
        name: String,
    },

    /// A required environment variable is unset.
    #[error("Missing required environment variable: {var}")]
    MissingEnvVar {
        /// The variable name.
        var: &'static str,
    },

    /// A setting is present but unusable.
    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        /// The setting name.
        field: &'static str,
        /// What was wrong with it.
        message: String,
    },
}

impl ConfigError {
    /// Creates an invalid value error.
    pub fn invalid_value(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }
}
