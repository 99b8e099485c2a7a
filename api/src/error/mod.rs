//! Layered error types for the fetch helper.
//!
//! - [`ApiError`] - Top-level error returned by every request
//! - [`ClientError`] - Transport failures and non-success statuses
//! - [`ValidationError`] - Response bodies that do not parse
//! - [`AuthError`] - Rejected or malformed credentials
//! - [`ConfigError`] - Bad base URLs, templates and settings

mod api_error;
mod auth_error;
mod client_error;
mod config_error;
mod validation_error;

pub use api_error::ApiError;
pub use auth_error::AuthError;
pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use validation_error::ValidationError;
