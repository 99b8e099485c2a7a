//! Typed REST fetch helper.
//!
//! The `api` crate is the transport layer used by the collection service. It
//! pairs statically defined endpoints with a typed response format and runs
//! them through an async, connection-pooled client.
//!
//! ## Features
//!
//! - **Type-safe endpoints**: an [`Endpoint`] carries its response type, so a
//!   call site cannot parse the wrong shape
//! - **Path and query parameters**: `{param}` templates plus per-call query pairs
//! - **Async-first HTTP client**: Built on `reqwest` with `tokio`
//! - **Layered error handling**: Structured errors for different failure modes
//!
//! ## Example
//!
//! ```rust,ignore
//! use api::{ApiClient, Endpoint, RestMethod};
//! use api::response::JsonFormat;
//!
//! #[derive(serde::Deserialize)]
//! struct Collection { id: String }
//!
//! let get_collection: Endpoint<JsonFormat<Collection>> = Endpoint::builder()
//!     .id("get_collection")
//!     .method(RestMethod::Get)
//!     .path("api/dataset_collections/{id}")
//!     .build();
//!
//! let collection = client
//!     .execute_with_params(&get_collection, &[("id", "f2db41e1fa331b3e")])
//!     .await?;
//! ```

pub mod auth;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod method;
pub mod response;

pub use auth::ApiAuthMethod;
pub use client::{ApiClient, ApiClientBuilder};
pub use endpoint::{Endpoint, EndpointBuilder};
pub use error::{ApiError, AuthError, ClientError, ConfigError, ValidationError};
pub use method::RestMethod;
pub use response::{JsonFormat, ResponseFormat};
