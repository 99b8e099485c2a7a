//! HTTP client module.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use api::{ApiAuthMethod, ApiClient};
//! use url::Url;
//!
//! let client = ApiClient::builder(Url::parse("https://usegalaxy.org/")?)
//!     .auth(ApiAuthMethod::galaxy_key(), api_key)
//!     .build()?;
//!
//! let details = client
//!     .execute_with_params(&get_collection_details, &[("id", hdca_id)])
//!     .await?;
//! ```

mod executor;

pub use executor::{ApiClient, ApiClientBuilder, DEFAULT_TIMEOUT_SECS};
