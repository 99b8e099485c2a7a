//! Response format trait and the JSON implementation.

use std::fmt;
use std::future::Future;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::error::ValidationError;

/// Strategy for parsing a response body into a typed value.
///
/// The format type is a zero-sized marker carried by
/// [`Endpoint`](crate::Endpoint), so the output type is known when the
/// endpoint is declared.
pub trait ResponseFormat: Send + Sync {
    /// The output type after parsing.
    type Output: Send + Sync;

    /// Parse a response body into the output type.
    fn parse(
        body: bytes::Bytes,
    ) -> impl Future<Output = Result<Self::Output, ValidationError>> + Send;

    /// Returns the Content-Type this format expects, sent as `Accept`.
    fn content_type() -> &'static str;
}

/// JSON response format with typed deserialization.
///
/// Deserialization is the schema check: a body whose shape does not match
/// `T` fails with [`ValidationError::JsonParse`].
pub struct JsonFormat<T>(PhantomData<fn() -> T>);

impl<T> fmt::Debug for JsonFormat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("JsonFormat")
    }
}

impl<T: DeserializeOwned + Send + Sync> ResponseFormat for JsonFormat<T> {
    type Output = T;

    async fn parse(body: bytes::Bytes) -> Result<Self::Output, ValidationError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(ValidationError::EmptyBody);
        }
        serde_json::from_slice(&body).map_err(ValidationError::JsonParse)
    }

    fn content_type() -> &'static str {
        "application/json"
    }
}
