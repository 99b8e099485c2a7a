//! Endpoint definition with type-state builder pattern.
//!
//! An [`Endpoint`] is a static description of one REST call: method, path
//! template and any fixed query pairs. The [`EndpointBuilder`] refuses to
//! build until id, method and path have all been supplied.

use std::fmt;
use std::marker::PhantomData;

use url::Url;

use crate::error::ConfigError;
use crate::method::RestMethod;
use crate::response::ResponseFormat;

/// Marker for a builder field that has not been set yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Missing;

/// A REST API endpoint definition.
///
/// Endpoints are parameterized by their response format, so the type of the
/// parsed payload is fixed where the endpoint is declared.
///
/// The path template is resolved *relative* to the client's base URL: a base
/// of `https://host/galaxy/` and a path of `api/datasets/{id}` produce
/// `https://host/galaxy/api/datasets/<id>`. Leading slashes on the template
/// are ignored so a mount prefix is never dropped.
///
/// ## Examples
///
/// ```rust,ignore
/// use api::{Endpoint, RestMethod};
/// use api::response::JsonFormat;
///
/// let endpoint: Endpoint<JsonFormat<Attributes>> = Endpoint::builder()
///     .id("get_collection_attributes")
///     .method(RestMethod::Get)
///     .path("api/dataset_collections/{id}/attributes")
///     .query("instance_type", "history")
///     .build();
/// ```
pub struct Endpoint<F: ResponseFormat> {
    id: String,
    method: RestMethod,
    path: String,
    query: Vec<(String, String)>,
    description: Option<String>,
    _format: PhantomData<F>,
}

impl<F: ResponseFormat> fmt::Debug for Endpoint<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("id", &self.id)
            .field("method", &self.method)
            .field("path", &self.path)
            .field("query", &self.query)
            .field("description", &self.description)
            .finish()
    }
}

// PhantomData<F> is always Clone, F itself need not be.
impl<F: ResponseFormat> Clone for Endpoint<F> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            method: self.method,
            path: self.path.clone(),
            query: self.query.clone(),
            description: self.description.clone(),
            _format: PhantomData,
        }
    }
}

impl<F: ResponseFormat> Endpoint<F> {
    /// Creates a new endpoint builder.
    pub fn builder() -> EndpointBuilder<Missing, Missing, Missing, F> {
        EndpointBuilder::new()
    }

    /// Returns the endpoint's identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the HTTP method for this endpoint.
    pub fn method(&self) -> RestMethod {
        self.method
    }

    /// Returns the path template for this endpoint.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the fixed query pairs sent with every call.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Returns the optional description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Resolves the path template against `base_url`.
    ///
    /// Every `{name}` segment is replaced by the matching value in `params`,
    /// percent-encoded as a single path segment. Fixed query pairs are
    /// appended after any query the base URL already carries.
    ///
    /// ## Errors
    ///
    /// - [`ConfigError::MissingPathParam`] if a placeholder has no value.
    /// - [`ConfigError::CannotBeABase`] if `base_url` cannot take path segments.
    pub fn resolve(&self, base_url: &Url, params: &[(&str, &str)]) -> Result<Url, ConfigError> {
        let mut url = base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ConfigError::CannotBeABase {
                    url: base_url.to_string(),
                })?;
            segments.pop_if_empty();

            for segment in self.path.split('/').filter(|s| !s.is_empty()) {
                match placeholder(segment) {
                    Some(name) => {
                        let value = params
                            .iter()
                            .find_map(|(key, value)| (*key == name).then_some(*value))
                            .ok_or_else(|| ConfigError::MissingPathParam {
                                endpoint: self.id.clone(),
                                name: name.to_string(),
                            })?;
                        segments.push(value);
                    }
                    None => {
                        segments.push(segment);
                    }
                }
            }
        }

        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }
}

/// Returns the parameter name if `segment` is a `{name}` placeholder.
fn placeholder(segment: &str) -> Option<&str> {
    segment
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .filter(|name| !name.is_empty())
}

/// Type-state builder for [`Endpoint`].
///
/// Each required field starts as [`Missing`] and changes type once set, so
/// `build()` only exists when id (`String`), method ([`RestMethod`]) and path
/// (`String`) are all present.
pub struct EndpointBuilder<Id, Method, Path, F: ResponseFormat> {
    id: Id,
    method: Method,
    path: Path,
    query: Vec<(String, String)>,
    description: Option<String>,
    _format: PhantomData<F>,
}

impl<F: ResponseFormat> EndpointBuilder<Missing, Missing, Missing, F> {
    /// Creates a new endpoint builder with no fields set.
    pub fn new() -> Self {
        Self {
            id: Missing,
            method: Missing,
            path: Missing,
            query: Vec::new(),
            description: None,
            _format: PhantomData,
        }
    }
}

impl<F: ResponseFormat> Default for EndpointBuilder<Missing, Missing, Missing, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M, P, F: ResponseFormat> EndpointBuilder<Missing, M, P, F> {
    /// Sets the endpoint ID, used in tracing spans and auth errors.
    pub fn id(self, id: impl Into<String>) -> EndpointBuilder<String, M, P, F> {
        EndpointBuilder {
            id: id.into(),
            method: self.method,
            path: self.path,
            query: self.query,
            description: self.description,
            _format: PhantomData,
        }
    }
}

impl<I, P, F: ResponseFormat> EndpointBuilder<I, Missing, P, F> {
    /// Sets the HTTP method for this endpoint.
    pub fn method(self, method: RestMethod) -> EndpointBuilder<I, RestMethod, P, F> {
        EndpointBuilder {
            id: self.id,
            method,
            path: self.path,
            query: self.query,
            description: self.description,
            _format: PhantomData,
        }
    }
}

impl<I, M, F: ResponseFormat> EndpointBuilder<I, M, Missing, F> {
    /// Sets the URL path template.
    ///
    /// The path may contain whole-segment placeholders like `{id}`.
    pub fn path(self, path: impl Into<String>) -> EndpointBuilder<I, M, String, F> {
        EndpointBuilder {
            id: self.id,
            method: self.method,
            path: path.into(),
            query: self.query,
            description: self.description,
            _format: PhantomData,
        }
    }
}

impl<I, M, P, F: ResponseFormat> EndpointBuilder<I, M, P, F> {
    /// Adds a query pair sent with every call to this endpoint.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Sets an optional description for this endpoint.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl<F: ResponseFormat> EndpointBuilder<String, RestMethod, String, F> {
    /// Builds the endpoint.
    pub fn build(self) -> Endpoint<F> {
        Endpoint {
            id: self.id,
            method: self.method,
            path: self.path,
            query: self.query,
            description: self.description,
            _format: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::JsonFormat;

    #[derive(Debug, serde::Deserialize)]
    struct TestResponse {
        #[allow(dead_code)]
        id: String,
    }

    fn contents_endpoint() -> Endpoint<JsonFormat<TestResponse>> {
        Endpoint::builder()
            .id("get_contents")
            .method(RestMethod::Get)
            .path("api/dataset_collections/{hdca_id}/contents/{parent_id}")
            .query("instance_type", "history")
            .build()
    }

    #[test]
    fn test_builder_basic() {
        let endpoint = contents_endpoint();

        assert_eq!(endpoint.id(), "get_contents");
        assert_eq!(endpoint.method(), RestMethod::Get);
        assert_eq!(
            endpoint.path(),
            "api/dataset_collections/{hdca_id}/contents/{parent_id}"
        );
        assert_eq!(
            endpoint.query(),
            &[("instance_type".to_string(), "history".to_string())]
        );
        assert_eq!(endpoint.description(), None);
    }

    #[test]
    fn test_builder_order_independence() {
        let endpoint: Endpoint<JsonFormat<TestResponse>> = Endpoint::builder()
            .path("/api/test")
            .description("Test endpoint")
            .method(RestMethod::Get)
            .id("test")
            .build();

        assert_eq!(endpoint.id(), "test");
        assert_eq!(endpoint.description(), Some("Test endpoint"));
    }

    #[test]
    fn test_resolve_substitutes_params_and_query() {
        let base = Url::parse("https://usegalaxy.org/").unwrap();
        let url = contents_endpoint()
            .resolve(&base, &[("hdca_id", "abc"), ("parent_id", "xyz")])
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://usegalaxy.org/api/dataset_collections/abc/contents/xyz?instance_type=history"
        );
    }

    #[test]
    fn test_resolve_keeps_mount_prefix() {
        let endpoint: Endpoint<JsonFormat<TestResponse>> = Endpoint::builder()
            .id("get_collection")
            .method(RestMethod::Get)
            .path("/api/dataset_collections/{id}")
            .build();

        for base in ["https://example.org/galaxy", "https://example.org/galaxy/"] {
            let base = Url::parse(base).unwrap();
            let url = endpoint.resolve(&base, &[("id", "abc")]).unwrap();
            assert_eq!(
                url.as_str(),
                "https://example.org/galaxy/api/dataset_collections/abc"
            );
        }
    }

    #[test]
    fn test_resolve_encodes_param_as_single_segment() {
        let endpoint: Endpoint<JsonFormat<TestResponse>> = Endpoint::builder()
            .id("get_collection")
            .method(RestMethod::Get)
            .path("api/dataset_collections/{id}")
            .build();

        let base = Url::parse("https://example.org/").unwrap();
        let url = endpoint.resolve(&base, &[("id", "a b/c")]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.org/api/dataset_collections/a%20b%2Fc"
        );
    }

    #[test]
    fn test_resolve_missing_param() {
        let base = Url::parse("https://example.org/").unwrap();
        let err = contents_endpoint()
            .resolve(&base, &[("hdca_id", "abc")])
            .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::MissingPathParam { ref name, .. } if name == "parent_id"
        ));
    }

    #[test]
    fn test_resolve_cannot_be_a_base() {
        let base = Url::parse("mailto:someone@example.org").unwrap();
        let err = contents_endpoint()
            .resolve(&base, &[("hdca_id", "a"), ("parent_id", "b")])
            .unwrap_err();

        assert!(matches!(err, ConfigError::CannotBeABase { .. }));
    }

    #[test]
    fn test_clone() {
        let endpoint = contents_endpoint();
        let cloned = endpoint.clone();
        assert_eq!(cloned.id(), endpoint.id());
        assert_eq!(cloned.query(), endpoint.query());
    }
}
