//! Request execution with tracing instrumentation.
//!
//! [`ApiClient`] resolves an [`Endpoint`] against its base URL, attaches
//! credentials, sends the request and parses the body with the endpoint's
//! [`ResponseFormat`].

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderName, HeaderValue};
use tracing::{Span, debug, instrument};
use url::Url;

use crate::auth::ApiAuthMethod;
use crate::endpoint::Endpoint;
use crate::error::{ApiError, AuthError, ClientError};
use crate::response::ResponseFormat;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for configuring an [`ApiClient`].
#[derive(Debug)]
pub struct ApiClientBuilder {
    base_url: Url,
    timeout: Duration,
    auth: Option<(ApiAuthMethod, String)>,
}

impl ApiClientBuilder {
    fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            auth: None,
        }
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the authentication method and key.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// let client = ApiClient::builder(base_url)
    ///     .auth(ApiAuthMethod::galaxy_key(), api_key)
    ///     .build()?;
    /// ```
    pub fn auth(mut self, method: ApiAuthMethod, api_key: impl Into<String>) -> Self {
        self.auth = Some((method, api_key.into()));
        self
    }

    /// Builds the [`ApiClient`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ClientError::Request)?;

        Ok(ApiClient {
            client,
            base_url: self.base_url,
            auth: self.auth,
        })
    }
}

/// Async HTTP client for executing endpoint requests.
///
/// Wraps a pooled `reqwest::Client`. All methods take `&self`, so one client
/// can serve any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
    auth: Option<(ApiAuthMethod, String)>,
}

impl ApiClient {
    /// Creates a new builder for configuring an API client.
    pub fn builder(base_url: Url) -> ApiClientBuilder {
        ApiClientBuilder::new(base_url)
    }

    /// Creates a new API client with default settings.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, ApiError> {
        Self::builder(base_url).build()
    }

    /// Returns the base URL for this client.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Executes an endpoint, substituting `{param}` placeholders.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// let details = client
    ///     .execute_with_params(&get_collection_details, &[("id", hdca_id)])
    ///     .await?;
    /// ```
    ///
    /// ## Errors
    ///
    /// See [`execute_with_query`](Self::execute_with_query).
    pub async fn execute_with_params<F>(
        &self,
        endpoint: &Endpoint<F>,
        params: &[(&str, &str)],
    ) -> Result<F::Output, ApiError>
    where
        F: ResponseFormat,
    {
        self.execute_with_query(endpoint, params, &[]).await
    }

    /// Executes an endpoint with path parameters and per-call query pairs.
    ///
    /// Per-call pairs are appended after the endpoint's fixed query pairs.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - A path parameter is missing ([`ApiError::Config`])
    /// - The request fails in transit ([`ClientError::Request`])
    /// - The server answers 401 or 403 ([`ApiError::Auth`])
    /// - The server answers any other non-success status ([`ClientError::HttpStatus`])
    /// - The body does not parse ([`ApiError::Validation`])
    #[instrument(
        name = "api_request",
        skip(self, endpoint, params, query),
        fields(
            endpoint = endpoint.id(),
            http.method = %endpoint.method(),
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn execute_with_query<F>(
        &self,
        endpoint: &Endpoint<F>,
        params: &[(&str, &str)],
        query: &[(&str, String)],
    ) -> Result<F::Output, ApiError>
    where
        F: ResponseFormat,
    {
        let mut url = endpoint.resolve(&self.base_url, params)?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Span::current().record("http.url", url.as_str());

        let mut request = self
            .client
            .request(endpoint.method().to_reqwest(), url)
            .header(ACCEPT, F::content_type());
        request = self.apply_auth(request)?;

        let response = request.send().await.map_err(ClientError::Request)?;

        let status = response.status();
        let status_code = status.as_u16();
        Span::current().record("http.status_code", status_code);

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());

            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            Span::current().record("otel.status_code", otel_status);
            debug!(status = status_code, "request failed");

            return Err(match status_code {
                401 => AuthError::AuthenticationFailed { message }.into(),
                403 => AuthError::InsufficientPermissions {
                    operation: endpoint.id().to_string(),
                }
                .into(),
                _ => ClientError::HttpStatus {
                    status: status_code,
                    message,
                }
                .into(),
            });
        }

        Span::current().record("otel.status_code", "OK");

        let body = response.bytes().await.map_err(ClientError::Request)?;
        debug!(bytes = body.len(), "response received");
        let parsed = F::parse(body).await?;

        Ok(parsed)
    }

    fn apply_auth(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        let Some((method, api_key)) = &self.auth else {
            return Ok(request);
        };

        match method {
            ApiAuthMethod::None => Ok(request),
            ApiAuthMethod::ApiKey(header_name) => {
                let name = HeaderName::try_from(header_name.as_str())
                    .map_err(|_| AuthError::InvalidKeyFormat)?;
                let value = HeaderValue::try_from(api_key.as_str())
                    .map_err(|_| AuthError::InvalidKeyFormat)?;
                Ok(request.header(name, value))
            }
        }
    }
}
