//! Server location and credentials.

use std::fmt;
use std::time::Duration;

use api::client::DEFAULT_TIMEOUT_SECS;
use api::{ApiAuthMethod, ApiClient, ApiError, ConfigError};
use url::Url;

/// Base URL of the server, e.g. `https://usegalaxy.org/`.
pub const URL_VAR: &str = "GALAXY_URL";
/// API key sent as `x-api-key`. Optional; anonymous access works for public histories.
pub const API_KEY_VAR: &str = "GALAXY_API_KEY";
/// Request timeout in whole seconds.
pub const TIMEOUT_VAR: &str = "GALAXY_TIMEOUT_SECS";

/// Where to send requests and how to authenticate them.
#[derive(Clone)]
pub struct CollectionsConfig {
    pub base_url: Url,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl fmt::Debug for CollectionsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionsConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl CollectionsConfig {
    /// Anonymous access to `base_url` with the default timeout.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url: with_trailing_slash(base_url),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Parses a server URL, normalizing it to end in `/`.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if `raw` is not an absolute URL and
    /// [`ConfigError::CannotBeABase`] if it cannot carry a path.
    pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
        let url = Url::parse(raw.trim())?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::CannotBeABase {
                url: url.to_string(),
            });
        }
        Ok(with_trailing_slash(url))
    }

    /// Reads [`URL_VAR`], [`API_KEY_VAR`] and [`TIMEOUT_VAR`] from the process environment.
    ///
    /// ## Errors
    ///
    /// See [`from_lookup`](Self::from_lookup).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from any variable source.
    ///
    /// Blank values count as unset.
    ///
    /// ## Errors
    ///
    /// - [`ConfigError::MissingEnvVar`] if [`URL_VAR`] is unset.
    /// - [`ConfigError::InvalidUrl`] if it does not parse.
    /// - [`ConfigError::InvalidValue`] if [`TIMEOUT_VAR`] is not a positive integer.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let raw_url = get(URL_VAR).ok_or(ConfigError::MissingEnvVar { var: URL_VAR })?;
        let mut config = Self::new(Self::parse_base_url(&raw_url)?);

        if let Some(api_key) = get(API_KEY_VAR) {
            config.api_key = Some(api_key.trim().to_string());
        }

        if let Some(raw_timeout) = get(TIMEOUT_VAR) {
            let secs: u64 = raw_timeout
                .trim()
                .parse()
                .map_err(|e| {
                    ConfigError::invalid_value(TIMEOUT_VAR, format!("{raw_timeout:?}: {e}"))
                })?;
            if secs == 0 {
                return Err(ConfigError::invalid_value(TIMEOUT_VAR, "must be at least 1"));
            }
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Builds the HTTP client for this config.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn client(&self) -> Result<ApiClient, ApiError> {
        let mut builder = ApiClient::builder(self.base_url.clone()).timeout(self.timeout);
        if let Some(api_key) = &self.api_key {
            builder = builder.auth(ApiAuthMethod::galaxy_key(), api_key.clone());
        }
        builder.build()
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn test_url_only() {
        let config =
            CollectionsConfig::from_lookup(lookup(&[(URL_VAR, "https://usegalaxy.org")]))
                .unwrap();

        assert_eq!(config.base_url.as_str(), "https://usegalaxy.org/");
        assert_eq!(config.api_key, None);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_prefix_gets_trailing_slash() {
        let config =
            CollectionsConfig::from_lookup(lookup(&[(URL_VAR, "https://example.org/galaxy")]))
                .unwrap();
        assert_eq!(config.base_url.as_str(), "https://example.org/galaxy/");
    }

    #[test]
    fn test_all_vars() {
        let config = CollectionsConfig::from_lookup(lookup(&[
            (URL_VAR, "http://localhost:8080/"),
            (API_KEY_VAR, " key123 "),
            (TIMEOUT_VAR, "5"),
        ]))
        .unwrap();

        assert_eq!(config.api_key.as_deref(), Some("key123"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_missing_url() {
        let err = CollectionsConfig::from_lookup(lookup(&[(API_KEY_VAR, "k")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar { var: URL_VAR }));
    }

    #[test]
    fn test_blank_values_are_unset() {
        let err = CollectionsConfig::from_lookup(lookup(&[(URL_VAR, "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar { .. }));

        let config = CollectionsConfig::from_lookup(lookup(&[
            (URL_VAR, "https://usegalaxy.org"),
            (API_KEY_VAR, ""),
        ]))
        .unwrap();
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn test_invalid_url() {
        let err =
            CollectionsConfig::from_lookup(lookup(&[(URL_VAR, "usegalaxy.org")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl(_)));
    }

    #[test]
    fn test_invalid_timeout() {
        for raw in ["soon", "0", "-3"] {
            let err = CollectionsConfig::from_lookup(lookup(&[
                (URL_VAR, "https://usegalaxy.org"),
                (TIMEOUT_VAR, raw),
            ]))
            .unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidValue { field: TIMEOUT_VAR, .. }),
                "{raw}: {err}"
            );
        }
    }

    #[test]
    fn test_debug_masks_api_key() {
        let config = CollectionsConfig::new(Url::parse("https://usegalaxy.org").unwrap())
            .with_api_key("super-secret");
        let debug = format!("{config:?}");

        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("***"));
    }

    #[test]
    fn test_client_uses_base_url() {
        let config = CollectionsConfig::new(Url::parse("https://example.org/galaxy").unwrap())
            .with_timeout(Duration::from_secs(2));
        let client = config.client().unwrap();
        assert_eq!(client.base_url().as_str(), "https://example.org/galaxy/");
    }
}
