//! Request authentication methods.

/// How the client attaches its credential to outgoing requests.
///
/// The credential itself is supplied separately through
/// [`ApiClientBuilder::auth`](crate::ApiClientBuilder::auth).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ApiAuthMethod {
    /// Send no credential.
    #[default]
    None,
    /// The key verbatim in the named header (Galaxy uses `x-api-key`).
    ApiKey(String),
}

impl ApiAuthMethod {
    /// The header Galaxy-style servers read API keys from.
    pub const GALAXY_KEY_HEADER: &'static str = "x-api-key";

    /// Header-based key auth using [`Self::GALAXY_KEY_HEADER`].
    pub fn galaxy_key() -> Self {
        Self::ApiKey(Self::GALAXY_KEY_HEADER.to_string())
    }
}
