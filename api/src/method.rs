//! HTTP method types for REST endpoints.

use strum::Display;

/// HTTP methods an [`Endpoint`](crate::Endpoint) can be defined with.
///
/// Every collection endpoint is a read, so only `GET` exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    Get,
}

impl RestMethod {
    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
        }
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        method.to_reqwest()
    }
}
