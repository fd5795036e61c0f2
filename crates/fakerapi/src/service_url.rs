//! Service base URL

use core::fmt;

use url::Url;

use crate::error::Error;

/// Base URL of the hosted service
pub const DEFAULT_BASE_URL: &str = "https://fakerapi.it/api/v1";

/// Base URL the client addresses its requests to, without a trailing slash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceUrl(String);

impl ServiceUrl {
    /// New service url
    pub fn new<S>(url: S) -> Self
    where
        S: Into<String>,
    {
        let url: String = url.into();
        Self(url.trim_end_matches('/').to_string())
    }

    /// Join an endpoint path onto the base
    pub fn join(&self, path: &str) -> Result<Url, Error> {
        Ok(Url::parse(&format!("{}/{}", self.0, path))?)
    }
}

impl Default for ServiceUrl {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl<S> From<S> for ServiceUrl
where
    S: Into<String>,
{
    fn from(url: S) -> Self {
        Self::new(url)
    }
}

impl fmt::Display for ServiceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
