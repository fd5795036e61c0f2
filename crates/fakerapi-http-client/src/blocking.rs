//! Blocking HTTP client
//!
//! Same contract as the async [`crate::HttpClient`] over
//! `reqwest::blocking`. Every client owns its own connection; one-shot
//! callers can use [`fetch`] to open, request and drop in a single call.

use serde::de::DeserializeOwned;

use crate::error::HttpError;
use crate::Response;

/// Blocking HTTP client wrapper
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::blocking::Client,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    /// Create a new blocking HTTP client with default settings
    pub fn new() -> Self {
        Self {
            inner: reqwest::blocking::Client::new(),
        }
    }

    /// Create a new blocking HTTP client builder
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// GET request, returns JSON deserialized to R
    ///
    /// Occupies the calling thread for the full round trip. The body is read
    /// as text first so an unparseable body is reported as
    /// [`HttpError::Serialization`] rather than a wire error.
    pub fn fetch<R>(&self, url: &str) -> Response<R>
    where
        R: DeserializeOwned,
    {
        let response = self.inner.get(url).send()?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(HttpError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text()?;
        serde_json::from_str(&body).map_err(|err| {
            tracing::warn!("response body did not parse: {}", err);
            HttpError::from(err)
        })
    }
}

/// Blocking HTTP client builder for configuring TLS settings
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    accept_invalid_certs: bool,
}

impl HttpClientBuilder {
    /// Accept invalid TLS certificates
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Build the blocking HTTP client
    pub fn build(self) -> Response<HttpClient> {
        let client = reqwest::blocking::Client::builder()
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .build()
            .map_err(HttpError::from)?;
        Ok(HttpClient { inner: client })
    }
}

/// One-shot GET: builds a client, issues the request, drops the connection
pub fn fetch<R: DeserializeOwned>(url: &str) -> Response<R> {
    HttpClient::new().fetch(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new() {
        let client = HttpClient::new();
        let _ = format!("{:?}", client);
    }

    #[test]
    fn test_builder_build() {
        let result = HttpClientBuilder::default().build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_builder_accept_invalid_certs() {
        let result = HttpClientBuilder::default()
            .danger_accept_invalid_certs(true)
            .build();
        assert!(result.is_ok());
    }
}
