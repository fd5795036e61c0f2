//! Blocking client facade
//!
//! Same request-shaping and materialization as the async [`FakerClient`];
//! every call performs one self-contained round trip on the calling thread
//! over a fresh connection.
//!
//! [`FakerClient`]: crate::FakerClient

use fakerapi_http_client::blocking::HttpClient;
use serde_json::Value;
use tracing::instrument;

use crate::client::Config;
use crate::error::Error;
use crate::params::Locale;
use crate::request::{
    AddressRequest, BookRequest, CompanyRequest, CreditCardRequest, FakerRequest, ImageRequest,
    PersonRequest, PlaceRequest, ProductRequest, TextRequest, UserRequest,
};
use crate::resource::{
    Address, Book, Company, CreditCard, Image, Person, Place, Product, Text, User,
};
use crate::response::{self, Fetched};
use crate::service_url::ServiceUrl;

/// Blocking client for the fake-data service
///
/// Unlike the async client this one verifies TLS certificates by default;
/// see [`FakerClientBuilder::verify_tls`].
#[derive(Debug, Clone)]
pub struct FakerClient {
    config: Config,
    verify_tls: bool,
}

impl Default for FakerClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FakerClient {
    /// Client with default settings
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Builder for locale, seed, base URL and TLS settings
    pub fn builder() -> FakerClientBuilder {
        FakerClientBuilder::default()
    }

    fn transport(&self) -> Result<HttpClient, Error> {
        Ok(HttpClient::builder()
            .danger_accept_invalid_certs(!self.verify_tls)
            .build()?)
    }

    /// Fetch any request and materialize the response
    ///
    /// Occupies the calling thread for the full round trip.
    #[instrument(skip(self, request), fields(endpoint = %request.endpoint()))]
    pub fn fetch<R>(&self, request: &R) -> Result<Fetched<R::Output>, Error>
    where
        R: FakerRequest,
    {
        let url = self.config.request_url(request)?;
        let envelope: Value = self.transport()?.fetch(url.as_str())?;
        response::materialize(envelope, request.quantity())
    }

    /// Fetch any request and hand back the JSON envelope unchanged
    #[instrument(skip(self, request), fields(endpoint = %request.endpoint()))]
    pub fn fetch_json<R>(&self, request: &R) -> Result<Value, Error>
    where
        R: FakerRequest,
    {
        let url = self.config.request_url(request)?;
        Ok(self.transport()?.fetch(url.as_str())?)
    }

    /// Fetch postal addresses
    pub fn addresses(&self, request: &AddressRequest) -> Result<Fetched<Address>, Error> {
        self.fetch(request)
    }

    /// Fetch books
    pub fn books(&self, request: &BookRequest) -> Result<Fetched<Book>, Error> {
        self.fetch(request)
    }

    /// Fetch companies
    pub fn companies(&self, request: &CompanyRequest) -> Result<Fetched<Company>, Error> {
        self.fetch(request)
    }

    /// Fetch credit cards
    pub fn credit_cards(
        &self,
        request: &CreditCardRequest,
    ) -> Result<Fetched<CreditCard>, Error> {
        self.fetch(request)
    }

    /// Fetch images
    pub fn images(&self, request: &ImageRequest) -> Result<Fetched<Image>, Error> {
        self.fetch(request)
    }

    /// Fetch persons
    pub fn persons(&self, request: &PersonRequest) -> Result<Fetched<Person>, Error> {
        self.fetch(request)
    }

    /// Fetch places
    pub fn places(&self, request: &PlaceRequest) -> Result<Fetched<Place>, Error> {
        self.fetch(request)
    }

    /// Fetch products
    pub fn products(&self, request: &ProductRequest) -> Result<Fetched<Product>, Error> {
        self.fetch(request)
    }

    /// Fetch texts
    pub fn texts(&self, request: &TextRequest) -> Result<Fetched<Text>, Error> {
        self.fetch(request)
    }

    /// Fetch users
    pub fn users(&self, request: &UserRequest) -> Result<Fetched<User>, Error> {
        self.fetch(request)
    }
}

/// Builder for the blocking [`FakerClient`]
#[derive(Debug)]
pub struct FakerClientBuilder {
    base_url: ServiceUrl,
    locale: Locale,
    seed: Option<u64>,
    verify_tls: bool,
}

impl Default for FakerClientBuilder {
    fn default() -> Self {
        Self {
            base_url: ServiceUrl::default(),
            locale: Locale::default(),
            seed: None,
            verify_tls: true,
        }
    }
}

impl FakerClientBuilder {
    /// Point the client at another base URL
    pub fn base_url(mut self, url: impl Into<ServiceUrl>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Default locale for every call
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Default seed for every call; generated once at build time when unset
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Accept invalid TLS certificates when turned off
    pub fn verify_tls(mut self, verify: bool) -> Self {
        self.verify_tls = verify;
        self
    }

    /// Build the client
    ///
    /// Nothing is connected here; each call builds its own transport.
    pub fn build(self) -> FakerClient {
        FakerClient {
            config: Config {
                base_url: self.base_url,
                locale: self.locale,
                seed: self.seed.unwrap_or_else(rand::random),
            },
            verify_tls: self.verify_tls,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_builds() {
        let client = FakerClient::builder()
            .locale(Locale::EnEn)
            .seed(5)
            .build();
        let _ = format!("{:?}", client);
    }

    #[test]
    fn test_default_client_builds() {
        let client = FakerClient::new();
        let _ = format!("{:?}", client);
    }
}
