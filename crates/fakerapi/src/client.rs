//! Async client facade

use fakerapi_http_client::HttpClient;
use serde_json::Value;
use tracing::instrument;
use url::Url;

use crate::error::Error;
use crate::params::Locale;
use crate::query::Query;
use crate::request::{
    AddressRequest, BookRequest, CompanyRequest, CreditCardRequest, FakerRequest, ImageRequest,
    PersonRequest, PlaceRequest, ProductRequest, TextRequest, UserRequest,
};
use crate::resource::{
    Address, Book, Company, CreditCard, Image, Person, Place, Product, Text, User,
};
use crate::response::{self, Fetched};
use crate::service_url::ServiceUrl;

/// Client defaults shared by both facades
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) base_url: ServiceUrl,
    pub(crate) locale: Locale,
    pub(crate) seed: u64,
}

impl Config {
    /// Validate one request, expand its query and address it
    ///
    /// Per-call overrides win over the client defaults. The common
    /// parameters go first, resource-specific ones after, in the order the
    /// service documents them.
    pub(crate) fn request_url<R: FakerRequest>(&self, request: &R) -> Result<Url, Error> {
        request.validate()?;

        let mut query = Query::new();
        query.push("quantity", request.quantity());
        query.push_opt("seed", request.seed().or(Some(self.seed)));
        query.push("locale", request.locale().unwrap_or(self.locale));
        request.extend_query(&mut query);

        let mut url = self.base_url.join(request.endpoint().path())?;
        url.set_query(Some(&query.encode()));
        tracing::debug!(%url, "GET");
        Ok(url)
    }
}

/// Asynchronous client for the fake-data service
///
/// One connection pool is created when the client is built and reused for
/// every call; dropping the last clone releases it. TLS certificate
/// verification is off by default because the hosted service presents a
/// certificate chain that fails strict verification; see
/// [`FakerClientBuilder::verify_tls`].
///
/// Calls suspend only while awaiting the response and share nothing mutable,
/// so one client can serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct FakerClient {
    http: HttpClient,
    config: Config,
}

impl FakerClient {
    /// Client with default settings
    pub fn new() -> Result<Self, Error> {
        Self::builder().build()
    }

    /// Builder for locale, seed, base URL and TLS settings
    pub fn builder() -> FakerClientBuilder {
        FakerClientBuilder::default()
    }

    /// Fetch any request and materialize the response
    #[instrument(skip(self, request), fields(endpoint = %request.endpoint()))]
    pub async fn fetch<R>(&self, request: &R) -> Result<Fetched<R::Output>, Error>
    where
        R: FakerRequest,
    {
        let url = self.config.request_url(request)?;
        let envelope: Value = self.http.fetch(url.as_str()).await?;
        response::materialize(envelope, request.quantity())
    }

    /// Fetch any request and hand back the JSON envelope unchanged
    #[instrument(skip(self, request), fields(endpoint = %request.endpoint()))]
    pub async fn fetch_json<R>(&self, request: &R) -> Result<Value, Error>
    where
        R: FakerRequest,
    {
        let url = self.config.request_url(request)?;
        Ok(self.http.fetch(url.as_str()).await?)
    }

    /// Fetch postal addresses
    pub async fn addresses(&self, request: &AddressRequest) -> Result<Fetched<Address>, Error> {
        self.fetch(request).await
    }

    /// Fetch books
    pub async fn books(&self, request: &BookRequest) -> Result<Fetched<Book>, Error> {
        self.fetch(request).await
    }

    /// Fetch companies
    pub async fn companies(&self, request: &CompanyRequest) -> Result<Fetched<Company>, Error> {
        self.fetch(request).await
    }

    /// Fetch credit cards
    pub async fn credit_cards(
        &self,
        request: &CreditCardRequest,
    ) -> Result<Fetched<CreditCard>, Error> {
        self.fetch(request).await
    }

    /// Fetch images
    pub async fn images(&self, request: &ImageRequest) -> Result<Fetched<Image>, Error> {
        self.fetch(request).await
    }

    /// Fetch persons
    pub async fn persons(&self, request: &PersonRequest) -> Result<Fetched<Person>, Error> {
        self.fetch(request).await
    }

    /// Fetch places
    pub async fn places(&self, request: &PlaceRequest) -> Result<Fetched<Place>, Error> {
        self.fetch(request).await
    }

    /// Fetch products
    pub async fn products(&self, request: &ProductRequest) -> Result<Fetched<Product>, Error> {
        self.fetch(request).await
    }

    /// Fetch texts
    pub async fn texts(&self, request: &TextRequest) -> Result<Fetched<Text>, Error> {
        self.fetch(request).await
    }

    /// Fetch users
    pub async fn users(&self, request: &UserRequest) -> Result<Fetched<User>, Error> {
        self.fetch(request).await
    }
}

/// Builder for [`FakerClient`]
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
            verify_tls: false,
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

    /// Turn TLS certificate verification back on
    pub fn verify_tls(mut self, verify: bool) -> Self {
        self.verify_tls = verify;
        self
    }

    /// Build the client and its connection pool
    pub fn build(self) -> Result<FakerClient, Error> {
        let http = HttpClient::builder()
            .danger_accept_invalid_certs(!self.verify_tls)
            .build()?;

        Ok(FakerClient {
            http,
            config: Config {
                base_url: self.base_url,
                locale: self.locale,
                seed: self.seed.unwrap_or_else(rand::random),
            },
        })
    }
}
