//! Typed Rust client for the [fakerapi.it] fake-data generation service.
//!
//! Ten resource collections (addresses, books, companies, credit cards,
//! images, persons, places, products, texts, users) are fetched over plain
//! GET requests and materialized into typed wrappers; known nested relations
//! (a person's address, a company's addresses and contact, a product's
//! images) are materialized recursively. Callers who want the untouched JSON
//! envelope use `fetch_json` instead.
//!
//! The async [`FakerClient`] keeps one connection pool for its lifetime; the
//! [`blocking`] client (feature `blocking`, on by default) performs
//! self-contained round trips without a runtime.
//!
//! # Example
//!
//! ```no_run
//! use fakerapi::{FakerClient, PersonRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), fakerapi::Error> {
//!     let client = FakerClient::builder().seed(7).build()?;
//!
//!     let person = client
//!         .persons(&PersonRequest::default())
//!         .await?
//!         .one()
//!         .expect("quantity 1 yields one object");
//!
//!     println!(
//!         "{} {}",
//!         person.firstname().unwrap_or_default(),
//!         person.lastname().unwrap_or_default()
//!     );
//!     Ok(())
//! }
//! ```
//!
//! [fakerapi.it]: https://fakerapi.it

mod client;
mod error;
mod params;
mod query;
mod request;
mod resource;
mod response;
mod service_url;

#[cfg(feature = "blocking")]
pub mod blocking;

pub use fakerapi_http_client::HttpError;

pub use crate::client::{FakerClient, FakerClientBuilder};
pub use crate::error::Error;
pub use crate::params::{CategoriesType, Gender, ImageType, Locale};
pub use crate::query::{Endpoint, Query};
pub use crate::request::{
    AddressRequest, BookRequest, CompanyRequest, CreditCardRequest, FakerRequest, ImageRequest,
    PersonRequest, PlaceRequest, ProductRequest, TextRequest, UserRequest,
};
pub use crate::resource::{
    Address, Book, Company, CreditCard, FromData, Image, Person, Place, Product, Text, User,
};
pub use crate::response::Fetched;
pub use crate::service_url::{ServiceUrl, DEFAULT_BASE_URL};
