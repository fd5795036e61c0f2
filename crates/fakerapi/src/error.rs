//! Error types

use fakerapi_http_client::HttpError;
use thiserror::Error;

/// Errors returned by the fakerapi client
#[derive(Debug, Error)]
pub enum Error {
    /// Locale outside the service's allow-list
    #[error("locale must be one of en_US, en_EN, fr_FR, not `{0}`")]
    InvalidLocale(String),
    /// Gender outside the service's allow-list
    #[error("gender must be one of male, female, not `{0}`")]
    InvalidGender(String),
    /// Image type outside the service's allow-list
    #[error("image type must be one of any, animals, architecture, nature, people, tech, kittens, pokemon, not `{0}`")]
    InvalidImageType(String),
    /// Product categories type outside the service's allow-list
    #[error("categories type must be one of integer, string, uuid, not `{0}`")]
    InvalidCategoriesType(String),
    /// Date argument not in `YYYY-MM-DD` form
    #[error("{field} must match the format `2000-01-13`, got `{value}`")]
    InvalidDate {
        /// Parameter that failed the check
        field: &'static str,
        /// Offending value
        value: String,
    },
    /// The envelope's `data` array was empty although one object was requested
    #[error("the service returned no objects")]
    EmptyData,
    /// An element of `data` was not a JSON object
    #[error("expected a JSON object in `data`, got `{0}`")]
    UnexpectedShape(String),
    /// Transport failure, surfaced unchanged
    #[error(transparent)]
    Http(#[from] HttpError),
    /// The response envelope did not have the expected shape
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// Invalid URL
    #[error(transparent)]
    Url(#[from] url::ParseError),
}
