//! Per-resource request descriptors
//!
//! One struct per collection, built fresh for every call. Defaults mirror
//! what the service assumes when a parameter is left out; `seed` and
//! `locale` stay unset here so the client defaults apply.

use crate::error::Error;
use crate::params::{check_birthday, CategoriesType, Gender, ImageType, Locale};
use crate::query::{Endpoint, Query};
use crate::resource::{
    Address, Book, Company, CreditCard, FromData, Image, Person, Place, Product, Text, User,
};

/// One fetch against a service collection
///
/// Implementations carry the endpoint, the quantity, per-call overrides for
/// the client defaults, argument validation, and the resource-specific query
/// parameters. Both the async and the blocking facade consume requests
/// through this trait; validation always runs to completion before a request
/// is built.
pub trait FakerRequest {
    /// Wrapper kind this request materializes into
    type Output: FromData;

    /// Collection the request is routed to
    fn endpoint(&self) -> Endpoint;

    /// Number of objects requested
    fn quantity(&self) -> u32;

    /// Per-call seed override
    fn seed(&self) -> Option<u64>;

    /// Per-call locale override
    fn locale(&self) -> Option<Locale>;

    /// Reject invalid arguments before any request is built
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }

    /// Append resource-specific parameters after the common ones
    fn extend_query(&self, query: &mut Query) {
        let _ = query;
    }
}

/// Parameters for an `addresses` fetch
#[derive(Debug, Clone)]
pub struct AddressRequest {
    /// Number of objects to request, 1 by default
    pub quantity: u32,
    /// Seed override; the client's seed applies when unset
    pub seed: Option<u64>,
    /// Locale override; the client's locale applies when unset
    pub locale: Option<Locale>,
}

impl Default for AddressRequest {
    fn default() -> Self {
        Self {
            quantity: 1,
            seed: None,
            locale: None,
        }
    }
}

impl FakerRequest for AddressRequest {
    type Output = Address;

    fn endpoint(&self) -> Endpoint {
        Endpoint::Addresses
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn locale(&self) -> Option<Locale> {
        self.locale
    }
}

/// Parameters for a `books` fetch
#[derive(Debug, Clone)]
pub struct BookRequest {
    /// Number of objects to request, 1 by default
    pub quantity: u32,
    /// Seed override; the client's seed applies when unset
    pub seed: Option<u64>,
    /// Locale override; the client's locale applies when unset
    pub locale: Option<Locale>,
}

impl Default for BookRequest {
    fn default() -> Self {
        Self {
            quantity: 1,
            seed: None,
            locale: None,
        }
    }
}

impl FakerRequest for BookRequest {
    type Output = Book;

    fn endpoint(&self) -> Endpoint {
        Endpoint::Books
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn locale(&self) -> Option<Locale> {
        self.locale
    }
}

/// Parameters for a `companies` fetch
#[derive(Debug, Clone)]
pub struct CompanyRequest {
    /// Number of objects to request, 1 by default
    pub quantity: u32,
    /// Seed override; the client's seed applies when unset
    pub seed: Option<u64>,
    /// Locale override; the client's locale applies when unset
    pub locale: Option<Locale>,
}

impl Default for CompanyRequest {
    fn default() -> Self {
        Self {
            quantity: 1,
            seed: None,
            locale: None,
        }
    }
}

impl FakerRequest for CompanyRequest {
    type Output = Company;

    fn endpoint(&self) -> Endpoint {
        Endpoint::Companies
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn locale(&self) -> Option<Locale> {
        self.locale
    }
}

/// Parameters for a `credit_cards` fetch
#[derive(Debug, Clone)]
pub struct CreditCardRequest {
    /// Number of objects to request, 1 by default
    pub quantity: u32,
    /// Seed override; the client's seed applies when unset
    pub seed: Option<u64>,
    /// Locale override; the client's locale applies when unset
    pub locale: Option<Locale>,
}

impl Default for CreditCardRequest {
    fn default() -> Self {
        Self {
            quantity: 1,
            seed: None,
            locale: None,
        }
    }
}

impl FakerRequest for CreditCardRequest {
    type Output = CreditCard;

    fn endpoint(&self) -> Endpoint {
        Endpoint::CreditCards
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn locale(&self) -> Option<Locale> {
        self.locale
    }
}

/// Parameters for an `images` fetch
#[derive(Debug, Clone)]
pub struct ImageRequest {
    /// Number of objects to request, 1 by default
    pub quantity: u32,
    /// Seed override; the client's seed applies when unset
    pub seed: Option<u64>,
    /// Locale override; the client's locale applies when unset
    pub locale: Option<Locale>,
    /// Image category, `any` by default
    pub image_type: ImageType,
    /// Width in pixels, 640 by default
    pub width: u32,
    /// Height in pixels, 480 by default
    pub height: u32,
}

impl Default for ImageRequest {
    fn default() -> Self {
        Self {
            quantity: 1,
            seed: None,
            locale: None,
            image_type: ImageType::Any,
            width: 640,
            height: 480,
        }
    }
}

impl FakerRequest for ImageRequest {
    type Output = Image;

    fn endpoint(&self) -> Endpoint {
        Endpoint::Images
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn locale(&self) -> Option<Locale> {
        self.locale
    }

    fn extend_query(&self, query: &mut Query) {
        query.push("type", self.image_type);
        query.push("width", self.width);
        query.push("height", self.height);
    }
}

/// Parameters for a `persons` fetch
#[derive(Debug, Clone)]
pub struct PersonRequest {
    /// Number of objects to request, 1 by default
    pub quantity: u32,
    /// Seed override; the client's seed applies when unset
    pub seed: Option<u64>,
    /// Locale override; the client's locale applies when unset
    pub locale: Option<Locale>,
    /// Gender to generate, `male` by default
    pub gender: Gender,
    /// Earliest birthday, as `YYYY-MM-DD`
    pub birthday_start: String,
    /// Latest birthday, as `YYYY-MM-DD`
    pub birthday_end: String,
    /// Check the birthday bounds before sending; on by default
    pub date_check: bool,
}

impl Default for PersonRequest {
    fn default() -> Self {
        Self {
            quantity: 1,
            seed: None,
            locale: None,
            gender: Gender::Male,
            birthday_start: "2000-00-00".to_string(),
            birthday_end: "2020-00-00".to_string(),
            date_check: true,
        }
    }
}

impl FakerRequest for PersonRequest {
    type Output = Person;

    fn endpoint(&self) -> Endpoint {
        Endpoint::Persons
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn locale(&self) -> Option<Locale> {
        self.locale
    }

    fn validate(&self) -> Result<(), Error> {
        if self.date_check {
            check_birthday("birthday_start", &self.birthday_start)?;
            check_birthday("birthday_end", &self.birthday_end)?;
        }
        Ok(())
    }

    fn extend_query(&self, query: &mut Query) {
        query.push("gender", self.gender);
        query.push("birthday_start", &self.birthday_start);
        query.push("birthday_end", &self.birthday_end);
    }
}

/// Parameters for a `places` fetch
#[derive(Debug, Clone)]
pub struct PlaceRequest {
    /// Number of objects to request, 1 by default
    pub quantity: u32,
    /// Seed override; the client's seed applies when unset
    pub seed: Option<u64>,
    /// Locale override; the client's locale applies when unset
    pub locale: Option<Locale>,
}

impl Default for PlaceRequest {
    fn default() -> Self {
        Self {
            quantity: 1,
            seed: None,
            locale: None,
        }
    }
}

impl FakerRequest for PlaceRequest {
    type Output = Place;

    fn endpoint(&self) -> Endpoint {
        Endpoint::Places
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn locale(&self) -> Option<Locale> {
        self.locale
    }
}

/// Parameters for a `products` fetch
#[derive(Debug, Clone)]
pub struct ProductRequest {
    /// Number of objects to request, 1 by default
    pub quantity: u32,
    /// Seed override; the client's seed applies when unset
    pub seed: Option<u64>,
    /// Locale override; the client's locale applies when unset
    pub locale: Option<Locale>,
    /// Lowest price to generate; left to the service when unset
    pub price_min: Option<f64>,
    /// Highest price to generate; left to the service when unset
    pub price_max: Option<f64>,
    /// Tax percentage; left to the service when unset
    pub taxes: Option<u32>,
    /// Key type of the category list; left to the service when unset
    pub categories_type: Option<CategoriesType>,
}

impl Default for ProductRequest {
    fn default() -> Self {
        Self {
            quantity: 1,
            seed: None,
            locale: None,
            price_min: None,
            price_max: None,
            taxes: None,
            categories_type: None,
        }
    }
}

impl FakerRequest for ProductRequest {
    type Output = Product;

    fn endpoint(&self) -> Endpoint {
        Endpoint::Products
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn locale(&self) -> Option<Locale> {
        self.locale
    }

    fn extend_query(&self, query: &mut Query) {
        query.push_opt("price_min", self.price_min);
        query.push_opt("price_max", self.price_max);
        query.push_opt("taxes", self.taxes);
        query.push_opt("categories_type", self.categories_type);
    }
}

/// Parameters for a `texts` fetch
#[derive(Debug, Clone)]
pub struct TextRequest {
    /// Number of objects to request, 1 by default
    pub quantity: u32,
    /// Seed override; the client's seed applies when unset
    pub seed: Option<u64>,
    /// Locale override; the client's locale applies when unset
    pub locale: Option<Locale>,
    /// Length of each text in characters; left to the service when unset
    pub characters: Option<u32>,
}

impl Default for TextRequest {
    fn default() -> Self {
        Self {
            quantity: 1,
            seed: None,
            locale: None,
            characters: None,
        }
    }
}

impl FakerRequest for TextRequest {
    type Output = Text;

    fn endpoint(&self) -> Endpoint {
        Endpoint::Texts
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn locale(&self) -> Option<Locale> {
        self.locale
    }

    fn extend_query(&self, query: &mut Query) {
        query.push_opt("characters", self.characters);
    }
}

/// Parameters for a `users` fetch
#[derive(Debug, Clone)]
pub struct UserRequest {
    /// Number of objects to request, 1 by default
    pub quantity: u32,
    /// Seed override; the client's seed applies when unset
    pub seed: Option<u64>,
    /// Locale override; the client's locale applies when unset
    pub locale: Option<Locale>,
    /// Gender to generate, `male` by default
    pub gender: Gender,
}

impl Default for UserRequest {
    fn default() -> Self {
        Self {
            quantity: 1,
            seed: None,
            locale: None,
            gender: Gender::Male,
        }
    }
}

impl FakerRequest for UserRequest {
    type Output = User;

    fn endpoint(&self) -> Endpoint {
        Endpoint::Users
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn locale(&self) -> Option<Locale> {
        self.locale
    }

    fn extend_query(&self, query: &mut Query) {
        query.push("gender", self.gender);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_quantities_are_one() {
        assert_eq!(AddressRequest::default().quantity(), 1);
        assert_eq!(PersonRequest::default().quantity(), 1);
        assert_eq!(ProductRequest::default().quantity(), 1);
    }

    #[test]
    fn test_default_person_passes_validation() {
        // The stock bounds are zero-dates, which the shape check accepts.
        PersonRequest::default()
            .validate()
            .expect("default request should validate");
    }

    #[test]
    fn test_person_bad_birthday_fails_validation() {
        let request = PersonRequest {
            birthday_start: "2000/01/13".to_string(),
            ..Default::default()
        };
        let err = request.validate().expect_err("slashed date should fail");
        assert!(matches!(err, Error::InvalidDate { field, .. } if field == "birthday_start"));
    }

    #[test]
    fn test_person_date_check_can_be_disabled() {
        let request = PersonRequest {
            birthday_start: "whenever".to_string(),
            birthday_end: "later".to_string(),
            date_check: false,
            ..Default::default()
        };
        request
            .validate()
            .expect("unchecked dates should pass through");
    }

    #[test]
    fn test_person_query_parameters() {
        let mut query = Query::new();
        PersonRequest::default().extend_query(&mut query);
        assert_eq!(
            query.encode(),
            "_gender=male&_birthday_start=2000-00-00&_birthday_end=2020-00-00"
        );
    }

    #[test]
    fn test_image_query_parameters() {
        let mut query = Query::new();
        ImageRequest {
            image_type: ImageType::Kittens,
            ..Default::default()
        }
        .extend_query(&mut query);
        assert_eq!(query.encode(), "_type=kittens&_width=640&_height=480");
    }

    #[test]
    fn test_product_unset_parameters_are_omitted() {
        let mut query = Query::new();
        ProductRequest::default().extend_query(&mut query);
        assert_eq!(query.encode(), "");
    }

    #[test]
    fn test_product_set_parameters_are_emitted() {
        let mut query = Query::new();
        ProductRequest {
            price_min: Some(1.5),
            price_max: Some(99.0),
            taxes: Some(22),
            categories_type: Some(CategoriesType::Uuid),
            ..Default::default()
        }
        .extend_query(&mut query);
        assert_eq!(
            query.encode(),
            "_price_min=1.5&_price_max=99&_taxes=22&_categories_type=uuid"
        );
    }
}
