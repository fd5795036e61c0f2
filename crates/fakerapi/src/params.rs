//! Request parameter vocabulary and validation
//!
//! The service accepts a fixed vocabulary for locale, gender, image type and
//! product category type. Each vocabulary is an enum whose `FromStr` impl is
//! the allow-list check: anything outside it fails with the matching
//! [`Error`] variant before a request is ever built.

use core::fmt;
use core::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Error;

/// Four digits, dash, two digits, dash, two digits. Digits are not
/// range-checked; the service itself accepts month 13.
static BIRTHDAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("pattern is valid"));

/// Check a birthday bound against the `YYYY-MM-DD` shape
pub(crate) fn check_birthday(field: &'static str, value: &str) -> Result<(), Error> {
    if BIRTHDAY_RE.is_match(value) {
        Ok(())
    } else {
        Err(Error::InvalidDate {
            field,
            value: value.to_string(),
        })
    }
}

/// Response language requested from the service
///
/// The service documents its locales only through examples; these three are
/// the ones it answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    /// `en_US`, the service default
    #[default]
    EnUs,
    /// `en_EN`
    EnEn,
    /// `fr_FR`
    FrFr,
}

impl Locale {
    /// Every locale the service understands
    pub const ALL: [Self; 3] = [Self::EnUs, Self::EnEn, Self::FrFr];

    /// Wire form of the locale
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EnUs => "en_US",
            Self::EnEn => "en_EN",
            Self::FrFr => "fr_FR",
        }
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "en_US" => Ok(Self::EnUs),
            "en_EN" => Ok(Self::EnEn),
            "fr_FR" => Ok(Self::FrFr),
            _ => Err(Error::InvalidLocale(value.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Gender of a requested person or user
///
/// The service accepts no other values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Gender {
    /// `male`
    #[default]
    Male,
    /// `female`
    Female,
}

impl Gender {
    /// Every gender the service understands
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// Wire form of the gender
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(Error::InvalidGender(value.to_string())),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category of a requested image
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageType {
    /// `any`, the service default
    #[default]
    Any,
    /// `animals`
    Animals,
    /// `architecture`
    Architecture,
    /// `nature`
    Nature,
    /// `people`
    People,
    /// `tech`
    Tech,
    /// `kittens`
    Kittens,
    /// `pokemon`
    Pokemon,
}

impl ImageType {
    /// Every image category the service understands
    pub const ALL: [Self; 8] = [
        Self::Any,
        Self::Animals,
        Self::Architecture,
        Self::Nature,
        Self::People,
        Self::Tech,
        Self::Kittens,
        Self::Pokemon,
    ];

    /// Wire form of the image category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Animals => "animals",
            Self::Architecture => "architecture",
            Self::Nature => "nature",
            Self::People => "people",
            Self::Tech => "tech",
            Self::Kittens => "kittens",
            Self::Pokemon => "pokemon",
        }
    }
}

impl FromStr for ImageType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "any" => Ok(Self::Any),
            "animals" => Ok(Self::Animals),
            "architecture" => Ok(Self::Architecture),
            "nature" => Ok(Self::Nature),
            "people" => Ok(Self::People),
            "tech" => Ok(Self::Tech),
            "kittens" => Ok(Self::Kittens),
            "pokemon" => Ok(Self::Pokemon),
            _ => Err(Error::InvalidImageType(value.to_string())),
        }
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Key type of the category list attached to a requested product
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoriesType {
    /// `integer`
    Integer,
    /// `string`
    String,
    /// `uuid`
    Uuid,
}

impl CategoriesType {
    /// Every category key type the service understands
    pub const ALL: [Self; 3] = [Self::Integer, Self::String, Self::Uuid];

    /// Wire form of the category key type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::String => "string",
            Self::Uuid => "uuid",
        }
    }
}

impl FromStr for CategoriesType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "integer" => Ok(Self::Integer),
            "string" => Ok(Self::String),
            "uuid" => Ok(Self::Uuid),
            _ => Err(Error::InvalidCategoriesType(value.to_string())),
        }
    }
}

impl fmt::Display for CategoriesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
