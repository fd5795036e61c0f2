//! Typed wrappers over the objects a response envelope carries
//!
//! Materializing an object converts the known nested relations first
//! (`address` and `contact` into their wrapper, `addresses` and `images`
//! into ordered wrapper sequences), then keeps every remaining field,
//! documented or not, in a flat name-to-value map. The pristine JSON sticks around: two
//! wrappers compare equal exactly when their raw JSON documents are equal,
//! and undocumented fields stay reachable through `get`.
//!
//! The documented attribute sets below describe what the service usually
//! returns; nothing is enforced, so every accessor yields an `Option`.

use serde_json::{Map, Value};

use crate::error::Error;

/// Types buildable from one element of a response envelope's `data` array
pub trait FromData: Sized {
    /// Materialize one JSON object into `Self`
    fn from_data(value: Value) -> Result<Self, Error>;
}

/// One materialized service object, backing every resource wrapper
#[derive(Debug, Clone)]
pub(crate) struct Record {
    raw: Value,
    address: Option<Box<Address>>,
    addresses: Vec<Address>,
    images: Vec<Image>,
    contact: Option<Box<Person>>,
    fields: Map<String, Value>,
}

impl Record {
    fn from_value(raw: Value) -> Result<Self, Error> {
        let mut fields = match raw.as_object() {
            Some(map) => map.clone(),
            None => return Err(Error::UnexpectedShape(raw.to_string())),
        };

        let address = match take(&mut fields, "address") {
            Some(value) => Some(Box::new(Address::from_data(value)?)),
            None => None,
        };
        let contact = match take(&mut fields, "contact") {
            Some(value) => Some(Box::new(Person::from_data(value)?)),
            None => None,
        };
        let addresses = take_array::<Address>(&mut fields, "addresses")?;
        let images = take_array::<Image>(&mut fields, "images")?;

        Ok(Self {
            raw,
            address,
            addresses,
            images,
            contact,
            fields,
        })
    }

    fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    fn str_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    fn i64_field(&self, name: &str) -> Option<i64> {
        self.fields.get(name).and_then(Value::as_i64)
    }

    fn f64_field(&self, name: &str) -> Option<f64> {
        self.fields.get(name).and_then(Value::as_f64)
    }

    fn array_field(&self, name: &str) -> Option<&[Value]> {
        self.fields
            .get(name)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

/// `null` relations count as absent
fn take(fields: &mut Map<String, Value>, name: &str) -> Option<Value> {
    match fields.remove(name) {
        Some(Value::Null) | None => None,
        Some(value) => Some(value),
    }
}

fn take_array<T: FromData>(fields: &mut Map<String, Value>, name: &str) -> Result<Vec<T>, Error> {
    match take(fields, name) {
        Some(Value::Array(items)) => items.into_iter().map(T::from_data).collect(),
        Some(other) => Err(Error::UnexpectedShape(other.to_string())),
        None => Ok(Vec::new()),
    }
}

macro_rules! field_key {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident $key:tt) => {
        $key
    };
}

macro_rules! accessor {
    ($(#[$m:meta])* $field:ident: str $(as $key:tt)?) => {
        $(#[$m])*
        pub fn $field(&self) -> Option<&str> {
            self.0.str_field(field_key!($field $($key)?))
        }
    };
    ($(#[$m:meta])* $field:ident: i64 $(as $key:tt)?) => {
        $(#[$m])*
        pub fn $field(&self) -> Option<i64> {
            self.0.i64_field(field_key!($field $($key)?))
        }
    };
    ($(#[$m:meta])* $field:ident: f64 $(as $key:tt)?) => {
        $(#[$m])*
        pub fn $field(&self) -> Option<f64> {
            self.0.f64_field(field_key!($field $($key)?))
        }
    };
    ($(#[$m:meta])* $field:ident: array $(as $key:tt)?) => {
        $(#[$m])*
        pub fn $field(&self) -> Option<&[Value]> {
            self.0.array_field(field_key!($field $($key)?))
        }
    };
}

macro_rules! resources {
    ($(
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$fmeta:meta])* $field:ident: $kind:ident $(as $key:tt)? ),* $(,)?
        }
    )*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name(Record);

        impl $name {
            /// The untouched JSON object this value was built from
            pub fn raw(&self) -> &Value {
                &self.0.raw
            }

            /// Look up any flat field the service returned, documented or not
            pub fn get(&self, name: &str) -> Option<&Value> {
                self.0.get(name)
            }

            $( accessor!($(#[$fmeta])* $field: $kind $(as $key)?); )*
        }

        impl FromData for $name {
            fn from_data(value: Value) -> Result<Self, Error> {
                Record::from_value(value).map(Self)
            }
        }
    )*};
}

resources! {
    /// A postal address
    Address {
        /// Numeric identifier
        id: i64,
        /// Full street line, building number included
        street: str,
        /// Street name alone
        street_name: str as "streetName",
        /// Building number alone
        building_number: str as "buildingNumber",
        /// City name
        city: str,
        /// Postal code
        zipcode: str,
        /// Country name
        country: str,
        /// Country code
        county_code: str,
        /// Latitude in degrees
        latitude: f64,
        /// Longitude in degrees
        longitude: f64,
    }

    /// A book
    Book {
        /// Numeric identifier
        id: i64,
        /// Title
        title: str,
        /// Author name
        author: str,
        /// Genre
        genre: str,
        /// Back-cover blurb
        description: str,
        /// ISBN
        isbn: str,
        /// Cover image URL
        image: str,
        /// Publication date
        published: str,
        /// Publisher name
        publisher: str,
    }

    /// A company, with embedded addresses and a contact person
    Company {
        /// Numeric identifier
        id: i64,
        /// Company name
        name: str,
        /// Contact email
        email: str,
        /// VAT number
        vat: str,
        /// Phone number
        phone: str,
        /// Country name
        country: str,
        /// Website URL
        website: str,
        /// Logo URL
        image: str,
    }

    /// A credit card
    CreditCard {
        /// Card network, e.g. `Visa`
        card_type: str as "type",
        /// Card number
        number: str,
        /// Expiration date
        expiration: str,
        /// Card holder name
        owner: str,
    }

    /// An image
    Image {
        /// Title
        title: str,
        /// Description
        description: str,
        /// Image URL
        url: str,
    }

    /// A person, with an embedded address
    Person {
        /// Numeric identifier
        id: i64,
        /// First name
        firstname: str,
        /// Last name
        lastname: str,
        /// Email address
        email: str,
        /// Phone number
        phone: str,
        /// Birthday as `YYYY-MM-DD`
        birthday: str,
        /// Gender
        gender: str,
        /// Website URL
        website: str,
        /// Portrait URL
        image: str,
    }

    /// A geographic position
    Place {
        /// Latitude in degrees
        latitude: f64,
        /// Longitude in degrees
        longitude: f64,
    }

    /// A product, with embedded images
    Product {
        /// Numeric identifier
        id: i64,
        /// Product name
        name: str,
        /// Description
        description: str,
        /// EAN barcode
        ean: str,
        /// UPC barcode
        upc: str,
        /// Image URL
        image: str,
        /// Price before taxes
        net_price: f64,
        /// Tax percentage
        taxes: i64,
        /// Price after taxes, as the service formats it
        price: str,
        /// Category keys; their type follows the requested categories type
        categories: array,
        /// Tags
        tags: array,
    }

    /// A text fragment
    Text {
        /// Title
        title: str,
        /// Author name
        author: str,
        /// Genre
        genre: str,
        /// Body
        content: str,
    }

    /// A user account
    User {
        /// Numeric identifier
        id: i64,
        /// UUID
        uuid: str,
        /// First name
        firstname: str,
        /// Last name
        lastname: str,
        /// Login name
        username: str,
        /// Password
        password: str,
        /// Email address
        email: str,
        /// IP address
        ip: str,
        /// MAC address
        mac_address: str as "macAddress",
        /// Website URL
        website: str,
        /// Avatar URL
        image: str,
    }
}

impl Person {
    /// Embedded address, when the service sent one
    pub fn address(&self) -> Option<&Address> {
        self.0.address.as_deref()
    }
}

impl Company {
    /// Embedded addresses, in server order
    pub fn addresses(&self) -> &[Address] {
        &self.0.addresses
    }

    /// Embedded contact person, when the service sent one
    pub fn contact(&self) -> Option<&Person> {
        self.0.contact.as_deref()
    }
}

impl Product {
    /// Embedded images, in server order
    pub fn images(&self) -> &[Image] {
        &self.0.images
    }
}
