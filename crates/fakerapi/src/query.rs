//! Endpoint table and query expansion
//!
//! Parameters go on the wire as `_<name>=<value>` in the order they were
//! pushed. The endpoint itself is routing information and never becomes a
//! parameter. Absent values are skipped entirely; the service expects a
//! missing key rather than an empty one.

use core::fmt;

use url::form_urlencoded;

/// Remote resource collections exposed by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `addresses`
    Addresses,
    /// `books`
    Books,
    /// `companies`
    Companies,
    /// `credit_cards`
    CreditCards,
    /// `images`
    Images,
    /// `persons`
    Persons,
    /// `places`
    Places,
    /// `products`
    Products,
    /// `texts`
    Texts,
    /// `users`
    Users,
}

impl Endpoint {
    /// Path segment of the collection under the base URL
    pub fn path(&self) -> &'static str {
        match self {
            Self::Addresses => "addresses",
            Self::Books => "books",
            Self::Companies => "companies",
            Self::CreditCards => "credit_cards",
            Self::Images => "images",
            Self::Persons => "persons",
            Self::Places => "places",
            Self::Products => "products",
            Self::Texts => "texts",
            Self::Users => "users",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Ordered query parameters for one request
#[derive(Debug, Default)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    /// Empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter
    pub fn push(&mut self, name: &'static str, value: impl fmt::Display) {
        self.pairs.push((name, value.to_string()));
    }

    /// Append a parameter when present, skip it entirely when absent
    pub fn push_opt(&mut self, name: &'static str, value: Option<impl fmt::Display>) {
        if let Some(value) = value {
            self.push(name, value);
        }
    }

    /// Serialize as `_name=value&...`, percent-encoding values
    pub fn encode(&self) -> String {
        let mut encoded = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.pairs {
            encoded.append_pair(&format!("_{name}"), value);
        }
        encoded.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Addresses.path(), "addresses");
        assert_eq!(Endpoint::CreditCards.path(), "credit_cards");
        assert_eq!(Endpoint::Persons.to_string(), "persons");
    }

    #[test]
    fn test_parameters_keep_encounter_order() {
        let mut query = Query::new();
        query.push("quantity", 3);
        query.push("seed", 7);
        query.push("locale", "en_US");
        query.push("gender", "female");

        assert_eq!(
            query.encode(),
            "_quantity=3&_seed=7&_locale=en_US&_gender=female"
        );
    }

    #[test]
    fn test_absent_seed_is_omitted() {
        let mut query = Query::new();
        query.push("quantity", 1);
        query.push_opt("seed", None::<u64>);
        query.push("locale", "en_US");

        assert_eq!(query.encode(), "_quantity=1&_locale=en_US");
    }

    #[test]
    fn test_present_seed_is_emitted() {
        let mut query = Query::new();
        query.push_opt("seed", Some(7));

        assert_eq!(query.encode(), "_seed=7");
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let mut query = Query::new();
        query.push("characters", "a b&c");

        assert_eq!(query.encode(), "_characters=a+b%26c");
    }

    #[test]
    fn test_empty_query_encodes_empty() {
        assert_eq!(Query::new().encode(), "");
    }
}
