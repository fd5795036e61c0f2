//! Response envelope and materialization

use serde::Deserialize;
use serde_json::Value;

use crate::error::Error;
use crate::resource::FromData;

/// Response envelope of the service
///
/// Every payload arrives as `{"status": ..., "code": ..., "total": ...,
/// "data": [...]}`; `data` is an ordered sequence of objects even when a
/// single one was requested.
#[derive(Debug, Deserialize)]
struct Envelope {
    data: Vec<Value>,
}

/// Result of a fetch: one object for quantity 1, a sequence otherwise
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    /// Exactly one materialized object (quantity 1)
    One(T),
    /// Every returned object, in server order (quantity above 1)
    Many(Vec<T>),
}

impl<T> Fetched<T> {
    /// The single object, when one was requested
    pub fn one(self) -> Option<T> {
        match self {
            Self::One(value) => Some(value),
            Self::Many(_) => None,
        }
    }

    /// The sequence, when more than one was requested
    pub fn many(self) -> Option<Vec<T>> {
        match self {
            Self::One(_) => None,
            Self::Many(values) => Some(values),
        }
    }

    /// Flatten either shape into a vector
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }
}

/// Materialize a decoded envelope into typed objects
///
/// All-or-nothing: one bad element fails the whole call.
pub(crate) fn materialize<T: FromData>(envelope: Value, quantity: u32) -> Result<Fetched<T>, Error> {
    let envelope: Envelope = serde_json::from_value(envelope).map_err(|err| {
        tracing::warn!("response envelope did not parse: {}", err);
        Error::from(err)
    })?;

    if quantity == 1 {
        let first = envelope.data.into_iter().next().ok_or(Error::EmptyData)?;
        Ok(Fetched::One(T::from_data(first)?))
    } else {
        let objects = envelope
            .data
            .into_iter()
            .map(T::from_data)
            .collect::<Result<Vec<_>, Error>>()?;
        Ok(Fetched::Many(objects))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::resource::Text;

    fn envelope(data: Value) -> Value {
        json!({"status": "OK", "code": 200, "total": 3, "data": data})
    }

    #[test]
    fn test_quantity_one_yields_one_object() {
        let fetched: Fetched<Text> = materialize(
            envelope(json!([{"title": "first"}, {"title": "second"}])),
            1,
        )
        .expect("materialize should succeed");

        let text = fetched.one().expect("quantity 1 yields one object");
        assert_eq!(text.title(), Some("first"));
    }

    #[test]
    fn test_quantity_many_preserves_server_order() {
        let fetched: Fetched<Text> = materialize(
            envelope(json!([{"title": "a"}, {"title": "b"}, {"title": "c"}])),
            3,
        )
        .expect("materialize should succeed");

        let titles: Vec<_> = fetched
            .many()
            .expect("quantity 3 yields a sequence")
            .into_iter()
            .map(|text| text.title().map(str::to_string))
            .collect();
        assert_eq!(
            titles,
            [Some("a".into()), Some("b".into()), Some("c".into())]
        );
    }

    #[test]
    fn test_empty_data_fails_for_quantity_one() {
        let err = materialize::<Text>(envelope(json!([])), 1)
            .expect_err("empty data should fail");
        assert!(matches!(err, Error::EmptyData));
    }

    #[test]
    fn test_missing_data_is_a_parse_error() {
        let err = materialize::<Text>(json!({"status": "OK"}), 1)
            .expect_err("missing data should fail");
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_one_bad_element_fails_the_call() {
        let err = materialize::<Text>(envelope(json!([{"title": "a"}, 42])), 2)
            .expect_err("non-object element should fail");
        assert!(matches!(err, Error::UnexpectedShape(_)));
    }

    #[test]
    fn test_into_vec_flattens_both_shapes() {
        let one: Fetched<Text> = materialize(envelope(json!([{"title": "a"}])), 1)
            .expect("materialize should succeed");
        assert_eq!(one.into_vec().len(), 1);

        let many: Fetched<Text> = materialize(envelope(json!([{}, {}])), 2)
            .expect("materialize should succeed");
        assert_eq!(many.into_vec().len(), 2);
    }
}
