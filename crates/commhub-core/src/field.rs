//! Optional event fields that remember whether they were sent.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A JSON field that may be absent, explicitly `null`, or set.
///
/// Deserialize with `#[serde(default)]` so an absent key becomes
/// [`Field::Missing`]; serialize with
/// `#[serde(skip_serializing_if = "Field::is_missing")]` so it stays absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Field<T> {
    /// The key was not sent.
    #[default]
    Missing,
    /// The key was sent as `null`.
    Null,
    /// The key was sent with a value.
    Value(T),
}

impl<T> Field<T> {
    /// The value, if one was sent.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Missing | Self::Null => None,
        }
    }

    /// Whether the key was absent.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl Field<String> {
    /// The value as a string slice, if one was sent.
    #[must_use]
    pub fn as_deref(&self) -> Option<&str> {
        self.value().map(String::as_str)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(value) => value.serialize(serializer),
            Self::Missing | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(|value| value.map_or(Self::Null, Self::Value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Body {
        #[serde(default, skip_serializing_if = "Field::is_missing")]
        restaurant_id: Field<i64>,
    }

    fn parse(json: &str) -> Field<i64> {
        serde_json::from_str::<Body>(json).unwrap().restaurant_id
    }

    #[test]
    fn test_deserialize_distinguishes_missing_null_and_value() {
        assert_eq!(parse("{}"), Field::Missing);
        assert_eq!(parse(r#"{"restaurantId": null}"#), Field::Null);
        assert_eq!(parse(r#"{"restaurantId": 7}"#), Field::Value(7));
    }

    #[test]
    fn test_serialize_keeps_null_and_drops_missing() {
        let json = |restaurant_id| serde_json::to_value(Body { restaurant_id }).unwrap();

        assert_eq!(json(Field::Missing), serde_json::json!({}));
        assert_eq!(json(Field::Null), serde_json::json!({ "restaurantId": null }));
        assert_eq!(json(Field::Value(7)), serde_json::json!({ "restaurantId": 7 }));
    }

    #[test]
    fn test_value_is_only_set_for_values() {
        assert_eq!(Field::Value("SUCCESS".to_owned()).as_deref(), Some("SUCCESS"));
        assert_eq!(Field::<String>::Null.as_deref(), None);
        assert_eq!(Field::<String>::Missing.as_deref(), None);
    }
}
