//! Serde helpers for node values that may arrive as JSON strings or numbers.
//!
//! The node encodes 64 bit integers as strings and narrower ones as numbers,
//! and that choice has changed between node releases. Fields mirrored as
//! `String` accept either form.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }
    }
}

/// Deserialize a JSON string or number into its string form
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(String::from)
}

/// Like [`string_or_number`] for arrays
pub fn vec_string_or_number<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<StringOrNumber>::deserialize(deserializer)
        .map(|values| values.into_iter().map(String::from).collect())
}

/// Treat an explicit JSON `null` like a missing field.
///
/// Empty lists and byte fields come back as `null` from the node.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Numeric value of a transaction type tag given either as a number or a
/// numeric string, `None` when the tag is neither or does not fit a `u8`
pub fn tx_tag(raw: &Value) -> Option<u8> {
    match raw {
        Value::Number(n) => n.as_u64().and_then(|n| u8::try_from(n).ok()),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
