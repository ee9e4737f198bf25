//! Integer fields that also accept numeric strings
//!
//! Browser forms post `<select>` values as strings, so `"3"` and `3` are
//! both accepted for ids and scores.

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

/// `deserialize_with` helper for an `i32` given as a number or numeric string.
pub fn int_or_string<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let wide = match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(n) => n,
        IntOrString::Str(s) => s.trim().parse::<i64>().map_err(|_| {
            de::Error::invalid_value(de::Unexpected::Str(&s), &"an integer")
        })?,
    };

    i32::try_from(wide)
        .map_err(|_| de::Error::invalid_value(de::Unexpected::Signed(wide), &"a 32-bit integer"))
}
