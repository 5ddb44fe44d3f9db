//! Fixed-format date field adapters.
//!
//! These are the contractual fields: a parse failure is a schema violation
//! and fails the enclosing record decode.

/// Decodes a `yyyy-MM-dd` calendar date. Fails hard on malformed text.
pub mod date_ymd {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::date;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        date::parse_ymd(&text).map_err(de::Error::custom)
    }

    pub fn serialize<S>(value: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(date::YMD_FORMAT).to_string())
    }
}

/// Decodes an RFC 3339 date-time into a UTC instant. Fails hard on
/// malformed text.
pub mod date_time_utc {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::date;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        date::parse_instant(&text).map_err(de::Error::custom)
    }

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(date::INSTANT_FORMAT).to_string())
    }
}
