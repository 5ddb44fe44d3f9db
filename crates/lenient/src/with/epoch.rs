//! Ambiguous epoch-timestamp field adapters.

/// Decodes a UTC instant from an epoch integer of unknown precision, or
/// from a single-entry object wrapping one. A mismatched shape decodes as
/// the current time; whole seconds are emitted on the way out.
pub mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::raw::RawValue;
    use crate::timestamp;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawValue::deserialize(deserializer)?;
        Ok(timestamp::epoch_timestamp(&raw))
    }

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(value.timestamp())
    }
}

/// Optional variant of [`epoch_seconds`]: a missing or mismatched field
/// decodes as `None` rather than the current time.
pub mod epoch_seconds_opt {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::raw::RawValue;
    use crate::timestamp;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawValue::deserialize(deserializer)?;
        Ok(match raw {
            RawValue::Integer(_) => Some(timestamp::epoch_timestamp(&raw)),
            RawValue::Mapping(ref entries) if entries.len() == 1 => {
                Some(timestamp::epoch_timestamp(&raw))
            }
            _ => None,
        })
    }

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_i64(dt.timestamp()),
            None => serializer.serialize_none(),
        }
    }
}
