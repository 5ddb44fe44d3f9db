//! Loose boolean field adapters.

/// Decodes a `bool` from numbers, strings, or booleans; any other shape
/// (including `null`) reads as `false`.
pub mod loose_bool {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::boolean;
    use crate::raw::RawValue;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawValue::deserialize(deserializer)?;
        Ok(boolean::loose_bool(&raw))
    }

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bool(*value)
    }
}

/// Optional variant of [`loose_bool`]: a missing or mismatched field
/// decodes as `None` rather than a substituted `false`.
pub mod loose_bool_opt {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::boolean;
    use crate::raw::RawValue;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawValue::deserialize(deserializer)?;
        Ok(match raw {
            RawValue::Boolean(_) | RawValue::Integer(_) | RawValue::Text(_) => {
                Some(boolean::loose_bool(&raw))
            }
            _ => None,
        })
    }

    pub fn serialize<S>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(b) => serializer.serialize_bool(*b),
            None => serializer.serialize_none(),
        }
    }
}
