//! Raw wire-value union.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

/// A loosely-typed value as it arrived on the wire.
///
/// Every JSON shape maps onto exactly one variant, so a shape mismatch is a
/// first-class value rather than a decode error. `Mapping` captures the
/// object-of-integers shape some APIs use to wrap a scalar; everything that
/// no coercion accepts lands in `Other`.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// The field was missing, or was JSON `null`.
    Absent,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    /// An object whose values are all integers, key order preserved.
    Mapping(Vec<(String, i64)>),
    /// Any other JSON shape (arrays, heterogeneous objects).
    Other(Value),
}

impl RawValue {
    /// Classify a JSON value into the union.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Null => RawValue::Absent,
            Value::Bool(b) => RawValue::Boolean(b),
            Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => RawValue::Integer(i),
                (None, Some(f)) => RawValue::Float(f),
                (None, None) => RawValue::Other(Value::Number(n)),
            },
            Value::String(s) => RawValue::Text(s),
            Value::Object(map) => {
                let mut entries = Vec::with_capacity(map.len());
                for (key, val) in &map {
                    match val.as_i64() {
                        Some(i) => entries.push((key.clone(), i)),
                        None => {
                            entries.clear();
                            break;
                        }
                    }
                }
                if entries.is_empty() {
                    RawValue::Other(Value::Object(map))
                } else {
                    RawValue::Mapping(entries)
                }
            }
            other => RawValue::Other(other),
        }
    }

    /// Render the value back as JSON. `Absent` renders as `null`.
    pub fn to_json(&self) -> Value {
        match self {
            RawValue::Absent => Value::Null,
            RawValue::Boolean(b) => Value::Bool(*b),
            RawValue::Integer(i) => Value::Number(Number::from(*i)),
            RawValue::Float(f) => match Number::from_f64(*f) {
                Some(n) => Value::Number(n),
                None => Value::Null,
            },
            RawValue::Text(s) => Value::String(s.clone()),
            RawValue::Mapping(entries) => {
                let mut map = serde_json::Map::with_capacity(entries.len());
                for (key, val) in entries {
                    map.insert(key.clone(), Value::Number(Number::from(*val)));
                }
                Value::Object(map)
            }
            RawValue::Other(v) => v.clone(),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, RawValue::Absent)
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            RawValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(RawValue::from_json(value))
    }
}

impl Serialize for RawValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}
