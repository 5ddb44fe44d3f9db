//! Declared-default substitution strategies.

use serde_json::Value;

use crate::raw::RawValue;

/// Coercion seam between [`RawValue`] and a target type.
///
/// Returns `None` on any shape mismatch. Mismatches are tolerated by
/// [`decode_defaulted`], never surfaced as errors.
pub trait FromRaw: Sized {
    fn from_raw(raw: &RawValue) -> Option<Self>;
}

impl FromRaw for bool {
    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromRaw for i64 {
    fn from_raw(raw: &RawValue) -> Option<Self> {
        raw.as_integer()
    }
}

impl FromRaw for u64 {
    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw.as_integer() {
            Some(i) if i >= 0 => Some(i as u64),
            _ => None,
        }
    }
}

impl FromRaw for f64 {
    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Float(f) => Some(*f),
            RawValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

impl FromRaw for String {
    fn from_raw(raw: &RawValue) -> Option<Self> {
        raw.as_text().map(str::to_owned)
    }
}

impl<T: FromRaw> FromRaw for Vec<T> {
    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Other(Value::Array(values)) => values
                .iter()
                .map(|v| T::from_raw(&RawValue::from_json(v.clone())))
                .collect(),
            _ => None,
        }
    }
}

/// Static case registry for wire enums.
///
/// `cases()` must list every case in declaration order and must not be
/// empty; an empty registry is a programming error and fails fast at
/// decode time.
pub trait CaseSet: Sized + Clone + 'static {
    fn cases() -> &'static [Self];
}

/// A fallback strategy for a target type.
///
/// The fallback is evaluated at decode time, not at construction, so case
/// registries are consulted only when a default is actually needed.
#[derive(Debug, Clone, Copy)]
pub struct DefaultPolicy<T> {
    make: fn() -> T,
}

impl<T> DefaultPolicy<T> {
    pub fn of(make: fn() -> T) -> Self {
        Self { make }
    }

    /// Construct the fallback value.
    pub fn fallback(&self) -> T {
        (self.make)()
    }
}

impl DefaultPolicy<i64> {
    pub fn zero() -> Self {
        Self::of(|| 0)
    }
}

impl DefaultPolicy<f64> {
    pub fn zero() -> Self {
        Self::of(|| 0.0)
    }
}

impl DefaultPolicy<bool> {
    pub fn falsy() -> Self {
        Self::of(|| false)
    }
}

impl<T> DefaultPolicy<Vec<T>> {
    pub fn empty() -> Self {
        Self::of(Vec::new)
    }
}

impl<T: CaseSet> DefaultPolicy<T> {
    /// Fall back to the first declared case of the enum.
    pub fn first_case() -> Self {
        Self::of(|| {
            T::cases()
                .first()
                .cloned()
                .expect("case set must not be empty")
        })
    }

    /// Fall back to the last declared case of the enum.
    pub fn last_case() -> Self {
        Self::of(|| {
            T::cases()
                .last()
                .cloned()
                .expect("case set must not be empty")
        })
    }
}

/// Coerce `raw` to `T`, substituting the policy fallback on any mismatch.
///
/// This is how malformed upstream fields reach a record type: as a
/// well-formed default, never as an error.
pub fn decode_defaulted<T: FromRaw>(raw: &RawValue, policy: &DefaultPolicy<T>) -> T {
    T::from_raw(raw).unwrap_or_else(|| policy.fallback())
}
