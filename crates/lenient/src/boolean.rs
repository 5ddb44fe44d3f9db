//! Loose boolean coercion.

use crate::raw::RawValue;

const TRUE_WORDS: [&str; 3] = ["true", "yes", "1"];

/// Read a boolean out of whatever shape the upstream sent.
///
/// Integers are truthy when non-zero; text is truthy only for `"true"`,
/// `"yes"` and `"1"` (case-insensitive, surrounding whitespace ignored).
/// Every other shape, including a missing value, reads as `false`.
pub fn loose_bool(raw: &RawValue) -> bool {
    match raw {
        RawValue::Boolean(b) => *b,
        RawValue::Integer(n) => *n != 0,
        RawValue::Text(s) => {
            let word = s.trim().to_ascii_lowercase();
            TRUE_WORDS.contains(&word.as_str())
        }
        _ => false,
    }
}

/// Encode counterpart of [`loose_bool`]: always emits a plain boolean.
pub fn encode_loose_bool(value: bool) -> RawValue {
    RawValue::Boolean(value)
}
