//! Epoch timestamps of ambiguous precision.

use chrono::{DateTime, Utc};

use crate::raw::RawValue;

/// Reduce an epoch integer of unknown precision to whole seconds.
///
/// 13-digit magnitudes are taken as milliseconds and 16-digit magnitudes
/// as microseconds; everything else is seconds as-is. The band is a
/// heuristic over the decimal digit count, not a declared unit. Division
/// truncates toward zero.
fn to_epoch_seconds(n: i64) -> i64 {
    let magnitude = n.unsigned_abs();
    if (1_000_000_000_000_000..10_000_000_000_000_000).contains(&magnitude) {
        n / 1_000_000
    } else if (1_000_000_000_000..10_000_000_000_000).contains(&magnitude) {
        n / 1_000
    } else {
        n
    }
}

/// Decode a timestamp that may arrive as a bare integer or wrapped in a
/// single-entry object.
///
/// When neither shape is present (or the instant is outside the
/// representable range) the declared fallback is the current time at
/// decode; this operation cannot fail.
pub fn epoch_timestamp(raw: &RawValue) -> DateTime<Utc> {
    let n = match raw {
        RawValue::Integer(n) => Some(*n),
        RawValue::Mapping(entries) if entries.len() == 1 => Some(entries[0].1),
        _ => None,
    };
    n.and_then(|n| DateTime::from_timestamp(to_epoch_seconds(n), 0))
        .unwrap_or_else(Utc::now)
}

/// Encode counterpart of [`epoch_timestamp`]: always whole seconds since
/// the epoch, regardless of which precision band produced the value.
pub fn encode_epoch_timestamp(value: &DateTime<Utc>) -> RawValue {
    RawValue::Integer(value.timestamp())
}
