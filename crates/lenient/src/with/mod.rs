//! serde adapters for per-field tolerant decoding.
//!
//! Each submodule plugs into `#[serde(with = "...")]` on a record field.
//! The loose adapters (`loose_bool`, `epoch_seconds` and their `_opt`
//! variants) never fail the record decode; the fixed-format date adapters
//! (`date_ymd`, `date_time_utc`) surface parse failures as serde errors.
//!
//! For fields that may be missing entirely, pair the non-optional adapters
//! with `#[serde(default)]` (or `#[serde(default = "chrono::Utc::now")]`
//! for timestamps); the `_opt` adapters decode a missing or mismatched
//! field as `None`.

mod boolean;
mod date;
mod epoch;

pub use boolean::{loose_bool, loose_bool_opt};
pub use date::{date_time_utc, date_ymd};
pub use epoch::{epoch_seconds, epoch_seconds_opt};
