//! wirefold-lenient — tolerant wire-value coercions with declared defaults.
//!
//! Upstream APIs drift field by field: booleans arrive as numbers or words,
//! timestamps arrive in three precisions, enumerations gain cases between
//! versions. This crate normalizes those shapes without ever failing the
//! enclosing record decode; only fixed-format date fields are allowed to
//! fail hard.

mod boolean;
mod date;
mod error;
mod policy;
mod raw;
mod timestamp;

pub mod with;

pub use boolean::{encode_loose_bool, loose_bool};
pub use date::{encode_date, parse_date, parse_instant, parse_ymd, DateFormat, DateValue};
pub use error::ParseError;
pub use policy::{decode_defaulted, CaseSet, DefaultPolicy, FromRaw};
pub use raw::RawValue;
pub use timestamp::{encode_epoch_timestamp, epoch_timestamp};
