use thiserror::Error;

/// Error type for fixed-format date fields.
///
/// The only operations in this crate that can fail. Loose coercions resolve
/// mismatches with defaults instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected date text")]
    NotText,
    #[error("invalid date text")]
    InvalidDate,
}
