//! wirefold — lenient wire-value decoding and page folding.
//!
//! Umbrella crate. A fetch collaborator retrieves one page of raw records,
//! [`lenient`] normalizes each record's drifting fields into typed values,
//! and [`paged`] folds the decoded batch into its running state and reports
//! whether to fetch more.

pub use wirefold_lenient as lenient;
pub use wirefold_paged as paged;

pub use wirefold_lenient::{
    decode_defaulted, encode_date, encode_epoch_timestamp, encode_loose_bool, epoch_timestamp,
    loose_bool, parse_date, CaseSet, DateFormat, DateValue, DefaultPolicy, FromRaw, ParseError,
    RawValue,
};
pub use wirefold_paged::{PagedList, Paginatable, DEFAULT_PAGE_SIZE};
