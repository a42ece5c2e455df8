//! Field-level transformations used by the row mapper.
//!
//! Every function here is total: malformed input is logged and comes back
//! as "no value" rather than as an error.

pub mod convert;
pub mod datetime;
pub mod name;
pub mod numeric;
pub mod sources;
pub mod split;

pub use convert::convert_value;
pub use datetime::{DateParse, convert_date, parse_date};
pub use name::decompose_person_name;
pub use numeric::{parse_leading_int, strip_dash};
pub use sources::{GroupScan, InlineSources, extract_inline_sources, find_last_group};
pub use split::split_values;
