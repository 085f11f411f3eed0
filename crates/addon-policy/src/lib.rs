//! Static policy tables for addon-pr.
//!
//! Process-wide constants loaded once and never modified: the supported
//! platform branches, the per-branch mandatory dependency versions, and the
//! per-addon-type numeric ranges for localization string identifiers.

pub mod branch;
pub mod error;
pub mod strings;

pub use branch::Branch;
pub use error::{Error, Result};
pub use strings::{string_id_range, IdRange, GLOBAL_STRING_ID_RANGE};
