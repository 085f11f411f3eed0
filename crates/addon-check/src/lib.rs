//! Rule engine validating addon submissions.
//!
//! Given an addon directory and the parameters of a submission (target
//! branch, claimed identity and version, optionally the root of the
//! sibling repositories), [`AddonCheck`] discovers the file tree, parses
//! the manifest, and runs an explicit registry of independent checks,
//! accumulating warnings and errors without short-circuiting.

pub mod checks;
pub mod context;
pub mod engine;
pub mod error;
pub mod report;

pub use checks::{builtin_checks, Check};
pub use context::CheckContext;
pub use engine::AddonCheck;
pub use error::{Error, Result};
pub use report::Report;
