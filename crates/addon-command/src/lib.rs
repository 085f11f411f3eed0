//! External process gateway for addon-pr.
//!
//! Wraps the version-control subprocess commands used to prepare sibling
//! repositories and to materialize submitted addons. Working directories
//! are always passed per call; nothing here changes the process-wide
//! current directory.

pub mod error;
pub mod process;
pub mod pull;

pub use error::{Error, Result};
pub use process::{git_checkout, run};
pub use pull::{pull, PullKind};
