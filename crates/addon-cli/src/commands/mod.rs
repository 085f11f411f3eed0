//! Command implementations for addon-cli

pub mod check;
pub mod clean;
pub mod process;

pub use check::run_check;
pub use clean::run_clean;
pub use process::run_process;
