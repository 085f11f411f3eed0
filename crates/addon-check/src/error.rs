use std::path::PathBuf;

/// Errors that can occur while constructing or running the checker.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The addon root directory does not exist or is not a directory.
    #[error("addon directory not found: {0}")]
    AddonRootNotFound(PathBuf),

    /// The addon manifest could not be parsed.
    #[error(transparent)]
    Manifest(#[from] addon_manifest::Error),

    /// An external command failed.
    #[error(transparent)]
    Command(#[from] addon_command::Error),

    /// I/O error while inspecting the addon tree.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
