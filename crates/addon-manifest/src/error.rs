use std::path::PathBuf;

/// Errors that can occur while parsing addon manifests.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Manifest file not found at the expected path.
    #[error("addon manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    /// Failed to parse the manifest XML.
    #[error("failed to parse addon manifest: {0}")]
    ManifestParse(String),

    /// The manifest has no `requires` element.
    #[error("addon manifest has no <requires> element")]
    MissingRequires,

    /// A mandatory root attribute is absent.
    #[error("addon manifest is missing the '{0}' attribute")]
    MissingAttribute(&'static str),

    /// Invalid addon version string.
    #[error("invalid version number '{0}'")]
    InvalidVersion(String),

    /// Unknown addon type name.
    #[error("unknown addon type: {0}")]
    UnknownAddonType(String),

    /// I/O error reading the manifest.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
