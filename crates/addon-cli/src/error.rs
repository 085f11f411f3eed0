//! Error types for addon-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from the checker
    #[error(transparent)]
    Check(#[from] addon_check::Error),

    /// Error from manifest parsing
    #[error(transparent)]
    Manifest(#[from] addon_manifest::Error),

    /// Error from an external command
    #[error(transparent)]
    Command(#[from] addon_command::Error),

    /// Error from the policy tables
    #[error(transparent)]
    Policy(#[from] addon_policy::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Failed to parse the configuration file
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Interactive prompt error
    #[error("interactive prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
