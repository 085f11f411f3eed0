/// Errors that can occur when running external commands.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The command exited with a non-zero status.
    #[error("command failed with exit code {code}: {stderr}")]
    CommandFailed { code: i32, stderr: String },

    /// The command could not be spawned or its output read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown pull mechanism name.
    #[error("unknown pull request type: {0}")]
    UnknownPullKind(String),
}

pub type Result<T> = std::result::Result<T, Error>;
