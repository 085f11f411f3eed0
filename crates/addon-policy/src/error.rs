/// Errors raised by the policy tables.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Branch name not in the supported branch list.
    #[error("unsupported branch: {0}")]
    UnknownBranch(String),
}

pub type Result<T> = std::result::Result<T, Error>;
