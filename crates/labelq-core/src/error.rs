use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Empty pool: nothing to recommend (requested {requested} elements)")]
    EmptyPool { requested: usize },

    #[error("Invalid ranking: {0}")]
    InvalidRanking(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),
}

impl Error {
    /// True for caller-input problems, including the empty-pool special case.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_) | Error::EmptyPool { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
