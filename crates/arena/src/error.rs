use thiserror::Error;

pub type Result<T> = std::result::Result<T, ArenaError>;

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("Ring is full, cannot add more boxers.")]
    RingFull,

    #[error("There must be two boxers to start a fight.")]
    InsufficientOccupants,

    #[error("Request to random.org timed out.")]
    Timeout,

    #[error("Request to random.org failed: {0}")]
    Unavailable(String),

    #[error("Invalid response from random.org: {0}")]
    MalformedResponse(String),

    #[error(transparent)]
    Storage(#[from] storage::error::StorageError),
}
