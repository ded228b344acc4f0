use thiserror::Error;

/// Structural problems with a result set handed to [`crate::ResultStore::load`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("rank 0 is not valid; ranks start at 1")]
    ZeroRank,
    #[error("rank {rank} appears more than once")]
    DuplicateRank { rank: u32 },
    #[error("rank {rank} is missing from the result set")]
    MissingRank { rank: u32 },
    #[error("result set of {len} entries is too large")]
    TooLarge { len: usize },
}

#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("invalid result set: {0}")]
    Validation(#[from] ValidationError),
    #[error("result supplier failed: {0:#}")]
    Supplier(anyhow::Error),
    #[error("no results available for the window starting at rank {first_rank}")]
    WindowUnavailable { first_rank: u32 },
}
