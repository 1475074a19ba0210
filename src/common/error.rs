//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Every error is fatal to the simulation run that raised it and leaves
/// other policy instances untouched.
#[derive(Debug, Error)]
pub enum Error {
    /// A policy was constructed with fewer than one frame.
    #[error("Invalid capacity {0}: a frame set must hold at least one page")]
    InvalidCapacity(usize),

    /// The page handed to `admit` is not the one at `position` in the sequence.
    ///
    /// This indicates a bug in the caller - the driver never produces it.
    #[error("Sequence position mismatch at index {position} (sequence length {len})")]
    SequencePositionMismatch { position: usize, len: usize },

    /// The frame set is full but no resident page qualifies as a victim.
    #[error("No resident page is an eviction candidate")]
    NoEvictionCandidate,

    /// A policy name did not match any known replacement policy.
    #[error("Unknown replacement policy: {0}")]
    UnknownPolicy(String),

    /// I/O error while reading a reference string.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
