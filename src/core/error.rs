//! Error types for parking-lot operations.

use thiserror::Error;

/// Errors produced by lot operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LotError {
    /// Every slot is occupied.
    #[error("parking lot is full")]
    Full,
    /// Slot index outside `0..capacity`.
    #[error("slot index {0} out of range")]
    OutOfRange(usize),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
