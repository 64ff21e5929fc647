//! Error types for configuration and move selection.

use std::time::Duration;

use thiserror::Error;

/// Invalid search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("pit index {0} is off the board")]
    PitOutOfRange(u8),

    #[error("safety margin {margin:?} leaves no search time in a {budget:?} turn budget")]
    NoSearchWindow { budget: Duration, margin: Duration },

    #[error("win threshold must be positive")]
    ZeroWinThreshold,
}

/// Failure to produce a move.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The position is terminal for the side to move.
    #[error("no legal moves in this position")]
    NoLegalMoves,
}
