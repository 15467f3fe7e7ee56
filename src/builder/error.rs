//! Build errors for the game builder.

use crate::game::{GameError, MoveRejected};
use thiserror::Error;

/// Errors that can occur when building a game from a move list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Move #{number} could not be replayed: {source}")]
    IllegalMove {
        /// 1-based position of the move in the list
        number: usize,
        source: MoveRejected,
    },

    #[error("Cannot jump after replaying moves: {0}")]
    Jump(#[from] GameError),
}
