//! Move precondition violations.

use crate::core::Mark;
use thiserror::Error;

/// A single failed move precondition
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MoveViolation {
    #[error("Cell {cell} is off the board (valid cells are 0-8)")]
    CellOutOfRange { cell: usize },

    #[error("Cell {cell} is already occupied by {mark}")]
    CellOccupied { cell: usize, mark: Mark },

    #[error("Game is already won by {winner}")]
    GameDecided { winner: Mark },
}
