//! Context provided to move checks.

use crate::core::{Board, Cell};

/// A proposed move: the board it would be played on and the target cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveContext {
    pub board: Board,
    pub cell: usize,
}

impl MoveContext {
    pub fn new(board: Board, cell: usize) -> Self {
        Self { board, cell }
    }

    /// Current contents of the target cell (`None` when off the board).
    pub fn target(&self) -> Option<Cell> {
        self.board.get(self.cell)
    }
}
