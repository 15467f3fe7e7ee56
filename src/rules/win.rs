//! Win and full-board detection.

use crate::core::{Board, Mark};
use tracing::instrument;

/// A winning line: three cell indices in enumeration order.
pub type Line = [usize; 3];

/// The eight lines checked for three in a row, in evaluation order.
pub const LINES: [Line; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first line whose three cells hold the same mark.
///
/// Lines are checked in [`LINES`] order, so when an arbitrary board holds
/// more than one complete line the earliest one wins.
#[instrument(level = "trace")]
pub fn winning_line(board: &Board) -> Option<Line> {
    LINES.into_iter().find(|&[a, b, c]| {
        let first = board.get(a);
        first.is_some_and(|cell| !cell.is_empty())
            && first == board.get(b)
            && first == board.get(c)
    })
}

/// Mark holding the winning line, if any.
pub fn winner(board: &Board) -> Option<Mark> {
    let [a, _, _] = winning_line(board)?;
    board.get(a)?.mark()
}

/// Checks if every cell is occupied.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_empty())
}
