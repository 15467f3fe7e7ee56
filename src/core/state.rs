//! Board values and the `State` trait for game phases.
//!
//! Everything here is an immutable value: boards are copied, never shared,
//! and inspecting them has no side effects.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Trait for game phases.
///
/// All methods are pure - no side effects. A phase describes where a game
/// stands (still being played, won, drawn) and is derived from the board
/// rather than stored next to it.
///
/// # Example
///
/// ```rust
/// use tictactoe::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Round {
///     Playing,
///     Over,
/// }
///
/// impl State for Round {
///     fn name(&self) -> &str {
///         match self {
///             Self::Playing => "Playing",
///             Self::Over => "Over",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Over)
///     }
/// }
///
/// assert!(Round::Over.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the phase's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) phase.
    ///
    /// No further moves are accepted once a game reaches a final phase.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Symbol a player places on the board.
///
/// `X` always moves first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The mark whose turn it is after `step` moves have been played.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A single cell: empty or holding a mark.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Mark),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 board, cells in row-major order (`index = row * 3 + col`).
///
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from explicit cells.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Cell at `index`, or `None` when the index is off the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Return a copy of this board with `mark` written at `index`.
    ///
    /// Returns `None` when the index is off the board. Occupancy is not
    /// checked here; the move rules decide whether a placement is legal.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Option<Self> {
        let mut cells = self.cells;
        *cells.get_mut(index)? = Cell::Occupied(mark);
        Some(Self { cells })
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

/// 1-based `(row, column)` of a cell index.
pub fn coordinates(index: usize) -> (usize, usize) {
    (index / 3 + 1, index % 3 + 1)
}
