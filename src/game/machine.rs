//! The game state machine: a linear snapshot log with a movable pointer.

use crate::core::{Board, Cell, History, Mark, Snapshot, State};
use crate::game::transition::{GameError, MoveRejected, Status};
use crate::rules::{is_full, standard_rules, winning_line, Line, MoveContext};
use serde::Serialize;
use stillwater::validation::Validation;
use tracing::{debug, instrument, warn};

/// Tic-tac-toe game with time-travel history.
///
/// Transitions take `&self` and return the next game, leaving the
/// receiver untouched. The mark to move next is derived from the pointer
/// and is never stored.
///
/// # Example
///
/// ```rust
/// use tictactoe::game::{Game, Status};
/// use tictactoe::core::Mark;
///
/// let game = Game::new().apply_move(4).apply_move(0);
/// assert_eq!(game.history().len(), 3);
/// assert_eq!(game.status(), Status::InProgress { next: Mark::X });
///
/// let rewound = game.jump_to(1).unwrap();
/// assert_eq!(rewound.next_mark(), Mark::O);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Game {
    history: History,
    pointer: usize,
    sort_descending: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a game on an empty board, X to move, ascending move list.
    pub fn new() -> Self {
        Self {
            history: History::new(),
            pointer: 0,
            sort_descending: false,
        }
    }

    /// Full history, including snapshots after the pointer
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the displayed snapshot
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Whether the move list is displayed newest first
    pub fn sort_descending(&self) -> bool {
        self.sort_descending
    }

    /// Snapshot at the pointer.
    pub fn current(&self) -> &Snapshot {
        &self.history.snapshots()[self.pointer]
    }

    pub fn board(&self) -> &Board {
        &self.current().board
    }

    /// Mark that moves next: X on even pointers, O on odd ones.
    pub fn next_mark(&self) -> Mark {
        Mark::for_step(self.pointer)
    }

    /// Winning line on the displayed board, if any.
    pub fn winning_line(&self) -> Option<Line> {
        winning_line(self.board())
    }

    /// Status of the displayed snapshot.
    ///
    /// A draw is declared once the recorded game has filled every cell and
    /// the displayed board has no winner. The displayed board may be an
    /// earlier one after a jump.
    pub fn status(&self) -> Status {
        let board = self.board();
        if let Some(line) = winning_line(board) {
            if let Some(winner) = board.get(line[0]).and_then(|cell| cell.mark()) {
                return Status::Won { winner, line };
            }
        }
        if is_full(&self.history.latest().board) {
            return Status::Draw;
        }
        Status::InProgress {
            next: self.next_mark(),
        }
    }

    /// Whether the displayed status is terminal.
    pub fn is_over(&self) -> bool {
        self.status().is_final()
    }

    /// Place the next mark at `cell`, reporting every broken precondition.
    ///
    /// On success the history is cut back to the pointer before the new
    /// snapshot is appended, and the pointer moves to it.
    ///
    /// # Errors
    ///
    /// Returns [`MoveRejected`] when the cell is off the board, already
    /// occupied, or the displayed board already has a winner.
    #[instrument(skip(self), fields(pointer = self.pointer, mark = %self.next_mark()))]
    pub fn try_move(&self, cell: usize) -> Result<Self, MoveRejected> {
        let context = MoveContext::new(*self.board(), cell);
        if let Validation::Failure(violations) = standard_rules().enforce(&context) {
            return Err(MoveRejected::new(cell, violations));
        }

        // cell_in_range passed, so `cell` indexes the board
        let mut cells = *self.board().cells();
        cells[cell] = Cell::Occupied(self.next_mark());
        let history = self.history.branch_at(
            self.pointer,
            Snapshot {
                board: Board::from_cells(cells),
                last_move: Some(cell),
            },
        );
        let discarded = self.history.len() - self.pointer - 1;
        debug!(discarded, "move accepted");

        Ok(Self {
            pointer: history.len() - 1,
            history,
            sort_descending: self.sort_descending,
        })
    }

    /// Place the next mark at `cell`, or return the game unchanged when the
    /// move is not allowed.
    pub fn apply_move(&self, cell: usize) -> Self {
        self.try_move(cell).unwrap_or_else(|rejected| {
            debug!(%rejected, "move ignored");
            self.clone()
        })
    }

    /// Move the pointer to `step`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::StepOutOfRange`] when `step` is not a position
    /// in the history; the game is left as it was.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&self, step: usize) -> Result<Self, GameError> {
        if step >= self.history.len() {
            let err = GameError::StepOutOfRange {
                step,
                len: self.history.len(),
            };
            warn!(%err, "jump rejected");
            return Err(err);
        }

        Ok(Self {
            pointer: step,
            ..self.clone()
        })
    }

    /// Flip the move list between ascending and descending order.
    pub fn toggle_sort(&self) -> Self {
        Self {
            sort_descending: !self.sort_descending,
            ..self.clone()
        }
    }
}
