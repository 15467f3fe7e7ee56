//! Move history tracking.
//!
//! The history is a linear log of board snapshots. Recording never mutates
//! an existing history; it returns a new one, so earlier values stay valid
//! for anyone still holding them.

use super::state::{Board, Cell, Mark, CELL_COUNT};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One board configuration plus the cell filled to reach it.
///
/// The initial snapshot has no last move.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board after the move
    pub board: Board,
    /// Cell filled by the move that produced this board
    pub last_move: Option<usize>,
}

impl Snapshot {
    /// The all-empty starting snapshot.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Mark placed by the move that produced this snapshot.
    pub fn placed(&self) -> Option<Mark> {
        self.last_move
            .and_then(|index| self.board.get(index))
            .and_then(|cell| cell.mark())
    }
}

/// A played move as seen from the history list.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Position of the resulting snapshot in the history (1-based move number)
    pub step: usize,
    /// Mark that was placed
    pub mark: Mark,
    /// Cell it was placed in
    pub cell: usize,
}

/// Ordered history of board snapshots.
///
/// Always holds at least the initial snapshot at position 0.
///
/// # Example
///
/// ```rust
/// use tictactoe::core::{History, Mark, Snapshot};
///
/// let history = History::new();
/// let first = Snapshot {
///     board: history.latest().board.with_mark(4, Mark::X).unwrap(),
///     last_move: Some(4),
/// };
///
/// let history = history.record(first);
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.moves().next().unwrap().cell, 4);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<Snapshot>", into = "Vec<Snapshot>")]
pub struct History {
    snapshots: Vec<Snapshot>,
}

/// Errors when rebuilding a history from raw snapshots
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("History must start with the empty board")]
    MissingInitialSnapshot,

    #[error("History holds {len} snapshots, at most {} fit on one board", CELL_COUNT + 1)]
    TooLong { len: usize },

    #[error("Snapshot {step} changes {changed} cells instead of one")]
    NotOneCellChanged { step: usize, changed: usize },

    #[error("Snapshot {step} overwrites occupied cell {cell}")]
    CellAlreadyFilled { step: usize, cell: usize },

    #[error("Snapshot {step} fills cell {cell} but records {recorded:?} as its move")]
    LastMoveMismatch {
        step: usize,
        cell: usize,
        recorded: Option<usize>,
    },

    #[error("Snapshot {step} should place {expected}")]
    WrongMark { step: usize, expected: Mark },
}

impl TryFrom<Vec<Snapshot>> for History {
    type Error = HistoryError;

    fn try_from(snapshots: Vec<Snapshot>) -> Result<Self, Self::Error> {
        match snapshots.first() {
            Some(first) if *first == Snapshot::initial() => {}
            _ => return Err(HistoryError::MissingInitialSnapshot),
        }
        if snapshots.len() > CELL_COUNT + 1 {
            return Err(HistoryError::TooLong {
                len: snapshots.len(),
            });
        }
        for (offset, pair) in snapshots.windows(2).enumerate() {
            check_step(offset + 1, &pair[0], &pair[1])?;
        }
        Ok(Self { snapshots })
    }
}

/// Snapshot `step` must follow `before` by exactly one legal placement.
fn check_step(step: usize, before: &Snapshot, after: &Snapshot) -> Result<(), HistoryError> {
    let changed: Vec<usize> = (0..CELL_COUNT)
        .filter(|&index| before.board.get(index) != after.board.get(index))
        .collect();
    let cell = match changed.as_slice() {
        [cell] => *cell,
        _ => {
            return Err(HistoryError::NotOneCellChanged {
                step,
                changed: changed.len(),
            })
        }
    };

    if before.board.get(cell) != Some(Cell::Empty) {
        return Err(HistoryError::CellAlreadyFilled { step, cell });
    }
    if after.last_move != Some(cell) {
        return Err(HistoryError::LastMoveMismatch {
            step,
            cell,
            recorded: after.last_move,
        });
    }

    let expected = Mark::for_step(step - 1);
    if before.board.with_mark(cell, expected) != Some(after.board) {
        return Err(HistoryError::WrongMark { step, expected });
    }
    Ok(())
}

impl From<History> for Vec<Snapshot> {
    fn from(history: History) -> Self {
        history.snapshots
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create a history holding only the empty starting board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
        }
    }

    /// Record a snapshot at the end, returning a new history.
    pub fn record(&self, snapshot: Snapshot) -> Self {
        let mut snapshots = self.snapshots.clone();
        snapshots.push(snapshot);
        Self { snapshots }
    }

    /// Record a snapshot directly after `step`, discarding everything that
    /// followed it. Returns a new history.
    ///
    /// When `step` is the last position this is the same as [`record`].
    ///
    /// [`record`]: History::record
    pub fn branch_at(&self, step: usize, snapshot: Snapshot) -> Self {
        let keep = (step + 1).min(self.snapshots.len());
        let mut snapshots = Vec::with_capacity(keep + 1);
        snapshots.extend_from_slice(&self.snapshots[..keep]);
        snapshots.push(snapshot);
        Self { snapshots }
    }

    /// Snapshot at `step`, if the history is that long.
    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    /// Most recent snapshot.
    pub fn latest(&self) -> &Snapshot {
        // never empty: `new` seeds the initial snapshot and nothing removes it
        &self.snapshots[self.snapshots.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Never true: the initial snapshot is always present.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All snapshots in order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Played moves in order, skipping the initial snapshot.
    pub fn moves(&self) -> impl Iterator<Item = MoveRecord> + '_ {
        self.snapshots
            .iter()
            .enumerate()
            .filter_map(|(step, snapshot)| {
                let cell = snapshot.last_move?;
                let mark = snapshot.placed()?;
                Some(MoveRecord { step, mark, cell })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(history: &History, cell: usize) -> History {
        let mark = Mark::for_step(history.len() - 1);
        history.record(Snapshot {
            board: history.latest().board.with_mark(cell, mark).unwrap(),
            last_move: Some(cell),
        })
    }

    #[test]
    fn new_history_holds_initial_snapshot() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert_eq!(history.latest(), &Snapshot::initial());
        assert_eq!(history.moves().count(), 0);
    }

    #[test]
    fn record_is_immutable() {
        let history = History::new();
        let new_history = play(&history, 0);

        assert_eq!(history.len(), 1);
        assert_eq!(new_history.len(), 2);
    }

    #[test]
    fn branch_at_discards_future_snapshots() {
        let history = play(&play(&play(&History::new(), 0), 4), 8);
        assert_eq!(history.len(), 4);

        let replacement = Snapshot {
            board: history.get(1).unwrap().board.with_mark(2, Mark::O).unwrap(),
            last_move: Some(2),
        };
        let branched = history.branch_at(1, replacement);

        assert_eq!(branched.len(), 3);
        assert_eq!(branched.latest().last_move, Some(2));
        assert_eq!(branched.get(1), history.get(1));
        assert_eq!(history.len(), 4);
    }

    #[test]
    fn branch_at_end_appends() {
        let history = play(&History::new(), 0);
        let next = Snapshot {
            board: history.latest().board.with_mark(1, Mark::O).unwrap(),
            last_move: Some(1),
        };

        assert_eq!(history.branch_at(1, next), history.record(next));
    }

    #[test]
    fn moves_lists_played_cells_in_order() {
        let history = play(&play(&History::new(), 4), 0);
        let moves: Vec<_> = history.moves().collect();

        assert_eq!(
            moves,
            vec![
                MoveRecord { step: 1, mark: Mark::X, cell: 4 },
                MoveRecord { step: 2, mark: Mark::O, cell: 0 },
            ]
        );
    }

    #[test]
    fn snapshot_placed_reads_mark_at_last_move() {
        let history = play(&History::new(), 6);
        assert_eq!(history.latest().placed(), Some(Mark::X));
        assert_eq!(Snapshot::initial().placed(), None);
    }

    #[test]
    fn history_serializes_correctly() {
        let history = play(&play(&History::new(), 4), 0);

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: History = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }

    #[test]
    fn deserialize_rejects_history_without_start() {
        assert!(serde_json::from_str::<History>("[]").is_err());

        let moved = play(&History::new(), 4);
        let json = serde_json::to_string(&moved.snapshots()[1..]).unwrap();
        assert!(serde_json::from_str::<History>(&json).is_err());
    }

    fn snapshot(marks: &[(usize, Mark)], last_move: Option<usize>) -> Snapshot {
        let mut cells = [Cell::Empty; CELL_COUNT];
        for &(index, mark) in marks {
            cells[index] = Cell::Occupied(mark);
        }
        Snapshot {
            board: Board::from_cells(cells),
            last_move,
        }
    }

    #[test]
    fn deserialize_rejects_unrelated_boards() {
        let snapshots = vec![
            Snapshot::initial(),
            snapshot(&[(0, Mark::X), (1, Mark::X), (2, Mark::X)], Some(7)),
            snapshot(&[(8, Mark::O)], Some(8)),
        ];
        let json = serde_json::to_string(&snapshots).unwrap();

        assert!(serde_json::from_str::<History>(&json).is_err());
        assert_eq!(
            History::try_from(snapshots),
            Err(HistoryError::NotOneCellChanged { step: 1, changed: 3 })
        );
    }

    #[test]
    fn try_from_rejects_overwritten_cell() {
        let snapshots = vec![
            Snapshot::initial(),
            snapshot(&[(4, Mark::X)], Some(4)),
            snapshot(&[(4, Mark::O)], Some(4)),
        ];

        assert_eq!(
            History::try_from(snapshots),
            Err(HistoryError::CellAlreadyFilled { step: 2, cell: 4 })
        );
    }

    #[test]
    fn try_from_rejects_wrong_last_move() {
        let snapshots = vec![Snapshot::initial(), snapshot(&[(4, Mark::X)], Some(0))];

        assert_eq!(
            History::try_from(snapshots),
            Err(HistoryError::LastMoveMismatch {
                step: 1,
                cell: 4,
                recorded: Some(0),
            })
        );
    }

    #[test]
    fn try_from_rejects_out_of_turn_mark() {
        let snapshots = vec![Snapshot::initial(), snapshot(&[(4, Mark::O)], Some(4))];

        assert_eq!(
            History::try_from(snapshots),
            Err(HistoryError::WrongMark {
                step: 1,
                expected: Mark::X,
            })
        );
    }

    #[test]
    fn try_from_rejects_more_snapshots_than_cells() {
        let full = (0..CELL_COUNT).fold(History::new(), |history, cell| play(&history, cell));
        assert_eq!(History::try_from(full.snapshots().to_vec()), Ok(full.clone()));

        let mut snapshots = full.snapshots().to_vec();
        snapshots.push(*full.latest());

        assert_eq!(
            History::try_from(snapshots),
            Err(HistoryError::TooLong { len: 11 })
        );
    }
}
