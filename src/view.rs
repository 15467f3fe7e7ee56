//! Presentation view model.
//!
//! Turns a [`Game`] into plain data a front end can draw: the nine cells
//! with the winning line flagged, the move list in display order, and the
//! status line. Everything here is derived; nothing feeds back into the
//! game except the `step` carried by each move entry.

use crate::core::{coordinates, Mark};
use crate::game::Game;
use serde::Serialize;
use std::fmt;

/// One cell as drawn on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub index: usize,
    pub mark: Option<Mark>,
    /// Part of the winning line
    pub winning: bool,
}

/// The displayed board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub cells: Vec<CellView>,
}

impl BoardView {
    pub fn of(game: &Game) -> Self {
        let line = game.winning_line();
        let cells = game
            .board()
            .cells()
            .iter()
            .enumerate()
            .map(|(index, cell)| CellView {
                index,
                mark: cell.mark(),
                winning: line.is_some_and(|l| l.contains(&index)),
            })
            .collect();
        Self { cells }
    }

    /// Cells grouped into the three board rows.
    pub fn rows(&self) -> impl Iterator<Item = &[CellView]> {
        self.cells.chunks(3)
    }
}

/// One entry of the move list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// History position this entry jumps to
    pub step: usize,
    pub label: String,
    /// Matches the game's pointer
    pub current: bool,
}

/// Label for the history entry at `step`.
///
/// `None` when `step` is past the end of the history.
pub fn move_label(game: &Game, step: usize) -> Option<String> {
    let snapshot = game.history().get(step)?;
    match (snapshot.last_move, snapshot.placed()) {
        (Some(cell), Some(mark)) => {
            let (row, column) = coordinates(cell);
            Some(format!(
                "Go to move #{step}: {mark} at row {row}, column {column}"
            ))
        }
        _ => Some("Go to game start".to_string()),
    }
}

/// Move list in display order.
///
/// Reversed when the game sorts descending; each entry keeps its own step
/// so activating it still jumps to the right snapshot.
pub fn move_list(game: &Game) -> Vec<MoveEntry> {
    let mut entries: Vec<MoveEntry> = (0..game.history().len())
        .filter_map(|step| {
            let label = move_label(game, step)?;
            Some(MoveEntry {
                step,
                label,
                current: step == game.pointer(),
            })
        })
        .collect();

    if game.sort_descending() {
        entries.reverse();
    }
    entries
}

/// Everything a front end needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub board: BoardView,
    pub moves: Vec<MoveEntry>,
    pub status: String,
    pub sort_descending: bool,
}

impl GameView {
    pub fn of(game: &Game) -> Self {
        Self {
            board: BoardView::of(game),
            moves: move_list(game),
            status: game.status().to_string(),
            sort_descending: game.sort_descending(),
        }
    }

    /// Render as plain text for a terminal.
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

/// Winning cells are wrapped in brackets and the current move entry is
/// marked with `>`.
impl fmt::Display for GameView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.board.rows().enumerate() {
            let line: Vec<String> = row.iter().map(render_cell).collect();
            writeln!(f, " {}", line.join(" | "))?;
            if r < 2 {
                writeln!(f, "-----+-----+-----")?;
            }
        }

        writeln!(f, "\n{}\n", self.status)?;

        let order = if self.sort_descending {
            "newest first"
        } else {
            "oldest first"
        };
        writeln!(f, "Moves ({order}):")?;
        for entry in &self.moves {
            let cursor = if entry.current { '>' } else { ' ' };
            writeln!(f, "{cursor} [{}] {}", entry.step, entry.label)?;
        }
        Ok(())
    }
}

fn render_cell(cell: &CellView) -> String {
    let symbol = match cell.mark {
        Some(mark) => mark.to_string(),
        None => cell.index.to_string(),
    };
    if cell.winning {
        format!("[{symbol}]")
    } else {
        format!(" {symbol} ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GameBuilder;

    fn game(moves: &[usize]) -> Game {
        GameBuilder::new()
            .moves(moves.iter().copied())
            .build()
            .unwrap()
    }

    #[test]
    fn board_view_flags_winning_cells() {
        let view = BoardView::of(&game(&[0, 4, 1, 5, 2]));

        let winning: Vec<usize> = view
            .cells
            .iter()
            .filter(|c| c.winning)
            .map(|c| c.index)
            .collect();
        assert_eq!(winning, vec![0, 1, 2]);
        assert_eq!(view.cells[4].mark, Some(Mark::O));
        assert_eq!(view.cells[8].mark, None);
    }

    #[test]
    fn board_view_has_three_rows() {
        let view = BoardView::of(&Game::new());
        assert_eq!(view.rows().count(), 3);
        assert!(view.rows().all(|row| row.len() == 3));
    }

    #[test]
    fn labels_use_one_based_row_and_column() {
        let g = game(&[5, 7]);

        assert_eq!(move_label(&g, 0).unwrap(), "Go to game start");
        assert_eq!(
            move_label(&g, 1).unwrap(),
            "Go to move #1: X at row 2, column 3"
        );
        assert_eq!(
            move_label(&g, 2).unwrap(),
            "Go to move #2: O at row 3, column 2"
        );
        assert!(move_label(&g, 3).is_none());
    }

    #[test]
    fn move_list_marks_current_entry() {
        let g = game(&[4, 0, 8]).jump_to(1).unwrap();
        let entries = move_list(&g);

        assert_eq!(entries.len(), 4);
        let current: Vec<usize> = entries
            .iter()
            .filter(|e| e.current)
            .map(|e| e.step)
            .collect();
        assert_eq!(current, vec![1]);
    }

    #[test]
    fn descending_move_list_keeps_steps() {
        let g = game(&[4, 0, 8]).toggle_sort();
        let steps: Vec<usize> = move_list(&g).iter().map(|e| e.step).collect();

        assert_eq!(steps, vec![3, 2, 1, 0]);
        assert_eq!(move_list(&g)[3].label, "Go to game start");
    }

    #[test]
    fn render_text_shows_board_status_and_moves() {
        let text = GameView::of(&game(&[0, 4, 1, 5, 2])).render_text();

        assert!(text.contains("[X] | [X] | [X]"));
        assert!(text.contains("Winner: X"));
        assert!(text.contains("> [5] Go to move #5: X at row 1, column 3"));
        assert!(text.contains("Moves (oldest first):"));
    }

    #[test]
    fn display_matches_render_text_in_descending_order() {
        let view = GameView::of(&game(&[4, 0]).toggle_sort());
        let text = view.to_string();

        assert_eq!(text, view.render_text());
        assert_eq!(text.lines().count(), 3 + 2 + 3 + 1 + 3);
        assert!(text.contains("Moves (newest first):"));
        assert!(text.find("[2] Go to move #2").unwrap() < text.find("[0] Go to game start").unwrap());
    }

    #[test]
    fn game_view_serializes_to_json() {
        let view = GameView::of(&game(&[4]));
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["status"], "Next player: O");
        assert_eq!(json["board"]["cells"][4]["mark"], "X");
        assert_eq!(json["moves"][1]["current"], true);
        assert_eq!(json["sort_descending"], false);
    }
}
