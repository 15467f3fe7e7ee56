//! Builder for constructing games from a move list.

use crate::builder::error::BuildError;
use crate::game::Game;
use tracing::{debug, instrument};

/// Builder for constructing a game with a fluent API.
///
/// Moves are replayed strictly: a move that the game would silently ignore
/// is an error here, since it means the list does not describe a real game.
///
/// # Example
///
/// ```rust
/// use tictactoe::builder::GameBuilder;
///
/// let game = GameBuilder::new()
///     .moves([4, 0, 8])
///     .jump_to(1)
///     .sort_descending(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(game.history().len(), 4);
/// assert_eq!(game.pointer(), 1);
/// assert!(game.sort_descending());
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    moves: Vec<usize>,
    jump: Option<usize>,
    sort_descending: bool,
}

impl GameBuilder {
    /// Create a new builder for an empty game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single move.
    pub fn play(mut self, cell: usize) -> Self {
        self.moves.push(cell);
        self
    }

    /// Add multiple moves at once.
    pub fn moves<I>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.moves.extend(cells);
        self
    }

    /// Point at `step` once the moves are replayed.
    pub fn jump_to(mut self, step: usize) -> Self {
        self.jump = Some(step);
        self
    }

    /// Set the move list order.
    pub fn sort_descending(mut self, descending: bool) -> Self {
        self.sort_descending = descending;
        self
    }

    /// Build the game.
    /// Returns an error if a move is illegal or the jump is out of range.
    #[instrument(skip(self), fields(moves = self.moves.len()))]
    pub fn build(self) -> Result<Game, BuildError> {
        let mut game = Game::new();
        for (i, &cell) in self.moves.iter().enumerate() {
            game = game.try_move(cell).map_err(|source| BuildError::IllegalMove {
                number: i + 1,
                source,
            })?;
        }

        if let Some(step) = self.jump {
            game = game.jump_to(step)?;
        }

        if self.sort_descending {
            game = game.toggle_sort();
        }

        debug!(pointer = game.pointer(), "game built");
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;
    use crate::game::{GameError, Status};
    use crate::rules::MoveViolation;

    #[test]
    fn empty_builder_builds_new_game() {
        let game = GameBuilder::new().build().unwrap();
        assert_eq!(game, Game::new());
    }

    #[test]
    fn fluent_api_replays_moves() {
        let game = GameBuilder::new().play(4).play(0).build().unwrap();

        assert_eq!(game.history().len(), 3);
        assert_eq!(game.status(), Status::InProgress { next: Mark::X });
    }

    #[test]
    fn builder_rejects_repeated_cell() {
        let result = GameBuilder::new().moves([4, 4]).build();

        match result {
            Err(BuildError::IllegalMove { number, source }) => {
                assert_eq!(number, 2);
                assert!(source.has(&MoveViolation::CellOccupied {
                    cell: 4,
                    mark: Mark::X
                }));
            }
            other => panic!("Expected IllegalMove, got {other:?}"),
        }
    }

    #[test]
    fn builder_rejects_move_after_win() {
        let result = GameBuilder::new().moves([0, 4, 1, 5, 2, 8]).build();
        assert!(matches!(
            result,
            Err(BuildError::IllegalMove { number: 6, .. })
        ));
    }

    #[test]
    fn builder_rejects_out_of_range_jump() {
        let result = GameBuilder::new().moves([4]).jump_to(2).build();

        assert_eq!(
            result,
            Err(BuildError::Jump(GameError::StepOutOfRange { step: 2, len: 2 }))
        );
    }

    #[test]
    fn sort_flag_is_applied() {
        let game = GameBuilder::new().sort_descending(true).build().unwrap();
        assert!(game.sort_descending());
    }
}
