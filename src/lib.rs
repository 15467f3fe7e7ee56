//! Tictactoe: a pure functional tic-tac-toe state machine
//!
//! The game is a linear history of board snapshots with a movable read
//! pointer. Every transition is a pure function from one game value to the
//! next, so the whole state machine can be tested without any front end.
//!
//! # Core Concepts
//!
//! - **Board values**: `Mark`, `Cell`, `Board` and `Snapshot` are plain
//!   copyable values
//! - **Rules**: move preconditions are independent checks, evaluated
//!   together so every broken rule is reported
//! - **History**: the snapshot log, truncated when play resumes from an
//!   earlier step
//! - **View**: the data a front end draws, derived from the game
//!
//! # Example
//!
//! ```rust
//! use tictactoe::game::{Game, Status};
//! use tictactoe::core::Mark;
//!
//! let game = [0, 4, 1, 5, 2]
//!     .into_iter()
//!     .fold(Game::new(), |game, cell| game.apply_move(cell));
//!
//! assert_eq!(game.winning_line(), Some([0, 1, 2]));
//! assert_eq!(game.status().to_string(), "Winner: X");
//!
//! // Moves on a decided board are ignored.
//! assert_eq!(game.apply_move(8), game);
//!
//! // Jumping back and playing on discards the later moves.
//! let replayed = game.jump_to(1).unwrap().apply_move(8);
//! assert_eq!(replayed.history().len(), 3);
//! ```

pub mod builder;
pub mod core;
pub mod game;
pub mod rules;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use builder::{BuildError, GameBuilder};
pub use crate::core::{Board, Cell, Guard, History, Mark, Snapshot, State};
pub use game::{Game, GameError, MoveRejected, Status};
pub use rules::{winning_line, MoveViolation};
pub use view::GameView;
