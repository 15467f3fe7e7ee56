//! The game state machine.
//!
//! A game is a linear log of board snapshots with a movable read pointer.
//! Moves append to the log (cutting off anything after the pointer), jumps
//! move the pointer, and the sort flag only affects how the move list is
//! displayed.
//!
//! # Key Concepts
//!
//! - **Pure transitions**: every operation returns a new `Game`
//! - **Derived turn**: the mark to move comes from pointer parity
//! - **Silent rejection**: `apply_move` ignores illegal moves, while
//!   `try_move` reports why they were illegal

mod machine;
mod transition;

pub use machine::Game;
pub use transition::{GameError, MoveRejected, Status};
