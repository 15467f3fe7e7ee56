//! Core game values and logic.
//!
//! This module contains the pure functional core:
//! - Board, cell and mark values, plus the `State` trait for game phases
//! - Guard predicates for transition control
//! - Immutable move history
//!
//! Nothing in this module performs I/O.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{History, HistoryError, MoveRecord, Snapshot};
pub use state::{coordinates, Board, Cell, Mark, State, CELL_COUNT};
