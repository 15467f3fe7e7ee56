//! Move rules and win evaluation.
//!
//! Move preconditions are checked with Stillwater's `Validation` type so
//! that a rejected move reports every rule it broke, not just the first.
//! Each precondition is a standalone function and can be tested alone.
//!
//! # Example
//!
//! ```rust
//! use tictactoe::core::{Board, Mark};
//! use tictactoe::rules::{winning_line, MoveContext, MoveRules};
//!
//! let board = Board::new().with_mark(4, Mark::X).unwrap();
//!
//! let rules = MoveRules::standard();
//! assert!(rules.enforce(&MoveContext::new(board, 0)).is_success());
//! assert!(rules.enforce(&MoveContext::new(board, 4)).is_failure());
//!
//! assert_eq!(winning_line(&board), None);
//! ```

pub mod context;
pub mod move_rules;
pub mod violations;
pub mod win;

pub use context::MoveContext;
pub use move_rules::{standard_rules, MoveCheck, MoveRules};
pub use violations::MoveViolation;
pub use win::{is_full, winner, winning_line, Line, LINES};
