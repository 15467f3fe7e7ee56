//! Builder API for constructing games.
//!
//! Replaying a move list is the quickest way to reach a particular
//! position, both from the command line and in tests.

pub mod error;
pub mod game;

pub use error::BuildError;
pub use game::GameBuilder;
