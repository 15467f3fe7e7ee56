//! Outcome and error types for game transitions.

use crate::core::{Mark, State};
use crate::rules::{Line, MoveViolation};
use serde::{Deserialize, Serialize};
use std::fmt;
use stillwater::NonEmptyVec;

/// Where the displayed snapshot stands.
///
/// Derived from the game on demand; never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Moves are still being played
    InProgress { next: Mark },

    /// Three in a row on `line`
    Won { winner: Mark, line: Line },

    /// Every cell filled without a winner
    Draw,
}

impl State for Status {
    fn name(&self) -> &str {
        match self {
            Self::InProgress { .. } => "InProgress",
            Self::Won { .. } => "Won",
            Self::Draw => "Draw",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Won { .. } | Self::Draw)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::InProgress { next } => write!(f, "Next player: {next}"),
            Status::Won { winner, .. } => write!(f, "Winner: {winner}"),
            Status::Draw => write!(f, "Draw"),
        }
    }
}

/// A move that broke one or more preconditions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Move at cell {cell} rejected: {}", describe(.violations))]
pub struct MoveRejected {
    pub cell: usize,
    pub violations: Vec<MoveViolation>,
}

impl MoveRejected {
    pub(crate) fn new(cell: usize, violations: NonEmptyVec<MoveViolation>) -> Self {
        Self {
            cell,
            violations: violations.iter().copied().collect(),
        }
    }

    /// Check whether a particular violation was reported
    pub fn has(&self, violation: &MoveViolation) -> bool {
        self.violations.contains(violation)
    }
}

fn describe(violations: &[MoveViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors that can occur during game transitions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Step {step} is outside the history (valid steps are 0..{len})")]
    StepOutOfRange { step: usize, len: usize },
}
