//! Move rules built on `Validation`.

use crate::core::{Cell, Guard, CELL_COUNT};
use crate::rules::context::MoveContext;
use crate::rules::violations::MoveViolation;
use crate::rules::win::winner;
use std::sync::OnceLock;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for move check functions
pub type MoveCheck =
    Box<dyn Fn(&MoveContext) -> Validation<(), NonEmptyVec<MoveViolation>> + Send + Sync>;

/// Ordered set of move preconditions.
///
/// Every check runs on every move, so a rejected move reports all of the
/// preconditions it broke rather than only the first.
pub struct MoveRules {
    checks: Vec<MoveCheck>,
}

impl MoveRules {
    /// Rules with no checks; every move passes.
    pub fn empty() -> Self {
        Self { checks: Vec::new() }
    }

    /// The three tic-tac-toe preconditions: the cell is on the board, the
    /// cell is empty, and nobody has won yet.
    pub fn standard() -> Self {
        Self::empty()
            .require(cell_in_range)
            .require(cell_is_empty)
            .require(game_in_progress)
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&MoveContext) -> Validation<(), NonEmptyVec<MoveViolation>> + Send + Sync + 'static,
    {
        self.checks.push(Box::new(check));
        self
    }

    /// Add a guard; `on_block` builds the violation reported when it fails.
    pub fn require_guard<F>(mut self, guard: Guard<MoveContext>, on_block: F) -> Self
    where
        F: Fn(&MoveContext) -> MoveViolation + Send + Sync + 'static,
    {
        let check = move |ctx: &MoveContext| {
            if guard.check(ctx) {
                Validation::success(())
            } else {
                Validation::fail(on_block(ctx))
            }
        };
        self.checks.push(Box::new(check));
        self
    }

    /// Run all checks, accumulating ALL violations.
    pub fn enforce(&self, context: &MoveContext) -> Validation<(), NonEmptyVec<MoveViolation>> {
        let checks: Vec<_> = self.checks.iter().map(|check| check(context)).collect();
        Validation::all_vec(checks).map(|_| ())
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl Default for MoveRules {
    fn default() -> Self {
        Self::standard()
    }
}

static STANDARD: OnceLock<MoveRules> = OnceLock::new();

/// Shared [`MoveRules::standard`] set, built on first use.
pub fn standard_rules() -> &'static MoveRules {
    STANDARD.get_or_init(MoveRules::standard)
}

/// The target cell exists.
pub fn cell_in_range(ctx: &MoveContext) -> Validation<(), NonEmptyVec<MoveViolation>> {
    if ctx.cell < CELL_COUNT {
        Validation::success(())
    } else {
        Validation::fail(MoveViolation::CellOutOfRange { cell: ctx.cell })
    }
}

/// The target cell holds no mark. Off-board cells are left to
/// [`cell_in_range`].
pub fn cell_is_empty(ctx: &MoveContext) -> Validation<(), NonEmptyVec<MoveViolation>> {
    match ctx.target() {
        Some(Cell::Occupied(mark)) => Validation::fail(MoveViolation::CellOccupied {
            cell: ctx.cell,
            mark,
        }),
        _ => Validation::success(()),
    }
}

/// No line on the board is complete.
pub fn game_in_progress(ctx: &MoveContext) -> Validation<(), NonEmptyVec<MoveViolation>> {
    match winner(&ctx.board) {
        Some(winner) => Validation::fail(MoveViolation::GameDecided { winner }),
        None => Validation::success(()),
    }
}
