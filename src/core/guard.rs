//! Guard predicates for controlling transitions.
//!
//! Guards are pure boolean functions that decide whether a transition may
//! run. Each move precondition is its own guard so it can be checked and
//! tested on its own.

use std::fmt;
use std::marker::PhantomData;

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use tictactoe::core::{Board, Guard, Mark};
///
/// let center_free = Guard::new(|board: &Board| board.get(4).is_some_and(|c| c.is_empty()));
///
/// let board = Board::new();
/// assert!(center_free.check(&board));
///
/// let taken = board.with_mark(4, Mark::X).unwrap();
/// assert!(!center_free.check(&taken));
/// ```
pub struct Guard<T> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
    _phantom: PhantomData<fn(&T)>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Check if the guard allows the transition for this input.
    pub fn check(&self, input: &T) -> bool {
        (self.predicate)(input)
    }
}

impl<T> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
