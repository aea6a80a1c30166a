//! Error types for the puzzle state machine
//!
//! [`PuzzleError`] covers everything the core can refuse: an illegal move and a
//! construction request with no discs. Both are recoverable; the tower is never
//! left in a partially-updated state when one is returned.

use super::Peg;
use thiserror::Error;

/// Errors returned by [`Tower`](super::Tower) operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// Source peg empty, or its top disc is not smaller than the destination's
    #[error("illegal move: {from} -> {to}")]
    IllegalMove { from: Peg, to: Peg },

    /// A tower needs at least one disc
    #[error("invalid disc count: {requested} (must be at least 1)")]
    InvalidDiscCount { requested: u32 },
}

impl PuzzleError {
    /// The attempted move, if this error came from one
    pub fn attempted_move(&self) -> Option<(Peg, Peg)> {
        match self {
            PuzzleError::IllegalMove { from, to } => Some((*from, *to)),
            PuzzleError::InvalidDiscCount { .. } => None,
        }
    }
}
