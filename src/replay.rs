//! Replay of recorded moves onto a replica tower
//!
//! The source [`Tower`] is the record of what happened. [`Replay`] keeps its own
//! replica with the same disc count and advances it one move per
//! [`Replay::tick`], draining the source's pending queue as it goes. The replica
//! is what gets drawn; it is a best-effort echo, not authoritative state.

use crate::puzzle::{Move, PuzzleError, Tower};

/// What a single [`Replay::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The source had no pending moves
    Idle,
    /// A move was taken from the source and applied to the replica
    Applied(Move),
    /// A move was taken from the source but the replica refused it; the
    /// replica is unchanged and the move is dropped
    Skipped(Move),
}

#[derive(Debug, Clone)]
pub struct Replay {
    replica: Tower,
    replayed: usize,
}

impl Replay {
    /// Build a replica with the same disc count as `source`, in the initial layout
    pub fn new(source: &Tower) -> Result<Self, PuzzleError> {
        Ok(Replay {
            replica: Tower::new(source.num_discs())?,
            replayed: 0,
        })
    }

    /// Take at most one move from `source` and apply it to the replica
    pub fn tick(&mut self, source: &mut Tower) -> TickOutcome {
        let Some(mv) = source.pop_move() else {
            return TickOutcome::Idle;
        };

        // The replica stays silent: no logging on either branch.
        match self.replica.apply(mv.from, mv.to) {
            Ok(_) => {
                // Nothing consumes the replica's own queue.
                self.replica.pop_move();
                self.replayed += 1;
                TickOutcome::Applied(mv)
            }
            // A correct source only records legal moves; anything else is
            // dropped without touching the replica.
            Err(_) => TickOutcome::Skipped(mv),
        }
    }

    pub fn replica(&self) -> &Tower {
        &self.replica
    }

    /// Number of moves successfully applied so far
    pub fn replayed(&self) -> usize {
        self.replayed
    }
}
