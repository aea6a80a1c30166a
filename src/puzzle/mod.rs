//! Tower of Hanoi puzzle state
//!
//! This module provides the core puzzle model:
//! - [`Peg`]: one of the three fixed pegs
//! - [`Disc`]: a disc, identified by its size
//! - [`Move`]: a recorded transfer of a top disc between two pegs
//! - [`Tower`]: the three stacks plus the queue of accepted moves
//! - [`solver`]: recursive move generation on top of [`Tower::move_disc`]
//!
//! # Invariants
//!
//! Every reachable [`Tower`] satisfies:
//! - each peg's stack is strictly decreasing from bottom to top
//! - the discs across all pegs are exactly `1..=num_discs`, each once
//!
//! [`Tower::move_disc`] (and the silent variant replay uses) is the only way to
//! change the stacks, and it checks legality before touching anything:
//! ```text
//! legal(from, to)  ⇔  from non-empty  ∧  (to empty  ∨  top(from) < top(to))
//! ```
//!
//! A `Tower` is `Send`; sharing one between threads means putting the whole
//! value behind a single `Mutex` so stacks and queue change together.

pub mod errors;
pub mod solver;

pub use errors::PuzzleError;

use std::collections::{vec_deque, VecDeque};
use std::fmt;

/// A disc, represented by its size (1 is the smallest)
pub type Disc = u32;

/// Returned by [`Tower::peek`] for an empty peg; smaller than every real disc
pub const NO_DISC: Disc = 0;

/// One of the three pegs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Peg {
    A,
    B,
    C,
}

impl Peg {
    /// All pegs, left to right
    pub const ALL: [Peg; 3] = [Peg::A, Peg::B, Peg::C];

    /// Position of this peg in [`Peg::ALL`]
    pub fn index(self) -> usize {
        match self {
            Peg::A => 0,
            Peg::B => 1,
            Peg::C => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Peg::A => "A",
            Peg::B => "B",
            Peg::C => "C",
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A legal move that has been applied to a [`Tower`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Peg,
    pub to: Peg,
}

impl Move {
    pub fn new(from: Peg, to: Peg) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Three pegs of discs and the queue of moves not yet consumed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tower {
    pegs: [Vec<Disc>; 3],
    moves: VecDeque<Move>,
    num_discs: u32,
}

impl Tower {
    /// Create a tower with all `num_discs` discs stacked on [`Peg::A`]
    pub fn new(num_discs: u32) -> Result<Self, PuzzleError> {
        if num_discs == 0 {
            return Err(PuzzleError::InvalidDiscCount {
                requested: num_discs,
            });
        }

        let start: Vec<Disc> = (1..=num_discs).rev().collect();
        Ok(Tower {
            pegs: [start, Vec::new(), Vec::new()],
            moves: VecDeque::new(),
            num_discs,
        })
    }

    /// Move the top disc of `from` onto `to`.
    ///
    /// On success the move is appended to the pending queue and returned. On
    /// failure neither the stacks nor the queue change.
    pub fn move_disc(&mut self, from: Peg, to: Peg) -> Result<Move, PuzzleError> {
        let result = self.apply(from, to);
        match &result {
            Ok(mv) => log::trace!("disc {} {}", self.peek(to), mv),
            Err(err) => log::debug!("{}", err),
        }
        result
    }

    /// [`Tower::move_disc`] without logging, for the replay path
    pub(crate) fn apply(&mut self, from: Peg, to: Peg) -> Result<Move, PuzzleError> {
        if self.is_empty(from) || (!self.is_empty(to) && self.peek(from) >= self.peek(to)) {
            return Err(PuzzleError::IllegalMove { from, to });
        }

        let disc = self.pegs[from.index()]
            .pop()
            .ok_or(PuzzleError::IllegalMove { from, to })?;
        self.pegs[to.index()].push(disc);

        let mv = Move::new(from, to);
        self.moves.push_back(mv);
        Ok(mv)
    }

    /// Size of the top disc on `peg`, or [`NO_DISC`] if the peg is empty
    pub fn peek(&self, peg: Peg) -> Disc {
        self.pegs[peg.index()].last().copied().unwrap_or(NO_DISC)
    }

    pub fn is_empty(&self, peg: Peg) -> bool {
        self.pegs[peg.index()].is_empty()
    }

    /// Discs on `peg`, bottom to top. The returned vector is a copy.
    pub fn discs(&self, peg: Peg) -> Vec<Disc> {
        self.pegs[peg.index()].clone()
    }

    /// Number of discs on `peg`
    pub fn height(&self, peg: Peg) -> usize {
        self.pegs[peg.index()].len()
    }

    pub fn num_discs(&self) -> u32 {
        self.num_discs
    }

    /// Whether every disc sits on `peg`
    pub fn is_solved_on(&self, peg: Peg) -> bool {
        self.height(peg) == self.num_discs as usize
    }

    /// Remove and return the oldest pending move
    pub fn pop_move(&mut self) -> Option<Move> {
        self.moves.pop_front()
    }

    /// Pending moves, oldest first, without consuming them
    pub fn pending_moves(&self) -> impl Iterator<Item = &Move> + '_ {
        self.moves.iter()
    }

    pub fn pending_len(&self) -> usize {
        self.moves.len()
    }

    /// Remove every pending move, oldest first
    pub fn drain_moves(&mut self) -> vec_deque::Drain<'_, Move> {
        self.moves.drain(..)
    }
}

impl fmt::Display for Tower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for peg in Peg::ALL {
            writeln!(f, "{}: {:?}", peg, self.pegs[peg.index()])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_discs_is_rejected() {
        assert_eq!(
            Tower::new(0),
            Err(PuzzleError::InvalidDiscCount { requested: 0 })
        );
    }

    #[test]
    fn peek_on_empty_peg_is_sentinel() {
        let tower = Tower::new(2).unwrap();
        assert_eq!(tower.peek(Peg::B), NO_DISC);
        assert_eq!(tower.peek(Peg::A), 1);
    }

    #[test]
    fn moving_onto_same_peg_is_illegal() {
        let mut tower = Tower::new(3).unwrap();
        assert!(tower.move_disc(Peg::A, Peg::A).is_err());
        assert!(tower.move_disc(Peg::B, Peg::B).is_err());
        assert_eq!(tower.pending_len(), 0);
    }

    #[test]
    fn display_lists_every_peg() {
        let mut tower = Tower::new(3).unwrap();
        tower.move_disc(Peg::A, Peg::C).unwrap();
        assert_eq!(tower.to_string(), "A: [3, 2]\nB: []\nC: [1]\n");
    }

    #[test]
    fn move_display_uses_arrow() {
        assert_eq!(Move::new(Peg::B, Peg::C).to_string(), "B -> C");
        assert_eq!(
            PuzzleError::IllegalMove {
                from: Peg::A,
                to: Peg::B
            }
            .to_string(),
            "illegal move: A -> B"
        );
    }
}
