//! Recursive solver
//!
//! Moves a full stack between pegs through [`Tower::move_disc`], so every
//! generated move lands in the tower's pending queue exactly as if a caller had
//! made it by hand.

use super::{Peg, PuzzleError, Tower};

/// Number of moves the classic solution needs for `num_discs` discs (`2^n - 1`)
pub fn move_count(num_discs: u32) -> u64 {
    1u64.checked_shl(num_discs)
        .map(|p| p - 1)
        .unwrap_or(u64::MAX)
}

/// Move every disc from `from` to `to`, using `via` as the spare peg.
///
/// All discs must start on `from`; otherwise the first illegal move is returned
/// as an error and the tower keeps the moves applied before it.
pub fn solve(tower: &mut Tower, from: Peg, to: Peg, via: Peg) -> Result<(), PuzzleError> {
    let count = tower.num_discs();
    log::info!("solving {} discs: {} -> {} via {}", count, from, to, via);
    move_stack(tower, count, from, to, via)
}

fn move_stack(
    tower: &mut Tower,
    count: u32,
    from: Peg,
    to: Peg,
    via: Peg,
) -> Result<(), PuzzleError> {
    if count == 0 {
        return Ok(());
    }
    move_stack(tower, count - 1, from, via, to)?;
    tower.move_disc(from, to)?;
    move_stack(tower, count - 1, via, to, from)
}
