//! # Introduction
//!
//! hanoitty models the Tower of Hanoi as a small state machine and replays a
//! recorded solution in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Solver → Tower (move queue) → Replay (replica) → TUI
//! ```
//!
//! 1. [`puzzle`] — pegs, discs and the [`puzzle::Tower`] that validates moves
//!    and records accepted ones in a FIFO queue; [`puzzle::solver`] feeds it.
//! 2. [`replay`] — drains one recorded move per tick into a replica tower.
//! 3. [`scheduler`] — fixed-interval ticks with speed control and pause.
//! 4. [`config`] — command-line options.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Keys
//!
//! `q` quit, `+` faster, `-` slower, space pause/resume.

pub mod config;
pub mod puzzle;
pub mod replay;
pub mod scheduler;
pub mod ui;
