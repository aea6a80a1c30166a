//! Command-line configuration

use crate::scheduler::DEFAULT_INTERVAL;
use clap::Parser;
use std::time::Duration;

/// Largest disc count accepted on the command line (the solution has `2^n - 1` moves)
pub const MAX_DISCS: u32 = 20;

pub const DEFAULT_DISCS: u32 = 5;

/// Tower of Hanoi solution replayed in the terminal
#[derive(Debug, Clone, Parser)]
#[command(name = "hanoitty", version, about)]
pub struct Config {
    /// Number of discs stacked on peg A at the start
    #[arg(short, long, default_value_t = DEFAULT_DISCS,
          value_parser = clap::value_parser!(u32).range(1..=MAX_DISCS as i64))]
    pub discs: u32,

    /// Initial delay between replayed moves, in milliseconds
    #[arg(short, long = "interval-ms", default_value_t = DEFAULT_INTERVAL.as_millis() as u64,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: u64,

    /// Print the solution to stdout instead of starting the terminal UI
    #[arg(long)]
    pub headless: bool,
}

impl Config {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
