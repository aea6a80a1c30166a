//! Main TUI application state and logic

use crate::puzzle::{Peg, PuzzleError, Tower};
use crate::replay::{Replay, TickOutcome};
use crate::scheduler::Scheduler;
use crate::ui::panes::{self, Playback, StatusRenderData};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::{Duration, Instant};

/// Longest the event loop blocks waiting for a key
const MAX_POLL: Duration = Duration::from_millis(50);

/// Peg the replayed solution ends on
pub const TARGET_PEG: Peg = Peg::C;

/// Keyboard commands understood by the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    SpeedUp,
    SlowDown,
    TogglePause,
}

impl Command {
    /// Map a key press to a command; unknown keys map to `None`
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Command::Quit)
            }
            KeyCode::Char('q') => Some(Command::Quit),
            KeyCode::Char('+') => Some(Command::SpeedUp),
            KeyCode::Char('-') => Some(Command::SlowDown),
            KeyCode::Char(' ') => Some(Command::TogglePause),
            _ => None,
        }
    }
}

/// Run `restore` unconditionally, then hand back `res`.
///
/// An error from the session itself wins over an error from restoring.
pub fn restore_then<T, F>(res: io::Result<T>, restore: F) -> io::Result<T>
where
    F: FnOnce() -> io::Result<()>,
{
    let restored = restore();
    let value = res?;
    restored?;
    Ok(value)
}

/// The main application state
pub struct App {
    /// Tower holding the recorded moves still to be shown
    pub source: Tower,

    /// Replica that is actually drawn
    pub replay: Replay,

    /// Tick timing
    pub scheduler: Scheduler,

    /// Number of moves recorded when the app started
    pub total_moves: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app that replays the moves pending on `source`
    pub fn new(source: Tower, interval: Duration) -> Result<Self, PuzzleError> {
        let replay = Replay::new(&source)?;
        let total_moves = source.pending_len();
        Ok(App {
            source,
            replay,
            scheduler: Scheduler::new(interval, Instant::now()),
            total_moves,
            should_quit: false,
            status_message: String::from("Ready!"),
        })
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.update(Instant::now());

            // Block for input until the next tick is due
            let timeout = self
                .scheduler
                .time_until_next(Instant::now())
                .map_or(MAX_POLL, |d| d.min(MAX_POLL));
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Advance the replay by one move if a tick is due at `now`
    pub fn update(&mut self, now: Instant) {
        let Self {
            source,
            replay,
            scheduler,
            ..
        } = self;

        let mut outcome = TickOutcome::Idle;
        scheduler.poll(now, || outcome = replay.tick(source));

        match outcome {
            TickOutcome::Applied(mv) => {
                self.status_message = if self.is_solved() {
                    format!("Solved in {} moves", self.replay.replayed())
                } else {
                    format!("Moved {}", mv)
                };
            }
            // The replica is a visual echo; a move it cannot take is dropped.
            TickOutcome::Skipped(_) => {}
            TickOutcome::Idle => {}
        }
    }

    /// Whether the replay has caught up and shows the finished puzzle
    pub fn is_solved(&self) -> bool {
        self.source.pending_len() == 0 && self.replay.replica().is_solved_on(TARGET_PEG)
    }

    pub fn playback(&self) -> Playback {
        if self.is_solved() {
            Playback::Solved
        } else if self.scheduler.is_running() {
            Playback::Playing
        } else {
            Playback::Paused
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        panes::render_towers_pane(frame, chunks[0], self.replay.replica());

        panes::render_status_bar(
            frame,
            chunks[1],
            &StatusRenderData {
                message: &self.status_message,
                replayed: self.replay.replayed(),
                total_moves: self.total_moves,
                interval: self.scheduler.interval(),
                playback: self.playback(),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let Some(command) = Command::from_key(key) else {
            return;
        };

        match command {
            Command::Quit => {
                self.should_quit = true;
            }
            Command::SpeedUp => {
                self.scheduler.speed_up();
                self.status_message = "Faster".to_string();
            }
            Command::SlowDown => {
                self.scheduler.slow_down();
                self.status_message = "Slower".to_string();
            }
            Command::TogglePause => {
                if self.scheduler.toggle_pause(Instant::now()) {
                    self.status_message = "Playing...".to_string();
                } else {
                    self.status_message = "Paused".to_string();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::solver;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn solved_app(discs: u32, interval_ms: u64) -> App {
        let mut tower = Tower::new(discs).unwrap();
        solver::solve(&mut tower, Peg::A, TARGET_PEG, Peg::B).unwrap();
        App::new(tower, Duration::from_millis(interval_ms)).unwrap()
    }

    #[test]
    fn restore_runs_and_session_error_propagates() {
        let mut restored = false;
        let res: io::Result<()> = restore_then(Err(io::Error::new(io::ErrorKind::Other, "draw failed")), || {
            restored = true;
            Ok(())
        });
        assert!(restored);
        assert_eq!(res.unwrap_err().to_string(), "draw failed");
    }

    #[test]
    fn restore_error_surfaces_after_clean_session() {
        let res = restore_then(Ok(7), || Err(io::Error::new(io::ErrorKind::Other, "restore failed")));
        assert_eq!(res.unwrap_err().to_string(), "restore failed");
        assert_eq!(restore_then(Ok(7), || Ok(())).unwrap(), 7);
    }

    #[test]
    fn key_mapping() {
        assert_eq!(Command::from_key(key('q')), Some(Command::Quit));
        assert_eq!(Command::from_key(key('+')), Some(Command::SpeedUp));
        assert_eq!(Command::from_key(key('-')), Some(Command::SlowDown));
        assert_eq!(Command::from_key(key(' ')), Some(Command::TogglePause));
        assert_eq!(Command::from_key(key('x')), None);
        assert_eq!(
            Command::from_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn speed_keys_change_interval() {
        let mut app = solved_app(3, 1000);
        app.handle_key_event(key('+'));
        assert_eq!(app.scheduler.interval(), Duration::from_millis(500));
        app.handle_key_event(key('-'));
        app.handle_key_event(key('-'));
        assert_eq!(app.scheduler.interval(), Duration::from_millis(2000));
    }

    #[test]
    fn quit_key_sets_flag() {
        let mut app = solved_app(1, 1000);
        app.handle_key_event(key('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn space_toggles_pause() {
        let mut app = solved_app(3, 1000);
        assert_eq!(app.playback(), Playback::Playing);
        app.handle_key_event(key(' '));
        assert_eq!(app.playback(), Playback::Paused);

        // Paused: a due tick does nothing
        app.update(Instant::now() + Duration::from_secs(10));
        assert_eq!(app.replay.replayed(), 0);

        app.handle_key_event(key(' '));
        assert_eq!(app.playback(), Playback::Playing);
    }

    #[test]
    fn ticks_replay_the_whole_solution() {
        let mut app = solved_app(3, 1);
        assert_eq!(app.total_moves, 7);

        let mut now = Instant::now();
        for _ in 0..7 {
            now += Duration::from_millis(5);
            app.update(now);
        }

        assert!(app.is_solved());
        assert_eq!(app.playback(), Playback::Solved);
        assert_eq!(app.replay.replica().discs(Peg::C), vec![3, 2, 1]);
        assert_eq!(app.status_message, "Solved in 7 moves");

        // Further ticks are idle
        app.update(now + Duration::from_millis(5));
        assert_eq!(app.replay.replayed(), 7);
    }
}
