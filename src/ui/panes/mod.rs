//! TUI pane rendering modules
//!
//! - [`towers`]: the three pegs and their discs
//! - [`status`]: status bar with move counter, tick interval and keybindings
//!
//! Each pane exports a primary `render_*` function that takes the frame, its
//! area and read-only data; panes hold no state of their own.

pub mod status;
pub mod towers;

pub use status::{render_status_bar, Playback, StatusRenderData};
pub use towers::render_towers_pane;
