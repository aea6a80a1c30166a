//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, tick scheduling
//! - **[`panes`]** — stateless render functions for the towers and the status bar
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a solved-ahead
//! [`Tower`] and call [`App::run`] to start the event loop.
//!
//! [`Tower`]: crate::puzzle::Tower
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
