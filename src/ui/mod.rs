//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into these layers:
//!
//! - **[`app`]**: application state, blocking event loop, action dispatch
//! - **[`input`]**: key bindings and the focus state machine
//! - **[`layout`]**: pane rectangles as a function of terminal size
//! - **[`pane`]**: pane identity, geometry and focus highlighting
//! - **[`panes`]**: stateless render functions for each visible pane
//! - **[`terminal`]**: raw mode setup and teardown around the event loop
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`FileSystem`] and a [`TagReader`] and call [`App::run`] to start the
//! event loop.
//!
//! [`FileSystem`]: crate::filesystem::FileSystem
//! [`TagReader`]: crate::tags::TagReader
//! [`App::run`]: app::App::run

pub mod app;
pub mod input;
pub mod layout;
pub mod pane;
pub mod panes;
pub mod terminal;
pub mod theme;

pub use app::App;
