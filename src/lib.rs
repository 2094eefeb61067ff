//! # Introduction
//!
//! ctag is a dual-pane terminal file browser. The upper pane lists the
//! current directory; pressing Enter on a media file opens its tag frames in
//! the lower pane. The UI is built with [ratatui](https://docs.rs/ratatui)
//! over crossterm.
//!
//! ## Data flow
//!
//! ```text
//! key press → KeyBindings → InputEvent → transition(focus, event) → Action
//!           → ListModel / PaneSet / EditorState → render
//! ```
//!
//! 1. [`filesystem`]: directory enumeration behind the [`filesystem::FileSystem`] trait.
//! 2. [`list`]: the sorted listing, selection cursor and scroll window math.
//! 3. [`tags`]: tag frames of media files behind the [`tags::TagReader`] trait.
//! 4. [`ui`]: panes, layout, focus state machine and the render loop.
//! 5. [`config`], [`logging`], [`error`]: environment configuration, the
//!    log file, and the crate error type.

pub mod config;
pub mod error;
pub mod filesystem;
pub mod list;
pub mod logging;
pub mod tags;
pub mod ui;

pub use error::{Error, Result};
