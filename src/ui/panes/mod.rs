//! TUI pane rendering modules
//!
//! Stateless render functions, one per kind of pane. Each takes the pane
//! whose geometry it draws into plus the current focus, so the border
//! highlight always follows the state machine.
//!
//! - [`directory`]: the scrollable directory listing
//! - [`editor`]: tag frames of the file selected for editing
//! - [`panel`]: border and title chrome shared by every pane, and the
//!   top/bottom help panels which are nothing but chrome

pub mod directory;
pub mod editor;
pub mod panel;

pub use directory::render_directory_pane;
pub use editor::render_editor_pane;
pub use panel::{clear_pane, render_pane_chrome};
