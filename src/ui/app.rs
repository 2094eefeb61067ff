//! Main TUI application state and logic

use super::input::{transition, Action, InputEvent, KeyBindings};
use super::layout::{compute_layout, initial_layout};
use super::pane::{FocusState, PaneRole, PaneSet};
use super::panes;
use crate::filesystem::{EntryKind, FileSystem};
use crate::list::ListModel;
use crate::tags::{is_media_file, TagReader, TrackTags};
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Frame, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const TOP_TEXT: &str = "ctag - terminal tag browser";
pub const BOTTOM_TEXT: &str = "TAB switch menu    Q to quit";

/// The file selected for editing and what was read from it
#[derive(Debug, Default)]
pub struct EditorState {
    path: Option<PathBuf>,
    tags: Option<TrackTags>,
    refresh_pending: bool,
}

impl EditorState {
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Tags of the selected file, `None` when nothing displayable is selected
    pub fn tags(&self) -> Option<&TrackTags> {
        self.tags.as_ref()
    }

    pub fn refresh_pending(&self) -> bool {
        self.refresh_pending
    }

    fn select(&mut self, path: PathBuf) {
        self.path = Some(path);
        self.refresh_pending = true;
    }

    /// Re-read tags if a refresh was requested
    fn refresh<T: TagReader>(&mut self, reader: &T) {
        if !std::mem::replace(&mut self.refresh_pending, false) {
            return;
        }

        self.tags = match &self.path {
            Some(path) if path_is_media(path) => {
                let tags = reader.load_or_create_tag(path).unwrap_or_default();
                debug!(path = %path.display(), title = ?tags.get_title(), "loaded tags");
                Some(tags)
            }
            _ => None,
        };
    }
}

fn path_is_media(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(is_media_file)
}

/// The main application state
pub struct App<F, T> {
    fs: F,
    tag_reader: T,
    bindings: KeyBindings,

    /// Directory listing and selection cursor
    pub list: ListModel,

    /// The four panes; geometry changes only on resize
    pub panes: PaneSet,

    /// Which pane has focus
    pub focus: FocusState,

    pub editor: EditorState,

    /// Terminal size as `(rows, cols)`
    terminal_size: (u16, u16),

    /// Whether the whole terminal must be wiped before the next draw
    full_redraw: bool,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl<F: FileSystem, T: TagReader> App<F, T> {
    /// Create the app for a terminal of `rows` x `cols` and load the listing
    pub fn new(fs: F, tag_reader: T, rows: u16, cols: u16) -> Self {
        let mut app = App {
            fs,
            tag_reader,
            bindings: KeyBindings::default(),
            list: ListModel::new(),
            panes: PaneSet::new(&initial_layout(rows, cols), TOP_TEXT, BOTTOM_TEXT),
            focus: FocusState::Directory,
            editor: EditorState::default(),
            terminal_size: (rows, cols),
            full_redraw: true,
            should_quit: false,
        };
        // Normalize the startup arrangement right away
        app.handle_event(InputEvent::Resize);
        app.reload_listing();
        app
    }

    pub fn current_dir(&self) -> &Path {
        self.fs.current_dir()
    }

    /// Record a new terminal size; takes effect on the next resize event
    pub fn set_terminal_size(&mut self, rows: u16, cols: u16) {
        self.terminal_size = (rows, cols);
    }

    /// Returns whether a full redraw was requested and resets the flag
    pub fn take_full_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.full_redraw, false)
    }

    /// Run the TUI application until the quit key is read
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            if self.take_full_redraw() {
                terminal.clear()?;
            }
            terminal.draw(|f| self.render(f))?;

            // Blocks until the next key press or resize notification
            let event = event::read()?;
            let Some(input) = self.bindings.translate(&event) else {
                continue;
            };
            if let Event::Resize(cols, rows) = event {
                self.set_terminal_size(rows, cols);
            }

            self.handle_event(input);
            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Apply one input event according to the current focus
    pub fn handle_event(&mut self, event: InputEvent) {
        let action = transition(self.focus, event);
        debug!(focus = ?self.focus, ?event, ?action, "dispatch");

        match action {
            Action::Quit => self.should_quit = true,
            Action::Open => self.open_selected(),
            Action::ToggleFocus => self.focus = self.focus.toggle(),
            Action::MoveUp => self.list.move_up(),
            Action::MoveDown => self.list.move_down(),
            Action::Relayout => self.relayout(),
            Action::Ignore => {}
        }
    }

    fn relayout(&mut self) {
        let (rows, cols) = self.terminal_size;
        let layout = compute_layout(rows, cols);
        self.panes.apply_layout(&layout);
        self.full_redraw = true;
        debug!(rows, cols, ?layout, "relayout");
    }

    /// Enter the selected directory or select the selected file for editing
    fn open_selected(&mut self) {
        let Some(entry) = self.list.selected_entry() else {
            return;
        };
        let name = entry.os_name().to_os_string();

        // The listing may be stale, so classify the entry again
        let kind = match self.fs.stat(&name) {
            Ok(kind) => kind,
            Err(e) => {
                debug!(?name, error = %e, "stat failed");
                self.reload_listing();
                return;
            }
        };

        match kind {
            EntryKind::File => {
                let path = self.fs.current_dir().join(&name);
                info!(path = %path.display(), "selected for editing");
                self.editor.select(path);
                self.panes.directory.invalidate();
                self.panes.editor.invalidate();
                self.focus = FocusState::Editor;
            }
            EntryKind::Directory => {
                match self.fs.change_directory(&name) {
                    Ok(()) => self.list.select(0),
                    Err(e) => debug!(?name, error = %e, "change directory failed"),
                }
                self.panes.directory.invalidate();
                self.reload_listing();
            }
            EntryKind::Other => debug!(?name, "not enterable"),
        }
    }

    /// Rebuild the list model from the current directory.
    ///
    /// An unreadable directory shows just `..` so the user can back out.
    fn reload_listing(&mut self) {
        let entries = match self.fs.list_directory() {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %self.fs.current_dir().display(), error = %e, "listing failed");
                Vec::new()
            }
        };
        self.list.rebuild(entries);
    }

    /// Render the UI.
    ///
    /// Panels go first and the directory and editor last so the two main
    /// panes sit on top if anything overlaps mid-resize.
    pub fn render(&mut self, frame: &mut Frame) {
        for pane in self.panes.iter_mut() {
            if pane.take_clear() {
                panes::clear_pane(frame, pane);
            }
        }

        self.editor.refresh(&self.tag_reader);

        for pane in self.panes.draw_order() {
            match pane.role {
                PaneRole::TopPanel | PaneRole::BottomPanel => {
                    panes::render_pane_chrome(frame, pane, self.focus)
                }
                PaneRole::Directory => {
                    panes::render_directory_pane(frame, pane, &self.list, self.focus)
                }
                PaneRole::Editor => {
                    panes::render_editor_pane(frame, pane, self.editor.tags(), self.focus)
                }
            }
        }
    }
}
