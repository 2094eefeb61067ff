//! Pane identity, geometry and focus bookkeeping

use super::layout::PaneLayout;
use ratatui::layout::Rect;

/// Which pane has logical focus.
///
/// `None` is never current; it tags the panels that can never be focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusState {
    None,
    Directory,
    Editor,
}

impl FocusState {
    /// Swap between the two focusable panes
    pub fn toggle(self) -> Self {
        match self {
            FocusState::Directory => FocusState::Editor,
            FocusState::Editor => FocusState::Directory,
            FocusState::None => FocusState::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneRole {
    Directory,
    Editor,
    TopPanel,
    BottomPanel,
}

/// A rectangular region of the screen bound to one role.
///
/// Panes are created once and then moved and resized in place.
#[derive(Debug, Clone)]
pub struct Pane {
    pub role: PaneRole,
    pub area: Rect,
    pub boxed: bool,
    pub title: String,
    /// Focus state that highlights this pane's border
    pub state: FocusState,
    needs_clear: bool,
}

impl Pane {
    pub fn new(
        role: PaneRole,
        area: Rect,
        boxed: bool,
        title: impl Into<String>,
        state: FocusState,
    ) -> Self {
        Pane {
            role,
            area,
            boxed,
            title: title.into(),
            state,
            needs_clear: true,
        }
    }

    /// Move and resize the pane; its old contents must be erased before redraw
    pub fn apply_geometry(&mut self, area: Rect) {
        self.area = area;
        self.invalidate();
    }

    /// Erase the pane's contents on the next draw
    pub fn invalidate(&mut self) {
        self.needs_clear = true;
    }

    pub fn is_highlighted(&self, focus: FocusState) -> bool {
        focus != FocusState::None && focus == self.state
    }

    /// Returns whether a clear was pending and resets the flag
    pub fn take_clear(&mut self) -> bool {
        std::mem::replace(&mut self.needs_clear, false)
    }

    /// Rows available for content inside the border
    pub fn inner_height(&self) -> usize {
        let border = if self.boxed { 2 } else { 0 };
        usize::from(self.area.height.saturating_sub(border))
    }
}

/// The four panes of the browser, created once at startup
#[derive(Debug, Clone)]
pub struct PaneSet {
    pub directory: Pane,
    pub editor: Pane,
    pub top: Pane,
    pub bottom: Pane,
}

impl PaneSet {
    pub fn new(layout: &PaneLayout, top_text: &str, bottom_text: &str) -> Self {
        PaneSet {
            directory: Pane::new(
                PaneRole::Directory,
                layout.directory,
                true,
                "-Directory-",
                FocusState::Directory,
            ),
            editor: Pane::new(
                PaneRole::Editor,
                layout.editor,
                true,
                "-Edit tags-",
                FocusState::Editor,
            ),
            top: Pane::new(PaneRole::TopPanel, layout.top, false, top_text, FocusState::None),
            bottom: Pane::new(
                PaneRole::BottomPanel,
                layout.bottom,
                false,
                bottom_text,
                FocusState::None,
            ),
        }
    }

    /// Reposition every pane in place
    pub fn apply_layout(&mut self, layout: &PaneLayout) {
        self.directory.apply_geometry(layout.directory);
        self.editor.apply_geometry(layout.editor);
        self.top.apply_geometry(layout.top);
        self.bottom.apply_geometry(layout.bottom);
    }

    pub fn layout(&self) -> PaneLayout {
        PaneLayout {
            directory: self.directory.area,
            editor: self.editor.area,
            top: self.top.area,
            bottom: self.bottom.area,
        }
    }

    /// Panes in drawing order: panels first, the two main panes on top
    pub fn draw_order(&self) -> [&Pane; 4] {
        [&self.top, &self.bottom, &self.directory, &self.editor]
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Pane> {
        [
            &mut self.directory,
            &mut self.editor,
            &mut self.top,
            &mut self.bottom,
        ]
        .into_iter()
    }
}
