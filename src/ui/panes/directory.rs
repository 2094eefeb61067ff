//! Directory listing pane

use super::panel::{content_area, render_pane_chrome};
use crate::filesystem::{Entry, EntryKind};
use crate::list::ListModel;
use crate::ui::pane::{FocusState, Pane};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    widgets::{List, ListItem},
    Frame,
};

/// Style for one row. Each row carries its own complete style so nothing
/// bleeds into the next one.
pub fn entry_style(entry: &Entry, selected: bool) -> Style {
    let fg = match entry.kind {
        EntryKind::Directory => DEFAULT_THEME.directory,
        EntryKind::File => DEFAULT_THEME.file,
        EntryKind::Other => DEFAULT_THEME.special,
    };
    let style = Style::default().fg(fg);
    if selected {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

/// Render the listing window around the selection, then the pane chrome
pub fn render_directory_pane(frame: &mut Frame, pane: &Pane, list: &ListModel, focus: FocusState) {
    let inner = content_area(frame, pane);

    if !inner.is_empty() {
        let range = list.visible_range(usize::from(inner.height));
        let selected = list.selected();
        let items: Vec<ListItem> = list.entries()[range.clone()]
            .iter()
            .zip(range)
            .map(|(entry, index)| {
                ListItem::new(entry.name.as_str()).style(entry_style(entry, index == selected))
            })
            .collect();

        frame.render_widget(List::new(items), inner);
    }

    render_pane_chrome(frame, pane, focus);
}
