//! Pane chrome: border and title bar
//!
//! Boxed panes get a border, highlighted when the pane matches the current
//! focus. Every pane gets its title drawn on its first row in reverse bold,
//! whatever the focus.

use crate::ui::pane::{FocusState, Pane};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Clip a pane's rectangle to the drawable frame
pub(crate) fn visible_area(frame: &Frame, pane: &Pane) -> Rect {
    pane.area.intersection(frame.area())
}

/// Erase whatever was previously drawn under `pane`
pub fn clear_pane(frame: &mut Frame, pane: &Pane) {
    let area = visible_area(frame, pane);
    if !area.is_empty() {
        frame.render_widget(Clear, area);
    }
}

/// Draw the border (if any) and title bar of `pane`
pub fn render_pane_chrome(frame: &mut Frame, pane: &Pane, focus: FocusState) {
    let area = visible_area(frame, pane);
    if area.is_empty() {
        return;
    }

    if pane.boxed {
        let border_style = if pane.is_highlighted(focus) {
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.border_normal)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        frame.render_widget(block, area);
    }

    // Title sits one column in from the left edge
    if area.width > 1 {
        let title_area = Rect::new(area.x + 1, area.y, area.width - 1, 1);
        let title = Span::styled(
            pane.title.as_str(),
            Style::default()
                .fg(DEFAULT_THEME.title_fg)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );
        frame.render_widget(Paragraph::new(title), title_area);
    }
}

/// Rectangle inside the border where content goes
pub(crate) fn content_area(frame: &Frame, pane: &Pane) -> Rect {
    let area = visible_area(frame, pane);
    if pane.boxed {
        Block::default().borders(Borders::ALL).inner(area)
    } else {
        area
    }
}
