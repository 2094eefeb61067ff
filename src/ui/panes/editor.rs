//! Tag editor pane
//!
//! Shows the tag frames of the file selected for editing. The title goes on
//! the first content row; the remaining frames follow as `Label: value`.
//! Anything missing is simply left blank.

use super::panel::{content_area, render_pane_chrome};
use crate::tags::TrackTags;
use crate::ui::pane::{FocusState, Pane};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Lines to display for a set of tags; an empty tag shows nothing
pub fn editor_lines(tags: &TrackTags) -> Vec<Line<'_>> {
    if tags.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![Line::from(Span::styled(
        tags.get_title().unwrap_or_default(),
        Style::default().fg(DEFAULT_THEME.fg),
    ))];

    lines.extend(tags.details().into_iter().map(|(label, value)| {
        Line::from(vec![
            Span::styled(format!("{label}: "), Style::default().fg(DEFAULT_THEME.label)),
            Span::styled(value, Style::default().fg(DEFAULT_THEME.fg)),
        ])
    }));

    lines
}

/// Render the cached tags (if any) and the pane chrome
pub fn render_editor_pane(
    frame: &mut Frame,
    pane: &Pane,
    tags: Option<&TrackTags>,
    focus: FocusState,
) {
    let inner = content_area(frame, pane);

    if let Some(tags) = tags {
        if !inner.is_empty() {
            frame.render_widget(Paragraph::new(editor_lines(tags)), inner);
        }
    }

    render_pane_chrome(frame, pane, focus);
}
