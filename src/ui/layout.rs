//! Pane geometry as a function of terminal size
//!
//! Terminal coordinates are `(rows, cols)`; ratatui rectangles are
//! `x, y, width, height`, so the top-left origin `(row, col)` maps to
//! `Rect { x: col, y: row, .. }`.

use ratatui::layout::Rect;

/// Rectangles for the four panes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLayout {
    pub directory: Rect,
    pub editor: Rect,
    pub top: Rect,
    pub bottom: Rect,
}

/// Stacked layout: panels on the first and last rows, directory on the upper
/// half and the editor below it, all spanning the full width.
///
/// Degenerate sizes produce empty rectangles rather than overlapping ones.
pub fn compute_layout(rows: u16, cols: u16) -> PaneLayout {
    let half = rows / 2;
    let last_row = rows.saturating_sub(1);

    let top = Rect::new(0, 0, cols, rows.min(1));
    let bottom = if rows >= 2 {
        Rect::new(0, last_row, cols, 1)
    } else {
        Rect::new(0, last_row, cols, 0)
    };

    // Directory occupies rows 1..=half; never run into the bottom panel
    let dir_height = half.min(rows.saturating_sub(2));
    let directory = Rect::new(0, rows.min(1), cols, dir_height);

    let editor_y = half + 1;
    let editor_height = if editor_y < last_row {
        (half.saturating_sub(1)).min(last_row - editor_y)
    } else {
        0
    };
    let editor = Rect::new(0, editor_y.min(rows), cols, editor_height);

    PaneLayout {
        directory,
        editor,
        top,
        bottom,
    }
}

/// Startup arrangement with directory and editor side by side.
///
/// Replaced by [`compute_layout`] on the first resize.
pub fn initial_layout(rows: u16, cols: u16) -> PaneLayout {
    let body = rows.saturating_sub(2);
    let half = cols / 2;
    let last_row = rows.saturating_sub(1);

    PaneLayout {
        directory: Rect::new(0, rows.min(1), half, body),
        editor: Rect::new(half, rows.min(1), half, body),
        top: Rect::new(0, 0, cols, rows.min(1)),
        bottom: Rect::new(0, last_row, cols, u16::from(rows >= 2)),
    }
}
