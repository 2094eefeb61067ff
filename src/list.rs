//! Selectable, scrollable directory listing
//!
//! [`ListModel`] owns the entries and the selection cursor. It knows nothing
//! about screen size; the visible window is computed on demand by
//! [`visible_range`] from the selection and the viewport height.

use crate::filesystem::Entry;
use std::ops::Range;

/// Rows kept visible above the selection while scrolling
const LEAD_IN: usize = 2;

#[derive(Debug, Clone)]
pub struct ListModel {
    entries: Vec<Entry>,
    sel: usize,
}

impl ListModel {
    /// A model holding only the `..` entry
    pub fn new() -> Self {
        ListModel {
            entries: vec![Entry::parent()],
            sel: 0,
        }
    }

    /// Replace the listing with `entries`, sorted by name with `..` pinned first.
    ///
    /// The selection is kept where it was, clamped into the new bounds.
    pub fn rebuild(&mut self, mut entries: Vec<Entry>) {
        entries.retain(|e| e.name != crate::filesystem::PARENT_ENTRY);
        // Lossy display names can collide, so fall back to the raw name
        entries.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.os_name().cmp(b.os_name()))
        });

        self.entries.clear();
        self.entries.push(Entry::parent());
        self.entries.extend(entries);
        self.clamp();
    }

    pub fn move_up(&mut self) {
        if self.sel > 0 {
            self.sel -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.sel + 1 < self.entries.len() {
            self.sel += 1;
        }
    }

    /// Move the cursor to `index`, clamped to the last entry
    pub fn select(&mut self, index: usize) {
        self.sel = index;
        self.clamp();
    }

    pub fn selected(&self) -> usize {
        self.sel
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.entries.get(self.sel)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Window of entries to draw in a viewport `height` rows tall
    pub fn visible_range(&self, height: usize) -> Range<usize> {
        visible_range(self.sel, self.entries.len(), height)
    }

    fn clamp(&mut self) {
        self.sel = self.sel.min(self.entries.len().saturating_sub(1));
    }
}

impl Default for ListModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the `[start, end)` window over `len` items that keeps `sel` visible.
///
/// The whole list is shown when it fits. Otherwise the window starts a couple
/// of rows above the selection and is shifted back from the end so a full
/// page is always shown. The lead-in shrinks for viewports too short to hold
/// it, which keeps the selection inside the window.
pub fn visible_range(sel: usize, len: usize, height: usize) -> Range<usize> {
    let height = height.max(1);
    if len <= height {
        return 0..len;
    }

    let lead_in = LEAD_IN.min(height - 1);
    let sel = sel.min(len - 1);
    let start = sel.saturating_sub(lead_in).min(len - height);
    start..start + height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::Entry;

    fn names(model: &ListModel) -> Vec<&str> {
        model.entries().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_rebuild_sorts_and_pins_parent() {
        let mut model = ListModel::new();
        model.rebuild(vec![Entry::file("b"), Entry::file("a"), Entry::directory("c")]);
        assert_eq!(names(&model), vec!["..", "a", "b", "c"]);
    }

    #[test]
    fn test_rebuild_sorts_bytewise() {
        let mut model = ListModel::new();
        model.rebuild(vec![Entry::file("b"), Entry::file("B"), Entry::file("_x")]);
        assert_eq!(names(&model), vec!["..", "B", "_x", "b"]);
    }

    #[test]
    fn test_rebuild_clamps_selection() {
        let mut model = ListModel::new();
        model.rebuild((0..10).map(|i| Entry::file(format!("f{i:02}"))).collect());
        model.select(9);
        assert_eq!(model.selected(), 9);

        model.rebuild(vec![Entry::file("only")]);
        assert_eq!(model.selected(), 1);
        assert_eq!(model.selected_entry().map(|e| e.name.as_str()), Some("only"));
    }

    #[test]
    fn test_moves_never_wrap() {
        let mut model = ListModel::new();
        model.rebuild(vec![Entry::file("a")]);

        model.move_up();
        assert_eq!(model.selected(), 0);
        model.move_down();
        model.move_down();
        assert_eq!(model.selected(), 1);
    }

    #[test]
    fn test_window_fits() {
        assert_eq!(visible_range(4, 5, 10), 0..5);
        assert_eq!(visible_range(0, 0, 3), 0..0);
        assert_eq!(visible_range(2, 3, 3), 0..3);
    }

    #[test]
    fn test_window_leads_selection() {
        assert_eq!(visible_range(0, 20, 5), 0..5);
        assert_eq!(visible_range(1, 20, 5), 0..5);
        assert_eq!(visible_range(7, 20, 5), 5..10);
    }

    #[test]
    fn test_window_shifts_back_at_end() {
        assert_eq!(visible_range(19, 20, 5), 15..20);
        assert_eq!(visible_range(17, 20, 5), 15..20);
        assert_eq!(visible_range(5, 6, 5), 1..6);
    }

    #[test]
    fn test_window_tiny_viewport() {
        assert_eq!(visible_range(7, 20, 1), 7..8);
        assert_eq!(visible_range(7, 20, 2), 6..8);
        assert_eq!(visible_range(7, 20, 0), 7..8);
    }
}
