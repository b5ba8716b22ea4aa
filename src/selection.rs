//! Selection over the currently displayed entries.
//!
//! The anchor (last explicitly touched path) is the pivot for shift-click
//! range selection. It is not required to be a member of the selected set: a
//! toggle that removes a path still moves the anchor there, matching
//! conventional file-manager behavior.

use crate::entry::FileEntry;
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected: HashSet<String>,
    anchor: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_paths(&self) -> &HashSet<String> {
        &self.selected
    }

    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    pub fn is_selected(&self, path: &str) -> bool {
        self.selected.contains(path)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// The sole selected path, if the selection is a singleton. Rename needs
    /// exactly one target.
    pub fn single(&self) -> Option<&str> {
        if self.selected.len() == 1 {
            self.selected.iter().next().map(String::as_str)
        } else {
            None
        }
    }

    /// Replace the selection wholesale. The last path becomes the anchor.
    pub fn set_selected(&mut self, paths: Vec<String>) {
        self.anchor = paths.last().cloned();
        self.selected = paths.into_iter().collect();
    }

    /// Flip membership of exactly `path`; the anchor moves there either way.
    pub fn toggle(&mut self, path: &str) {
        if !self.selected.remove(path) {
            self.selected.insert(path.to_string());
        }
        self.anchor = Some(path.to_string());
    }

    /// Union the inclusive anchor..target interval of `ordered` into the
    /// selection. Without an anchor this selects only `target` (which becomes
    /// the anchor). If either endpoint is missing from `ordered` — a filter
    /// or sort change can drop the anchor from view — the call is a no-op.
    /// The anchor itself never moves, so repeated range selections pivot
    /// around the same point.
    pub fn select_range(&mut self, ordered: &[FileEntry], target: &str) {
        let anchor = match self.anchor.clone() {
            Some(a) => a,
            None => {
                self.selected.insert(target.to_string());
                self.anchor = Some(target.to_string());
                return;
            }
        };

        let anchor_idx = ordered.iter().position(|e| e.path == anchor);
        let target_idx = ordered.iter().position(|e| e.path == target);
        let (Some(a), Some(t)) = (anchor_idx, target_idx) else {
            return;
        };

        let (from, to) = if a <= t { (a, t) } else { (t, a) };
        for entry in &ordered[from..=to] {
            self.selected.insert(entry.path.clone());
        }
    }

    /// Select every loaded entry, not just the filtered view.
    pub fn select_all(&mut self, entries: &[FileEntry]) {
        self.selected = entries.iter().map(|e| e.path.clone()).collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
        self.anchor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(paths: &[&str]) -> Vec<FileEntry> {
        paths
            .iter()
            .map(|p| FileEntry {
                name: p.trim_start_matches('/').to_string(),
                path: p.to_string(),
                is_dir: false,
                is_symlink: false,
                is_hidden: false,
                size: 0,
                modified: None,
                mime_type: None,
            })
            .collect()
    }

    fn selected(sel: &SelectionState) -> Vec<String> {
        let mut v: Vec<String> = sel.selected_paths().iter().cloned().collect();
        v.sort();
        v
    }

    #[test]
    fn toggle_adds_removes_and_moves_anchor() {
        let mut sel = SelectionState::new();
        sel.toggle("/a");
        assert!(sel.is_selected("/a"));
        assert_eq!(sel.anchor(), Some("/a"));

        sel.toggle("/a");
        assert!(!sel.is_selected("/a"));
        // Toggling off still leaves the anchor on the touched path.
        assert_eq!(sel.anchor(), Some("/a"));
    }

    #[test]
    fn set_selected_anchors_on_last_path() {
        let mut sel = SelectionState::new();
        sel.set_selected(vec!["/a".into(), "/b".into()]);
        assert_eq!(sel.len(), 2);
        assert_eq!(sel.anchor(), Some("/b"));

        sel.set_selected(Vec::new());
        assert!(sel.is_empty());
        assert_eq!(sel.anchor(), None);
    }

    #[test]
    fn range_without_anchor_selects_only_target() {
        let view = entries(&["/a", "/b", "/c", "/d"]);
        let mut sel = SelectionState::new();
        sel.select_range(&view, "/c");
        assert_eq!(selected(&sel), ["/c"]);
        assert_eq!(sel.anchor(), Some("/c"));
    }

    #[test]
    fn range_selects_inclusive_interval() {
        let view = entries(&["/a", "/b", "/c", "/d"]);
        let mut sel = SelectionState::new();
        sel.toggle("/a");
        sel.select_range(&view, "/c");
        assert_eq!(selected(&sel), ["/a", "/b", "/c"]);
    }

    #[test]
    fn range_works_backwards_from_anchor() {
        let view = entries(&["/a", "/b", "/c", "/d"]);
        let mut sel = SelectionState::new();
        sel.toggle("/d");
        sel.select_range(&view, "/b");
        assert_eq!(selected(&sel), ["/b", "/c", "/d"]);
    }

    #[test]
    fn range_merges_with_unrelated_selection() {
        let view = entries(&["/a", "/b", "/c", "/d"]);
        let mut sel = SelectionState::new();
        sel.set_selected(vec!["/d".into(), "/a".into()]);
        sel.select_range(&view, "/b");
        // Anchor is /a, so the range adds /a../b without dropping /d.
        assert_eq!(selected(&sel), ["/a", "/b", "/d"]);
    }

    #[test]
    fn range_keeps_anchor_for_repeated_pivoting() {
        let view = entries(&["/a", "/b", "/c", "/d"]);
        let mut sel = SelectionState::new();
        sel.toggle("/b");
        sel.select_range(&view, "/d");
        sel.select_range(&view, "/a");
        assert_eq!(sel.anchor(), Some("/b"));
        assert_eq!(selected(&sel), ["/a", "/b", "/c", "/d"]);
    }

    #[test]
    fn range_with_missing_endpoint_is_a_noop() {
        let view = entries(&["/a", "/b"]);
        let mut sel = SelectionState::new();
        // Anchor on a path absent from the current view, selection empty.
        sel.toggle("/filtered-out");
        sel.toggle("/filtered-out");
        sel.select_range(&view, "/b");
        assert_eq!(selected(&sel), Vec::<String>::new());
    }

    #[test]
    fn select_all_and_clear() {
        let view = entries(&["/a", "/b"]);
        let mut sel = SelectionState::new();
        sel.select_all(&view);
        assert_eq!(sel.len(), 2);

        sel.clear();
        assert!(sel.is_empty());
        assert_eq!(sel.anchor(), None);

        // Idempotent: clearing twice is the same empty state.
        sel.clear();
        assert!(sel.is_empty());
        assert_eq!(sel.anchor(), None);
    }

    #[test]
    fn single_requires_exactly_one() {
        let mut sel = SelectionState::new();
        assert_eq!(sel.single(), None);
        sel.toggle("/a");
        assert_eq!(sel.single(), Some("/a"));
        sel.toggle("/b");
        assert_eq!(sel.single(), None);
    }
}
