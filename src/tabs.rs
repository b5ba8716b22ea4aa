//! Tabs and per-tab navigation history.
//!
//! Each tab carries its own linear history with the usual browser semantics:
//! navigating after going back discards the abandoned forward branch. The
//! manager guarantees at least one tab exists and that the active id always
//! references a live tab.

use crate::paths;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: u64,
    pub path: String,
    /// Last path segment, re-derived from `path` on every change.
    pub label: String,
    pub history: Vec<String>,
    pub history_index: usize,
}

impl Tab {
    fn new(id: u64, path: String) -> Self {
        Self {
            label: paths::path_label(&path),
            history: vec![path.clone()],
            history_index: 0,
            id,
            path,
        }
    }

    /// Reset `path`/`label` from the current history slot.
    fn sync_to_history(&mut self) {
        self.path = self.history[self.history_index].clone();
        self.label = paths::path_label(&self.path);
    }
}

#[derive(Debug)]
pub struct TabManager {
    tabs: Vec<Tab>,
    active_id: u64,
    next_id: u64,
}

impl TabManager {
    /// Create the manager with a single tab at `path`.
    pub fn new(path: String) -> Self {
        let mut manager = Self {
            tabs: Vec::new(),
            active_id: 0,
            next_id: 1,
        };
        manager.add_tab(path);
        manager
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active_id(&self) -> u64 {
        self.active_id
    }

    pub fn active_tab(&self) -> &Tab {
        self.tabs
            .iter()
            .find(|t| t.id == self.active_id)
            .expect("active tab id always references a live tab")
    }

    fn active_tab_mut(&mut self) -> &mut Tab {
        let id = self.active_id;
        self.tabs
            .iter_mut()
            .find(|t| t.id == id)
            .expect("active tab id always references a live tab")
    }

    /// Open a new tab at `path` and make it active.
    pub fn add_tab(&mut self, path: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.tabs.push(Tab::new(id, path));
        self.active_id = id;
        id
    }

    /// Close a tab. Refuses to close the last remaining tab. When the active
    /// tab closes, the tab now occupying its former index (clamped to the
    /// end) becomes active.
    pub fn close_tab(&mut self, id: u64) {
        if self.tabs.len() <= 1 {
            return;
        }
        let Some(index) = self.tabs.iter().position(|t| t.id == id) else {
            return;
        };
        self.tabs.remove(index);
        if self.active_id == id {
            let new_index = index.min(self.tabs.len() - 1);
            self.active_id = self.tabs[new_index].id;
        }
    }

    /// Switch the active pointer. Reloading the listing is the caller's job.
    pub fn set_active_tab(&mut self, id: u64) {
        if self.tabs.iter().any(|t| t.id == id) {
            self.active_id = id;
        }
    }

    /// Activate the tab after (or before) the active one, wrapping around.
    pub fn cycle_active(&mut self, forward: bool) {
        let index = self
            .tabs
            .iter()
            .position(|t| t.id == self.active_id)
            .unwrap_or(0);
        let len = self.tabs.len();
        let next = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        self.active_id = self.tabs[next].id;
    }

    /// Navigate the active tab to `path`: truncate the forward branch,
    /// append, and advance the cursor to the new end.
    pub fn navigate(&mut self, path: String) {
        let tab = self.active_tab_mut();
        tab.history.truncate(tab.history_index + 1);
        tab.history.push(path);
        tab.history_index = tab.history.len() - 1;
        tab.sync_to_history();
    }

    /// Step back in the active tab's history; silently does nothing at the
    /// oldest entry.
    pub fn go_back(&mut self) {
        let tab = self.active_tab_mut();
        if tab.history_index > 0 {
            tab.history_index -= 1;
            tab.sync_to_history();
        }
    }

    /// Step forward; silently does nothing at the newest entry.
    pub fn go_forward(&mut self) {
        let tab = self.active_tab_mut();
        if tab.history_index + 1 < tab.history.len() {
            tab.history_index += 1;
            tab.sync_to_history();
        }
    }

    /// Navigate to the parent directory. A no-op at a filesystem root; the
    /// parent otherwise enters history exactly like a normal navigation.
    pub fn go_up(&mut self) {
        if let Some(parent) = paths::parent_path(&self.active_tab().path) {
            self.navigate(parent);
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.active_tab().history_index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        let tab = self.active_tab();
        tab.history_index + 1 < tab.history.len()
    }

    pub fn can_go_up(&self) -> bool {
        !paths::is_root_path(&self.active_tab().path)
    }
}
