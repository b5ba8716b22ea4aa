//! Top-level application state.
//!
//! `App` owns one instance of each state store plus the shell-local bits the
//! UI needs (cursor, prompt, status line). Stores are plain fields rather
//! than globals so tests can build as many independent `App`s as they like.

use crate::bookmarks::BookmarkList;
use crate::clipboard::ClipboardState;
use crate::entry::FileEntry;
use crate::listing::DirectoryListing;
use crate::ordering;
use crate::selection::SelectionState;
use crate::settings::Settings;
use crate::tabs::TabManager;

/// What a pending input prompt will do on submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    CreateFolder,
    Rename,
    Search,
    OpenLocation,
    ConfirmDelete,
}

#[derive(Debug, Clone)]
pub struct Prompt {
    pub kind: PromptKind,
    pub buffer: String,
}

pub struct App {
    pub tabs: TabManager,
    pub listing: DirectoryListing,
    pub selection: SelectionState,
    pub clipboard: ClipboardState,
    pub settings: Settings,
    pub bookmarks: BookmarkList,

    /// Cursor index into `visible_entries`.
    pub cursor: usize,
    pub prompt: Option<Prompt>,
    pub status_message: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(start_path: String, settings: Settings, bookmarks: BookmarkList) -> Self {
        Self {
            tabs: TabManager::new(start_path),
            listing: DirectoryListing::new(),
            selection: SelectionState::new(),
            clipboard: ClipboardState::new(),
            settings,
            bookmarks,
            cursor: 0,
            prompt: None,
            status_message: "Ready".to_string(),
            should_quit: false,
        }
    }

    /// The entries as displayed: hidden-filtered and sorted per settings.
    pub fn visible_entries(&self) -> Vec<FileEntry> {
        let filtered: Vec<FileEntry> = self
            .listing
            .entries()
            .iter()
            .filter(|e| self.settings.show_hidden || !e.is_hidden)
            .cloned()
            .collect();
        ordering::sort_entries(&filtered, self.settings.sort)
    }

    /// The entry under the cursor, if any.
    pub fn cursor_entry(&self) -> Option<FileEntry> {
        self.visible_entries().into_iter().nth(self.cursor)
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.visible_entries().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let current = self.cursor.min(len - 1) as isize;
        self.cursor = (current + delta).clamp(0, len as isize - 1) as usize;
    }

    /// Keep the cursor valid after the visible set changes.
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_entries().len();
        self.cursor = if len == 0 { 0 } else { self.cursor.min(len - 1) };
    }

    pub fn open_prompt(&mut self, kind: PromptKind, initial: String) {
        self.prompt = Some(Prompt {
            kind,
            buffer: initial,
        });
    }

    pub fn close_prompt(&mut self) {
        self.prompt = None;
    }

    /// Current selection as an owned list for backend calls.
    pub fn selected_paths(&self) -> Vec<String> {
        self.selection.selected_paths().iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, is_hidden: bool) -> FileEntry {
        FileEntry {
            name: name.to_string(),
            path: format!("/{name}"),
            is_dir: false,
            is_symlink: false,
            is_hidden,
            size: 0,
            modified: None,
            mime_type: None,
        }
    }

    fn app_with_entries(entries: Vec<FileEntry>) -> App {
        let mut app = App::new("/".into(), Settings::default(), BookmarkList::new());
        let gen = app.listing.begin();
        app.listing.finish(gen, Ok(entries));
        app
    }

    #[test]
    fn visible_entries_hide_dotfiles_by_default() {
        let app = app_with_entries(vec![entry("a", false), entry(".b", true)]);
        let names: Vec<String> = app.visible_entries().iter().map(|e| e.name.clone()).collect();
        assert_eq!(names, ["a"]);
    }

    #[test]
    fn visible_entries_include_hidden_when_enabled() {
        let mut app = app_with_entries(vec![entry("a", false), entry(".b", true)]);
        app.settings.show_hidden = true;
        assert_eq!(app.visible_entries().len(), 2);
    }

    #[test]
    fn cursor_moves_and_clamps() {
        let mut app = app_with_entries(vec![entry("a", false), entry("b", false)]);
        app.move_cursor(1);
        assert_eq!(app.cursor, 1);
        app.move_cursor(5);
        assert_eq!(app.cursor, 1);
        app.move_cursor(-10);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn clamp_cursor_handles_shrinking_listing() {
        let mut app = app_with_entries(vec![
            entry("a", false),
            entry("b", false),
            entry("c", false),
        ]);
        app.cursor = 2;

        let gen = app.listing.begin();
        app.listing.finish(gen, Ok(vec![entry("a", false)]));
        app.clamp_cursor();
        assert_eq!(app.cursor, 0);

        let gen = app.listing.begin();
        app.listing.finish(gen, Ok(Vec::new()));
        app.clamp_cursor();
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn cursor_entry_reflects_sorted_view() {
        let mut app = app_with_entries(vec![entry("b", false), entry("a", false)]);
        app.cursor = 0;
        assert_eq!(app.cursor_entry().unwrap().name, "a");
    }
}
