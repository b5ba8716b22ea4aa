//! Persisted sidebar bookmarks.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub label: String,
    pub path: String,
}

#[derive(Debug, Clone, Default)]
pub struct BookmarkList {
    bookmarks: Vec<Bookmark>,
}

impl BookmarkList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    /// Add a bookmark unless one for `path` already exists. Returns whether
    /// anything changed.
    pub fn add(&mut self, label: String, path: String) -> bool {
        if self.bookmarks.iter().any(|b| b.path == path) {
            return false;
        }
        self.bookmarks.push(Bookmark { label, path });
        true
    }

    /// Remove the bookmark for `path`. Returns whether anything changed.
    pub fn remove(&mut self, path: &str) -> bool {
        let before = self.bookmarks.len();
        self.bookmarks.retain(|b| b.path != path);
        self.bookmarks.len() != before
    }

    pub fn load() -> Self {
        match bookmarks_file() {
            Some(path) => Self::load_from(&path),
            None => Self::new(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let bookmarks = fs::read_to_string(path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { bookmarks }
    }

    pub fn save(&self) -> Result<()> {
        match bookmarks_file() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(&self.bookmarks)?)?;
        Ok(())
    }
}

fn bookmarks_file() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("tabfm").join("bookmarks.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_deduplicates_by_path() {
        let mut list = BookmarkList::new();
        assert!(list.add("home".into(), "/home".into()));
        assert!(!list.add("home again".into(), "/home".into()));
        assert_eq!(list.bookmarks().len(), 1);
    }

    #[test]
    fn remove_by_path() {
        let mut list = BookmarkList::new();
        list.add("home".into(), "/home".into());
        assert!(list.remove("/home"));
        assert!(!list.remove("/home"));
        assert!(list.bookmarks().is_empty());
    }

    #[test]
    fn roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookmarks.json");

        let mut list = BookmarkList::new();
        list.add("docs".into(), "/home/user/docs".into());
        list.save_to(&path).unwrap();

        let loaded = BookmarkList::load_from(&path);
        assert_eq!(loaded.bookmarks(), list.bookmarks());
    }

    #[test]
    fn missing_or_malformed_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(BookmarkList::load_from(&dir.path().join("absent.json"))
            .bookmarks()
            .is_empty());

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "???").unwrap();
        assert!(BookmarkList::load_from(&bad).bookmarks().is_empty());
    }
}
