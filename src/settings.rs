//! Discrete UI settings, persisted as JSON in the user config directory.
//!
//! Only these knobs survive a restart; tab, selection, and clipboard state
//! are session-scoped by design.

use crate::error::Result;
use crate::ordering::SortConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    List,
    Grid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub view_mode: ViewMode,
    pub show_hidden: bool,
    pub sidebar_visible: bool,
    pub sort: SortConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::List,
            show_hidden: false,
            sidebar_visible: true,
            sort: SortConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from the default location, falling back to defaults if
    /// the file is missing or unreadable. Unknown or absent fields fall back
    /// individually, so old settings files keep working.
    pub fn load() -> Self {
        match settings_file() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("ignoring malformed settings file {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self) -> Result<()> {
        match settings_file() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

fn settings_file() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("tabfm").join("settings.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::{SortKey, SortOrder};

    #[test]
    fn roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = Settings {
            view_mode: ViewMode::Grid,
            show_hidden: true,
            sidebar_visible: false,
            sort: SortConfig {
                key: SortKey::Size,
                order: SortOrder::Desc,
            },
        };
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.view_mode, ViewMode::Grid);
        assert!(loaded.show_hidden);
        assert!(!loaded.sidebar_visible);
        assert_eq!(loaded.sort.key, SortKey::Size);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Settings::load_from(&dir.path().join("nope.json"));
        assert_eq!(loaded.view_mode, ViewMode::List);
        assert!(!loaded.show_hidden);
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();
        let loaded = Settings::load_from(&path);
        assert!(loaded.sidebar_visible);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"show_hidden": true}"#).unwrap();

        let loaded = Settings::load_from(&path);
        assert!(loaded.show_hidden);
        assert_eq!(loaded.view_mode, ViewMode::List);
    }
}
