//! The filesystem command interface and its production implementation.
//!
//! Everything the shell does to the filesystem goes through [`FsBackend`],
//! which keeps the state core testable against a mock and leaves the real
//! filesystem behind one seam. Calls are blocking; the worker runs them on
//! the tokio blocking pool.

use crate::entry::FileEntry;
use crate::error::{Result, TabFmError};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;

pub const SEARCH_RESULT_LIMIT: usize = 200;

#[cfg_attr(test, automock)]
pub trait FsBackend: Send + Sync {
    /// List the entries of a directory, unsorted and unfiltered.
    fn list_directory(&self, path: &str) -> Result<Vec<FileEntry>>;

    /// Copy each source into `destination`, recursing into directories.
    fn copy_items(&self, sources: &[String], destination: &str) -> Result<()>;

    /// Move each source into `destination`.
    fn move_items(&self, sources: &[String], destination: &str) -> Result<()>;

    /// Delete each path, recursing into directories.
    fn delete_items(&self, paths: &[String]) -> Result<()>;

    /// Rename the entry at `path` to `new_name` within its parent directory,
    /// returning the new path.
    fn rename_item(&self, path: &str, new_name: &str) -> Result<String>;

    /// Create a directory named `name` under `path`, returning its path.
    fn create_directory(&self, path: &str, name: &str) -> Result<String>;

    /// Recursively find entries under `path` whose name contains `query`
    /// (case-insensitive), up to `limit` results.
    fn search_files(&self, path: &str, query: &str, limit: usize) -> Result<Vec<FileEntry>>;

    /// Open a file with the operating system's default handler.
    fn open_path(&self, path: &str) -> Result<()>;
}

/// The real backend over `std::fs`.
#[derive(Debug, Default)]
pub struct OsBackend;

impl OsBackend {
    pub fn new() -> Self {
        Self
    }
}

impl FsBackend for OsBackend {
    fn list_directory(&self, path: &str) -> Result<Vec<FileEntry>> {
        let dir = Path::new(path);
        if !dir.is_dir() {
            return Err(TabFmError::Backend(format!("not a directory: {path}")));
        }

        // Entries that disappear between readdir and stat are skipped rather
        // than failing the whole listing.
        let entries = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| FileEntry::from_path(&entry.path()))
            .collect();
        Ok(entries)
    }

    fn copy_items(&self, sources: &[String], destination: &str) -> Result<()> {
        let dest_dir = Path::new(destination);
        if !dest_dir.is_dir() {
            return Err(TabFmError::Backend(format!(
                "copy destination is not a directory: {destination}"
            )));
        }

        for source in sources {
            let src = Path::new(source);
            let dest = dest_dir.join(file_name_of(src)?);
            if src.is_dir() {
                copy_dir_recursive(src, &dest)?;
            } else {
                fs::copy(src, &dest)?;
            }
        }
        Ok(())
    }

    fn move_items(&self, sources: &[String], destination: &str) -> Result<()> {
        let dest_dir = Path::new(destination);
        if !dest_dir.is_dir() {
            return Err(TabFmError::Backend(format!(
                "move destination is not a directory: {destination}"
            )));
        }

        for source in sources {
            let src = Path::new(source);
            let dest = dest_dir.join(file_name_of(src)?);
            fs::rename(src, &dest)?;
        }
        Ok(())
    }

    fn delete_items(&self, paths: &[String]) -> Result<()> {
        for path_str in paths {
            let path = Path::new(path_str);
            if path.is_dir() && !path.is_symlink() {
                fs::remove_dir_all(path)?;
            } else {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }

    fn rename_item(&self, path: &str, new_name: &str) -> Result<String> {
        let src = Path::new(path);
        let parent = src
            .parent()
            .ok_or_else(|| TabFmError::Backend(format!("no parent directory: {path}")))?;
        let dest = parent.join(new_name);
        if dest.exists() {
            return Err(TabFmError::Backend(format!(
                "an entry named {new_name} already exists"
            )));
        }
        fs::rename(src, &dest)?;
        Ok(dest.to_string_lossy().into_owned())
    }

    fn create_directory(&self, path: &str, name: &str) -> Result<String> {
        let dir = Path::new(path).join(name);
        if dir.exists() {
            return Err(TabFmError::Backend(format!(
                "an entry named {name} already exists"
            )));
        }
        fs::create_dir(&dir)?;
        Ok(dir.to_string_lossy().into_owned())
    }

    fn search_files(&self, path: &str, query: &str, limit: usize) -> Result<Vec<FileEntry>> {
        let needle = query.to_lowercase();
        let mut results = Vec::new();

        let walk = WalkBuilder::new(path)
            .hidden(false)
            .git_ignore(false)
            .follow_links(false)
            .build();

        for item in walk {
            if results.len() >= limit {
                break;
            }
            let Ok(dirent) = item else { continue };
            // The walker yields the search root itself first; skip it.
            if dirent.depth() == 0 {
                continue;
            }
            let name = dirent.file_name().to_string_lossy().to_lowercase();
            if name.contains(&needle) {
                if let Some(entry) = FileEntry::from_path(dirent.path()) {
                    results.push(entry);
                }
            }
        }
        Ok(results)
    }

    fn open_path(&self, path: &str) -> Result<()> {
        open::that(path).map_err(TabFmError::Io)
    }
}

fn file_name_of(path: &Path) -> Result<PathBuf> {
    path.file_name()
        .map(PathBuf::from)
        .ok_or_else(|| TabFmError::Backend(format!("no file name in {}", path.display())))
}

fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let from = entry.path();
        let to = dest.join(entry.file_name());
        if from.is_dir() {
            copy_dir_recursive(&from, &to)?;
        } else {
            fs::copy(&from, &to)?;
        }
    }
    Ok(())
}
