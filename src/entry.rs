//! The directory entry shape shared by the backend, the stores, and the UI.

use serde::{Deserialize, Serialize};
use std::fs::Metadata;
use std::path::Path;

/// A single entry in a directory listing. Produced by the backend and
/// consumed read-only everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    /// Absolute path as reported by the backend.
    pub path: String,
    pub is_dir: bool,
    pub is_symlink: bool,
    pub is_hidden: bool,
    /// Size in bytes; directories report 0.
    pub size: u64,
    /// Local modification time formatted as `YYYY-MM-DD HH:MM`, if available.
    pub modified: Option<String>,
    pub mime_type: Option<String>,
}

impl FileEntry {
    /// Build an entry from a path, reading metadata without following the
    /// final symlink so link entries describe the link itself. Returns `None`
    /// for paths that vanish or cannot be stat'ed mid-listing.
    pub fn from_path(path: &Path) -> Option<Self> {
        let link_meta = path.symlink_metadata().ok()?;
        let name = path.file_name()?.to_string_lossy().into_owned();
        let is_symlink = link_meta.is_symlink();

        // For symlinks, describe the target where possible but keep the
        // entry if the link dangles.
        let meta = if is_symlink {
            std::fs::metadata(path).unwrap_or(link_meta)
        } else {
            link_meta
        };

        let is_dir = meta.is_dir();
        let mime_type = if is_dir { None } else { guess_mime(&name) };

        Some(FileEntry {
            is_hidden: is_hidden_name(&name, &meta),
            size: if is_dir { 0 } else { meta.len() },
            modified: format_modified(&meta),
            path: path.to_string_lossy().into_owned(),
            name,
            is_dir,
            is_symlink,
            mime_type,
        })
    }
}

fn format_modified(meta: &Metadata) -> Option<String> {
    let time = meta.modified().ok()?;
    let local: chrono::DateTime<chrono::Local> = time.into();
    Some(local.format("%Y-%m-%d %H:%M").to_string())
}

#[cfg(windows)]
fn is_hidden_name(name: &str, meta: &Metadata) -> bool {
    use std::os::windows::fs::MetadataExt;
    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
    meta.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0 || name.starts_with('.')
}

#[cfg(not(windows))]
fn is_hidden_name(name: &str, _meta: &Metadata) -> bool {
    name.starts_with('.')
}

/// Best-effort MIME type from the file extension.
pub fn guess_mime(name: &str) -> Option<String> {
    let ext = name.rsplit('.').next()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "txt" | "md" | "log" | "csv" => "text/plain",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" | "mjs" => "text/javascript",
        "json" => "application/json",
        "xml" => "application/xml",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "gz" | "tar" => "application/gzip",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "mp3" => "audio/mpeg",
        "mp4" => "video/mp4",
        "rs" => "text/x-rust",
        "toml" => "text/x-toml",
        "yaml" | "yml" => "text/x-yaml",
        "sh" | "bash" | "zsh" => "text/x-shellscript",
        _ => return None,
    };
    Some(mime.to_string())
}
