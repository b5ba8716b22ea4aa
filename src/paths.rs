//! Path helpers for tab labels and upward navigation.
//!
//! Tabs store paths as plain strings exactly as the backend reports them, so
//! these helpers understand both Unix paths (`/foo/bar`) and Windows drive
//! paths (`C:\foo\bar`) without touching the filesystem.

/// Check whether `path` is a filesystem root (`/` or a drive root like `C:\`).
///
/// This is the single source of truth for root detection; `parent_path` and
/// the go-up predicates both defer to it so they can never disagree.
pub fn is_root_path(path: &str) -> bool {
    if path == "/" {
        return true;
    }
    let bytes = path.as_bytes();
    bytes.len() == 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && bytes[2] == b'\\'
}

/// Remove trailing separators, leaving roots untouched.
fn strip_trailing_sep(path: &str) -> &str {
    if is_root_path(path) {
        return path;
    }
    path.trim_end_matches(['/', '\\'])
}

/// Parent directory of `path`, or `None` when the path is already a root.
pub fn parent_path(path: &str) -> Option<String> {
    let normalized = strip_trailing_sep(path);
    if is_root_path(normalized) {
        return None;
    }

    // Windows drive path: C:\Users\foo -> C:\Users, C:\Users -> C:\
    if normalized.len() > 3 {
        let (head, rest) = normalized.split_at(3);
        if is_root_path(head) {
            return match rest.rfind('\\') {
                Some(idx) => Some(format!("{}{}", head, &rest[..idx])),
                None => Some(head.to_string()),
            };
        }
    }

    // Unix path: /home/user -> /home, /home -> /
    match normalized.rfind('/') {
        Some(0) => Some("/".to_string()),
        Some(idx) => Some(normalized[..idx].to_string()),
        None => None,
    }
}

/// Last path segment, used as the tab label. Roots label themselves.
pub fn path_label(path: &str) -> String {
    let normalized = strip_trailing_sep(path);
    if is_root_path(normalized) {
        return normalized.to_string();
    }
    normalized
        .rsplit(['/', '\\'])
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(normalized)
        .to_string()
}
