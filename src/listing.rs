//! The directory listing store and its request generation guard.
//!
//! Rapid navigation (back/forward, tab clicks, typed paths) can put two
//! listing requests in flight at once. Requests are never cancelled; instead
//! every request captures a generation number when it starts, and a
//! completion whose generation no longer matches the counter is discarded
//! outright — success and failure alike. The slow response to an abandoned
//! navigation can therefore never clobber the fast response to the latest
//! one.

use crate::entry::FileEntry;

#[derive(Debug, Default)]
pub struct DirectoryListing {
    entries: Vec<FileEntry>,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl DirectoryListing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a new load: bump the generation, raise the loading flag, drop
    /// any stale error. Returns the generation tag the completion must carry.
    /// The caller is responsible for clearing the selection model, since
    /// selection is scoped to the listing being replaced.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Apply a completed request. Returns `false` (leaving all state
    /// untouched) when `generation` is not the latest issued one.
    pub fn finish(
        &mut self,
        generation: u64,
        result: Result<Vec<FileEntry>, String>,
    ) -> bool {
        if generation != self.generation {
            log::debug!(
                "discarding stale listing result (generation {} != {})",
                generation,
                self.generation
            );
            return false;
        }
        self.loading = false;
        match result {
            Ok(entries) => {
                self.entries = entries;
            }
            Err(message) => {
                self.entries.clear();
                self.error = Some(message);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str) -> FileEntry {
        FileEntry {
            name: path.trim_start_matches('/').to_string(),
            path: path.to_string(),
            is_dir: false,
            is_symlink: false,
            is_hidden: false,
            size: 0,
            modified: None,
            mime_type: None,
        }
    }

    fn paths(listing: &DirectoryListing) -> Vec<&str> {
        listing.entries().iter().map(|e| e.path.as_str()).collect()
    }

    #[test]
    fn begin_sets_loading_and_clears_error() {
        let mut listing = DirectoryListing::new();
        let gen = listing.begin();
        listing.finish(gen, Err("boom".into()));
        assert_eq!(listing.error(), Some("boom"));

        let gen = listing.begin();
        assert!(listing.is_loading());
        assert_eq!(listing.error(), None);
        assert_eq!(gen, 2);
    }

    #[test]
    fn finish_applies_matching_success() {
        let mut listing = DirectoryListing::new();
        let gen = listing.begin();
        assert!(listing.finish(gen, Ok(vec![entry("/a")])));
        assert!(!listing.is_loading());
        assert_eq!(paths(&listing), ["/a"]);
    }

    #[test]
    fn finish_applies_matching_failure() {
        let mut listing = DirectoryListing::new();
        let first = listing.begin();
        listing.finish(first, Ok(vec![entry("/a")]));

        let gen = listing.begin();
        assert!(listing.finish(gen, Err("permission denied".into())));
        assert!(listing.entries().is_empty());
        assert_eq!(listing.error(), Some("permission denied"));
        assert!(!listing.is_loading());
    }

    #[test]
    fn stale_success_is_discarded() {
        let mut listing = DirectoryListing::new();
        let first = listing.begin();
        let second = listing.begin();

        // The newer request resolves first...
        assert!(listing.finish(second, Ok(vec![entry("/b")])));
        // ...then the abandoned one arrives late and must not win.
        assert!(!listing.finish(first, Ok(vec![entry("/a")])));
        assert_eq!(paths(&listing), ["/b"]);
    }

    #[test]
    fn stale_failure_is_discarded() {
        let mut listing = DirectoryListing::new();
        let first = listing.begin();
        let second = listing.begin();

        assert!(listing.finish(second, Ok(vec![entry("/b")])));
        assert!(!listing.finish(first, Err("too late".into())));
        assert_eq!(listing.error(), None);
        assert_eq!(paths(&listing), ["/b"]);
    }

    #[test]
    fn superseded_request_keeps_loading_until_latest_resolves() {
        let mut listing = DirectoryListing::new();
        let first = listing.begin();
        listing.begin();

        // The stale completion must not drop the loading flag either: the
        // latest request is still outstanding.
        assert!(!listing.finish(first, Ok(vec![entry("/a")])));
        assert!(listing.is_loading());
    }
}
