//! Clipboard state: at most one pending copy or cut operation.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardMode {
    Copy,
    Cut,
}

/// The pending clipboard operation. `mode` is `None` exactly when `paths` is
/// empty; a new copy or cut replaces the previous contents wholesale.
#[derive(Debug, Clone, Default)]
pub struct ClipboardState {
    paths: Vec<String>,
    mode: Option<ClipboardMode>,
}

impl ClipboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage `paths` for a non-destructive copy. An empty list clears instead,
    /// keeping the mode/paths invariant intact.
    pub fn copy(&mut self, paths: Vec<String>) {
        self.stage(paths, ClipboardMode::Copy);
    }

    /// Stage `paths` for a move-on-paste cut.
    pub fn cut(&mut self, paths: Vec<String>) {
        self.stage(paths, ClipboardMode::Cut);
    }

    fn stage(&mut self, paths: Vec<String>, mode: ClipboardMode) {
        if paths.is_empty() {
            self.clear();
        } else {
            self.paths = paths;
            self.mode = Some(mode);
        }
    }

    pub fn clear(&mut self) {
        self.paths.clear();
        self.mode = None;
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn mode(&self) -> Option<ClipboardMode> {
        self.mode
    }

    /// True when `path` is staged for a cut; the UI dims such entries.
    pub fn contains_cut(&self, path: &str) -> bool {
        self.mode == Some(ClipboardMode::Cut) && self.paths.iter().any(|p| p == path)
    }
}
