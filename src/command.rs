//! User-facing commands the dispatcher can execute.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,

    // Tabs
    NewTab,
    CloseTab,
    NextTab,
    PrevTab,
    /// Activate the tab at a zero-based display index.
    ActivateTab(usize),

    // Navigation
    Back,
    Forward,
    Up,
    Refresh,
    NavigateTo(String),

    // Cursor and opening
    CursorUp,
    CursorDown,
    OpenCursor,

    // Selection
    ToggleSelect,
    ExtendSelectionUp,
    ExtendSelectionDown,
    SelectAll,
    ClearSelection,

    // Clipboard
    CopySelection,
    CutSelection,
    Paste,

    // Mutations
    DeleteSelection,
    ConfirmDelete,
    CreateFolder(String),
    Rename(String),
    Search(String),

    // Prompts
    PromptCreateFolder,
    PromptRename,
    PromptSearch,
    PromptOpenLocation,
    PromptInput(char),
    PromptBackspace,
    PromptCancel,
    PromptSubmit,

    // Settings and bookmarks
    ToggleHidden,
    ToggleSidebar,
    ToggleViewMode,
    CycleSortKey,
    ToggleSortOrder,
    AddBookmark,
    RemoveBookmark,
}
