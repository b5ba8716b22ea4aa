//! Executes [`Command`]s against the application state and applies worker
//! results.
//!
//! Two entry points: [`execute`] runs a user command synchronously, sending
//! backend work to the worker where needed, and [`handle_task_result`] is the
//! continuation for everything the worker finishes. All completion handling
//! reads current state from the owning store at the moment of use — nothing
//! is captured across the async boundary except the request's own payload.
//!
//! Failure policy, uniformly: a failed mutation is logged and surfaced in the
//! status line, every store is left exactly as it was before the action, and
//! no reload is issued. A stale listing result is not an error; it is
//! silently discarded by the listing store.

use crate::app::{App, PromptKind};
use crate::backend::SEARCH_RESULT_LIMIT;
use crate::clipboard::ClipboardMode;
use crate::command::Command;
use crate::paths;
use crate::worker::{Task, TaskResult};
use tokio::sync::mpsc;

pub fn execute(app: &mut App, sender: &mpsc::Sender<Task>, command: Command) {
    match command {
        Command::Quit => {
            app.should_quit = true;
        }

        Command::NewTab => {
            let path = app.tabs.active_tab().path.clone();
            app.tabs.add_tab(path);
            request_listing(app, sender);
        }
        Command::CloseTab => {
            let before = app.tabs.active_tab().path.clone();
            app.tabs.close_tab(app.tabs.active_id());
            if app.tabs.active_tab().path != before {
                request_listing(app, sender);
            }
        }
        Command::NextTab => {
            app.tabs.cycle_active(true);
            request_listing(app, sender);
        }
        Command::PrevTab => {
            app.tabs.cycle_active(false);
            request_listing(app, sender);
        }
        Command::ActivateTab(index) => {
            let target = app.tabs.tabs().get(index).map(|t| t.id);
            if let Some(id) = target {
                if id != app.tabs.active_id() {
                    app.tabs.set_active_tab(id);
                    request_listing(app, sender);
                }
            }
        }

        Command::Back => {
            if app.tabs.can_go_back() {
                app.tabs.go_back();
                request_listing(app, sender);
            }
        }
        Command::Forward => {
            if app.tabs.can_go_forward() {
                app.tabs.go_forward();
                request_listing(app, sender);
            }
        }
        Command::Up => {
            if app.tabs.can_go_up() {
                app.tabs.go_up();
                request_listing(app, sender);
            }
        }
        Command::Refresh => {
            request_listing(app, sender);
        }
        Command::NavigateTo(path) => {
            navigate_to(app, sender, path);
        }

        Command::CursorUp => app.move_cursor(-1),
        Command::CursorDown => app.move_cursor(1),
        Command::OpenCursor => {
            if let Some(entry) = app.cursor_entry() {
                open_entry(app, sender, entry.is_dir, entry.path);
            }
        }

        Command::ToggleSelect => {
            if let Some(entry) = app.cursor_entry() {
                app.selection.toggle(&entry.path);
            }
        }
        Command::ExtendSelectionUp => {
            app.move_cursor(-1);
            extend_selection_to_cursor(app);
        }
        Command::ExtendSelectionDown => {
            app.move_cursor(1);
            extend_selection_to_cursor(app);
        }
        Command::SelectAll => {
            // All loaded entries, not just the filtered view.
            let entries = app.listing.entries().to_vec();
            app.selection.select_all(&entries);
            app.status_message = format!("Selected {} entries", app.selection.len());
        }
        Command::ClearSelection => {
            app.selection.clear();
        }

        Command::CopySelection => {
            stage_clipboard(app, ClipboardMode::Copy);
        }
        Command::CutSelection => {
            stage_clipboard(app, ClipboardMode::Cut);
        }
        Command::Paste => {
            paste(app, sender);
        }

        Command::DeleteSelection => {
            if app.selection.is_empty() {
                app.status_message = "Nothing selected".to_string();
            } else {
                app.open_prompt(PromptKind::ConfirmDelete, String::new());
            }
        }
        Command::ConfirmDelete => {
            delete_selection(app, sender);
        }
        Command::CreateFolder(name) => {
            create_folder(app, sender, name);
        }
        Command::Rename(new_name) => {
            rename_selected(app, sender, new_name);
        }
        Command::Search(query) => {
            search(app, sender, query);
        }

        Command::PromptCreateFolder => {
            app.open_prompt(PromptKind::CreateFolder, String::new());
        }
        Command::PromptRename => {
            if let Some(path) = app.selection.single() {
                let current = paths::path_label(path);
                app.open_prompt(PromptKind::Rename, current);
            } else {
                app.status_message = "Select exactly one entry to rename".to_string();
            }
        }
        Command::PromptSearch => {
            app.open_prompt(PromptKind::Search, String::new());
        }
        Command::PromptOpenLocation => {
            let current = app.tabs.active_tab().path.clone();
            app.open_prompt(PromptKind::OpenLocation, current);
        }
        Command::PromptInput(ch) => {
            if let Some(prompt) = app.prompt.as_mut() {
                prompt.buffer.push(ch);
            }
        }
        Command::PromptBackspace => {
            if let Some(prompt) = app.prompt.as_mut() {
                prompt.buffer.pop();
            }
        }
        Command::PromptCancel => {
            app.close_prompt();
        }
        Command::PromptSubmit => {
            if let Some(prompt) = app.prompt.take() {
                let follow_up = match prompt.kind {
                    PromptKind::CreateFolder => Command::CreateFolder(prompt.buffer),
                    PromptKind::Rename => Command::Rename(prompt.buffer),
                    PromptKind::Search => Command::Search(prompt.buffer),
                    PromptKind::OpenLocation => Command::NavigateTo(prompt.buffer),
                    PromptKind::ConfirmDelete => Command::ConfirmDelete,
                };
                execute(app, sender, follow_up);
            }
        }

        Command::ToggleHidden => {
            app.settings.show_hidden = !app.settings.show_hidden;
            app.clamp_cursor();
            persist_settings(app);
        }
        Command::ToggleSidebar => {
            app.settings.sidebar_visible = !app.settings.sidebar_visible;
            persist_settings(app);
        }
        Command::ToggleViewMode => {
            app.settings.view_mode = match app.settings.view_mode {
                crate::settings::ViewMode::List => crate::settings::ViewMode::Grid,
                crate::settings::ViewMode::Grid => crate::settings::ViewMode::List,
            };
            persist_settings(app);
        }
        Command::CycleSortKey => {
            app.settings.sort.key = app.settings.sort.key.next();
            persist_settings(app);
        }
        Command::ToggleSortOrder => {
            app.settings.sort.order = app.settings.sort.order.toggled();
            persist_settings(app);
        }
        Command::AddBookmark => {
            let path = app.tabs.active_tab().path.clone();
            let label = paths::path_label(&path);
            if app.bookmarks.add(label, path) {
                persist_bookmarks(app);
                app.status_message = "Bookmark added".to_string();
            }
        }
        Command::RemoveBookmark => {
            let path = app.tabs.active_tab().path.clone();
            if app.bookmarks.remove(&path) {
                persist_bookmarks(app);
                app.status_message = "Bookmark removed".to_string();
            }
        }
    }
}

/// Apply a finished worker task to current state.
pub fn handle_task_result(app: &mut App, sender: &mpsc::Sender<Task>, result: TaskResult) {
    match result {
        TaskResult::DirectoryListed {
            generation,
            outcome,
        } => {
            if app.listing.finish(generation, outcome) {
                app.clamp_cursor();
                if app.listing.error().is_none() {
                    app.status_message =
                        format!("{} entries", app.listing.entries().len());
                }
            }
        }
        TaskResult::SearchFinished {
            generation,
            outcome,
        } => {
            if app.listing.finish(generation, outcome) {
                app.clamp_cursor();
                if app.listing.error().is_none() {
                    app.status_message =
                        format!("{} matches", app.listing.entries().len());
                }
            }
        }

        TaskResult::PasteFinished { mode, outcome } => match outcome {
            Ok(()) => {
                // Cut is single-use: clear only after the move landed.
                if mode == ClipboardMode::Cut {
                    app.clipboard.clear();
                }
                app.status_message = "Paste completed".to_string();
                request_listing(app, sender);
            }
            Err(e) => {
                log::error!("paste failed: {e}");
                app.status_message = format!("Paste failed: {e}");
            }
        },

        TaskResult::DeleteFinished { outcome } => match outcome {
            Ok(()) => {
                app.selection.clear();
                app.status_message = "Deleted".to_string();
                request_listing(app, sender);
            }
            Err(e) => {
                log::error!("delete failed: {e}");
                app.status_message = format!("Delete failed: {e}");
            }
        },

        TaskResult::RenameFinished { outcome } => match outcome {
            Ok(new_path) => {
                // The old path's selection is stale either way.
                app.selection.clear();
                app.status_message = format!("Renamed to {}", paths::path_label(&new_path));
                request_listing(app, sender);
            }
            Err(e) => {
                log::error!("rename failed: {e}");
                app.status_message = format!("Rename failed: {e}");
            }
        },

        TaskResult::DirectoryCreated { name, outcome } => match outcome {
            Ok(_) => {
                app.status_message = format!("Created {name}");
                request_listing(app, sender);
            }
            Err(e) => {
                log::error!("create folder failed: {e}");
                app.status_message = format!("Create folder failed: {e}");
            }
        },

        TaskResult::OpenFinished { path, outcome } => {
            if let Err(e) = outcome {
                // Opening a file must never take the shell down with it.
                log::error!("open failed for {path}: {e}");
                app.status_message = format!("Open failed: {e}");
            }
        }
    }
}

/// Start a listing request for the active tab's directory. Selection is
/// scoped to the listing being replaced, so it clears here, before the
/// request is even sent.
pub fn request_listing(app: &mut App, sender: &mpsc::Sender<Task>) {
    let path = app.tabs.active_tab().path.clone();
    let generation = app.listing.begin();
    app.selection.clear();
    send_task(sender, Task::ListDirectory { path, generation });
}

/// Navigate the active tab and load the new directory.
pub fn navigate_to(app: &mut App, sender: &mpsc::Sender<Task>, path: String) {
    app.tabs.navigate(path);
    app.cursor = 0;
    request_listing(app, sender);
}

fn open_entry(app: &mut App, sender: &mpsc::Sender<Task>, is_dir: bool, path: String) {
    if is_dir {
        navigate_to(app, sender, path);
    } else {
        app.status_message = format!("Opening {}", paths::path_label(&path));
        send_task(sender, Task::OpenPath { path });
    }
}

fn extend_selection_to_cursor(app: &mut App) {
    if let Some(entry) = app.cursor_entry() {
        let view = app.visible_entries();
        app.selection.select_range(&view, &entry.path);
    }
}

fn stage_clipboard(app: &mut App, mode: ClipboardMode) {
    let paths = app.selected_paths();
    if paths.is_empty() {
        app.status_message = "Nothing selected".to_string();
        return;
    }
    let count = paths.len();
    match mode {
        ClipboardMode::Copy => {
            app.clipboard.copy(paths);
            app.status_message = format!("Copied {count} entries");
        }
        ClipboardMode::Cut => {
            app.clipboard.cut(paths);
            app.status_message = format!("Cut {count} entries");
        }
    }
}

/// Send the pending clipboard operation to the worker. A no-op when the
/// clipboard is empty. The clipboard itself is not touched here: a copy is
/// repeatable, and a cut only clears once the move succeeds.
fn paste(app: &mut App, sender: &mpsc::Sender<Task>) {
    let Some(mode) = app.clipboard.mode() else {
        return;
    };
    let destination = app.tabs.active_tab().path.clone();
    let sources = app.clipboard.paths().to_vec();
    app.status_message = format!("Pasting {} entries...", sources.len());
    send_task(
        sender,
        Task::PasteItems {
            sources,
            destination,
            mode,
        },
    );
}

fn delete_selection(app: &mut App, sender: &mpsc::Sender<Task>) {
    let paths = app.selected_paths();
    if paths.is_empty() {
        return;
    }
    app.status_message = format!("Deleting {} entries...", paths.len());
    send_task(sender, Task::DeleteItems { paths });
}

fn create_folder(app: &mut App, sender: &mpsc::Sender<Task>, name: String) {
    if name.trim().is_empty() {
        app.status_message = "Folder name cannot be empty".to_string();
        return;
    }
    let path = app.tabs.active_tab().path.clone();
    send_task(sender, Task::CreateDirectory { path, name });
}

fn rename_selected(app: &mut App, sender: &mpsc::Sender<Task>, new_name: String) {
    if new_name.trim().is_empty() {
        app.status_message = "Name cannot be empty".to_string();
        return;
    }
    let Some(path) = app.selection.single().map(str::to_string) else {
        app.status_message = "Select exactly one entry to rename".to_string();
        return;
    };
    send_task(sender, Task::RenameItem { path, new_name });
}

fn search(app: &mut App, sender: &mpsc::Sender<Task>, query: String) {
    if query.trim().is_empty() {
        return;
    }
    let path = app.tabs.active_tab().path.clone();
    let generation = app.listing.begin();
    app.selection.clear();
    app.status_message = format!("Searching for \"{query}\"...");
    send_task(
        sender,
        Task::SearchFiles {
            path,
            query,
            limit: SEARCH_RESULT_LIMIT,
            generation,
        },
    );
}

fn persist_settings(app: &App) {
    if let Err(e) = app.settings.save() {
        log::warn!("failed to save settings: {e}");
    }
}

fn persist_bookmarks(app: &App) {
    if let Err(e) = app.bookmarks.save() {
        log::warn!("failed to save bookmarks: {e}");
    }
}

/// Hand a task to the worker without blocking the event loop.
fn send_task(sender: &mpsc::Sender<Task>, task: Task) {
    let sender = sender.clone();
    tokio::spawn(async move {
        if let Err(e) = sender.send(task).await {
            log::error!("failed to send worker task: {e}");
        }
    });
}
