//! Background worker executing filesystem tasks off the event loop.
//!
//! The shell sends [`Task`]s over an mpsc channel; the worker runs each
//! blocking backend call on the tokio blocking pool and sends a
//! [`TaskResult`] back. Results carry everything the dispatcher needs to
//! apply its success/failure policy against current state — in particular
//! the generation tag for listing and search results, which is how stale
//! responses get discarded. Failures are stringified at this boundary so
//! results stay `Clone` and carry no live error types.

use crate::backend::FsBackend;
use crate::clipboard::ClipboardMode;
use crate::entry::FileEntry;
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub enum Task {
    ListDirectory {
        path: String,
        generation: u64,
    },
    SearchFiles {
        path: String,
        query: String,
        limit: usize,
        generation: u64,
    },
    /// Copy or move the clipboard sources into `destination`, depending on
    /// `mode`.
    PasteItems {
        sources: Vec<String>,
        destination: String,
        mode: ClipboardMode,
    },
    DeleteItems {
        paths: Vec<String>,
    },
    RenameItem {
        path: String,
        new_name: String,
    },
    CreateDirectory {
        path: String,
        name: String,
    },
    OpenPath {
        path: String,
    },
}

#[derive(Debug, Clone)]
pub enum TaskResult {
    DirectoryListed {
        generation: u64,
        outcome: Result<Vec<FileEntry>, String>,
    },
    SearchFinished {
        generation: u64,
        outcome: Result<Vec<FileEntry>, String>,
    },
    PasteFinished {
        mode: ClipboardMode,
        outcome: Result<(), String>,
    },
    DeleteFinished {
        outcome: Result<(), String>,
    },
    RenameFinished {
        outcome: Result<String, String>,
    },
    DirectoryCreated {
        name: String,
        outcome: Result<String, String>,
    },
    OpenFinished {
        path: String,
        outcome: Result<(), String>,
    },
}

/// Receive tasks until the sender closes, executing each against `backend`.
/// Exits when the result receiver is dropped.
pub async fn run_worker(
    mut tasks: mpsc::Receiver<Task>,
    results: mpsc::Sender<TaskResult>,
    backend: Arc<dyn FsBackend>,
) {
    while let Some(task) = tasks.recv().await {
        log::debug!("worker: executing {:?}", std::mem::discriminant(&task));
        let result = execute(Arc::clone(&backend), task).await;
        if results.send(result).await.is_err() {
            break;
        }
    }
}

async fn execute(backend: Arc<dyn FsBackend>, task: Task) -> TaskResult {
    match task {
        Task::ListDirectory { path, generation } => {
            let outcome = run_blocking(move || backend.list_directory(&path)).await;
            TaskResult::DirectoryListed { generation, outcome }
        }
        Task::SearchFiles {
            path,
            query,
            limit,
            generation,
        } => {
            let outcome =
                run_blocking(move || backend.search_files(&path, &query, limit)).await;
            TaskResult::SearchFinished { generation, outcome }
        }
        Task::PasteItems {
            sources,
            destination,
            mode,
        } => {
            let outcome = run_blocking(move || match mode {
                ClipboardMode::Copy => backend.copy_items(&sources, &destination),
                ClipboardMode::Cut => backend.move_items(&sources, &destination),
            })
            .await;
            TaskResult::PasteFinished { mode, outcome }
        }
        Task::DeleteItems { paths } => {
            let outcome = run_blocking(move || backend.delete_items(&paths)).await;
            TaskResult::DeleteFinished { outcome }
        }
        Task::RenameItem { path, new_name } => {
            let outcome = run_blocking(move || backend.rename_item(&path, &new_name)).await;
            TaskResult::RenameFinished { outcome }
        }
        Task::CreateDirectory { path, name } => {
            let outcome = {
                let name = name.clone();
                run_blocking(move || backend.create_directory(&path, &name)).await
            };
            TaskResult::DirectoryCreated { name, outcome }
        }
        Task::OpenPath { path } => {
            let outcome = {
                let path_for_call = path.clone();
                run_blocking(move || backend.open_path(&path_for_call)).await
            };
            TaskResult::OpenFinished { path, outcome }
        }
    }
}

/// Run a blocking backend call on the blocking pool, flattening join
/// failures into the stringified error channel.
async fn run_blocking<T, F>(call: F) -> Result<T, String>
where
    T: Send + 'static,
    F: FnOnce() -> crate::error::Result<T> + Send + 'static,
{
    match tokio::task::spawn_blocking(call).await {
        Ok(outcome) => outcome.map_err(|e| e.to_string()),
        Err(join_error) => Err(format!("background task failed: {join_error}")),
    }
}
