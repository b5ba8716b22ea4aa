use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, sync::Arc, time::Duration};
use tokio::sync::mpsc;

use tabfm::app::App;
use tabfm::backend::OsBackend;
use tabfm::bookmarks::BookmarkList;
use tabfm::error::{Result, TabFmError};
use tabfm::settings::Settings;
use tabfm::worker::{self, Task, TaskResult};
use tabfm::{dispatcher, event, ui};

#[derive(Parser)]
#[command(name = "tabfm")]
#[command(about = "A multi-tab terminal file manager")]
struct Cli {
    /// Directory to open (defaults to the home directory)
    path: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger only if the TABFM_LOG environment variable is set
    if let Ok(log_file) = std::env::var("TABFM_LOG") {
        env_logger::Builder::new()
            .target(env_logger::Target::Pipe(Box::new(
                std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&log_file)?,
            )))
            .filter_level(log::LevelFilter::Debug)
            .init();

        log::info!("tabfm starting up");
    }

    let cli = Cli::parse();
    let start_path = match cli.path {
        Some(path) => std::fs::canonicalize(&path)
            .map_err(|e| TabFmError::Backend(format!("cannot open {path}: {e}")))?
            .to_string_lossy()
            .into_owned(),
        None => dirs::home_dir()
            .ok_or_else(|| TabFmError::Backend("cannot determine home directory".into()))?
            .to_string_lossy()
            .into_owned(),
    };

    run_interactive(start_path).await
}

async fn run_interactive(start_path: String) -> Result<()> {
    let mut app = App::new(start_path, Settings::load(), BookmarkList::load());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup the background worker
    let (task_sender, task_receiver) = mpsc::channel::<Task>(32);
    let (result_sender, mut result_receiver) = mpsc::channel::<TaskResult>(32);
    let worker_handle = tokio::spawn(worker::run_worker(
        task_receiver,
        result_sender,
        Arc::new(OsBackend::new()),
    ));

    // Load the starting directory
    dispatcher::request_listing(&mut app, &task_sender);

    let tick_rate = Duration::from_millis(250);
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if crossterm::event::poll(tick_rate)? {
            let terminal_event = crossterm::event::read()?;
            if let Some(command) = event::map_event(&app, terminal_event) {
                dispatcher::execute(&mut app, &task_sender, command);
            }
        }

        // Apply finished background work
        while let Ok(result) = result_receiver.try_recv() {
            log::debug!(
                "main: received task result {:?}",
                std::mem::discriminant(&result)
            );
            dispatcher::handle_task_result(&mut app, &task_sender, result);
        }

        if app.should_quit {
            break;
        }
    }

    worker_handle.abort();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
