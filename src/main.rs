mod auth;
mod controller;
mod logging;
mod model;
mod storage;
mod view;

use std::io;
use std::sync::Arc;
use anyhow::Result;
use std::time::Duration;
use tokio::sync::Mutex;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use auth::FileAuthService;
use controller::AppController;
use model::{AppModel, Catalog, UserProgress};
use storage::{FileStore, KeyValueStore, MemoryStore};
use view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== NeoVerse Client Starting ===");

    let catalog = Catalog::new();
    tracing::info!(
        books = catalog.books().len(),
        categories = catalog.categories().len(),
        "Catalog loaded"
    );

    // Fall back to an in-memory store if the on-disk one is unreadable
    let store: Arc<dyn KeyValueStore> = match FileStore::open(storage::default_store_path()) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::warn!(error = %e, "Progress store unavailable, scores will not persist");
            Arc::new(MemoryStore::new())
        }
    };
    let auth_service = Arc::new(FileAuthService::new(auth::default_auth_dir()));
    let progress = UserProgress::load(store.as_ref())?;
    tracing::info!(
        cumulative = progress.cumulative,
        unlocked = progress.unlocked,
        "Progress restored"
    );

    let app_model = AppModel::new(catalog, store, auth_service, progress);

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let model = Arc::new(Mutex::new(app_model));
    let controller = AppController::new(model.clone());

    // Pick up a cached session, if one is still valid
    controller.bootstrap_session().await;

    let res = run_app(&mut terminal, model.clone(), controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("NeoVerse Client shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: AppController,
) -> io::Result<()> {
    loop {
        // Get current state
        let (catalog, ui_state, content_state, quiz, chat, progress, should_quit) = {
            let model_guard = model.lock().await;

            // Auto-clear old errors (after 5 seconds)
            model_guard.auto_clear_old_errors().await;

            (
                model_guard.catalog.clone(),
                model_guard.get_ui_state().await,
                model_guard.get_content_state().await,
                model_guard.get_quiz_state().await,
                model_guard.get_chat_state().await,
                model_guard.get_progress().await,
                model_guard.should_quit().await,
            )
        };

        // Draw UI
        terminal.draw(|f| {
            AppView::render(f, &catalog, &ui_state, &content_state, &quiz, &chat, &progress);
        })?;

        // Handle input with shorter poll time for smoother UI updates
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Errors are surfaced through the model, nothing to log here
                let _ = controller.handle_key_event(key).await;
            }
        }

        if should_quit {
            break;
        }
    }

    Ok(())
}
