use clap::Parser;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use podium::app::AppState;
use podium::async_tasks::{AsyncTaskRunner, TaskMessage};
use podium::cli::Cli;
use podium::config::ConfigStore;
use podium::constants::{FRAME_DURATION_MS, MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH};
use podium::deck::load_deck;
use podium::error::{DeckError, Result};
use podium::types::Config;
use podium::ui;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Validate CLI arguments
    cli.validate().map_err(DeckError::Other)?;

    // Initialize logging if requested; the guard flushes on drop
    let _log_guard = match &cli.log_file {
        Some(log_file) => {
            let guard = init_logging(log_file)?;
            tracing::info!("=== podium starting ===");
            tracing::info!("Log file: {}", log_file);
            Some(guard)
        }
        None => None,
    };

    // Load the deck before touching the terminal so errors print normally
    let deck = load_deck(Path::new(&cli.file))?;
    let mut app = initialize_app_state(&cli, deck)?;

    // Check terminal size
    let (width, height) = crossterm::terminal::size()?;
    if width < MIN_TERMINAL_WIDTH || height < MIN_TERMINAL_HEIGHT {
        tracing::error!(
            "Terminal too small: {}x{} (minimum: {}x{})",
            width,
            height,
            MIN_TERMINAL_WIDTH,
            MIN_TERMINAL_HEIGHT
        );
        return Err(DeckError::TerminalTooSmall);
    }
    tracing::debug!("Terminal size: {}x{}", width, height);

    // Setup terminal
    setup_terminal()?;
    tracing::debug!("Terminal setup completed");

    // Setup Ctrl-C handler
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        tracing::info!("Ctrl-C received, shutting down");
        r.store(false, Ordering::SeqCst);
    })
    .map_err(|e| DeckError::Other(format!("Failed to set Ctrl-C handler: {}", e)))?;

    // Run the application
    let result = run_app(&mut app, running).await;

    // Cleanup terminal
    cleanup_terminal()?;
    tracing::debug!("Terminal cleanup completed");

    result
}

fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture, Hide)?;

    // Set panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal();
        original_hook(panic_info);
    }));

    Ok(())
}

fn cleanup_terminal() -> Result<()> {
    execute!(io::stdout(), Show, DisableMouseCapture, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

fn init_logging(log_file: &str) -> Result<WorkerGuard> {
    use std::fs::OpenOptions;

    // Open/create log file, truncating if it exists
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_file)
        .map_err(|e| DeckError::Other(format!("Failed to open log file: {}", e)))?;

    let (writer, guard) = tracing_appender::non_blocking(file);

    // Only log from our crate unless RUST_LOG says otherwise
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("podium=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .init();

    Ok(guard)
}

fn initialize_app_state(cli: &Cli, deck: podium::types::Deck) -> Result<AppState> {
    tracing::debug!("Initializing application state");

    let config = match ConfigStore::new().and_then(|store| store.load_config()) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load config: {}. Using defaults.", e);
            Config::default()
        }
    };
    tracing::debug!(
        "Config loaded: max_width={:?}, swipe_threshold={}, units_per_column={}, hint_fade_ms={}",
        config.max_width,
        config.swipe_threshold,
        config.swipe_units_per_column,
        config.hint_fade_ms
    );

    // CLI overrides are not persisted
    let config = Config {
        show_hint: config.show_hint && !cli.no_hint,
        ..config
    };

    let mut app = AppState::new(deck, config)?;
    tracing::info!("Presenting {} slides", app.navigator.total());

    if let Some(max_width) = cli.max_width {
        app.cli_max_width_override = Some(max_width);
        tracing::debug!("CLI max width override applied: {}", max_width);
    }

    Ok(app)
}

async fn run_app(app: &mut AppState, running: Arc<AtomicBool>) -> Result<()> {
    // Create backend and terminal
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    // Create task channel
    let (task_tx, mut task_rx) = mpsc::unbounded_channel();
    let task_runner = AsyncTaskRunner::new(task_tx);

    run_event_loop(&mut terminal, app, &mut task_rx, &task_runner, running).await?;

    tracing::info!("podium shutting down");
    Ok(())
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    task_rx: &mut mpsc::UnboundedReceiver<TaskMessage>,
    task_runner: &AsyncTaskRunner,
    running: Arc<AtomicBool>,
) -> Result<()> {
    let frame_duration = Duration::from_millis(FRAME_DURATION_MS);

    while running.load(Ordering::SeqCst) && !app.should_quit {
        let frame_start = Instant::now();

        // Process all pending task messages (non-blocking)
        while let Ok(msg) = task_rx.try_recv() {
            handle_task_message(app, msg);
        }

        // Render UI
        terminal.draw(|f| {
            ui::layout::render(f, app);
        })?;

        // Poll for input events (non-blocking)
        if event::poll(Duration::from_millis(0))? {
            let ev = event::read()?;
            handle_event(app, ev)?;
        }

        if app.take_hint_fade_request() {
            task_runner.spawn_hint_fade(app.config.hint_fade_ms);
        }

        // Sleep to maintain frame rate
        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            tokio::time::sleep(frame_duration - elapsed).await;
        }
    }

    Ok(())
}

fn handle_task_message(app: &mut AppState, msg: TaskMessage) {
    match msg {
        TaskMessage::HintFadeElapsed => {
            tracing::debug!("Hint fade elapsed");
            app.finish_hint_fade();
        }
    }
}

fn handle_event(app: &mut AppState, ev: Event) -> Result<()> {
    match ev {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            ui::handle_key_event(app, key)?;
        }
        Event::Mouse(mouse) => {
            ui::handle_mouse_event(app, mouse)?;
        }
        // Layout is recomputed every frame, including control areas
        Event::Resize(width, height) => {
            tracing::debug!("Terminal resized: {}x{}", width, height);
        }
        _ => {}
    }
    Ok(())
}
