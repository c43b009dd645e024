//! LazyArt - A terminal-based artwork browser for the Art Institute of Chicago
//!
//! This application shows the public artwork catalog as a paginated table and
//! keeps a selection of artworks across pages.

mod api;
mod app;
mod config;
mod controller;
mod error;
mod events;
mod logging;
mod selection;
mod tasks;
mod ui;

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::api::CatalogClient;
use crate::app::App;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::events::EventHandler;
use crate::tasks::{create_task_channel, ApiMessage, TaskSpawner};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Browse the Art Institute of Chicago artwork catalog.
#[derive(Debug, Parser)]
#[command(name = "lazyart", version, about)]
struct Cli {
    /// Page to show first (1-based).
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    page: u64,

    /// Artworks endpoint to query instead of the configured one.
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Read the configuration from this file.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    let result = run(cli);
    logging::shutdown();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Fatal error");
            eprintln!("{}", e.user_message());
            if let Some(action) = e.suggested_action() {
                eprintln!("{}", action);
            }
            if let Some(dir) = logging::log_directory() {
                eprintln!("Logs are in {}", dir.display());
            }
            ExitCode::FAILURE
        }
    }
}

/// Load configuration, set up the terminal and run the event loop.
fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load config, using defaults");
            Config::default()
        }),
    };

    if let Some(url) = cli.api_url {
        config.settings.api_url = url;
        config.settings.validate()?;
    }

    let client = CatalogClient::from_settings(&config.settings)?;
    info!(api_url = client.base_url(), "Catalog client ready");
    let (mut rx, spawner) = create_task_channel(Arc::new(client));

    let start_page = usize::try_from(cli.page - 1).unwrap_or(0);
    let mut app = App::new(start_page, &config.settings);
    let events = EventHandler::with_tick_rate(config.settings.tick_rate_ms);

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut app, &events, &mut rx, &spawner);
    restore_terminal(&mut terminal)?;

    result
}

/// Draw, wait for input, apply finished tasks, spawn new ones. Repeat until
/// the app asks to quit.
fn event_loop(
    terminal: &mut Tui,
    app: &mut App,
    events: &EventHandler,
    rx: &mut mpsc::UnboundedReceiver<ApiMessage>,
    spawner: &TaskSpawner,
) -> Result<()> {
    loop {
        dispatch_pending(app, spawner);

        terminal
            .draw(|frame| app.view(frame))
            .map_err(|e| AppError::terminal(e.to_string()))?;

        let event = events.next()?;
        app.update(event);

        while let Ok(message) = rx.try_recv() {
            app.handle_api_message(message);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

/// Hand the work queued by the app to background tasks.
fn dispatch_pending(app: &mut App, spawner: &TaskSpawner) {
    for ticket in app.take_page_loads() {
        spawner.spawn_fetch_page(ticket);
    }

    if let Some(requested) = app.take_bulk_select() {
        spawner.spawn_bulk_select(requested);
    }

    if let Some(url) = app.take_open_url() {
        if let Err(e) = open::that(&url) {
            warn!(url = %url, error = %e, "Failed to open browser");
        }
    }
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().map_err(|e| AppError::terminal(e.to_string()))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| AppError::terminal(e.to_string()))?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| AppError::terminal(e.to_string()))
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().map_err(|e| AppError::terminal(e.to_string()))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| AppError::terminal(e.to_string()))?;
    terminal
        .show_cursor()
        .map_err(|e| AppError::terminal(e.to_string()))
}

/// Leave the alternate screen before the default hook prints the panic.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));
}
