mod app;
mod cli;
mod controller;
mod domain;
mod input;
mod logging;
mod persistence;
mod store;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::Parser;
use controller::TaskListController;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{config_file, init_config, load_config, log_dir, AppConfig};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use store::HttpTaskStore;
use tracing::{error, info, warn};
use url::Url;

#[derive(Parser)]
#[command(name = "fasttodo")]
#[command(about = "A terminal client for a remote todo list service", long_about = None)]
struct Cli {
    /// Task store base URL (overrides the config file)
    #[arg(long, global = true, env = "FASTTODO_BASE_URL")]
    base_url: Option<Url>,

    #[command(subcommand)]
    command: Option<cli::Commands>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = config_file()?;
    let config = load_config(&config_path)?.with_base_url(cli.base_url);

    match cli.command {
        Some(cli::Commands::Init) => {
            logging::init_stderr(&config.log_filter)?;
            init_config(&config_path, &config)?;
            println!("Wrote config: {}", config_path.display());
            println!("Task store: {}", config.base_url);
            Ok(())
        }
        Some(command) => {
            logging::init_stderr(&config.log_filter)?;
            let store = HttpTaskStore::new(config.base_url.clone())
                .context("Failed to create HTTP client")?;
            let mut controller = TaskListController::new(Arc::new(store));
            cli::run(command, &mut controller, &mut io::stdout()).await
        }
        None => run_tui(config).await,
    }
}

async fn run_tui(config: AppConfig) -> Result<()> {
    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = logging::init_file(&config.log_filter, &log_dir()?)?;

    let store = HttpTaskStore::new(config.base_url.clone())
        .context("Failed to create HTTP client")?;
    info!(base_url = %store.base_url(), "starting");
    let mut app = AppState::new(TaskListController::new(Arc::new(store)), config.use_emoji);
    app.spawn_refresh();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Quitting is a focus loss too; give pending saves a moment to land
    app.blur();
    if tokio::time::timeout(ticker::shutdown_grace(), app.settle())
        .await
        .is_err()
    {
        warn!(in_flight = app.in_flight, "exiting with requests still in flight");
    }

    if let Err(err) = result {
        error!(error = %err, "ui loop failed");
        eprintln!("Error: {}", err);
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    let poll_interval = ticker::poll_interval();

    loop {
        app.drain_outcomes();

        terminal.draw(|f| ui::render(f, app))?;

        // crossterm polling blocks; keep it off the async worker
        let ready = tokio::task::block_in_place(|| event::poll(poll_interval))?;
        if ready {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }
    }
}
