//! A terminal viewer for the employee list.
//!
//! Fetches the members JSON once on start and pages through it ten rows at a
//! time.  Run with `--help` for options.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    fetch_runtime::{self, FetchResult},
    handler,
    state::AppState,
};
use crate::config::AppConfig;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Paginated employee table")]
struct Cli {
    /// Endpoint serving the employee JSON array (overrides the config file).
    #[arg(long)]
    url: Option<String>,

    /// Request timeout in seconds (overrides the config file).
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=300))]
    timeout: Option<u64>,

    /// Page to open on; clamped once the list has loaded.
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Alternative config file.
    #[arg(long)]
    config: Option<PathBuf>,
}

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (silent unless RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // keep stdout for the TUI
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref());
    if let Some(url) = cli.url {
        config.api_url = url;
    }
    if let Some(secs) = cli.timeout {
        config.timeout = Duration::from_secs(secs);
    }

    let client = core::fetch::build_client(config.timeout).context("building HTTP client")?;
    let (fetch_tx, fetch_rx) = tokio::sync::mpsc::unbounded_channel::<FetchResult>();
    fetch_runtime::spawn_employee_fetch(fetch_tx, client, config.api_url.clone());

    let mut state = AppState::new(config);
    if cli.page != 1 {
        state.go_to_page(cli.page);
    }

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run(&mut terminal, &mut state, fetch_rx).await;

    // ── teardown ──────────────────────────────────────────────
    // Every step runs even if an earlier one (or the loop) failed.
    let teardown = [
        disable_raw_mode(),
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        ),
        terminal.show_cursor(),
    ];

    first_error(result, teardown)
}

/// The loop's own error wins; otherwise the first failed teardown step.
fn first_error(result: Result<()>, teardown: impl IntoIterator<Item = io::Result<()>>) -> Result<()> {
    let restored = teardown
        .into_iter()
        .collect::<io::Result<Vec<()>>>()
        .context("restoring the terminal");
    result.and(restored.map(|_| ()))
}

async fn run(
    terminal: &mut Tui,
    state: &mut AppState,
    mut fetch_rx: tokio::sync::mpsc::UnboundedReceiver<FetchResult>,
) -> Result<()> {
    let mut events = spawn_event_reader(Duration::from_millis(100));

    loop {
        terminal.draw(|frame| ui::draw(frame, state))?;

        tokio::select! {
            biased;

            Some(event) = events.recv() => {
                match event {
                    AppEvent::Key(k) => handler::handle_key(state, k),
                    AppEvent::Mouse(m) => handler::handle_mouse(state, m),
                    AppEvent::Resize => {}
                    AppEvent::Tick => state.tick = state.tick.wrapping_add(1),
                }
            }

            Some(result) = fetch_rx.recv() => {
                state.apply_fetch(result);
            }

            else => break,
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
