//! Rewind Tic-Tac-Toe - terminal client
//!
//! Renders the board, status line and jump-to-move list, and forwards
//! square and history selections to the game history.

#![warn(missing_docs)]

mod app;
mod cli;
mod config;
mod input;
mod terminal;
mod ui;

use anyhow::{Context, Result};
use app::{App, AppAction};
use clap::Parser;
use cli::Cli;
use config::Settings;
use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use terminal::TerminalGuard;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::resolve(&cli).context("Failed to load settings")?;

    init_logging(&settings)?;
    info!("Starting Rewind Tic-Tac-Toe");

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(*settings.show_hints());
    let res = run(&mut terminal, &mut app);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.history().len() - 1, "Exiting");
    res
}

/// Logs to a file so output does not corrupt the alternate screen.
fn init_logging(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Draw, block for one event, handle it, repeat.
#[instrument(skip_all)]
fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    redraw(terminal, app)?;

    loop {
        let action = match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                AppAction::Redraw
            }
            _ => AppAction::Ignore,
        };

        match action {
            AppAction::Quit => {
                info!("User quit");
                return Ok(());
            }
            AppAction::Redraw => redraw(terminal, app)?,
            AppAction::Ignore => {}
        }
    }
}

fn redraw<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let mut hit_map = ui::HitMap::default();
    terminal.draw(|f| hit_map = ui::draw(f, app))?;
    app.set_hit_map(hit_map);
    Ok(())
}
