//! Noughts - terminal tic-tac-toe.

#![warn(missing_docs)]

mod app;
mod cli;
mod input;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts::{Config, GameMode};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

use app::{App, Command};
use cli::Cli;

/// Events delivered to the UI loop from background tasks.
#[derive(Debug, Clone, Copy)]
enum AppEvent {
    /// The AI delay armed with this generation has elapsed.
    AiMoveDue(u64),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?
        .with_mode(cli.mode.map(GameMode::from))
        .with_ai_delay_ms(cli.ai_delay_ms)
        .with_log_file(cli.log_file);
    config.validate()?;

    // Log to a file so output does not interfere with the TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create {}", config.log_file().display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(?config, "Starting noughts");

    let app = App::new(*config.mode(), ui::cell_count())?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = run_app(&mut terminal, app, config.ai_delay()).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Exiting");
    res
}

/// Draws, reads keys, and runs the AI timer until the user quits.
#[instrument(skip_all, fields(ai_delay_ms = ai_delay.as_millis() as u64))]
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    ai_delay: Duration,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut ai_timer: Option<JoinHandle<()>> = None;

    loop {
        while let Ok(event) = event_rx.try_recv() {
            match event {
                AppEvent::AiMoveDue(generation) => {
                    ai_timer = None;
                    app.on_ai_move_due(generation);
                }
            }
        }
        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.handle_key(key.code) {
            Command::None => {}
            Command::Quit => return Ok(()),
            Command::CancelAi => {
                if let Some(timer) = ai_timer.take() {
                    debug!("Aborting AI timer");
                    timer.abort();
                }
            }
            Command::ScheduleAi { generation } => {
                if let Some(timer) = ai_timer.take() {
                    timer.abort();
                }
                let tx = event_tx.clone();
                ai_timer = Some(tokio::spawn(async move {
                    tokio::time::sleep(ai_delay).await;
                    let _ = tx.send(AppEvent::AiMoveDue(generation));
                }));
            }
        }
    }
}
