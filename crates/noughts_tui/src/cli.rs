//! Command-line interface for noughts.

use clap::{Parser, ValueEnum};
use noughts::GameMode;
use std::path::PathBuf;

/// Noughts - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe against a friend or the AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Start straight into a mode instead of showing the main menu
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Path to the TOML config file (optional)
    #[arg(short, long, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Milliseconds the AI "thinks" before moving
    #[arg(long)]
    pub ai_delay_ms: Option<u64>,

    /// Where to write logs
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Game mode as spelled on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Player vs Player
    Pvp,
    /// Player vs AI
    Ai,
}

impl From<ModeArg> for GameMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Pvp => GameMode::PlayerVsPlayer,
            ModeArg::Ai => GameMode::PlayerVsAi,
        }
    }
}
