//! Noughts - a tic-tac-toe board engine.
//!
//! The engine owns a 3x3 board, whose turn it is, and whether the game has
//! been won or drawn. A front end forwards cell activations and reset
//! requests and renders the [`Snapshot`] it gets back.
//!
//! # Architecture
//!
//! - **Types**: marks, cells, the board, and outcomes
//! - **Rules**: pure win/draw evaluation over the eight triples
//! - **Contracts**: move preconditions with typed rejection reasons
//! - **AI**: a fixed-priority picker (win, block, center, corner, any)
//! - **Engine**: the owned game state and the calls a UI makes
//!
//! # Example
//!
//! ```
//! use noughts::{Engine, GameMode, Mark, Outcome};
//!
//! let mut engine = Engine::new(GameMode::PlayerVsAi);
//! let snapshot = engine.on_cell_activated(0);
//! assert!(snapshot.ai_thinking());
//!
//! // The caller waits, then lets the AI move.
//! let snapshot = engine.play_ai_turn();
//! assert_eq!(snapshot.active(), Mark::X);
//! assert_eq!(snapshot.outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]

mod action;
pub mod ai;
mod config;
pub mod contracts;
mod engine;
mod error;
pub mod invariants;
mod mode;
mod position;
pub mod rules;
mod snapshot;
mod state;
mod types;

pub use action::{Move, MoveError};
pub use ai::{AiChoice, AiRule, select_ai_move};
pub use config::{Config, MAX_AI_DELAY_MS};
pub use engine::Engine;
pub use error::{ConfigError, SetupError};
pub use mode::GameMode;
pub use position::Position;
pub use rules::evaluate_outcome;
pub use snapshot::Snapshot;
pub use state::GameState;
pub use types::{Board, CELL_COUNT, Cell, Mark, Outcome};
