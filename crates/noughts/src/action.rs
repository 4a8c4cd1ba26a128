//! First-class move types.
//!
//! A move is a domain event: the mark being placed and where. It can be
//! validated against a [`GameState`](crate::GameState) before it is applied.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Mark, Position};

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where it is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move would be rejected.
///
/// The engine never returns these from its mutating calls; a rejected move
/// is a silent no-op. They surface through [`Engine::validate`](crate::Engine::validate)
/// and in debug logs.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The index does not name a cell.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The cell is already marked.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),

    /// It is the other mark's turn.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Mark),

    /// The AI is still thinking about its move.
    #[display("AI turn in progress")]
    AiTurnPending,
}

impl std::error::Error for MoveError {}
