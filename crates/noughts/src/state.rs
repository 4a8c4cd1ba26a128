//! Game state owned by the engine.

use serde::{Deserialize, Serialize};

use crate::{Board, Mark, Move, Outcome, Position, rules};

/// Board, turn, outcome, and the positions played so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    active: Mark,
    outcome: Outcome,
    history: Vec<Position>,
}

impl GameState {
    /// Creates the opening state: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active: Mark::STARTING,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark allowed to move next.
    pub fn active(&self) -> Mark {
        self.active
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the positions played, oldest first.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Returns true once the game is won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Applies a validated move and re-evaluates the outcome.
    pub(crate) fn apply(&mut self, mov: Move) {
        self.board.set(mov.position, mov.mark);
        self.history.push(mov.position);
        self.outcome = rules::evaluate_outcome(&self.board, mov.mark);
        if !self.outcome.is_terminal() {
            self.active = mov.mark.opponent();
        }
    }

    /// Restores the opening state in place.
    pub(crate) fn reset(&mut self) {
        self.board.clear();
        self.active = Mark::STARTING;
        self.outcome = Outcome::InProgress;
        self.history.clear();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
