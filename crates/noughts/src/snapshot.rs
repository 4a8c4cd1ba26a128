//! The report handed back to the UI after every engine call.

use serde::{Deserialize, Serialize};

use crate::{CELL_COUNT, Cell, GameMode, Mark, Outcome, Position};

/// Everything a front end needs to render the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub(crate) cells: [Cell; CELL_COUNT],
    pub(crate) active: Mark,
    pub(crate) outcome: Outcome,
    pub(crate) mode: GameMode,
    pub(crate) ai_thinking: bool,
    pub(crate) winning_line: Option<[Position; 3]>,
}

impl Snapshot {
    /// The nine cells, row-major.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// The cell at `pos`.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// The mark to move next.
    pub fn active(&self) -> Mark {
        self.active
    }

    /// The outcome so far.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The mode the engine runs in.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// True while the AI owes a move.
    pub fn ai_thinking(&self) -> bool {
        self.ai_thinking
    }

    /// The completed triple, once someone has won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.winning_line
    }

    /// True when human input is accepted at all.
    pub fn accepting_input(&self) -> bool {
        !self.outcome.is_terminal() && !self.ai_thinking && self.mode.is_human(self.active)
    }

    /// True when clicking `pos` would place a mark.
    pub fn cell_enabled(&self, pos: Position) -> bool {
        self.accepting_input() && self.cell(pos) == Cell::Empty
    }

    /// Game-over text, or `None` while the game is live.
    pub fn banner(&self) -> Option<String> {
        match self.outcome {
            Outcome::InProgress => None,
            Outcome::Win(_) => Some(format!("Game Over: {}", self.outcome)),
            Outcome::Draw => Some(self.outcome.to_string()),
        }
    }

    /// True when the reset control should be shown.
    pub fn show_reset(&self) -> bool {
        self.outcome.is_terminal()
    }
}
