//! The board engine.
//!
//! [`Engine`] owns the only [`GameState`] of a session. The front end owns
//! the engine and calls into it synchronously; every mutating call returns a
//! [`Snapshot`]. Illegal input never fails loudly: the move is dropped, the
//! reason is logged at debug level, and the unchanged snapshot comes back.
//!
//! In [`GameMode::PlayerVsAi`] the engine does not play the AI on its own.
//! After a human move it reports `ai_thinking`, and the caller decides when
//! to invoke [`Engine::play_ai_turn`] (the terminal UI waits a short delay).

use tracing::{debug, info, instrument, warn};

use crate::{
    CELL_COUNT, GameMode, GameState, Mark, Move, MoveError, SetupError, Snapshot, ai,
    contracts::LegalMove, invariants, rules,
};

/// Tic-tac-toe engine for one session.
#[derive(Debug, Clone)]
pub struct Engine {
    state: GameState,
    mode: GameMode,
}

impl Engine {
    /// Creates an engine with an empty board.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        info!(mode = mode.label(), "Starting new game");
        Self {
            state: GameState::new(),
            mode,
        }
    }

    /// Creates an engine for a front end exposing `cell_count` cells.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] unless the grid has exactly nine cells.
    #[instrument]
    pub fn bind(mode: GameMode, cell_count: usize) -> Result<Self, SetupError> {
        if cell_count != CELL_COUNT {
            return Err(SetupError::new(format!(
                "Grid must have {} cells, got {}",
                CELL_COUNT, cell_count
            )));
        }
        Ok(Self::new(mode))
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the configured mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// True while the AI owes a move and human input is refused.
    pub fn ai_turn_pending(&self) -> bool {
        !self.state.is_terminal() && self.mode.ai_mark() == Some(self.state.active())
    }

    /// Reports the full state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: *self.state.board().cells(),
            active: self.state.active(),
            outcome: self.state.outcome(),
            mode: self.mode,
            ai_thinking: self.ai_turn_pending(),
            winning_line: rules::winning_line(self.state.board()),
        }
    }

    /// Checks whether placing `mark` at `index` is legal right now.
    ///
    /// # Errors
    ///
    /// Returns the first failed precondition.
    #[instrument(skip(self))]
    pub fn validate(&self, index: usize, mark: Mark) -> Result<Move, MoveError> {
        LegalMove::check(index, mark, &self.state)
    }

    /// Places `mark` at `index` if legal; otherwise does nothing.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Snapshot {
        match self.validate(index, mark) {
            Ok(mov) => {
                self.state.apply(mov);
                info!(%mov, outcome = %self.state.outcome(), "Move applied");
                self.check_invariants();
            }
            Err(e) => debug!(reason = %e, "Ignoring move"),
        }
        self.snapshot()
    }

    /// Handles a cell activation from the UI.
    ///
    /// The mark comes from the turn: in player-vs-player it is the active
    /// mark, against the AI it is always the human's. Input is refused while
    /// the AI turn is pending.
    #[instrument(skip(self))]
    pub fn on_cell_activated(&mut self, index: usize) -> Snapshot {
        if self.ai_turn_pending() {
            debug!(reason = %MoveError::AiTurnPending, "Ignoring input");
            return self.snapshot();
        }
        let mark = match self.mode {
            GameMode::PlayerVsPlayer => self.state.active(),
            GameMode::PlayerVsAi => Mark::STARTING,
        };
        self.apply_move(index, mark)
    }

    /// Plays the AI's move, if one is owed.
    #[instrument(skip(self))]
    pub fn play_ai_turn(&mut self) -> Snapshot {
        let Some(ai_mark) = self.mode.ai_mark() else {
            debug!("No AI in this mode");
            return self.snapshot();
        };
        if !self.ai_turn_pending() {
            debug!("AI turn not pending");
            return self.snapshot();
        }
        match ai::choose(self.state.board(), ai_mark) {
            Some(choice) => {
                info!(position = %choice.position, rule = %choice.rule, "AI plays");
                self.apply_move(choice.position.to_index(), ai_mark)
            }
            None => {
                warn!("AI turn pending on a full board");
                self.snapshot()
            }
        }
    }

    /// Restores the opening state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Snapshot {
        self.state.reset();
        info!("Game reset");
        self.snapshot()
    }

    /// Handles a reset request from the UI.
    pub fn on_reset_requested(&mut self) -> Snapshot {
        self.reset()
    }

    fn check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = invariants::check_all(&self.state)
        {
            for v in violations {
                warn!(%v, "Game state invariant violated");
            }
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
