//! Move preconditions.
//!
//! Each precondition is a small checker returning a typed [`MoveError`];
//! [`LegalMove`] composes them in the order the engine applies them.

use tracing::instrument;

use crate::{GameState, Mark, Move, MoveError, Position};

/// Precondition: the game has not ended.
pub struct GameIsLive;

impl GameIsLive {
    /// Fails with [`MoveError::GameOver`] on a terminal state.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the index names a cell.
pub struct InBounds;

impl InBounds {
    /// Resolves the index or fails with [`MoveError::OutOfBounds`].
    #[instrument]
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::from_index(index).ok_or(MoveError::OutOfBounds(index))
    }
}

/// Precondition: the target cell is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] if the cell is marked.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if state.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(mov.position))
        }
    }
}

/// Precondition: the mark being placed is the active mark.
pub struct MarksTurn;

impl MarksTurn {
    /// Fails with [`MoveError::WrongTurn`] when out of turn.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if mov.mark == state.active() {
            Ok(())
        } else {
            Err(MoveError::WrongTurn(mov.mark))
        }
    }
}

/// Composite precondition for placing `mark` at a raw index.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions and returns the resolved move.
    #[instrument(skip(state))]
    pub fn check(index: usize, mark: Mark, state: &GameState) -> Result<Move, MoveError> {
        GameIsLive::check(state)?;
        let position = InBounds::check(index)?;
        let mov = Move::new(mark, position);
        SquareIsEmpty::check(&mov, state)?;
        MarksTurn::check(&mov, state)?;
        Ok(mov)
    }
}
