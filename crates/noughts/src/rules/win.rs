//! Win detection.

use crate::{Board, Cell, Mark, Outcome, Position};
use tracing::instrument;

/// The eight winning triples: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first triple fully held by `mark`.
fn completed_by(board: &Board, mark: Mark) -> Option<[Position; 3]> {
    LINES
        .into_iter()
        .find(|line| line.iter().all(|pos| board.get(*pos) == Cell::Marked(mark)))
}

/// Evaluates the board after `just_played` moved.
///
/// Only triples owned by `just_played` count as a win; the previous mover
/// could not have left a completed triple behind on a live board.
#[instrument(skip(board))]
pub fn evaluate_outcome(board: &Board, just_played: Mark) -> Outcome {
    if completed_by(board, just_played).is_some() {
        Outcome::Win(just_played)
    } else if super::is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Returns the first completed triple for either mark, in enumeration order.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    completed_by(board, Mark::X).or_else(|| completed_by(board, Mark::O))
}
