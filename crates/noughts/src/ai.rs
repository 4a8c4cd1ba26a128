//! Fixed-priority move selection for the AI opponent.
//!
//! No search and no lookahead: the first applicable rule wins. The picker
//! can be beaten by a careful human, and that is accepted behaviour.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

use crate::{Board, Cell, Mark, Position, rules::LINES};

/// The rule that produced an AI move, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiRule {
    /// Complete a triple for the AI.
    WinNow,
    /// Deny the opponent a triple.
    Block,
    /// Take the center.
    Center,
    /// Take the first free corner.
    Corner,
    /// Take the first free cell.
    Any,
}

impl fmt::Display for AiRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AiRule::WinNow => "win-now",
            AiRule::Block => "block",
            AiRule::Center => "center",
            AiRule::Corner => "corner",
            AiRule::Any => "any",
        };
        f.write_str(name)
    }
}

/// A chosen cell and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiChoice {
    /// Where the AI plays.
    pub position: Position,
    /// Why.
    pub rule: AiRule,
}

/// Finds the empty cell of the first triple holding two of `mark`.
fn completes_line(board: &Board, mark: Mark) -> Option<Position> {
    LINES.iter().find_map(|line| {
        let held = line.iter().filter(|p| board.get(**p) == Cell::Marked(mark)).count();
        let mut empty = line.iter().copied().filter(|p| board.is_empty(*p));
        match (held, empty.next(), empty.next()) {
            (2, Some(open), None) => Some(open),
            _ => None,
        }
    })
}

/// Picks a move for `ai` and reports which rule fired.
///
/// Returns `None` only when the board has no empty cell.
#[instrument(skip(board))]
pub fn choose(board: &Board, ai: Mark) -> Option<AiChoice> {
    let choice = completes_line(board, ai)
        .map(|position| AiChoice { position, rule: AiRule::WinNow })
        .or_else(|| {
            completes_line(board, ai.opponent())
                .map(|position| AiChoice { position, rule: AiRule::Block })
        })
        .or_else(|| {
            board
                .is_empty(Position::Center)
                .then_some(AiChoice { position: Position::Center, rule: AiRule::Center })
        })
        .or_else(|| {
            Position::CORNERS
                .into_iter()
                .find(|p| board.is_empty(*p))
                .map(|position| AiChoice { position, rule: AiRule::Corner })
        })
        .or_else(|| {
            board
                .empty_positions()
                .next()
                .map(|position| AiChoice { position, rule: AiRule::Any })
        });

    match &choice {
        Some(c) => debug!(position = %c.position, rule = %c.rule, "AI chose move"),
        None => debug!("No move available"),
    }
    choice
}

/// Picks a move for `ai`, or `None` if the board is full.
pub fn select_ai_move(board: &Board, ai: Mark) -> Option<Position> {
    choose(board, ai).map(|c| c.position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_takes_center() {
        let choice = choose(&Board::new(), Mark::O).expect("move");
        assert_eq!(choice.position, Position::Center);
        assert_eq!(choice.rule, AiRule::Center);
    }

    #[test]
    fn test_corner_after_center_taken() {
        let board = Board::from_marks(&[4], &[]);
        let choice = choose(&board, Mark::O).expect("move");
        assert_eq!(choice.position, Position::TopLeft);
        assert_eq!(choice.rule, AiRule::Corner);
    }

    #[test]
    fn test_corner_skips_taken_top_left() {
        let board = Board::from_marks(&[4], &[0]);
        assert_eq!(select_ai_move(&board, Mark::O), Some(Position::TopRight));
        let choice = choose(&board, Mark::O).expect("move");
        assert_eq!(choice.rule, AiRule::Corner);
    }

    #[test]
    fn test_corner_prefers_bottom_left_after_top_row() {
        // O X O / _ X _ / _ O X
        let board = Board::from_marks(&[1, 4, 8], &[0, 2, 7]);
        let choice = choose(&board, Mark::O).expect("move");
        assert_eq!(choice, AiChoice { position: Position::BottomLeft, rule: AiRule::Corner });
    }

    #[test]
    fn test_bottom_left_reached_when_top_corners_taken() {
        let board = Board::from_marks(&[4, 2], &[0, 8]);
        assert_eq!(select_ai_move(&board, Mark::O), Some(Position::BottomLeft));
    }

    #[test]
    fn test_any_when_center_and_corners_gone() {
        // X O X / _ X O / O X O
        let board = Board::from_marks(&[0, 2, 4, 7], &[1, 5, 6, 8]);
        let choice = choose(&board, Mark::O).expect("move");
        assert_eq!(choice, AiChoice { position: Position::MiddleLeft, rule: AiRule::Any });
    }

    #[test]
    fn test_win_preferred_over_block() {
        // X threatens 0-1-2, O can finish 3-4-5.
        let board = Board::from_marks(&[0, 1, 8], &[3, 4]);
        let choice = choose(&board, Mark::O).expect("move");
        assert_eq!(choice, AiChoice { position: Position::MiddleRight, rule: AiRule::WinNow });
    }

    #[test]
    fn test_blocks_opponent() {
        let board = Board::from_marks(&[0, 1], &[4]);
        let choice = choose(&board, Mark::O).expect("move");
        assert_eq!(choice, AiChoice { position: Position::TopRight, rule: AiRule::Block });
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_marks(&[0, 2, 3, 7, 8], &[1, 4, 5, 6]);
        assert_eq!(select_ai_move(&board, Mark::O), None);
    }
}
