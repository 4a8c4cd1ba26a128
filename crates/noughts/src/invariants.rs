//! Properties that hold for every reachable [`GameState`].
//!
//! The engine checks them after each applied move in debug builds; tests
//! check them directly.

use std::collections::HashSet;

use crate::{GameState, Mark, rules};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

/// X has as many marks as O, or exactly one more.
pub struct BalancedMarks;

impl Invariant<GameState> for BalancedMarks {
    fn holds(state: &GameState) -> bool {
        let xs = state.board().count(Mark::X);
        let os = state.board().count(Mark::O);
        xs == os || xs == os + 1
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

/// History lists each marked cell exactly once, alternating from X.
pub struct HistoryMatchesBoard;

impl Invariant<GameState> for HistoryMatchesBoard {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        let unique: HashSet<_> = history.iter().collect();
        if unique.len() != history.len() {
            return false;
        }

        let marked = state.board().cells().iter().filter(|c| c.mark().is_some()).count();
        if marked != history.len() {
            return false;
        }

        let mut expected = Mark::STARTING;
        for pos in history {
            if state.board().get(*pos).mark() != Some(expected) {
                return false;
            }
            expected = expected.opponent();
        }
        true
    }

    fn description() -> &'static str {
        "History covers every marked cell once, alternating from X"
    }
}

/// The stored outcome matches the outcome recomputed from the board.
pub struct OutcomeConsistent;

impl Invariant<GameState> for OutcomeConsistent {
    fn holds(state: &GameState) -> bool {
        let Some(last) = state.history().last() else {
            return !state.is_terminal();
        };
        match state.board().get(*last).mark() {
            Some(mark) => rules::evaluate_outcome(state.board(), mark) == state.outcome(),
            None => false,
        }
    }

    fn description() -> &'static str {
        "Outcome agrees with the board"
    }
}

/// Checks every game-state invariant, collecting violations.
pub fn check_all(state: &GameState) -> Result<(), Vec<InvariantViolation>> {
    let checks: [(bool, &'static str); 3] = [
        (BalancedMarks::holds(state), BalancedMarks::description()),
        (HistoryMatchesBoard::holds(state), HistoryMatchesBoard::description()),
        (OutcomeConsistent::holds(state), OutcomeConsistent::description()),
    ];

    let violations: Vec<_> = checks
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation { description })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
