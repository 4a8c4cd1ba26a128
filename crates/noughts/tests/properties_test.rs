//! Properties checked over every reachable game state.

use std::collections::{HashSet, VecDeque};

use noughts::{
    Board, Cell, Engine, GameMode, GameState, Mark, Outcome, Position, evaluate_outcome,
    invariants::{self, BalancedMarks, Invariant},
    rules::LINES,
    select_ai_move,
};

/// Breadth-first walk of every state reachable by alternating legal moves.
fn reachable_states() -> Vec<Engine> {
    let mut seen: HashSet<Board> = HashSet::new();
    let mut queue = VecDeque::from([Engine::new(GameMode::PlayerVsPlayer)]);
    let mut states = Vec::new();

    while let Some(engine) = queue.pop_front() {
        if !seen.insert(engine.state().board().clone()) {
            continue;
        }
        if !engine.state().is_terminal() {
            for pos in engine.state().board().empty_positions() {
                let mut next = engine.clone();
                next.on_cell_activated(pos.to_index());
                queue.push_back(next);
            }
        }
        states.push(engine);
    }
    states
}

fn completes(board: &Board, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|p| board.get(*p) == Cell::Marked(mark)))
}

#[test]
fn test_reachable_state_count() {
    // The well-known count of distinct legal tic-tac-toe positions.
    assert_eq!(reachable_states().len(), 5478);
}

#[test]
fn test_marks_stay_balanced() {
    for engine in reachable_states() {
        assert!(BalancedMarks::holds(engine.state()), "{}", engine.state().board());
        assert_eq!(invariants::check_all(engine.state()), Ok(()));
    }
}

#[test]
fn test_outcome_matches_triples() {
    for engine in reachable_states() {
        let state: &GameState = engine.state();
        let Some(last) = state.history().last() else {
            continue;
        };
        let mark = state.board().get(*last).mark().expect("last move is marked");
        let full = state.board().empty_positions().next().is_none();

        let expected = if completes(state.board(), mark) {
            Outcome::Win(mark)
        } else if full {
            Outcome::Draw
        } else {
            Outcome::InProgress
        };
        assert_eq!(evaluate_outcome(state.board(), mark), expected);
        assert_eq!(state.outcome(), expected);
    }
}

#[test]
fn test_rejected_moves_never_change_state() {
    for mut engine in reachable_states() {
        let before = engine.snapshot();
        let occupied: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|p| !engine.state().board().is_empty(*p))
            .collect();

        for pos in occupied {
            assert_eq!(engine.apply_move(pos.to_index(), engine.state().active()), before);
        }
        if engine.state().is_terminal() {
            for pos in Position::ALL {
                assert_eq!(engine.on_cell_activated(pos.to_index()), before);
            }
        }
    }
}

#[test]
fn test_ai_never_picks_occupied_cell() {
    for engine in reachable_states() {
        let board = engine.state().board();
        let full = board.empty_positions().next().is_none();
        for ai in [Mark::X, Mark::O] {
            match select_ai_move(board, ai) {
                Some(pos) => assert!(board.is_empty(pos), "{}", board),
                None => assert!(full, "{}", board),
            }
        }
    }
}

#[test]
fn test_ai_never_loses_a_won_position() {
    // Whenever O can complete a triple, the picker completes one.
    for engine in reachable_states() {
        let state = engine.state();
        if state.is_terminal() || state.active() != Mark::O {
            continue;
        }
        let can_win = state.board().empty_positions().any(|p| {
            let mut next = engine.clone();
            next.apply_move(p.to_index(), Mark::O);
            next.state().outcome() == Outcome::Win(Mark::O)
        });
        if can_win {
            let mut next = engine.clone();
            let pick = select_ai_move(state.board(), Mark::O).expect("move available");
            next.apply_move(pick.to_index(), Mark::O);
            assert_eq!(next.state().outcome(), Outcome::Win(Mark::O), "{}", state.board());
        }
    }
}
