//! Application state and key handling.
//!
//! `App` never touches the terminal or the clock. Key handling returns a
//! [`Command`] telling the event loop what to do next, such as arming the
//! AI timer.

use crossterm::event::KeyCode;
use noughts::{Engine, GameMode, Position, SetupError, Snapshot};
use tracing::{debug, info, instrument};

use crate::input::{digit_to_index, move_cursor};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Mode selection.
    Menu,
    /// The board.
    Game,
}

/// Main menu entries, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    /// Start a two-player game.
    PlayerVsPlayer,
    /// Start a game against the AI.
    PlayerVsAi,
    /// Leave the program.
    Quit,
}

impl MenuItem {
    /// All entries in display order.
    pub const ALL: [MenuItem; 3] = [MenuItem::PlayerVsPlayer, MenuItem::PlayerVsAi, MenuItem::Quit];

    /// Returns the display label.
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::PlayerVsPlayer => GameMode::PlayerVsPlayer.label(),
            MenuItem::PlayerVsAi => GameMode::PlayerVsAi.label(),
            MenuItem::Quit => "Quit",
        }
    }
}

/// What the event loop must do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Nothing.
    None,
    /// Exit the program.
    Quit,
    /// Start the AI delay; deliver `generation` back when it elapses.
    ScheduleAi {
        /// Tag for the timer, so stale timers can be ignored.
        generation: u64,
    },
    /// Abort any running AI timer.
    CancelAi,
}

/// Main application state.
pub struct App {
    screen: Screen,
    menu_cursor: usize,
    engine: Engine,
    snapshot: Snapshot,
    cursor: Position,
    ai_generation: u64,
}

impl App {
    /// Creates the app, binding the engine to the rendered grid.
    ///
    /// Starts on the menu unless `mode` is given.
    #[instrument]
    pub fn new(mode: Option<GameMode>, cells: usize) -> Result<Self, SetupError> {
        let engine = Engine::bind(mode.unwrap_or_default(), cells)?;
        let snapshot = engine.snapshot();
        Ok(Self {
            screen: if mode.is_some() { Screen::Game } else { Screen::Menu },
            menu_cursor: 0,
            engine,
            snapshot,
            cursor: Position::Center,
            ai_generation: 0,
        })
    }

    /// The current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Index of the highlighted menu entry.
    pub fn menu_cursor(&self) -> usize {
        self.menu_cursor
    }

    /// The latest engine report.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// The highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Line shown under the board.
    pub fn status(&self) -> String {
        let snapshot = &self.snapshot;
        if let Some(banner) = snapshot.banner() {
            return format!("{} Press 'r' to play again.", banner);
        }
        if snapshot.ai_thinking() {
            return "AI is thinking...".to_string();
        }
        format!("{} to move", snapshot.active())
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Command {
        match self.screen {
            Screen::Menu => self.handle_menu_key(key),
            Screen::Game => self.handle_game_key(key),
        }
    }

    fn handle_menu_key(&mut self, key: KeyCode) -> Command {
        let item = match key {
            KeyCode::Up => {
                self.menu_cursor = self.menu_cursor.saturating_sub(1);
                return Command::None;
            }
            KeyCode::Down => {
                self.menu_cursor = (self.menu_cursor + 1).min(MenuItem::ALL.len() - 1);
                return Command::None;
            }
            KeyCode::Enter | KeyCode::Char(' ') => MenuItem::ALL[self.menu_cursor],
            KeyCode::Char('1') => MenuItem::PlayerVsPlayer,
            KeyCode::Char('2') => MenuItem::PlayerVsAi,
            KeyCode::Char('q') | KeyCode::Esc => MenuItem::Quit,
            _ => return Command::None,
        };

        match item {
            MenuItem::PlayerVsPlayer => self.start_game(GameMode::PlayerVsPlayer),
            MenuItem::PlayerVsAi => self.start_game(GameMode::PlayerVsAi),
            MenuItem::Quit => Command::Quit,
        }
    }

    fn handle_game_key(&mut self, key: KeyCode) -> Command {
        match key {
            KeyCode::Char('q') => Command::Quit,
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('m') | KeyCode::Esc => {
                info!("Returning to menu");
                self.screen = Screen::Menu;
                self.invalidate_ai_timer()
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(self.cursor.to_index()),
            KeyCode::Char(c) => match digit_to_index(c) {
                Some(index) => {
                    if let Some(pos) = Position::from_index(index) {
                        self.cursor = pos;
                    }
                    self.activate(index)
                }
                None => Command::None,
            },
            code => {
                self.cursor = move_cursor(self.cursor, code);
                Command::None
            }
        }
    }

    /// Forwards a cell activation to the engine.
    fn activate(&mut self, index: usize) -> Command {
        let was_thinking = self.snapshot.ai_thinking();
        self.snapshot = self.engine.on_cell_activated(index);
        if self.snapshot.ai_thinking() && !was_thinking {
            self.ai_generation += 1;
            debug!(generation = self.ai_generation, "Scheduling AI move");
            Command::ScheduleAi {
                generation: self.ai_generation,
            }
        } else {
            Command::None
        }
    }

    /// Called when an AI timer fires.
    #[instrument(skip(self))]
    pub fn on_ai_move_due(&mut self, generation: u64) {
        if generation != self.ai_generation || self.screen != Screen::Game {
            debug!(current = self.ai_generation, "Ignoring stale AI timer");
            return;
        }
        self.snapshot = self.engine.play_ai_turn();
    }

    fn start_game(&mut self, mode: GameMode) -> Command {
        info!(mode = mode.label(), "Mode selected");
        self.engine = Engine::new(mode);
        self.snapshot = self.engine.snapshot();
        self.cursor = Position::Center;
        self.screen = Screen::Game;
        self.invalidate_ai_timer()
    }

    fn reset(&mut self) -> Command {
        self.snapshot = self.engine.on_reset_requested();
        self.cursor = Position::Center;
        self.invalidate_ai_timer()
    }

    fn invalidate_ai_timer(&mut self) -> Command {
        self.ai_generation += 1;
        Command::CancelAi
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts::{CELL_COUNT, Cell, Mark, Outcome};

    fn app(mode: Option<GameMode>) -> App {
        App::new(mode, CELL_COUNT).expect("nine cells")
    }

    #[test]
    fn test_wrong_grid_fails_fast() {
        assert!(App::new(None, 4).is_err());
    }

    #[test]
    fn test_menu_selects_mode() {
        let mut app = app(None);
        assert_eq!(app.screen(), Screen::Menu);

        app.handle_key(KeyCode::Down);
        assert_eq!(app.menu_cursor(), 1);
        assert_eq!(app.handle_key(KeyCode::Enter), Command::CancelAi);
        assert_eq!(app.screen(), Screen::Game);
        assert_eq!(app.snapshot().mode(), GameMode::PlayerVsAi);
    }

    #[test]
    fn test_menu_quit() {
        let mut app = app(None);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.menu_cursor(), 2);
        assert_eq!(app.handle_key(KeyCode::Enter), Command::Quit);
    }

    #[test]
    fn test_human_move_schedules_ai() {
        let mut app = app(Some(GameMode::PlayerVsAi));
        let command = app.handle_key(KeyCode::Char('1'));
        let Command::ScheduleAi { generation } = command else {
            panic!("expected AI to be scheduled, got {:?}", command);
        };
        assert_eq!(app.status(), "AI is thinking...");

        // Input is ignored until the timer fires.
        assert_eq!(app.handle_key(KeyCode::Char('9')), Command::None);
        assert_eq!(app.snapshot().cell(Position::BottomRight), Cell::Empty);

        app.on_ai_move_due(generation);
        assert_eq!(app.snapshot().cell(Position::Center), Cell::Marked(Mark::O));
        assert_eq!(app.status(), "X to move");
    }

    #[test]
    fn test_reset_invalidates_pending_timer() {
        let mut app = app(Some(GameMode::PlayerVsAi));
        let Command::ScheduleAi { generation } = app.handle_key(KeyCode::Enter) else {
            panic!("expected AI to be scheduled");
        };
        assert_eq!(app.handle_key(KeyCode::Char('r')), Command::CancelAi);

        // A fresh human move, then the stale timer arrives.
        app.handle_key(KeyCode::Char('1'));
        app.on_ai_move_due(generation);
        assert!(app.snapshot().ai_thinking());
        assert_eq!(app.snapshot().cell(Position::Center), Cell::Empty);
    }

    #[test]
    fn test_pvp_game_to_win() {
        let mut app = app(Some(GameMode::PlayerVsPlayer));
        for key in ['1', '4', '2', '5', '3'] {
            assert_eq!(app.handle_key(KeyCode::Char(key)), Command::None);
        }
        assert_eq!(app.snapshot().outcome(), Outcome::Win(Mark::X));
        assert_eq!(app.status(), "Game Over: X wins! Press 'r' to play again.");
    }

    #[test]
    fn test_cursor_activation() {
        let mut app = app(Some(GameMode::PlayerVsPlayer));
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        assert_eq!(app.cursor(), Position::TopLeft);
        app.handle_key(KeyCode::Char(' '));
        assert_eq!(app.snapshot().cell(Position::TopLeft), Cell::Marked(Mark::X));
        assert_eq!(app.status(), "O to move");
    }

    #[test]
    fn test_menu_key_returns_to_menu() {
        let mut app = app(Some(GameMode::PlayerVsPlayer));
        assert_eq!(app.handle_key(KeyCode::Char('m')), Command::CancelAi);
        assert_eq!(app.screen(), Screen::Menu);
        assert_eq!(app.handle_key(KeyCode::Char('1')), Command::CancelAi);
        assert_eq!(app.snapshot().cells().iter().filter(|c| **c != Cell::Empty).count(), 0);
    }
}
