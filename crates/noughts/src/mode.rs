//! Game mode selection.

use serde::{Deserialize, Serialize};

use crate::Mark;

/// Who plays O. Chosen before the game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    #[serde(alias = "pvp")]
    PlayerVsPlayer,
    /// The human plays X against the AI as O.
    #[serde(alias = "ai", alias = "pva")]
    PlayerVsAi,
}

impl GameMode {
    /// Returns display name.
    pub fn label(self) -> &'static str {
        match self {
            GameMode::PlayerVsPlayer => "Player vs Player",
            GameMode::PlayerVsAi => "Player vs AI",
        }
    }

    /// The mark the AI plays, if there is an AI.
    pub fn ai_mark(self) -> Option<Mark> {
        match self {
            GameMode::PlayerVsPlayer => None,
            GameMode::PlayerVsAi => Some(Mark::STARTING.opponent()),
        }
    }

    /// Returns true if `mark` is placed from human input.
    pub fn is_human(self, mark: Mark) -> bool {
        self.ai_mark() != Some(mark)
    }
}
