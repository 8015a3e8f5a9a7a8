//! Game status.

use serde::{Deserialize, Serialize};

use crate::core::Color;

/// Whether the game is still running, and who won if not.
///
/// Both won states are terminal: no further moves are accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    #[default]
    Unfinished,
    TangerineWon,
    AmethystWon,
}

impl GameState {
    /// The won state for `color`.
    #[must_use]
    pub const fn won_by(color: Color) -> Self {
        match color {
            Color::Tangerine => GameState::TangerineWon,
            Color::Amethyst => GameState::AmethystWon,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameState::Unfinished)
    }

    /// The winning color, or `None` while the game is running.
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameState::Unfinished => None,
            GameState::TangerineWon => Some(Color::Tangerine),
            GameState::AmethystWon => Some(Color::Amethyst),
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameState::Unfinished => f.write_str("UNFINISHED"),
            GameState::TangerineWon => f.write_str("TANGERINE_WON"),
            GameState::AmethystWon => f.write_str("AMETHYST_WON"),
        }
    }
}
