//! The two sides of the game.
//!
//! TANGERINE starts on row 1 and moves first. AMETHYST starts on row 7.

use serde::{Deserialize, Serialize};

/// Side identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Color {
    Tangerine,
    Amethyst,
}

impl Color {
    /// Both colors in turn order.
    pub const ALL: [Color; 2] = [Color::Tangerine, Color::Amethyst];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::Tangerine => Color::Amethyst,
            Color::Amethyst => Color::Tangerine,
        }
    }

    /// Row index (0-based) this side's pieces start on.
    #[must_use]
    pub const fn home_row(self) -> usize {
        match self {
            Color::Tangerine => 0,
            Color::Amethyst => 6,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Tangerine => f.write_str("TANGERINE"),
            Color::Amethyst => f.write_str("AMETHYST"),
        }
    }
}
