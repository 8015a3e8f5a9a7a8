//! Game setup.
//!
//! `GameBuilder::standard()` reproduces `Game::new()`. `GameBuilder::empty()`
//! starts from a bare board so tests and embedders can set up arbitrary
//! positions:
//!
//! ```
//! use animal_game::core::{Color, Square, Variant};
//! use animal_game::game::GameBuilder;
//!
//! let c3: Square = "c3".parse().unwrap();
//! let game = GameBuilder::standard()
//!     .piece(c3, Color::Amethyst, Variant::Okapi)
//!     .build();
//!
//! assert_eq!(game.board().get(c3).unwrap().color(), Color::Amethyst);
//! ```

use crate::core::{Board, Color, Piece, Square, Variant};

use super::Game;

/// Builder for a `Game` in a chosen position.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    board: Board,
    turn: Color,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::standard()
    }
}

impl GameBuilder {
    /// Start from the standard layout with TANGERINE to move.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            board: Board::standard(),
            turn: Color::Tangerine,
        }
    }

    /// Start from an empty board with TANGERINE to move.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            board: Board::empty(),
            turn: Color::Tangerine,
        }
    }

    /// Replace the whole position.
    #[must_use]
    pub fn board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Set the side to move.
    #[must_use]
    pub fn turn(mut self, color: Color) -> Self {
        self.turn = color;
        self
    }

    /// Put a piece on `square`, replacing any piece already there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, variant: Variant) -> Self {
        self.board.place(Piece::new(color, variant, square));
        self
    }

    /// Clear `square`.
    #[must_use]
    pub fn remove(mut self, square: Square) -> Self {
        self.board.remove(square);
        self
    }

    /// Build the game. It starts unfinished with an empty history, whatever
    /// the position.
    #[must_use]
    pub fn build(self) -> Game {
        Game::from_parts(self.board, self.turn)
    }
}
