//! # animal-game
//!
//! Rules engine for a two-player strategy game on a 7x7 board.
//!
//! TANGERINE (row 1) and AMETHYST (row 7) each start with seven animals:
//! Narwhal, Marmoset, Okapi, Chinchilla, Okapi, Marmoset, Narwhal. Sides
//! alternate moves; capturing the opposing Chinchilla wins.
//!
//! ## Design
//!
//! - **Closed piece set**: the four animals are an enum, and move generation
//!   is one `match` over it.
//! - **Read-only validation**: move generation and validation borrow the
//!   board immutably. Only `Game::apply_move` (and its label wrappers)
//!   mutate, and only after every check has passed.
//! - **Boolean boundary**: `make_move` answers legal / illegal. The reason
//!   is available through `Game::try_move` for callers that want it.
//!
//! ## Modules
//!
//! - `core`: squares, colors, pieces and move generation, board, moves
//! - `rules`: game status and the move validator
//! - `game`: the state machine and `GameBuilder`
//! - `error`: rejection reasons
//!
//! ## Example
//!
//! ```
//! use animal_game::{get_state, make_move, new_game, GameState};
//!
//! let mut game = new_game();
//! assert!(make_move(&mut game, "b1", "e4"));
//! assert!(!make_move(&mut game, "b1", "e4")); // b1 is empty now
//! assert_eq!(get_state(&game), GameState::Unfinished);
//! ```

pub mod core;
pub mod rules;
pub mod game;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Board, Color, Destinations, Move, MoveRecord, Piece, Square, Variant,
    BOARD_SIZE, STARTING_ROW,
};

pub use crate::rules::{validate, GameState};

pub use crate::game::{Game, GameBuilder};

pub use crate::error::{BoardError, MoveError, SquareError};

/// A new game in the starting layout, TANGERINE to move.
#[must_use]
pub fn new_game() -> Game {
    Game::new()
}

/// Current status of `game`.
#[must_use]
pub fn get_state(game: &Game) -> GameState {
    game.state()
}

/// Attempt a move between two square labels. See `Game::make_move`.
pub fn make_move(game: &mut Game, start: &str, end: &str) -> bool {
    game.make_move(start, end)
}
