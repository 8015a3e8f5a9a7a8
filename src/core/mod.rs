//! Core game types: squares, colors, pieces, board, moves.
//!
//! Everything here is game data with no notion of whose turn it is or
//! whether the game is over. The `rules` and `game` modules build on it.

pub mod square;
pub mod color;
pub mod piece;
pub mod board;
pub mod action;

pub use square::{in_bounds, to_index, to_square, Square, BOARD_SIZE, SQUARE_COUNT};
pub use color::Color;
pub use piece::{Destinations, Piece, Variant};
pub use board::{Board, STARTING_ROW};
pub use action::{Move, MoveRecord};
