//! Error types.
//!
//! The public move API collapses every rejection into `false`. These types
//! carry the reason for callers that want it (`Game::try_move`,
//! `rules::check`) and for log output.

use thiserror::Error;

use crate::core::{Color, Square};

/// A square label that could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SquareError {
    /// Labels are exactly two characters, e.g. `"d4"`.
    #[error("square label {0:?} must be exactly two characters")]
    BadLength(String),

    #[error("unknown column {0:?} (expected a-g)")]
    BadColumn(char),

    #[error("unknown row {0:?} (expected 1-7)")]
    BadRow(char),
}

/// A board whose contents break the one-piece-per-slot invariant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("piece in slot {slot} records its position as {position}")]
    PositionMismatch { slot: Square, position: Square },
}

/// Why a move was rejected.
///
/// Variants are listed in the order the validator checks them; only the
/// first failing check is reported.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("game is already over")]
    GameOver,

    #[error("invalid square: {0}")]
    InvalidSquare(#[from] SquareError),

    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("piece on {square} belongs to {owner}, but it is {turn}'s turn")]
    WrongTurn {
        square: Square,
        owner: Color,
        turn: Color,
    },

    #[error("{0} is occupied by a friendly piece")]
    FriendlyCapture(Square),

    #[error("piece on {start} cannot reach {end}")]
    IllegalDestination { start: Square, end: Square },
}
