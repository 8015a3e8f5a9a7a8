//! Move representation.
//!
//! A `Move` is a raw (start, end) square pair. It says nothing about
//! legality; the validator decides that against a particular game.
//! A `MoveRecord` describes a move after it has been applied.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::piece::{Piece, Variant};
use super::square::Square;

/// A candidate move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub start: Square,
    pub end: Square,
}

impl Move {
    #[must_use]
    pub const fn new(start: Square, end: Square) -> Self {
        Self { start, end }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.start, self.end)
    }
}

/// An applied move with the facts needed to describe it afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Side that moved.
    pub color: Color,

    /// Variant of the moving piece.
    pub variant: Variant,

    pub mv: Move,

    /// Piece removed from `mv.end`, if any.
    pub captured: Option<Piece>,

    /// 1-based move number within the game.
    pub number: usize,
}

impl MoveRecord {
    #[must_use]
    pub const fn new(
        color: Color,
        variant: Variant,
        mv: Move,
        captured: Option<Piece>,
        number: usize,
    ) -> Self {
        Self {
            color,
            variant,
            mv,
            captured,
            number,
        }
    }

    /// True if this move captured a piece.
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// True if this move took the opposing Chinchilla.
    #[must_use]
    pub fn is_decisive(&self) -> bool {
        self.captured.is_some_and(|p| p.variant().is_royal())
    }
}
