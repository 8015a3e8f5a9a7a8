//! Pieces and move generation.
//!
//! ## Variants
//!
//! Every variant pairs a primary move set with a one-step secondary move set
//! from the other move family (diagonal vs orthogonal):
//!
//! | Variant    | Primary                     | Secondary           |
//! |------------|-----------------------------|---------------------|
//! | Narwhal    | jump (±2, ±2)               | jump 1 orthogonally |
//! | Marmoset   | slide diagonally, up to 4   | jump 1 orthogonally |
//! | Okapi      | jump 1 orthogonally         | jump 1 diagonally   |
//! | Chinchilla | slide orthogonally, up to 3 | jump 1 diagonally   |
//!
//! Capturing a Chinchilla ends the game.
//!
//! ## Movement primitives
//!
//! - **Jump**: one fixed offset, ignoring anything in between. The target is
//!   legal unless it is off the board or holds a friendly piece.
//! - **Slide**: repeated unit steps. Empty squares are legal and the slide
//!   continues; an enemy square is legal and ends the slide; a friendly
//!   square ends the slide without being included.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::Board;
use super::color::Color;
use super::square::Square;

/// Destination list returned by move generation.
///
/// The largest move set (Marmoset in open space) has 20 entries, so this
/// never spills to the heap.
pub type Destinations = SmallVec<[Square; 20]>;

/// Orthogonal unit steps.
pub const ORTHOGONAL_STEPS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Diagonal unit steps.
pub const DIAGONAL_STEPS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Narwhal's two-square diagonal jumps.
pub const NARWHAL_JUMPS: [(i32, i32); 4] = [(2, 2), (2, -2), (-2, 2), (-2, -2)];

/// Maximum slide distance for the Marmoset.
pub const MARMOSET_RANGE: i32 = 4;

/// Maximum slide distance for the Chinchilla.
pub const CHINCHILLA_RANGE: i32 = 3;

/// The four piece behaviors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Variant {
    /// Diagonal jumper.
    Narwhal,
    /// Diagonal slider.
    Marmoset,
    /// Orthogonal jumper.
    Okapi,
    /// Orthogonal slider. Losing it loses the game.
    Chinchilla,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Narwhal,
        Variant::Marmoset,
        Variant::Okapi,
        Variant::Chinchilla,
    ];

    /// True for the piece whose capture ends the game.
    #[must_use]
    pub const fn is_royal(self) -> bool {
        matches!(self, Variant::Chinchilla)
    }

    /// True for variants whose primary move is a slide.
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, Variant::Marmoset | Variant::Chinchilla)
    }

    /// One-letter glyph, upper case.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Variant::Narwhal => 'N',
            Variant::Marmoset => 'M',
            Variant::Okapi => 'O',
            Variant::Chinchilla => 'C',
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Narwhal => "Narwhal",
            Variant::Marmoset => "Marmoset",
            Variant::Okapi => "Okapi",
            Variant::Chinchilla => "Chinchilla",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A piece on the board.
///
/// `position` always equals the square the board stores the piece under.
/// Only `Board::relocate` changes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    color: Color,
    variant: Variant,
    position: Square,
}

impl Piece {
    #[must_use]
    pub const fn new(color: Color, variant: Variant, position: Square) -> Self {
        Self {
            color,
            variant,
            position,
        }
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub const fn position(&self) -> Square {
        self.position
    }

    pub(crate) fn set_position(&mut self, square: Square) {
        self.position = square;
    }

    /// True iff `other` exists and has the same color.
    #[must_use]
    pub fn is_friendly(&self, other: Option<&Piece>) -> bool {
        other.is_some_and(|p| p.color == self.color)
    }

    /// Glyph for board diagrams: upper case TANGERINE, lower case AMETHYST.
    #[must_use]
    pub fn symbol(&self) -> char {
        match self.color {
            Color::Tangerine => self.variant.symbol(),
            Color::Amethyst => self.variant.symbol().to_ascii_lowercase(),
        }
    }

    /// Every square this piece may move to on `board`.
    ///
    /// Primary moves come first, then secondary moves, each in the fixed
    /// direction order of the tables above. Never contains a square held by
    /// a friendly piece.
    #[must_use]
    pub fn legal_destinations(&self, board: &Board) -> Destinations {
        let mut out = Destinations::new();

        match self.variant {
            Variant::Narwhal => {
                self.jumps(board, &NARWHAL_JUMPS, &mut out);
                self.jumps(board, &ORTHOGONAL_STEPS, &mut out);
            }
            Variant::Marmoset => {
                self.slides(board, &DIAGONAL_STEPS, MARMOSET_RANGE, &mut out);
                self.jumps(board, &ORTHOGONAL_STEPS, &mut out);
            }
            Variant::Okapi => {
                self.jumps(board, &ORTHOGONAL_STEPS, &mut out);
                self.jumps(board, &DIAGONAL_STEPS, &mut out);
            }
            Variant::Chinchilla => {
                self.slides(board, &ORTHOGONAL_STEPS, CHINCHILLA_RANGE, &mut out);
                self.jumps(board, &DIAGONAL_STEPS, &mut out);
            }
        }

        out
    }

    /// Check whether `target` is in this piece's move set.
    #[must_use]
    pub fn can_reach(&self, board: &Board, target: Square) -> bool {
        self.legal_destinations(board).contains(&target)
    }

    fn jumps(&self, board: &Board, offsets: &[(i32, i32)], out: &mut Destinations) {
        for &(d_col, d_row) in offsets {
            if let Some(target) = self.position.offset(d_col, d_row) {
                if !self.is_friendly(board.get(target)) {
                    push_unique(out, target);
                }
            }
        }
    }

    fn slides(&self, board: &Board, dirs: &[(i32, i32)], max: i32, out: &mut Destinations) {
        for &(d_col, d_row) in dirs {
            for distance in 1..=max {
                let Some(target) = self.position.offset(d_col * distance, d_row * distance) else {
                    break;
                };

                match board.get(target) {
                    None => push_unique(out, target),
                    Some(occupant) => {
                        if !self.is_friendly(Some(occupant)) {
                            push_unique(out, target);
                        }
                        break;
                    }
                }
            }
        }
    }
}

fn push_unique(out: &mut Destinations, square: Square) {
    if !out.contains(&square) {
        out.push(square);
    }
}
