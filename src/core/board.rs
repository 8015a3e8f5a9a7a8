//! Board occupancy.
//!
//! The board maps every square to an optional piece and is the only place
//! pieces live. `Board::relocate` is the single mutation used by the game
//! loop; it keeps each piece's `position` in step with its slot.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::piece::{Piece, Variant};
use super::square::{Square, BOARD_SIZE};
use crate::error::BoardError;

/// Home-row order for both sides, columns a through g.
pub const STARTING_ROW: [Variant; BOARD_SIZE] = [
    Variant::Narwhal,
    Variant::Marmoset,
    Variant::Okapi,
    Variant::Chinchilla,
    Variant::Okapi,
    Variant::Marmoset,
    Variant::Narwhal,
];

/// 7x7 grid of optional pieces, indexed `[row][col]`.
///
/// Deserialization goes through `BoardRepr` and rejects any piece whose
/// recorded position differs from its slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr", into = "BoardRepr")]
pub struct Board {
    slots: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

/// Unchecked wire form of `Board`.
#[derive(Serialize, Deserialize)]
struct BoardRepr {
    slots: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl TryFrom<BoardRepr> for Board {
    type Error = BoardError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        for (row, rank) in repr.slots.iter().enumerate() {
            for (col, slot) in rank.iter().enumerate() {
                let square = Square::from_coords(col, row);
                match slot {
                    Some(piece) if piece.position() != square => {
                        return Err(BoardError::PositionMismatch {
                            slot: square,
                            position: piece.position(),
                        });
                    }
                    _ => {}
                }
            }
        }
        Ok(Self { slots: repr.slots })
    }
}

impl From<Board> for BoardRepr {
    fn from(board: Board) -> Self {
        Self { slots: board.slots }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            slots: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The fixed starting layout: `STARTING_ROW` on row 1 for TANGERINE and
    /// on row 7 for AMETHYST.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in Color::ALL {
            for (col, &variant) in STARTING_ROW.iter().enumerate() {
                let square = Square::from_coords(col, color.home_row());
                board.place(Piece::new(color, variant, square));
            }
        }
        board
    }

    /// The piece on `square`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, square: Square) -> Option<&Piece> {
        self.slots[square.row()][square.col()].as_ref()
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.get(square).is_some()
    }

    /// Put `piece` on the square named by its position.
    ///
    /// Returns whatever was there before.
    pub fn place(&mut self, piece: Piece) -> Option<Piece> {
        let square = piece.position();
        self.slot_mut(square).replace(piece)
    }

    /// Clear `square`, returning its occupant.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.slot_mut(square).take()
    }

    /// Move the piece on `start` to `end`, updating its position.
    ///
    /// Returns the piece previously on `end` (the capture), or `None` if it
    /// was empty. Does nothing and returns `None` if `start` is empty.
    /// Legality is the caller's concern.
    pub(crate) fn relocate(&mut self, start: Square, end: Square) -> Option<Piece> {
        let mut piece = self.remove(start)?;
        piece.set_position(end);
        self.place(piece)
    }

    /// All pieces, a1 first, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.slots.iter().flatten().flatten()
    }

    /// Pieces belonging to `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |p| p.color() == color)
    }

    /// Number of pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// Where `color`'s Chinchilla stands, if it is still on the board.
    #[must_use]
    pub fn chinchilla(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|p| p.variant().is_royal())
            .map(Piece::position)
    }

    fn slot_mut(&mut self, square: Square) -> &mut Option<Piece> {
        &mut self.slots[square.row()][square.col()]
    }
}

impl std::fmt::Display for Board {
    /// Diagram with row 7 at the top.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in (0..BOARD_SIZE).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..BOARD_SIZE {
                let glyph = self
                    .get(Square::from_coords(col, row))
                    .map_or('.', Piece::symbol);
                write!(f, " {glyph}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g")
    }
}
