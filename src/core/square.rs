//! Board coordinates.
//!
//! ## Layout
//!
//! ```text
//!     a   b   c   d   e   f   g
//! 7 | . | . | . | . | . | . | . |   AMETHYST home row
//! ...
//! 1 | . | . | . | . | . | . | . |   TANGERINE home row
//! ```
//!
//! Columns `a..=g` map to indices 0-6 left to right, rows `1..=7` map to
//! indices 0-6. A `Square` stores `row * 7 + col` and can only be built
//! from in-range coordinates.
//!
//! ## Parsing
//!
//! ```
//! use animal_game::core::Square;
//!
//! let sq: Square = "e4".parse().unwrap();
//! assert_eq!(sq.to_index(), (4, 3));
//! assert_eq!(sq.to_string(), "e4");
//! assert!("h1".parse::<Square>().is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SquareError;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 7;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

const COLUMNS: &[u8; BOARD_SIZE] = b"abcdefg";
const ROWS: &[u8; BOARD_SIZE] = b"1234567";

/// True iff `(col, row)` lies on the board.
#[inline]
#[must_use]
pub const fn in_bounds(col: i32, row: i32) -> bool {
    0 <= col && col < BOARD_SIZE as i32 && 0 <= row && row < BOARD_SIZE as i32
}

/// One of the 49 board cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square(u8);

impl Square {
    /// Build a square from column and row indices.
    ///
    /// Panics if either index is off the board. Callers dealing with
    /// untrusted input go through `FromStr` or `Square::offset` instead.
    #[must_use]
    pub const fn from_coords(col: usize, row: usize) -> Self {
        assert!(col < BOARD_SIZE && row < BOARD_SIZE, "square coordinates out of range");
        Self((row * BOARD_SIZE + col) as u8)
    }

    /// Column and row indices, the inverse of `from_coords`.
    #[inline]
    #[must_use]
    pub const fn to_index(self) -> (usize, usize) {
        let raw = self.0 as usize;
        (raw % BOARD_SIZE, raw / BOARD_SIZE)
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.0 as usize % BOARD_SIZE
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize / BOARD_SIZE
    }

    /// The square `(d_col, d_row)` away, or `None` if that leaves the board.
    #[must_use]
    pub fn offset(self, d_col: i32, d_row: i32) -> Option<Square> {
        let col = self.col() as i32 + d_col;
        let row = self.row() as i32 + d_row;
        in_bounds(col, row).then(|| Square::from_coords(col as usize, row as usize))
    }

    /// All squares, a1 first, then across each row.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARE_COUNT as u8).map(Square)
    }
}

/// Free-function form of `Square::to_index`.
#[inline]
#[must_use]
pub const fn to_index(square: Square) -> (usize, usize) {
    square.to_index()
}

/// Free-function form of `Square::from_coords`.
#[inline]
#[must_use]
pub const fn to_square(col: usize, row: usize) -> Square {
    Square::from_coords(col, row)
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(c), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SquareError::BadLength(s.to_string()));
        };

        let col = COLUMNS
            .iter()
            .position(|&b| b as char == c)
            .ok_or(SquareError::BadColumn(c))?;
        let row = ROWS
            .iter()
            .position(|&b| b as char == r)
            .ok_or(SquareError::BadRow(r))?;

        Ok(Square::from_coords(col, row))
    }
}

impl TryFrom<String> for Square {
    type Error = SquareError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Square> for String {
    fn from(square: Square) -> Self {
        square.to_string()
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (col, row) = self.to_index();
        write!(f, "{}{}", COLUMNS[col] as char, ROWS[row] as char)
    }
}
