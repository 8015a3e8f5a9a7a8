//! Move validation.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. the game is still running
//! 2. both square labels parse
//! 3. the start square holds a piece
//! 4. that piece belongs to the side to move
//! 5. the end square is not held by a friendly piece
//! 6. the end square is among the piece's legal destinations
//!
//! Validation only reads the game. Nothing here mutates.

use crate::core::{Move, Piece};
use crate::error::MoveError;
use crate::game::Game;

/// Check a move given as square labels, reporting why it is illegal.
///
/// On success returns the parsed move.
pub fn check(game: &Game, start: &str, end: &str) -> Result<Move, MoveError> {
    checked(game, start, end).map(|(mv, _)| mv)
}

/// Same as `check`, for an already parsed move.
pub fn check_move(game: &Game, mv: Move) -> Result<(), MoveError> {
    checked_move(game, mv).map(|_| ())
}

/// Boolean form of `check`.
#[must_use]
pub fn validate(game: &Game, start: &str, end: &str) -> bool {
    check(game, start, end).is_ok()
}

/// `check`, also handing back the piece that would move.
pub(crate) fn checked(game: &Game, start: &str, end: &str) -> Result<(Move, Piece), MoveError> {
    ensure_running(game)?;
    let mv = Move::new(start.parse()?, end.parse()?);
    let piece = check_squares(game, mv)?;
    Ok((mv, piece))
}

/// `check_move`, also handing back the piece that would move.
pub(crate) fn checked_move(game: &Game, mv: Move) -> Result<Piece, MoveError> {
    ensure_running(game)?;
    check_squares(game, mv)
}

fn ensure_running(game: &Game) -> Result<(), MoveError> {
    if game.state().is_terminal() {
        return Err(MoveError::GameOver);
    }
    Ok(())
}

fn check_squares(game: &Game, mv: Move) -> Result<Piece, MoveError> {
    let board = game.board();

    let piece = *board.get(mv.start).ok_or(MoveError::EmptySquare(mv.start))?;

    if piece.color() != game.turn() {
        return Err(MoveError::WrongTurn {
            square: mv.start,
            owner: piece.color(),
            turn: game.turn(),
        });
    }

    if piece.is_friendly(board.get(mv.end)) {
        return Err(MoveError::FriendlyCapture(mv.end));
    }

    if !piece.can_reach(board, mv.end) {
        return Err(MoveError::IllegalDestination {
            start: mv.start,
            end: mv.end,
        });
    }

    Ok(piece)
}
