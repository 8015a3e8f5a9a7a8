//! The game state machine.

use im::Vector;
use log::{debug, info, trace};

use crate::core::{Board, Color, Destinations, Move, MoveRecord, Piece, Square};
use crate::error::MoveError;
use crate::rules::{self, GameState};

/// One playthrough: board, side to move, status, and the moves so far.
///
/// The only mutator is `apply_move` (and the label-based wrappers around
/// it). A rejected move leaves every field untouched.
///
/// `Game` is cheap to clone: the history is a persistent vector and the
/// board is a fixed-size array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Color,
    state: GameState,
    history: Vector<MoveRecord>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting layout, TANGERINE to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(Board::standard(), Color::Tangerine)
    }

    pub(crate) fn from_parts(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            state: GameState::Unfinished,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move. After a winning capture this stays on the winner.
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// Attempt a move given as square labels such as `"b1"`, `"e4"`.
    ///
    /// Returns `true` if the move was legal and has been applied. Any
    /// illegal or malformed input returns `false` and changes nothing.
    pub fn make_move(&mut self, start: &str, end: &str) -> bool {
        self.try_move(start, end).is_ok()
    }

    /// Like `make_move`, but reports what happened.
    pub fn try_move(&mut self, start: &str, end: &str) -> Result<MoveRecord, MoveError> {
        let (mv, piece) = rules::checked(self, start, end).map_err(|err| {
            debug!(target: "animal_game", "rejected {start}-{end}: {err}");
            err
        })?;
        Ok(self.commit(mv, piece))
    }

    /// Apply an already parsed move.
    ///
    /// Result-returning core of the move API. `make_move` is the boolean
    /// `apply_move(start, end) -> bool` form over square labels.
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveRecord, MoveError> {
        let piece = rules::checked_move(self, mv).map_err(|err| {
            debug!(target: "animal_game", "rejected {mv}: {err}");
            err
        })?;
        Ok(self.commit(mv, piece))
    }

    /// Perform a validated move of `piece`. Every check has already
    /// passed, so from here on nothing can fail.
    fn commit(&mut self, mv: Move, piece: Piece) -> MoveRecord {
        let mover = self.turn;
        let variant = piece.variant();

        let captured = self.board.relocate(mv.start, mv.end);
        let number = self.history.len() + 1;
        let record = MoveRecord::new(mover, variant, mv, captured, number);
        self.history.push_back(record);

        trace!(target: "animal_game", "#{number} {mover} {variant} {mv}");

        if record.is_decisive() {
            self.state = GameState::won_by(mover);
            info!(target: "animal_game", "{mover} captured the Chinchilla on {}: {}", mv.end, self.state);
        } else {
            self.turn = mover.opponent();
        }

        record
    }

    /// Squares the piece on `square` may move to right now.
    ///
    /// Empty if the square is empty, holds a piece of the side not to move,
    /// or the game is over.
    #[must_use]
    pub fn destinations_from(&self, square: Square) -> Destinations {
        match self.board.get(square) {
            Some(piece) if !self.is_over() && piece.color() == self.turn => {
                piece.legal_destinations(&self.board)
            }
            _ => Destinations::new(),
        }
    }

    /// Every legal move for the side to move, in board order of the moving
    /// piece, then move-generation order. Empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }

        self.board
            .pieces_of(self.turn)
            .flat_map(|piece| {
                let start = piece.position();
                piece
                    .legal_destinations(&self.board)
                    .into_iter()
                    .map(move |end| Move::new(start, end))
            })
            .collect()
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        match self.state.winner() {
            Some(_) => write!(f, "{}", self.state),
            None => write!(f, "{} to move", self.turn),
        }
    }
}
