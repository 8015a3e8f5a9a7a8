//! Game rules: status and move validation.
//!
//! The validator answers "is this move legal right now?" against a
//! read-only `Game`. Applying moves is the game's job; see `crate::game`.

pub mod state;
pub mod validator;

pub use state::GameState;
pub use validator::{check, check_move, validate};
pub(crate) use validator::{checked, checked_move};
