//! Game state machine and setup.
//!
//! A `Game` starts `Unfinished` with TANGERINE to move. Each legal move
//! either hands the turn to the other side or, when it captures a
//! Chinchilla, ends the game in favour of the mover. Finished games accept
//! no further moves.

mod builder;
mod game;

pub use builder::GameBuilder;
pub use game::Game;
