//! Game state machine
//!
//! [`GuessEngine`] owns one [`GameSession`] at a time and is the only thing
//! that mutates it.

mod guess;
mod session;

pub use guess::{GuessEngine, GuessResult, Rejection};
pub use session::{GameSession, GameStatus, GuessRecord};
