//! Core domain types for the game
//!
//! This module contains the scoring rules and hint bookkeeping with no I/O.
//! Everything here is pure and testable on its own.

mod hints;
mod pattern;
mod word;

pub use hints::{LetterHint, LetterHints};
pub use pattern::{Feedback, Pattern};
pub use word::{Word, WordError};
