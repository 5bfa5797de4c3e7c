//! Terminal output formatting
//!
//! Display utilities for game rows, hints and messages.

pub mod display;
pub mod formatters;

pub use display::{write_guess_result, write_hints, write_new_game, write_rejection};
