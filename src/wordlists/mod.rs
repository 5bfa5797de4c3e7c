//! Word lists for the game
//!
//! Provides the [`WordSource`] plus default lists embedded in the binary.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{ALLOWED, SECRETS};
pub use source::{DataError, ListKind, WordSource};
