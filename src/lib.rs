//! Wordle Clone
//!
//! A single-player word guessing game: find the hidden word in a fixed number
//! of attempts, with per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_clone::config::GameConfig;
//! use wordle_clone::engine::{GameStatus, GuessEngine};
//! use wordle_clone::wordlists::{ALLOWED, SECRETS, WordSource};
//!
//! let source = WordSource::load(SECRETS, ALLOWED, 5).unwrap();
//! let mut engine = GuessEngine::new(source, GameConfig::default()).unwrap();
//!
//! let result = engine.submit_guess("crane").unwrap();
//! println!("{}", result.pattern.to_emoji());
//! assert_ne!(result.status, GameStatus::Lost);
//! ```

// Core domain types
pub mod core;

// Game parameters
pub mod config;

// Word lists and the secret word source
pub mod wordlists;

// Game state machine
pub mod engine;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
