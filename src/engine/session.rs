//! State of a single game

use crate::core::{LetterHints, Pattern, Word};

/// Outcome of a session; `Won` and `Lost` are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One accepted guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub pattern: Pattern,
}

/// A game in progress or just finished
///
/// Only [`GuessEngine`](super::GuessEngine) mutates a session, and it
/// replaces the whole value on reset.
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Word,
    attempts_used: usize,
    status: GameStatus,
    letter_hints: LetterHints,
    history: Vec<GuessRecord>,
}

impl GameSession {
    pub(crate) fn new(secret: Word) -> Self {
        Self {
            secret,
            attempts_used: 0,
            status: GameStatus::InProgress,
            letter_hints: LetterHints::new(),
            history: Vec::new(),
        }
    }

    /// Apply a validated, scored guess
    ///
    /// The win check runs before the attempt counter moves, so a winning
    /// guess on the last attempt is still a win.
    pub(crate) fn apply(&mut self, guess: Word, pattern: Pattern, max_attempts: usize) {
        debug_assert_eq!(self.status, GameStatus::InProgress);

        for (&letter, feedback) in guess.letters().iter().zip(pattern.iter()) {
            self.letter_hints.record(letter, feedback);
        }

        if pattern.is_perfect() {
            self.status = GameStatus::Won;
        } else {
            self.attempts_used += 1;
            if self.attempts_used == max_attempts {
                self.status = GameStatus::Lost;
            }
        }

        self.history.push(GuessRecord { guess, pattern });
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Non-winning guesses counted against the attempt limit
    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    #[must_use]
    pub const fn letter_hints(&self) -> &LetterHints {
        &self.letter_hints
    }

    /// Accepted guesses in the order they were made
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// The secret, once the session is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Word> {
        self.status.is_over().then_some(&self.secret)
    }

    pub(crate) const fn secret(&self) -> &Word {
        &self.secret
    }
}
