//! Game configuration

use std::fmt;

/// Fixed parameters of a game, chosen at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    word_length: usize,
    max_attempts: usize,
}

/// Error type for invalid game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroWordLength,
    ZeroAttempts,
    WordLengthMismatch { config: usize, source: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWordLength => write!(f, "word length must be at least 1"),
            Self::ZeroAttempts => write!(f, "at least one attempt is required"),
            Self::WordLengthMismatch { config, source } => write!(
                f,
                "game expects {config}-letter words but the word lists hold {source}-letter words"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    pub const DEFAULT_WORD_LENGTH: usize = 5;
    pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

    /// # Errors
    ///
    /// Returns `ConfigError` if either parameter is zero.
    pub const fn new(word_length: usize, max_attempts: usize) -> Result<Self, ConfigError> {
        if word_length == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        if max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(Self {
            word_length,
            max_attempts,
        })
    }

    #[inline]
    #[must_use]
    pub const fn word_length(self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(self) -> usize {
        self.max_attempts
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: Self::DEFAULT_WORD_LENGTH,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }
}
