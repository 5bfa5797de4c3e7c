//! The guess engine: validation, scoring and win/loss rules

use super::session::{GameSession, GameStatus, GuessRecord};
use crate::config::{ConfigError, GameConfig};
use crate::core::{LetterHints, Pattern, Word, WordError};
use crate::wordlists::WordSource;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;

/// Why a guess was turned away
///
/// Rejections are ordinary user input errors. The session is left untouched
/// and the player can simply try again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    SessionOver,
    WrongLength { expected: usize, actual: usize },
    NonAlphabetic,
    NotAllowed(String),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SessionOver => write!(f, "The game is over. Restart to play again!"),
            Self::WrongLength { expected, .. } => {
                write!(f, "Guess length should be equal to {expected}!")
            }
            Self::NonAlphabetic => write!(
                f,
                "Guess should only be comprised of letters in the English alphabet!"
            ),
            Self::NotAllowed(_) => write!(f, "Guess not allowed!"),
        }
    }
}

impl std::error::Error for Rejection {}

impl From<WordError> for Rejection {
    fn from(err: WordError) -> Self {
        match err {
            WordError::InvalidLength { expected, actual } => {
                Self::WrongLength { expected, actual }
            }
            WordError::NonAlphabetic => Self::NonAlphabetic,
        }
    }
}

/// Outcome of one accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    /// Per-position feedback, in guess order
    pub pattern: Pattern,
    /// Hint state after this guess
    pub letter_hints: LetterHints,
    pub status: GameStatus,
    pub attempts_used: usize,
    /// The secret, present only when this guess lost the game
    pub revealed_secret: Option<String>,
}

/// Owns the current game and applies guesses to it
pub struct GuessEngine {
    source: WordSource,
    config: GameConfig,
    rng: StdRng,
    session: GameSession,
}

impl GuessEngine {
    /// Create an engine and start the first session
    ///
    /// Secrets are drawn with an OS-seeded generator.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::WordLengthMismatch` if `source` was loaded for a
    /// different word length than `config`.
    pub fn new(source: WordSource, config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(source, config, StdRng::from_os_rng())
    }

    /// Create an engine that draws secrets from a seeded generator
    ///
    /// The same seed and word lists give the same sequence of secrets.
    ///
    /// # Errors
    ///
    /// See [`GuessEngine::new`].
    pub fn with_seed(
        source: WordSource,
        config: GameConfig,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::with_rng(source, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        source: WordSource,
        config: GameConfig,
        mut rng: StdRng,
    ) -> Result<Self, ConfigError> {
        if source.word_length() != config.word_length() {
            return Err(ConfigError::WordLengthMismatch {
                config: config.word_length(),
                source: source.word_length(),
            });
        }

        let session = Self::start_session(&source, &mut rng);
        Ok(Self {
            source,
            config,
            rng,
            session,
        })
    }

    fn start_session(source: &WordSource, rng: &mut StdRng) -> GameSession {
        let secret = source.pick_secret(rng).clone();
        log::debug!("New session, secret is {secret}");
        GameSession::new(secret)
    }

    /// Validate, score and apply a guess
    ///
    /// Checks run in order and the first failure is returned: session over,
    /// length, alphabet, allowed list. A rejected guess never changes the
    /// session.
    ///
    /// # Errors
    ///
    /// Returns the `Rejection` for the first failed check.
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::config::GameConfig;
    /// use wordle_clone::engine::{GameStatus, GuessEngine, Rejection};
    /// use wordle_clone::wordlists::WordSource;
    ///
    /// let source = WordSource::load(["level"], ["level", "eerie"], 5).unwrap();
    /// let mut engine = GuessEngine::new(source, GameConfig::default()).unwrap();
    ///
    /// let result = engine.submit_guess("EERIE").unwrap();
    /// assert_eq!(result.pattern.to_string(), "YG---");
    /// assert_eq!(result.status, GameStatus::InProgress);
    ///
    /// assert_eq!(engine.submit_guess("abc"), Err(Rejection::WrongLength { expected: 5, actual: 3 }));
    /// ```
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessResult, Rejection> {
        let result = self.try_guess(raw);
        if let Err(rejection) = &result {
            log::debug!("Rejected guess {raw:?}: {rejection:?}");
        }
        result
    }

    fn try_guess(&mut self, raw: &str) -> Result<GuessResult, Rejection> {
        if self.session.status().is_over() {
            return Err(Rejection::SessionOver);
        }

        let guess = Word::parse(raw, self.config.word_length())?;
        if !self.source.is_allowed_guess(guess.text()) {
            return Err(Rejection::NotAllowed(guess.text().to_string()));
        }

        let pattern = Pattern::calculate(&guess, self.session.secret());
        log::trace!("Scored {guess} as {pattern}");

        self.session
            .apply(guess, pattern.clone(), self.config.max_attempts());

        let status = self.session.status();
        match status {
            GameStatus::Won => {
                log::info!("Game won after {} guesses", self.session.history().len());
            }
            GameStatus::Lost => log::info!("Game lost, the secret was {}", self.session.secret()),
            GameStatus::InProgress => {}
        }

        Ok(GuessResult {
            pattern,
            letter_hints: *self.session.letter_hints(),
            status,
            attempts_used: self.session.attempts_used(),
            revealed_secret: (status == GameStatus::Lost)
                .then(|| self.session.secret().text().to_string()),
        })
    }

    /// Discard the current session and start a new one with a fresh secret
    pub fn reset(&mut self) {
        self.session = Self::start_session(&self.source, &mut self.rng);
    }

    #[must_use]
    pub const fn current_status(&self) -> GameStatus {
        self.session.status()
    }

    #[must_use]
    pub const fn current_letter_hints(&self) -> &LetterHints {
        self.session.letter_hints()
    }

    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.session.attempts_used()
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        self.config.max_attempts() - self.session.attempts_used()
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        self.session.history()
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }
}
