//! Secret word supply and guess validation

use crate::core::{Word, WordError};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;

/// Which of the two word lists an entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Secrets,
    Allowed,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Secrets => write!(f, "secret word list"),
            Self::Allowed => write!(f, "allowed guess list"),
        }
    }
}

/// Error type for malformed word lists
///
/// Raised only while building a [`WordSource`]; startup should abort on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    EmptyList(ListKind),
    InvalidEntry {
        list: ListKind,
        /// 1-based position of the entry in its list
        line: usize,
        entry: String,
        reason: WordError,
    },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyList(list) => write!(f, "{list} is empty"),
            Self::InvalidEntry {
                list,
                line,
                entry,
                reason,
            } => write!(f, "{list}, entry {line} ({entry:?}): {reason}"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyList(_) => None,
            Self::InvalidEntry { reason, .. } => Some(reason),
        }
    }
}

/// Dictionary of secret candidates plus the set of accepted guesses
#[derive(Debug, Clone)]
pub struct WordSource {
    word_length: usize,
    secrets: Vec<Word>,
    allowed: FxHashSet<String>,
}

impl WordSource {
    /// Build a word source from two lists of words
    ///
    /// Entries are lowercased. Membership in the two lists is independent: a
    /// secret candidate missing from the allowed list can still be drawn.
    ///
    /// # Errors
    ///
    /// Returns `DataError` if either list is empty, or an entry is not
    /// `word_length` letters of `a-z`.
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::wordlists::WordSource;
    ///
    /// let source = WordSource::load(["crane"], ["crane", "slate"], 5).unwrap();
    /// assert!(source.is_allowed_guess("SLATE"));
    /// assert!(!source.is_allowed_guess("irate"));
    /// ```
    pub fn load<S, A>(secrets: S, allowed: A, word_length: usize) -> Result<Self, DataError>
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        A: IntoIterator,
        A::Item: AsRef<str>,
    {
        let secrets = parse_list(secrets, word_length, ListKind::Secrets)?;
        let allowed: FxHashSet<String> = parse_list(allowed, word_length, ListKind::Allowed)?
            .into_iter()
            .map(|word| word.text().to_string())
            .collect();

        let unguessable = secrets
            .iter()
            .filter(|word| !allowed.contains(word.text()))
            .count();
        if unguessable > 0 {
            log::warn!("{unguessable} secret candidates are not in the allowed guess list");
        }

        log::info!(
            "Loaded {} secret candidates and {} allowed guesses ({word_length} letters)",
            secrets.len(),
            allowed.len()
        );

        Ok(Self {
            word_length,
            secrets,
            allowed,
        })
    }

    /// Draw a secret uniformly at random from the secret candidates
    ///
    /// Consecutive draws may repeat.
    pub fn pick_secret<R: Rng>(&self, rng: &mut R) -> &Word {
        // `load` guarantees at least one candidate
        let index = rng.random_range(0..self.secrets.len());
        &self.secrets[index]
    }

    /// Check whether `candidate` is an accepted guess (case-insensitive)
    #[must_use]
    pub fn is_allowed_guess(&self, candidate: &str) -> bool {
        Word::parse(candidate, self.word_length)
            .is_ok_and(|word| self.allowed.contains(word.text()))
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub fn secret_count(&self) -> usize {
        self.secrets.len()
    }

    #[must_use]
    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }
}

fn parse_list<I>(entries: I, word_length: usize, list: ListKind) -> Result<Vec<Word>, DataError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let words = entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let entry = entry.as_ref();
            Word::parse(entry, word_length).map_err(|reason| DataError::InvalidEntry {
                list,
                line: i + 1,
                entry: entry.to_string(),
                reason,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if words.is_empty() {
        return Err(DataError::EmptyList(list));
    }

    Ok(words)
}
