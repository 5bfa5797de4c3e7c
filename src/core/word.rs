//! Validated game word
//!
//! A `Word` is a lowercase, ASCII-alphabetic string of a fixed length. Both
//! guesses and word list entries go through [`Word::parse`].

use rustc_hash::FxHashMap;
use std::fmt;

/// A lowercase alphabetic word of a known length
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength { expected: usize, actual: usize },
    NonAlphabetic,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "word must be exactly {expected} letters, got {actual}")
            }
            Self::NonAlphabetic => write!(f, "word must contain only the letters a-z"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Parse a word of `word_length` letters
    ///
    /// The input is lowercased first. Length is checked before content, so
    /// `"ab1"` against a length of 5 reports the length problem.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length (in characters) is not `word_length`
    /// - Any character is outside `a-z`
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::Word;
    ///
    /// let word = Word::parse("CRANE", 5).unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::parse("cranes", 5).is_err());
    /// assert!(Word::parse("cr4ne", 5).is_err());
    /// ```
    pub fn parse(raw: &str, word_length: usize) -> Result<Self, WordError> {
        let text = raw.to_lowercase();

        let actual = text.chars().count();
        if actual != word_length {
            return Err(WordError::InvalidLength {
                expected: word_length,
                actual,
            });
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::NonAlphabetic);
        }

        Ok(Self { text })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letters as bytes; every byte is in `b'a'..=b'z'`
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the count of each letter in the word
    ///
    /// Used for pattern calculation with duplicate letters.
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for &ch in self.letters() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
