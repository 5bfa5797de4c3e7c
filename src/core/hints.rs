//! Per-letter "used letter" hints
//!
//! Each letter of the alphabet keeps the strongest feedback it has received
//! during a session. Rank order is `Exact > Present > Absent > Unknown`.

use super::Feedback;

/// Best-known state of a single letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterHint {
    #[default]
    Unknown,
    Absent,
    Present,
    Exact,
}

impl From<Feedback> for LetterHint {
    fn from(feedback: Feedback) -> Self {
        match feedback {
            Feedback::Absent => Self::Absent,
            Feedback::Present => Self::Present,
            Feedback::Exact => Self::Exact,
        }
    }
}

const ALPHABET_LEN: usize = 26;

/// Hint state for every letter `a..=z`
///
/// Hints only ever move up in rank: a later `Absent` never erases an earlier
/// `Present` or `Exact` for the same letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterHints([LetterHint; ALPHABET_LEN]);

impl LetterHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn index(letter: u8) -> Option<usize> {
        let letter = letter.to_ascii_lowercase();
        letter
            .is_ascii_lowercase()
            .then(|| usize::from(letter - b'a'))
    }

    /// Hint for `letter` (case-insensitive); non-letters are always `Unknown`
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::{Feedback, LetterHint, LetterHints};
    ///
    /// let mut hints = LetterHints::new();
    /// hints.record(b'e', Feedback::Present);
    /// hints.record(b'e', Feedback::Absent);
    /// assert_eq!(hints.get('E'), LetterHint::Present);
    /// ```
    #[must_use]
    pub fn get(&self, letter: char) -> LetterHint {
        u8::try_from(letter)
            .ok()
            .and_then(Self::index)
            .map_or(LetterHint::Unknown, |i| self.0[i])
    }

    /// Record feedback for `letter`, keeping whichever hint ranks higher
    ///
    /// Returns `true` if the stored hint was upgraded.
    pub fn record(&mut self, letter: u8, feedback: Feedback) -> bool {
        let Some(i) = Self::index(letter) else {
            return false;
        };

        let hint = LetterHint::from(feedback);
        if hint > self.0[i] {
            self.0[i] = hint;
            true
        } else {
            false
        }
    }

    /// All letters with their hints, in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterHint)> + '_ {
        (b'a'..=b'z').map(char::from).zip(self.0.iter().copied())
    }

    /// Check if no letter has been hinted yet
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|&hint| hint == LetterHint::Unknown)
    }
}
