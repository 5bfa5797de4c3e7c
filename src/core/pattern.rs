//! Wordle feedback calculation and representation
//!
//! A pattern is the per-position feedback for one guess against the secret:
//! - `Exact` (green): right letter, right position
//! - `Present` (yellow): letter occurs among the secret's unclaimed letters
//! - `Absent` (gray): letter, or all its remaining occurrences, not in the secret

use super::Word;
use std::fmt;

/// Feedback for a single position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Absent,
    Present,
    Exact,
}

impl Feedback {
    /// Single-character code used by `Display` (`G`, `Y`, `-`)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for every position of a guess, in order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<Feedback>);

impl Pattern {
    /// Calculate the pattern when `guess` is guessed and `secret` is the target
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass, left to right: mark exact matches and consume that letter
    ///    from the secret's remaining counts
    /// 2. Second pass, left to right over the non-exact positions: a letter with
    ///    a remaining count is `Present` and consumes one occurrence, otherwise
    ///    it is `Absent`
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::{Feedback, Pattern, Word};
    ///
    /// let guess = Word::parse("eerie", 5).unwrap();
    /// let secret = Word::parse("level", 5).unwrap();
    /// let pattern = Pattern::calculate(&guess, &secret);
    ///
    /// assert_eq!(pattern.to_string(), "YG---");
    /// assert_eq!(pattern.exact_count(), 1);
    /// ```
    ///
    /// # Panics
    /// Panics if `guess` and `secret` have different lengths.
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        assert_eq!(guess.len(), secret.len(), "guess and secret lengths differ");

        let guess = guess.letters();
        let secret_letters = secret.letters();
        let mut result = vec![Feedback::Absent; guess.len()];
        let mut remaining = secret.letter_counts();

        // First pass: exact position matches
        for (i, (&g, &s)) in guess.iter().zip(secret_letters).enumerate() {
            if g == s {
                result[i] = Feedback::Exact;
                if let Some(count) = remaining.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, claimed from what the first pass left
        for (i, &g) in guess.iter().enumerate() {
            if result[i] == Feedback::Exact {
                continue;
            }
            if let Some(count) = remaining.get_mut(&g)
                && *count > 0
            {
                result[i] = Feedback::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    #[must_use]
    pub fn feedback(&self) -> &[Feedback] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Feedback> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn exact_count(&self) -> usize {
        self.iter().filter(|&f| f == Feedback::Exact).count()
    }

    /// Check if every position is an exact match
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.iter().all(|f| f == Feedback::Exact)
    }

    /// Convert pattern to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.iter().map(Feedback::emoji).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for feedback in self.iter() {
            write!(f, "{}", feedback.code())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::parse(text, text.chars().count()).unwrap()
    }

    fn score(guess: &str, secret: &str) -> String {
        Pattern::calculate(&word(guess), &word(secret)).to_string()
    }

    #[test]
    fn pattern_all_absent() {
        let pattern = Pattern::calculate(&word("abcde"), &word("fghij"));
        assert_eq!(pattern.to_string(), "-----");
        assert_eq!(pattern.exact_count(), 0);
        assert!(!pattern.is_perfect());
    }

    #[test]
    fn pattern_all_exact() {
        let pattern = Pattern::calculate(&word("crane"), &word("crane"));
        assert!(pattern.is_perfect());
        assert_eq!(pattern.exact_count(), 5);
    }

    #[test]
    fn pattern_mixed() {
        // A and E exact, no other crane letter occurs in slate
        assert_eq!(score("crane", "slate"), "--G-G");
        assert_eq!(score("crane", "react"), "YYG-Y");
    }

    #[test]
    fn duplicate_letters_level_eerie() {
        // E at 1 is exact and consumes one E; E at 0 takes the other;
        // E at 4 finds none left.
        let pattern = Pattern::calculate(&word("eerie"), &word("level"));
        assert_eq!(
            pattern.feedback(),
            &[
                Feedback::Present,
                Feedback::Exact,
                Feedback::Absent,
                Feedback::Absent,
                Feedback::Absent,
            ]
        );
    }

    #[test]
    fn duplicate_guess_letter_single_in_secret() {
        // Only one L in the secret, claimed by the first L
        assert_eq!(score("llama", "world"), "Y----");
        assert_eq!(score("hello", "world"), "---GY");
    }

    #[test]
    fn exact_claims_before_earlier_present() {
        // The exact E at position 4 is claimed first, so the E at 0 gets nothing
        assert_eq!(score("eaaae", "bbbbe"), "----G");
    }

    #[test]
    fn present_claims_left_to_right() {
        assert_eq!(score("sassy", "asset"), "YYG--");
    }

    #[test]
    fn other_word_lengths() {
        assert_eq!(score("tot", "oat"), "-YG");
        assert_eq!(score("planets", "planets"), "GGGGGGG");
    }

    #[test]
    fn letter_marks_never_exceed_secret_count() {
        let alphabet = ['a', 'b', 'c'];
        let mut words = Vec::new();
        for x in alphabet {
            for y in alphabet {
                for z in alphabet {
                    words.push(String::from_iter([x, y, z]));
                }
            }
        }

        for guess in &words {
            for secret in &words {
                let g = word(guess);
                let s = word(secret);
                let pattern = Pattern::calculate(&g, &s);

                let positional = guess.chars().zip(secret.chars()).filter(|(a, b)| a == b).count();
                assert_eq!(pattern.exact_count(), positional, "{guess} vs {secret}");

                for letter in alphabet {
                    let marked = g
                        .text()
                        .chars()
                        .zip(pattern.iter())
                        .filter(|&(c, f)| c == letter && f != Feedback::Absent)
                        .count();
                    let in_secret = secret.chars().filter(|&c| c == letter).count();
                    let in_guess = guess.chars().filter(|&c| c == letter).count();
                    assert_eq!(marked, in_secret.min(in_guess), "{guess} vs {secret}");
                }
            }
        }
    }

    #[test]
    fn repeated_letter_beyond_byte_range() {
        let long = "a".repeat(300);
        let pattern = Pattern::calculate(&word(&long), &word(&long));
        assert!(pattern.is_perfect());
        assert_eq!(pattern.exact_count(), 300);

        // 299 a's ahead of a b; shifting the b leaves one a and one b misplaced
        let secret = format!("{}b", "a".repeat(299));
        let guess = format!("b{}", "a".repeat(299));
        let pattern = Pattern::calculate(&word(&guess), &word(&secret));
        assert_eq!(pattern.exact_count(), 298);
        assert_eq!(pattern.feedback()[0], Feedback::Present);
        assert_eq!(pattern.feedback()[299], Feedback::Present);
    }

    #[test]
    #[should_panic(expected = "guess and secret lengths differ")]
    fn mismatched_lengths_panic() {
        let _ = Pattern::calculate(&word("crane"), &word("planets"));
    }

    #[test]
    fn pattern_display_codes() {
        assert_eq!(score("crane", "react"), "YYG-Y");
        assert_eq!(Pattern::calculate(&word("abc"), &word("xyz")).to_string(), "---");
    }

    #[test]
    fn pattern_to_emoji() {
        let pattern = Pattern::calculate(&word("crane"), &word("react"));
        assert_eq!(pattern.to_emoji(), "🟨🟨🟩⬜🟨");
    }
}
