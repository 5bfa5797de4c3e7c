//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterHint, LetterHints, Pattern, Word};
use colored::{ColoredString, Colorize};

fn tile(letter: char, feedback: Feedback) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match feedback {
        Feedback::Exact => text.black().on_green().bold(),
        Feedback::Present => text.black().on_yellow().bold(),
        Feedback::Absent => text.white().on_bright_black().bold(),
    }
}

/// Format a guess as a row of coloured letter tiles
#[must_use]
pub fn guess_row(guess: &Word, pattern: &Pattern) -> String {
    guess
        .text()
        .chars()
        .zip(pattern.iter())
        .map(|(letter, feedback)| tile(letter, feedback).to_string())
        .collect()
}

/// Format the alphabet with each letter coloured by its hint
///
/// Letters never guessed are left plain.
#[must_use]
pub fn alphabet_line(hints: &LetterHints) -> String {
    hints
        .iter()
        .map(|(letter, hint)| {
            let text = letter.to_ascii_uppercase().to_string();
            match hint {
                LetterHint::Exact => text.green().bold().to_string(),
                LetterHint::Present => text.yellow().bold().to_string(),
                LetterHint::Absent => text.bright_black().strikethrough().to_string(),
                LetterHint::Unknown => text,
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format remaining attempts as a bar of filled and empty slots
#[must_use]
pub fn attempts_bar(used: usize, max: usize) -> String {
    let used = used.min(max);
    format!("{}{}", "■".repeat(used), "□".repeat(max - used))
}
