//! Display functions for game events

use super::formatters::{alphabet_line, attempts_bar, guess_row};
use crate::engine::{GameStatus, GuessEngine, GuessResult, Rejection};
use colored::Colorize;
use std::io::{self, Write};

/// Print the banner shown when a new game starts
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_new_game<W: Write>(out: &mut W, engine: &GuessEngine) -> io::Result<()> {
    let config = engine.config();
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        " {} guess the {}-letter word in {} tries",
        "NEW GAME:".bright_cyan().bold(),
        config.word_length(),
        config.max_attempts()
    )?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        "Commands: ':new' to restart, ':hints' for used letters, ':quit' to exit"
    )
}

/// Print the board row and hints for an accepted guess, plus the outcome
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_guess_result<W: Write>(
    out: &mut W,
    engine: &GuessEngine,
    result: &GuessResult,
) -> io::Result<()> {
    if let Some(record) = engine.history().last() {
        writeln!(
            out,
            "\n{}  {}",
            guess_row(&record.guess, &result.pattern),
            result.pattern.to_emoji()
        )?;
    }
    writeln!(out, "{}", alphabet_line(&result.letter_hints))?;
    writeln!(
        out,
        "Attempts: {}",
        attempts_bar(result.attempts_used, engine.config().max_attempts())
    )?;

    match result.status {
        GameStatus::Won => {
            let guesses = engine.history().len();
            writeln!(
                out,
                "\n{}",
                format!(
                    "🎉 You won in {guesses} {}!",
                    if guesses == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            )?;
            writeln!(out, "Type 'new' to play again.")?;
        }
        GameStatus::Lost => {
            let secret = result.revealed_secret.as_deref().unwrap_or_default();
            writeln!(
                out,
                "\n{} The word was {}.",
                "You used up all your guesses.".red().bold(),
                secret.to_uppercase().bright_yellow().bold()
            )?;
            writeln!(out, "Type 'new' to play again.")?;
        }
        GameStatus::InProgress => {}
    }

    Ok(())
}

/// Print a rejected guess as a user-facing message
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_rejection<W: Write>(out: &mut W, rejection: &Rejection) -> io::Result<()> {
    writeln!(out, "{} {rejection}", "Invalid guess:".red().bold())
}

/// Print the used-letter hints on their own
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_hints<W: Write>(out: &mut W, engine: &GuessEngine) -> io::Result<()> {
    writeln!(out, "{}", alphabet_line(engine.current_letter_hints()))?;
    writeln!(
        out,
        "Attempts: {}",
        attempts_bar(engine.attempts_used(), engine.config().max_attempts())
    )
}
