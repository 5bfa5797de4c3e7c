//! Interactive play mode
//!
//! Line-based game loop: each line is a guess or a command. Commands start
//! with `:`, which can never appear in a guess, so every word stays playable.

use crate::engine::GuessEngine;
use crate::output::{write_guess_result, write_hints, write_new_game, write_rejection};
use std::io::{self, BufRead, Write};

enum Input<'a> {
    Quit,
    NewGame,
    Hints,
    Unknown(&'a str),
    Guess(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    let Some(command) = line.strip_prefix(':') else {
        return Input::Guess(line);
    };
    match command.trim().to_lowercase().as_str() {
        "quit" | "exit" | "q" => Input::Quit,
        "new" | "restart" => Input::NewGame,
        "hints" => Input::Hints,
        _ => Input::Unknown(line),
    }
}

/// Run the interactive play loop until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    engine: &mut GuessEngine,
    mut reader: R,
    mut out: W,
) -> io::Result<()> {
    write_new_game(&mut out, engine)?;

    loop {
        write!(out, "\nYour guess: ")?;
        out.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        match parse_input(line.trim()) {
            Input::Quit => break,
            Input::NewGame => {
                engine.reset();
                write_new_game(&mut out, engine)?;
            }
            Input::Hints => write_hints(&mut out, engine)?,
            Input::Unknown(command) => writeln!(out, "Unknown command: {command}")?,
            Input::Guess(raw) => match engine.submit_guess(raw) {
                Ok(result) => write_guess_result(&mut out, engine, &result)?,
                Err(rejection) => write_rejection(&mut out, &rejection)?,
            },
        }
    }

    writeln!(out, "Thanks for playing!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::engine::GameStatus;
    use crate::wordlists::WordSource;
    use std::io::Cursor;

    fn engine() -> GuessEngine {
        colored::control::set_override(false);
        let source = WordSource::load(["crane"], ["crane", "slate", "irate"], 5).unwrap();
        GuessEngine::with_seed(source, GameConfig::new(5, 3).unwrap(), 1).unwrap()
    }

    fn play(engine: &mut GuessEngine, input: &str) -> String {
        let mut out = Vec::new();
        run_play(engine, Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_input_commands() {
        assert!(matches!(parse_input(":quit"), Input::Quit));
        assert!(matches!(parse_input(":EXIT"), Input::Quit));
        assert!(matches!(parse_input(":q"), Input::Quit));
        assert!(matches!(parse_input(":new"), Input::NewGame));
        assert!(matches!(parse_input(":Restart"), Input::NewGame));
        assert!(matches!(parse_input(": hints"), Input::Hints));
        assert!(matches!(parse_input(":help"), Input::Unknown(":help")));
        assert!(matches!(parse_input("crane"), Input::Guess("crane")));
    }

    #[test]
    fn bare_command_words_are_guesses() {
        for word in ["quit", "exit", "new", "restart", "hints", "HINTS"] {
            assert!(matches!(parse_input(word), Input::Guess(w) if w == word));
        }
    }

    #[test]
    fn command_word_can_be_the_secret() {
        colored::control::set_override(false);
        let source = WordSource::load(["hints"], ["hints", "crane"], 5).unwrap();
        let mut engine = GuessEngine::with_seed(source, GameConfig::default(), 1).unwrap();

        let output = play(&mut engine, "crane
hints
");
        assert!(output.contains("🟩🟩🟩🟩🟩"));
        assert!(output.contains("You won in 2 guesses!"));
        assert_eq!(engine.current_status(), GameStatus::Won);
    }

    #[test]
    fn unknown_command_is_reported() {
        let mut engine = engine();
        let output = play(&mut engine, ":help
");
        assert!(output.contains("Unknown command: :help"));
        assert_eq!(engine.attempts_used(), 0);
    }

    #[test]
    fn immediate_quit() {
        let mut engine = engine();
        let output = play(&mut engine, ":quit\n");
        assert!(output.contains("NEW GAME:"));
        assert!(output.contains("Thanks for playing!"));
    }

    #[test]
    fn end_of_input_stops_loop() {
        let mut engine = engine();
        let output = play(&mut engine, "");
        assert!(output.contains("Thanks for playing!"));
    }

    #[test]
    fn winning_guess() {
        let mut engine = engine();
        let output = play(&mut engine, "  CRANE  \n:quit\n");
        assert!(output.contains(" C  R  A  N  E "));
        assert!(output.contains("🟩🟩🟩🟩🟩"));
        assert!(output.contains("You won in 1 guess!"));
        assert_eq!(engine.current_status(), GameStatus::Won);
    }

    #[test]
    fn losing_reveals_secret_uppercased() {
        let mut engine = engine();
        let output = play(&mut engine, "slate\nirate\nslate\n");
        assert!(output.contains("You used up all your guesses."));
        assert!(output.contains("The word was CRANE."));
        assert_eq!(engine.current_status(), GameStatus::Lost);
    }

    #[test]
    fn rejections_are_reported() {
        let mut engine = engine();
        let output = play(&mut engine, "cran\ncr4ne\nzebra\n");
        assert!(output.contains("Invalid guess: Guess length should be equal to 5!"));
        assert!(output.contains(
            "Invalid guess: Guess should only be comprised of letters in the English alphabet!"
        ));
        assert!(output.contains("Invalid guess: Guess not allowed!"));
        assert_eq!(engine.attempts_used(), 0);
    }

    #[test]
    fn guess_after_game_over_is_rejected() {
        let mut engine = engine();
        let output = play(&mut engine, "crane\nslate\n");
        assert!(output.contains("Invalid guess: The game is over. Restart to play again!"));
    }

    #[test]
    fn new_game_resets() {
        let mut engine = engine();
        let output = play(&mut engine, "slate\n:new\n");
        assert_eq!(output.matches("NEW GAME:").count(), 2);
        assert_eq!(engine.attempts_used(), 0);
        assert_eq!(engine.current_status(), GameStatus::InProgress);
    }

    #[test]
    fn hints_command_shows_alphabet() {
        let mut engine = engine();
        let output = play(&mut engine, ":hints\n");
        assert!(output.contains("A B C D E F G H I J K L M N O P Q R S T U V W X Y Z"));
        assert!(output.contains("Attempts: □□□"));
    }
}
