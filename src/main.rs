//! Wordle Clone - CLI
//!
//! Guess the hidden word in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use wordle_clone::{
    commands::run_play,
    config::GameConfig,
    engine::GuessEngine,
    logging,
    wordlists::{ALLOWED, SECRETS, WordSource, loader::read_lines},
};

#[derive(Parser)]
#[command(
    name = "wordle_clone",
    about = "Guess the hidden word in a fixed number of tries",
    version
)]
struct Cli {
    /// Number of letters in each word
    #[arg(short = 'l', long, default_value_t = GameConfig::DEFAULT_WORD_LENGTH)]
    word_length: usize,

    /// Number of guesses before the game is lost
    #[arg(short = 'n', long, default_value_t = GameConfig::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Newline-delimited file of secret words (default: built-in list)
    #[arg(long)]
    secrets: Option<PathBuf>,

    /// Newline-delimited file of allowed guesses (default: built-in list)
    #[arg(long)]
    allowed: Option<PathBuf>,

    /// Seed for secret selection, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Read a word list file, or fall back to the embedded list
fn word_list(path: Option<&PathBuf>, embedded: &[&str]) -> Result<Vec<String>> {
    match path {
        Some(path) => {
            read_lines(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => Ok(embedded.iter().map(|&word| word.to_string()).collect()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = GameConfig::new(cli.word_length, cli.max_attempts)?;

    let secrets = word_list(cli.secrets.as_ref(), SECRETS)?;
    let allowed = word_list(cli.allowed.as_ref(), ALLOWED)?;
    let source = WordSource::load(&secrets, &allowed, config.word_length())
        .context("invalid word list")?;

    let mut engine = match cli.seed {
        Some(seed) => GuessEngine::with_seed(source, config, seed)?,
        None => GuessEngine::new(source, config)?,
    };

    run_play(&mut engine, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
