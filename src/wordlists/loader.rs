//! Word list loading utilities
//!
//! Reads newline-delimited word list files into plain lines. Validation is
//! left to [`WordSource::load`](super::WordSource::load).

use std::fs;
use std::io;
use std::path::Path;

/// Read a newline-delimited word list
///
/// Line terminators and surrounding whitespace are stripped and blank lines
/// are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_clone::wordlists::loader::read_lines;
///
/// let words = read_lines("data/secrets.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn read_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(lines_from_str(&content))
}

/// Split already-loaded text into trimmed, non-blank lines
#[must_use]
pub fn lines_from_str(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
