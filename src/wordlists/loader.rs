//! Newline-delimited word list parsing
//!
//! One token per line. Blank lines and `#` comments are skipped, case and
//! surrounding space are normalised. Lines that still are not valid tokens
//! are logged with their origin and line number and left out of the list.

use crate::core::{Word, WordError};
use std::fs;
use std::io;
use std::path::Path;

/// A line that could not be read as a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based line number
    pub line: usize,
    pub entry: String,
    pub error: WordError,
}

/// Words parsed from one list, plus the lines that were dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    pub words: Vec<Word>,
    pub rejected: Vec<RejectedLine>,
}

impl WordList {
    /// Parse `lines`, naming `origin` in the warning for each rejected line
    pub fn parse<'s>(lines: impl IntoIterator<Item = &'s str>, origin: &str) -> Self {
        let mut list = Self::default();
        for (index, raw) in lines.into_iter().enumerate() {
            let entry = raw.trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }
            match Word::normalize(entry) {
                Ok(word) => list.words.push(word),
                Err(error) => {
                    let line = index + 1;
                    log::warn!("{origin}:{line}: skipping {entry:?}: {error}");
                    list.rejected.push(RejectedLine {
                        line,
                        entry: entry.to_owned(),
                        error,
                    });
                }
            }
        }
        list
    }
}

/// Read and parse a word list file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not UTF-8.
///
/// # Examples
/// ```no_run
/// use wordle_genius::wordlists::loader::load_from_file;
///
/// let list = load_from_file("data/answers.txt").unwrap();
/// println!("{} words, {} rejected", list.words.len(), list.rejected.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    Ok(WordList::parse(content.lines(), &path.display().to_string()))
}

/// Words of an embedded list
///
/// # Examples
/// ```
/// use wordle_genius::wordlists::loader::words_from_slice;
/// use wordle_genius::wordlists::SAMPLE_ANSWERS;
///
/// let words = words_from_slice(SAMPLE_ANSWERS);
/// assert_eq!(words.len(), SAMPLE_ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    WordList::parse(slice.iter().copied(), "embedded list").words
}
