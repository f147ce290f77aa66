//! Wordle word representation
//!
//! A Word stores a 5-letter lowercase token along with its bytes for feedback calculation.

use std::fmt;
use thiserror::Error;

/// Number of letters in every token
pub const WORD_LEN: usize = 5;

/// A 5-letter Wordle word
///
/// Immutable value type. Ordering is lexicographic, which gives the canonical
/// order used for deterministic tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The alphabet is `a..=z`; uppercase input is rejected. Use
    /// [`Word::normalize`] for text typed by a person or read from a file.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains anything outside `a..=z`
    ///
    /// # Examples
    /// ```
    /// use wordle_genius::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// assert!(Word::new("CRANE").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, chars })
    }

    /// Trim and lowercase `text`, then validate it as [`Word::new`] does
    ///
    /// # Errors
    /// Same as [`Word::new`].
    pub fn normalize(text: &str) -> Result<Self, WordError> {
        Self::new(text.trim().to_ascii_lowercase())
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }

    /// Number of occurrences of `letter`
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> u8 {
        self.chars.iter().filter(|&&ch| ch == letter).count() as u8
    }

    /// Check whether all five letters are distinct
    #[must_use]
    pub fn has_distinct_letters(&self) -> bool {
        (0..WORD_LEN).all(|i| !self.chars[i + 1..].contains(&self.chars[i]))
    }

    /// Check whether this word shares no letter with `other`
    #[must_use]
    pub fn is_disjoint_from(&self, other: &Self) -> bool {
        !self.chars.iter().any(|&ch| other.has_letter(ch))
    }

    /// Per-letter counts, indexed by `letter - b'a'`
    ///
    /// Used as the working multiset when computing feedback.
    #[inline]
    pub(crate) fn char_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for &ch in &self.chars {
            counts[usize::from(ch - b'a')] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s)
    }
}
