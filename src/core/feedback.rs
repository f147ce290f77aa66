//! Per-letter feedback for standard games
//!
//! Each position of a guess is classified as:
//! - Gray (letter not in word, or every occurrence already accounted for)
//! - Yellow (letter in word, wrong position)
//! - Green (letter in correct position)

use super::Word;
use super::word::WORD_LEN;

/// Outcome for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterFeedback {
    Gray,
    Yellow,
    Green,
}

impl LetterFeedback {
    /// Progress score used by the greedy multi-board scheduler
    #[inline]
    #[must_use]
    pub const fn score(self) -> u32 {
        match self {
            Self::Gray => 0,
            Self::Yellow => 1,
            Self::Green => 2,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_hit(self) -> bool {
        !matches!(self, Self::Gray)
    }
}

/// Feedback for a whole guess, one entry per letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterFeedback; WORD_LEN]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([LetterFeedback::Green; WORD_LEN]);

    #[inline]
    #[must_use]
    pub const fn new(marks: [LetterFeedback; WORD_LEN]) -> Self {
        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[LetterFeedback; WORD_LEN] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, position: usize) -> LetterFeedback {
        self.0[position]
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// Duplicate letters are handled with a working multiset of the secret:
    /// 1. First pass: mark exact matches green and remove them from the pool
    /// 2. Second pass: mark remaining letters yellow while the pool still
    ///    holds that letter, gray otherwise
    ///
    /// The number of non-gray marks for a letter therefore never exceeds its
    /// count in the secret.
    ///
    /// # Examples
    /// ```
    /// use wordle_genius::core::{Feedback, Word};
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let secret = Word::new("crane").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret);
    /// assert_eq!(feedback.to_string(), "-GGYG");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut result = [LetterFeedback::Gray; WORD_LEN];
        let mut available = secret.char_counts();

        // Allow: Index needed to access guess[i], secret[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess.char_at(i) == secret.char_at(i) {
                result[i] = LetterFeedback::Green;
                available[usize::from(guess.char_at(i) - b'a')] -= 1;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if result[i] == LetterFeedback::Green {
                continue;
            }
            let count = &mut available[usize::from(guess.char_at(i) - b'a')];
            if *count > 0 {
                result[i] = LetterFeedback::Yellow;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_greens(&self) -> usize {
        self.0.iter().filter(|&&m| m == LetterFeedback::Green).count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_yellows(&self) -> usize {
        self.0.iter().filter(|&&m| m == LetterFeedback::Yellow).count()
    }

    /// GREEN=2, YELLOW=1, summed over positions
    #[must_use]
    pub fn score(&self) -> u32 {
        self.0.iter().map(|m| m.score()).sum()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/⬜ for gray
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LEN {
            return None;
        }

        let mut marks = [LetterFeedback::Gray; WORD_LEN];
        for (mark, ch) in marks.iter_mut().zip(chars) {
            *mark = match ch {
                'G' | 'g' | '🟩' => LetterFeedback::Green,
                'Y' | 'y' | '🟨' => LetterFeedback::Yellow,
                '-' | '_' | '⬜' => LetterFeedback::Gray,
                _ => return None,
            };
        }

        Some(Self(marks))
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|m| match m {
                LetterFeedback::Green => '🟩',
                LetterFeedback::Yellow => '🟨',
                LetterFeedback::Gray => '⬜',
            })
            .collect()
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for mark in &self.0 {
            let ch = match mark {
                LetterFeedback::Green => 'G',
                LetterFeedback::Yellow => 'Y',
                LetterFeedback::Gray => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}
