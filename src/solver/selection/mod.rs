//! Guess selection over a candidate pool
//!
//! Selection is kept apart from filtering: a bot narrows its pool first and
//! then asks a [`Pick`] for one member of it.

pub mod coverage;

pub use coverage::{best_by_coverage, coverage_score, letter_coverage};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;

/// How a single guess is drawn from a pool of candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pick {
    /// Uniformly at random
    #[default]
    Random,
    /// Highest letter-coverage score, first in canonical order on ties
    Frequency,
}

impl Pick {
    /// Select one word from `words`, or `None` if the pool is empty
    pub fn select<'a, R: Rng + ?Sized>(self, words: &[&'a Word], rng: &mut R) -> Option<&'a Word> {
        match self {
            Self::Random => words.choose(rng).copied(),
            Self::Frequency => best_by_coverage(words),
        }
    }
}
