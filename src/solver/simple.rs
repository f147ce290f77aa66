//! Exploratory-then-converge policy
//!
//! Early guesses spend the turn on letters never tried before; once fresh
//! letters run out, the last turn arrives, or the candidates are nearly
//! resolved, the bot guesses from its narrowed candidate set.

use super::candidates::CandidateSet;
use super::selection::Pick;
use super::strategy::Bot;
use crate::core::Word;
use crate::game::{GameState, GuessRecord};
use crate::wordlists::WordCorpus;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Candidate count at or below which exploring is no longer worth a turn
const CONVERGE_AT: usize = 2;

/// Corpus words with five distinct letters, none of which has been guessed
#[derive(Debug, Clone)]
pub struct ExplorationPool<'a> {
    corpus: &'a WordCorpus,
    words: Vec<&'a Word>,
    absorbed: usize,
}

impl<'a> ExplorationPool<'a> {
    #[must_use]
    pub fn new(corpus: &'a WordCorpus) -> Self {
        Self {
            corpus,
            words: Self::fresh(corpus),
            absorbed: 0,
        }
    }

    fn fresh(corpus: &'a WordCorpus) -> Vec<&'a Word> {
        corpus
            .words()
            .iter()
            .filter(|word| word.has_distinct_letters())
            .collect()
    }

    pub fn reset(&mut self) {
        self.words = Self::fresh(self.corpus);
        self.absorbed = 0;
    }

    /// Drop every word sharing a letter with a guess in `history`
    pub fn sync(&mut self, history: &[GuessRecord]) {
        if history.len() < self.absorbed {
            self.reset();
        }
        for record in &history[self.absorbed..] {
            self.words.retain(|word| word.is_disjoint_from(&record.guess));
        }
        self.absorbed = history.len();
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[&'a Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Shared turn decision of the exploring policies
///
/// Explores while the pool has words, this is not the final turn, and more
/// than a couple of candidates remain; otherwise picks from the candidates.
pub(crate) fn explore_or_converge<R: Rng + ?Sized>(
    candidates: &CandidateSet<'_>,
    pool: &ExplorationPool<'_>,
    game: &GameState,
    rng: &mut R,
) -> Word {
    let final_turn = game.turns_remaining() <= 1;
    if !final_turn
        && candidates.len() > CONVERGE_AT
        && let Some(word) = pool.words().choose(rng)
    {
        log::trace!("exploring with {word} ({} fresh words)", pool.len());
        return (*word).clone();
    }
    candidates.choose(Pick::Random, |word| game.has_guessed(word), rng)
}

#[derive(Debug, Clone)]
pub struct SimpleBot<'a> {
    candidates: CandidateSet<'a>,
    pool: ExplorationPool<'a>,
}

impl<'a> SimpleBot<'a> {
    #[must_use]
    pub fn new(corpus: &'a WordCorpus) -> Self {
        Self {
            candidates: CandidateSet::new(corpus),
            pool: ExplorationPool::new(corpus),
        }
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet<'a> {
        &self.candidates
    }
}

impl Bot for SimpleBot<'_> {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn reset(&mut self) {
        self.candidates.reset();
        self.pool.reset();
    }

    fn generate_guess<R: Rng + ?Sized>(&mut self, game: &GameState, rng: &mut R) -> Word {
        self.candidates.sync(game.history());
        self.pool.sync(game.history());
        explore_or_converge(&self.candidates, &self.pool, game, rng)
    }
}
