//! Threshold-switching policy
//!
//! Plays the exploring policy until the watched metric crosses its
//! threshold, then narrows for the rest of the game. The switch is one-way
//! until `reset`.

use super::candidates::CandidateSet;
use super::selection::Pick;
use super::simple::{ExplorationPool, explore_or_converge};
use super::strategy::{Bot, ThresholdMetric};
use crate::core::Word;
use crate::game::GameState;
use crate::wordlists::WordCorpus;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct HardBot<'a> {
    candidates: CandidateSet<'a>,
    pool: ExplorationPool<'a>,
    metric: ThresholdMetric,
    threshold: usize,
    switched: bool,
}

impl<'a> HardBot<'a> {
    #[must_use]
    pub fn new(corpus: &'a WordCorpus, metric: ThresholdMetric, threshold: usize) -> Self {
        Self {
            candidates: CandidateSet::new(corpus),
            pool: ExplorationPool::new(corpus),
            metric,
            threshold,
            switched: false,
        }
    }

    /// Current value of the watched metric
    #[must_use]
    pub fn metric_value(&self) -> usize {
        let constraints = self.candidates.constraints();
        match self.metric {
            ThresholdMetric::Green => constraints.green_count(),
            ThresholdMetric::Yellow => constraints.yellow_count(),
            ThresholdMetric::Aggregate => constraints.known_letter_count(),
            ThresholdMetric::Pool => self.pool.len(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn metric(&self) -> ThresholdMetric {
        self.metric
    }

    #[inline]
    #[must_use]
    pub const fn threshold(&self) -> usize {
        self.threshold
    }

    /// Whether the bot has stopped exploring for this game
    #[inline]
    #[must_use]
    pub const fn has_switched(&self) -> bool {
        self.switched
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet<'a> {
        &self.candidates
    }
}

impl Bot for HardBot<'_> {
    fn name(&self) -> &'static str {
        "hard"
    }

    fn reset(&mut self) {
        self.candidates.reset();
        self.pool.reset();
        self.switched = false;
    }

    fn generate_guess<R: Rng + ?Sized>(&mut self, game: &GameState, rng: &mut R) -> Word {
        self.candidates.sync(game.history());
        self.pool.sync(game.history());

        if !self.switched {
            let value = self.metric_value();
            if self.metric.crossed(value, self.threshold) {
                log::debug!(
                    "{} metric at {value} crossed {} on turn {}, narrowing from now on",
                    self.metric,
                    self.threshold,
                    game.turn() + 1
                );
                self.switched = true;
            }
        }

        if self.switched {
            self.candidates
                .choose(Pick::Random, |word| game.has_guessed(word), rng)
        } else {
            explore_or_converge(&self.candidates, &self.pool, game, rng)
        }
    }
}
