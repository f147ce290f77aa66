//! Multi-board schedulers
//!
//! A scheduler first picks which unsolved sub-board to play against and then
//! guesses from that board's candidates. The guess is still applied to every
//! open board.

use super::candidates::{CandidateSet, fallback_guess};
use super::selection::Pick;
use crate::core::Word;
use crate::game::MultiBoardState;
use crate::wordlists::WordCorpus;
use rand::Rng;

/// A policy that produces one guess per turn for a multi-board game
pub trait MultiBot {
    fn name(&self) -> &'static str;

    /// Drop the target board and candidate pool
    fn reset(&mut self);

    /// Index of the board the next guess is aimed at, or `None` when all are done
    fn select_target(&self, game: &MultiBoardState) -> Option<usize>;

    /// Choose the next guess for `game`
    fn generate_guess<R: Rng + ?Sized>(&mut self, game: &MultiBoardState, rng: &mut R) -> Word;
}

/// Lowest-indexed unsolved board first
#[derive(Debug, Clone)]
pub struct NaiveBot<'a> {
    candidates: CandidateSet<'a>,
    target: Option<usize>,
    pick: Pick,
}

impl<'a> NaiveBot<'a> {
    #[must_use]
    pub fn new(corpus: &'a WordCorpus, pick: Pick) -> Self {
        Self {
            candidates: CandidateSet::new(corpus),
            target: None,
            pick,
        }
    }

    /// Board targeted by the most recent guess
    #[inline]
    #[must_use]
    pub const fn target(&self) -> Option<usize> {
        self.target
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet<'a> {
        &self.candidates
    }
}

impl MultiBot for NaiveBot<'_> {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn reset(&mut self) {
        self.candidates.reset();
        self.target = None;
    }

    fn select_target(&self, game: &MultiBoardState) -> Option<usize> {
        game.unsolved().next()
    }

    fn generate_guess<R: Rng + ?Sized>(&mut self, game: &MultiBoardState, rng: &mut R) -> Word {
        let guessed = |word: &Word| game.has_guessed(word);
        let Some((index, board)) = self
            .select_target(game)
            .and_then(|index| game.board(index).map(|board| (index, board)))
        else {
            return fallback_guess(self.candidates.corpus(), guessed, rng);
        };

        if self.target == Some(index) {
            self.candidates.sync(board.history());
        } else {
            log::trace!("advancing to board {index}");
            self.candidates.reset();
            self.candidates.rebuild(board.history());
            self.target = Some(index);
        }
        self.candidates.choose(self.pick, guessed, rng)
    }
}

/// Board whose latest feedback scored highest
#[derive(Debug, Clone)]
pub struct GreedyBot<'a> {
    candidates: CandidateSet<'a>,
    target: Option<usize>,
    pick: Pick,
}

impl<'a> GreedyBot<'a> {
    #[must_use]
    pub fn new(corpus: &'a WordCorpus, pick: Pick) -> Self {
        Self {
            candidates: CandidateSet::new(corpus),
            target: None,
            pick,
        }
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> Option<usize> {
        self.target
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet<'a> {
        &self.candidates
    }
}

impl MultiBot for GreedyBot<'_> {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn reset(&mut self) {
        self.candidates.reset();
        self.target = None;
    }

    /// Highest last-feedback score wins; ties and the unplayed opening go to the lowest index
    fn select_target(&self, game: &MultiBoardState) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for index in game.unsolved() {
            let score = game
                .board(index)
                .and_then(|board| board.last_feedback())
                .map_or(0, |feedback| feedback.score());
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((index, score));
            }
        }
        best.map(|(index, _)| index)
    }

    fn generate_guess<R: Rng + ?Sized>(&mut self, game: &MultiBoardState, rng: &mut R) -> Word {
        let guessed = |word: &Word| game.has_guessed(word);
        let Some((index, board)) = self
            .select_target(game)
            .and_then(|index| game.board(index).map(|board| (index, board)))
        else {
            return fallback_guess(self.candidates.corpus(), guessed, rng);
        };

        log::trace!("targeting board {index}");
        self.target = Some(index);
        self.candidates.rebuild(board.history());
        self.candidates.choose(self.pick, guessed, rng)
    }
}

/// Enum wrapper for all multi-board schedulers
#[derive(Debug, Clone)]
pub enum SchedulerType<'a> {
    Naive(NaiveBot<'a>),
    Greedy(GreedyBot<'a>),
}

impl MultiBot for SchedulerType<'_> {
    fn name(&self) -> &'static str {
        match self {
            Self::Naive(b) => b.name(),
            Self::Greedy(b) => b.name(),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Naive(b) => b.reset(),
            Self::Greedy(b) => b.reset(),
        }
    }

    fn select_target(&self, game: &MultiBoardState) -> Option<usize> {
        match self {
            Self::Naive(b) => b.select_target(game),
            Self::Greedy(b) => b.select_target(game),
        }
    }

    fn generate_guess<R: Rng + ?Sized>(&mut self, game: &MultiBoardState, rng: &mut R) -> Word {
        match self {
            Self::Naive(b) => b.generate_guess(game, rng),
            Self::Greedy(b) => b.generate_guess(game, rng),
        }
    }
}
