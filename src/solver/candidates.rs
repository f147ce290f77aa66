//! The candidate pool owned by a strategy
//!
//! Starts as the whole corpus and only ever shrinks within a game.

use super::ConstraintSet;
use super::selection::Pick;
use crate::core::Word;
use crate::game::GuessRecord;
use crate::wordlists::WordCorpus;
use rand::Rng;
use rand::seq::IndexedRandom;

#[derive(Debug, Clone)]
pub struct CandidateSet<'a> {
    corpus: &'a WordCorpus,
    words: Vec<&'a Word>,
    constraints: ConstraintSet,
    absorbed: usize,
}

impl<'a> CandidateSet<'a> {
    #[must_use]
    pub fn new(corpus: &'a WordCorpus) -> Self {
        Self {
            corpus,
            words: corpus.words().iter().collect(),
            constraints: ConstraintSet::new(),
            absorbed: 0,
        }
    }

    /// Back to the full corpus with no facts
    pub fn reset(&mut self) {
        self.words = self.corpus.words().iter().collect();
        self.constraints = ConstraintSet::new();
        self.absorbed = 0;
    }

    /// Absorb the records of `history` not seen yet and narrow accordingly
    pub fn sync(&mut self, history: &[GuessRecord]) {
        if history.len() < self.absorbed {
            // A different board; start over from its full history
            self.rebuild(history);
            return;
        }
        if history.len() == self.absorbed {
            return;
        }

        for record in &history[self.absorbed..] {
            self.constraints.update(record);
        }
        self.absorbed = history.len();
        self.words.retain(|word| self.constraints.matches(word));
    }

    /// Recompute from scratch against a complete history
    pub fn rebuild(&mut self, history: &[GuessRecord]) {
        self.constraints = ConstraintSet::from_history(history);
        self.absorbed = history.len();
        self.words = self
            .corpus
            .words()
            .iter()
            .filter(|word| self.constraints.matches(word))
            .collect();
    }

    /// Narrow by an externally built constraint set
    pub fn narrow(&mut self, constraints: &ConstraintSet) {
        self.words.retain(|word| constraints.matches(word));
    }

    /// Candidates that additionally satisfy `constraints`, leaving `self` untouched
    #[must_use]
    pub fn filtered(&self, constraints: &ConstraintSet) -> Vec<&'a Word> {
        self.words
            .iter()
            .copied()
            .filter(|word| constraints.matches(word))
            .collect()
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

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(&word).is_ok()
    }

    #[inline]
    #[must_use]
    pub const fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Keep only candidates accepted by `keep`, for strategies whose facts
    /// do not fit a single `ConstraintSet`
    pub fn retain(&mut self, mut keep: impl FnMut(&Word) -> bool) {
        self.words.retain(|word| keep(*word));
    }

    #[inline]
    #[must_use]
    pub const fn corpus(&self) -> &'a WordCorpus {
        self.corpus
    }

    /// Pick a guess from the candidates, falling back to the corpus when empty
    pub fn choose<R: Rng + ?Sized>(
        &self,
        pick: Pick,
        guessed: impl Fn(&Word) -> bool,
        rng: &mut R,
    ) -> Word {
        match pick.select(&self.words, rng) {
            Some(word) => word.clone(),
            None => {
                log::warn!("candidate set empty, falling back to the full corpus");
                fallback_guess(self.corpus, guessed, rng)
            }
        }
    }
}

/// Any corpus word not yet played
///
/// Only reached when filtering has excluded every word, which cannot happen
/// for an in-corpus secret with true feedback.
pub fn fallback_guess<R: Rng + ?Sized>(
    corpus: &WordCorpus,
    guessed: impl Fn(&Word) -> bool,
    rng: &mut R,
) -> Word {
    let fresh: Vec<&Word> = corpus.words().iter().filter(|w| !guessed(*w)).collect();
    fresh
        .choose(rng)
        .copied()
        .or_else(|| corpus.words().choose(rng))
        .cloned()
        .unwrap_or_else(|| corpus.sample_answer(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use crate::game::GameState;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn play(secret: &Word, guesses: &[&Word]) -> GameState {
        let mut game = GameState::new(secret.clone(), 10);
        for guess in guesses {
            if game.is_finished() {
                break;
            }
            game.apply_word(guess).unwrap();
        }
        game
    }

    #[test]
    fn incremental_narrowing_equals_full_derivation() {
        let corpus = WordCorpus::sample();
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..30 {
            let secret = corpus.sample_answer(&mut rng);
            let guesses: Vec<&Word> = corpus.words().choose_multiple(&mut rng, 5).collect();

            let mut incremental = CandidateSet::new(&corpus);
            let mut game = GameState::new(secret.clone(), 10);
            for guess in &guesses {
                if game.is_finished() {
                    break;
                }
                game.apply_word(guess).unwrap();
                incremental.sync(game.history());
            }

            let mut full = CandidateSet::new(&corpus);
            full.rebuild(game.history());

            assert_eq!(incremental.words(), full.words());
            assert_eq!(incremental.constraints(), full.constraints());
        }
    }

    #[test]
    fn secret_is_never_filtered_out() {
        let corpus = WordCorpus::sample();
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..50 {
            let secret = corpus.sample_answer(&mut rng);
            let guesses: Vec<&Word> = corpus.words().choose_multiple(&mut rng, 4).collect();
            let game = play(&secret, &guesses);

            let mut candidates = CandidateSet::new(&corpus);
            candidates.sync(game.history());
            assert!(candidates.contains(&secret), "{secret} was filtered out");
        }
    }

    #[test]
    fn sync_is_idempotent_and_reset_restores_corpus() {
        let corpus = WordCorpus::sample();
        let secret = corpus.find("crane").unwrap().clone();
        let trace = corpus.find("trace").unwrap();
        let game = play(&secret, &[trace]);

        let mut candidates = CandidateSet::new(&corpus);
        candidates.sync(game.history());
        let narrowed = candidates.len();
        assert!(narrowed < corpus.len());
        candidates.sync(game.history());
        assert_eq!(candidates.len(), narrowed);

        candidates.reset();
        assert_eq!(candidates.len(), corpus.len());
    }

    #[test]
    fn shorter_history_triggers_rebuild() {
        let corpus = WordCorpus::sample();
        let secret = corpus.find("pilot").unwrap().clone();
        let long = play(
            &secret,
            &[corpus.find("crane").unwrap(), corpus.find("sassy").unwrap()],
        );
        let short = play(&secret, &[corpus.find("audio").unwrap()]);

        let mut candidates = CandidateSet::new(&corpus);
        candidates.sync(long.history());
        candidates.sync(short.history());

        let mut expected = CandidateSet::new(&corpus);
        expected.rebuild(short.history());
        assert_eq!(candidates.words(), expected.words());
    }

    #[test]
    fn empty_set_falls_back_to_unplayed_word() {
        let corpus = WordCorpus::sample();
        let mut candidates = CandidateSet::new(&corpus);
        let mut impossible = ConstraintSet::new();
        impossible.require_green(0, b'c');
        impossible.require_green(0, b'x');
        candidates.narrow(&impossible);
        assert!(candidates.is_empty());

        let played = corpus.find("crane").unwrap().clone();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let guess = candidates.choose(Pick::Random, |w| *w == played, &mut rng);
            assert_ne!(guess, played);
            assert!(corpus.contains(&guess));
        }
    }

    #[test]
    fn choose_stays_inside_candidates() {
        let corpus = WordCorpus::sample();
        let secret = corpus.find("sassy").unwrap().clone();
        let guess = corpus.find("grass").unwrap().clone();
        let feedback = Feedback::calculate(&guess, &secret);
        let history = [GuessRecord::new(guess, feedback)];

        let mut candidates = CandidateSet::new(&corpus);
        candidates.sync(&history);
        let mut rng = StdRng::seed_from_u64(8);
        for pick in [Pick::Random, Pick::Frequency] {
            let choice = candidates.choose(pick, |_| false, &mut rng);
            assert!(candidates.contains(&choice));
        }
    }
}
