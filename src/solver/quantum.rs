//! Disambiguation bot for the dual-secret variant
//!
//! A plain mark holds for one unknown secret, so candidates are kept while
//! each record could have come from them being either secret (see
//! [`QuantumFeedback::admits`](crate::core::QuantumFeedback::admits)). Half marks are also kept aside as clues.
//! When they exist and the candidates are not yet down to one word, the bot
//! tests hypotheses: a pair of half clues assumed to hold for the same
//! secret. Pairs are enumerated in a fixed order and each is tried at most
//! once per game.

use super::candidates::{CandidateSet, fallback_guess};
use super::selection::Pick;
use super::ConstraintSet;
use crate::core::{QuantumLetterFeedback, Word};
use crate::game::{QuantumGame, QuantumRecord};
use crate::wordlists::WordCorpus;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HalfKind {
    Green,
    Yellow,
}

/// A half mark: `letter` at `position` matched both secrets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HalfClue {
    pub kind: HalfKind,
    pub position: usize,
    pub letter: u8,
}

impl HalfClue {
    /// Add the clue to `constraints` as if it held outright
    fn assume(self, constraints: &mut ConstraintSet) {
        match self.kind {
            HalfKind::Green => constraints.require_green(self.position, self.letter),
            HalfKind::Yellow => {
                constraints.require_count(self.letter, 1);
                constraints.exclude_at(self.position, self.letter);
            }
        }
    }
}

/// Two half clues assumed to hold for the same secret
pub type Hypothesis = (HalfClue, HalfClue);

#[derive(Debug, Clone)]
pub struct QuantumBot<'a> {
    candidates: CandidateSet<'a>,
    half_clues: BTreeSet<HalfClue>,
    tried: FxHashSet<Hypothesis>,
    absorbed: usize,
    pick: Pick,
}

impl<'a> QuantumBot<'a> {
    #[must_use]
    pub fn new(corpus: &'a WordCorpus, pick: Pick) -> Self {
        Self {
            candidates: CandidateSet::new(corpus),
            half_clues: BTreeSet::new(),
            tried: FxHashSet::default(),
            absorbed: 0,
            pick,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        "quantum"
    }

    /// Forget clues, hypotheses and narrowing from the previous game
    pub fn reset(&mut self) {
        self.candidates.reset();
        self.half_clues.clear();
        self.tried.clear();
        self.absorbed = 0;
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet<'a> {
        &self.candidates
    }

    #[must_use]
    pub const fn half_clues(&self) -> &BTreeSet<HalfClue> {
        &self.half_clues
    }

    #[must_use]
    pub fn tried(&self) -> &FxHashSet<Hypothesis> {
        &self.tried
    }

    /// Choose the next guess for `game`
    pub fn generate_guess<R: Rng + ?Sized>(&mut self, game: &QuantumGame, rng: &mut R) -> Word {
        self.sync(game.history());

        let guessed = |word: &Word| game.has_guessed(word);
        let pool: Vec<&'a Word> = self
            .candidates
            .words()
            .iter()
            .copied()
            .filter(|word| !guessed(*word))
            .collect();

        if pool.len() > 1
            && !self.half_clues.is_empty()
            && let Some((hypothesis, narrowed)) = self.next_hypothesis(&pool)
        {
            log::trace!(
                "hypothesis {hypothesis:?} leaves {} of {} candidates",
                narrowed.len(),
                pool.len()
            );
            if let Some(word) = self.pick.select(&narrowed, rng) {
                return word.clone();
            }
        }

        match self.pick.select(&pool, rng) {
            Some(word) => word.clone(),
            None => {
                log::warn!("quantum candidate pool empty, falling back to the full corpus");
                fallback_guess(self.candidates.corpus(), guessed, rng)
            }
        }
    }

    /// Absorb records not yet seen
    fn sync(&mut self, history: &[QuantumRecord]) {
        if history.len() < self.absorbed {
            self.reset();
        }
        for record in &history[self.absorbed..] {
            self.absorb(record);
        }
        self.absorbed = history.len();
    }

    fn absorb(&mut self, record: &QuantumRecord) {
        let QuantumRecord { guess, feedback } = record;
        self.candidates.retain(|word| feedback.admits(guess, word));

        for (position, &mark) in feedback.marks().iter().enumerate() {
            let kind = match mark {
                QuantumLetterFeedback::HalfGreen => HalfKind::Green,
                QuantumLetterFeedback::HalfYellow => HalfKind::Yellow,
                _ => continue,
            };
            self.half_clues.insert(HalfClue {
                kind,
                position,
                letter: guess.char_at(position),
            });
        }
    }

    /// Hypotheses in enumeration order: green pairs, green-yellow pairs, yellow pairs
    #[must_use]
    pub fn hypotheses(&self) -> Vec<Hypothesis> {
        let (greens, yellows): (Vec<HalfClue>, Vec<HalfClue>) = self
            .half_clues
            .iter()
            .copied()
            .partition(|clue| clue.kind == HalfKind::Green);

        let mut pairs = Vec::new();
        for (i, &a) in greens.iter().enumerate() {
            for &b in &greens[i + 1..] {
                pairs.push((a, b));
            }
        }
        for &g in &greens {
            for &y in &yellows {
                pairs.push((g, y));
            }
        }
        for (i, &a) in yellows.iter().enumerate() {
            for &b in &yellows[i + 1..] {
                pairs.push((a, b));
            }
        }
        pairs
    }

    /// First untried hypothesis leaving a non-empty pool
    ///
    /// Every hypothesis examined is recorded as tried, whether or not it
    /// narrowed anything.
    fn next_hypothesis(&mut self, pool: &[&'a Word]) -> Option<(Hypothesis, Vec<&'a Word>)> {
        for hypothesis in self.hypotheses() {
            if !self.tried.insert(hypothesis) {
                continue;
            }
            let mut assumed = ConstraintSet::new();
            hypothesis.0.assume(&mut assumed);
            hypothesis.1.assume(&mut assumed);

            let narrowed: Vec<&'a Word> = pool
                .iter()
                .copied()
                .filter(|word| assumed.matches(word))
                .collect();
            if !narrowed.is_empty() {
                return Some((hypothesis, narrowed));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::QuantumFeedback;
    use crate::game::GameStatus;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn record(guess: &str, first: &str, second: &str) -> QuantumRecord {
        let guess = Word::new(guess).unwrap();
        let feedback = QuantumFeedback::calculate(
            &guess,
            &Word::new(first).unwrap(),
            &Word::new(second).unwrap(),
        );
        QuantumRecord { guess, feedback }
    }

    #[test]
    fn half_marks_become_clues() {
        let corpus = WordCorpus::sample();
        let mut bot = QuantumBot::new(&corpus, Pick::Random);
        // trace vs stare/crane: Y g g Y g
        bot.sync(&[record("trace", "stare", "crane")]);

        let clues: Vec<HalfClue> = bot.half_clues().iter().copied().collect();
        assert_eq!(
            clues,
            [
                HalfClue { kind: HalfKind::Green, position: 1, letter: b'r' },
                HalfClue { kind: HalfKind::Green, position: 2, letter: b'a' },
                HalfClue { kind: HalfKind::Green, position: 4, letter: b'e' },
            ]
        );
        let candidates = bot.candidates();
        assert!(candidates.contains(corpus.find("stare").unwrap()));
        assert!(candidates.contains(corpus.find("crane").unwrap()));
        assert!(!candidates.contains(corpus.find("pilot").unwrap()));
    }

    #[test]
    fn plain_marks_keep_both_secrets() {
        let corpus = WordCorpus::sample();
        let mut bot = QuantumBot::new(&corpus, Pick::Random);
        // plank vs pilot/crane: G Y G G -
        bot.sync(&[record("plank", "pilot", "crane")]);

        let candidates = bot.candidates();
        assert!(candidates.contains(corpus.find("pilot").unwrap()));
        assert!(candidates.contains(corpus.find("crane").unwrap()));
        assert!(candidates.words().iter().all(|word| !word.has_letter(b'k')));
        assert!(bot.half_clues().is_empty());
    }

    #[test]
    fn split_greens_do_not_empty_the_candidates() {
        let corpus = WordCorpus::sample();
        let mut bot = QuantumBot::new(&corpus, Pick::Random);
        // clout vs crane/pilot: G Y Y - G, the greens come from different secrets
        bot.sync(&[record("clout", "crane", "pilot")]);

        let candidates = bot.candidates();
        assert!(candidates.contains(corpus.find("crane").unwrap()));
        assert!(candidates.contains(corpus.find("pilot").unwrap()));
    }

    #[test]
    fn both_secrets_survive_every_turn() {
        let corpus = WordCorpus::sample();
        let mut rng = StdRng::seed_from_u64(11);

        for pick in [Pick::Random, Pick::Frequency] {
            let mut bot = QuantumBot::new(&corpus, pick);
            for round in 0..40 {
                let (first, second) = if round % 2 == 0 {
                    corpus.sample_secret_pair(&mut rng)
                } else {
                    let pair = corpus.sample_distinct_answers(2, &mut rng);
                    (pair[0].clone(), pair[1].clone())
                };
                bot.reset();
                let mut game = QuantumGame::new(first.clone(), second.clone(), 10);
                while !game.is_finished() {
                    let guess = bot.generate_guess(&game, &mut rng);
                    assert!(
                        bot.candidates().contains(&first) && bot.candidates().contains(&second),
                        "{first}/{second} dropped after {} guesses",
                        game.turn()
                    );
                    game.apply_word(&guess).unwrap();
                }
            }
        }
    }

    #[test]
    fn hypotheses_follow_fixed_order() {
        let corpus = WordCorpus::sample();
        let mut bot = QuantumBot::new(&corpus, Pick::Random);
        let g1 = HalfClue { kind: HalfKind::Green, position: 0, letter: b'c' };
        let g2 = HalfClue { kind: HalfKind::Green, position: 2, letter: b'a' };
        let y1 = HalfClue { kind: HalfKind::Yellow, position: 1, letter: b'e' };
        let y2 = HalfClue { kind: HalfKind::Yellow, position: 3, letter: b's' };
        bot.half_clues.extend([y2, g2, y1, g1]);

        assert_eq!(
            bot.hypotheses(),
            [(g1, g2), (g1, y1), (g1, y2), (g2, y1), (g2, y2), (y1, y2)]
        );
    }

    #[test]
    fn hypotheses_are_never_retried() {
        let corpus = WordCorpus::sample();
        let words: Vec<Word> = ["crane", "stare", "pilot"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let pool: Vec<&Word> = words.iter().collect();

        let mut bot = QuantumBot::new(&corpus, Pick::Random);
        bot.sync(&[record("trace", "stare", "crane")]);

        let mut seen = Vec::new();
        while let Some((hypothesis, narrowed)) = bot.next_hypothesis(&pool) {
            assert!(!seen.contains(&hypothesis));
            assert!(!narrowed.is_empty());
            assert!(!narrowed.iter().any(|w| w.text() == "pilot"));
            seen.push(hypothesis);
        }
        assert_eq!(seen.len(), bot.hypotheses().len());
        assert_eq!(bot.tried().len(), seen.len());
    }

    #[test]
    fn plays_quantum_games_without_repeats() {
        let corpus = WordCorpus::sample();
        let mut bot = QuantumBot::new(&corpus, Pick::Random);
        let mut rng = StdRng::seed_from_u64(40);

        for _ in 0..5 {
            bot.reset();
            let (first, second) = corpus.sample_secret_pair(&mut rng);
            let mut game = QuantumGame::new(first, second, 10);
            while !game.is_finished() {
                let guess = bot.generate_guess(&game, &mut rng);
                assert!(!game.has_guessed(&guess));
                game.apply_word(&guess).unwrap();
            }
            assert!(matches!(game.status(), GameStatus::Won | GameStatus::Lost));
        }
    }

    #[test]
    fn reset_clears_per_game_state() {
        let corpus = WordCorpus::sample();
        let mut bot = QuantumBot::new(&corpus, Pick::Random);
        bot.sync(&[record("trace", "stare", "crane")]);
        bot.tried.insert(bot.hypotheses()[0]);

        bot.reset();
        assert!(bot.half_clues().is_empty());
        assert!(bot.tried().is_empty());
        assert_eq!(bot.candidates().len(), corpus.len());
    }
}
