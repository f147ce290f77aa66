//! Pure narrowing policy
//!
//! Every turn absorbs the newest feedback and picks from what is left. With
//! [`Pick::Frequency`] this is the coverage-weighted bot.

use super::candidates::CandidateSet;
use super::selection::Pick;
use super::strategy::Bot;
use crate::core::Word;
use crate::game::GameState;
use crate::wordlists::WordCorpus;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct MiddleBot<'a> {
    candidates: CandidateSet<'a>,
    pick: Pick,
}

impl<'a> MiddleBot<'a> {
    #[must_use]
    pub fn new(corpus: &'a WordCorpus, pick: Pick) -> Self {
        Self {
            candidates: CandidateSet::new(corpus),
            pick,
        }
    }

    #[inline]
    #[must_use]
    pub const fn pick(&self) -> Pick {
        self.pick
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet<'a> {
        &self.candidates
    }
}

impl Bot for MiddleBot<'_> {
    fn name(&self) -> &'static str {
        match self.pick {
            Pick::Random => "middle",
            Pick::Frequency => "frequency",
        }
    }

    fn reset(&mut self) {
        self.candidates.reset();
    }

    fn generate_guess<R: Rng + ?Sized>(&mut self, game: &GameState, rng: &mut R) -> Word {
        self.candidates.sync(game.history());
        log::trace!("{} candidates on turn {}", self.candidates.len(), game.turn() + 1);
        self.candidates
            .choose(self.pick, |word| game.has_guessed(word), rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::selection::best_by_coverage;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn every_guess_is_consistent_with_history() {
        let corpus = WordCorpus::sample();
        let mut bot = MiddleBot::new(&corpus, Pick::Random);
        let mut rng = StdRng::seed_from_u64(21);

        for secret in ["grass", "abide", "floor"] {
            bot.reset();
            let secret = corpus.find(secret).unwrap().clone();
            let mut game = GameState::new(secret.clone(), 6);
            while !game.is_finished() {
                let guess = bot.generate_guess(&game, &mut rng);
                assert!(bot.candidates().contains(&guess));
                assert!(bot.candidates().contains(&secret));
                game.apply_word(&guess).unwrap();
            }
        }
    }

    #[test]
    fn frequency_pick_is_deterministic() {
        let corpus = WordCorpus::sample();
        let secret = corpus.find("plank").unwrap().clone();

        let play = |seed: u64| {
            let mut bot = MiddleBot::new(&corpus, Pick::Frequency);
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = GameState::new(secret.clone(), 6);
            let mut guesses = Vec::new();
            while !game.is_finished() {
                let guess = bot.generate_guess(&game, &mut rng);
                game.apply_word(&guess).unwrap();
                guesses.push(guess);
            }
            guesses
        };

        assert_eq!(play(1), play(2));
    }

    #[test]
    fn frequency_opener_is_the_best_covered_word() {
        let corpus = WordCorpus::sample();
        let mut bot = MiddleBot::new(&corpus, Pick::Frequency);
        let game = GameState::new(corpus.find("hello").unwrap().clone(), 6);
        let opener = bot.generate_guess(&game, &mut StdRng::seed_from_u64(0));

        let all: Vec<&Word> = corpus.words().iter().collect();
        assert_eq!(Some(&opener), best_by_coverage(&all));
        assert_eq!(bot.name(), "frequency");
    }
}
