//! Word solving command
//!
//! Plays one game against a known secret and records the trace.

use crate::core::{Feedback, Word};
use crate::game::{GameError, GameState};
use crate::simulation::BotConfig;
use crate::solver::{Bot, CandidateSet};
use crate::wordlists::WordCorpus;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub bot: BotConfig,
    pub max_guesses: usize,
    pub seed: u64,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String, bot: BotConfig) -> Self {
        Self {
            target,
            bot,
            max_guesses: crate::game::DEFAULT_MAX_TURNS,
            seed: 0,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
    pub in_corpus: bool,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve `config.target` with the configured bot
///
/// Candidate counts are tracked independently of the bot, so they are
/// reported the same way for every policy.
///
/// # Errors
///
/// Returns `InvalidGuess` if the target is not five letters, ignoring case.
pub fn solve_word(config: SolveConfig, corpus: &WordCorpus) -> Result<SolveResult, GameError> {
    let target = Word::normalize(&config.target)?;
    let in_corpus = corpus.contains(&target);
    if !in_corpus {
        log::warn!("{target} is not in the corpus; candidates may run dry");
    }

    let mut bot = config.bot.build(corpus);
    bot.reset();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut game = GameState::new(target, config.max_guesses);
    let mut tracker = CandidateSet::new(corpus);
    let mut guesses = Vec::new();

    while !game.is_finished() {
        let candidates_before = tracker.len();
        let guess = bot.generate_guess(&game, &mut rng);
        let (feedback, _) = game.apply_word(&guess)?;
        tracker.sync(game.history());

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            candidates_before,
            candidates_after: tracker.len(),
        });
    }

    Ok(SolveResult {
        success: game.is_won(),
        guesses,
        target: config.target,
        in_corpus,
    })
}
