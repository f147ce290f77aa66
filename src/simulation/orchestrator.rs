//! Repeated-game driver
//!
//! Every game gets its own `StdRng` seeded from the run's base seed plus the
//! game index, and the bot is reset before each game. Parallel and
//! sequential runs share the per-game routines below, so a fixed seed gives
//! the same report either way.

use super::config::{BotConfig, ConfigError, MultiBotConfig, SimulationConfig};
use super::report::{GameOutcome, SimulationReport};
use crate::core::Word;
use crate::game::{GameState, GameStatus, MultiBoardState, QuantumGame};
use crate::solver::{Bot, MultiBot, Pick, QuantumBot};
use crate::wordlists::WordCorpus;
use indicatif::ProgressBar;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Play one single-board game to completion
pub fn play_game<B: Bot, R: Rng + ?Sized>(
    bot: &mut B,
    secret: Word,
    max_turns: usize,
    rng: &mut R,
) -> GameOutcome {
    bot.reset();
    let mut game = GameState::new(secret, max_turns);
    while !game.is_finished() {
        let guess = bot.generate_guess(&game, rng);
        log::trace!("turn {}: {guess}", game.turn() + 1);
        if let Err(err) = game.apply_word(&guess) {
            log::warn!("{} game against {} stopped: {err}", bot.name(), game.secret());
            break;
        }
    }
    log::debug!(
        "{} vs {}: {:?} after {} turns",
        bot.name(),
        game.secret(),
        game.status(),
        game.turn()
    );
    GameOutcome {
        won: game.is_won(),
        turns: game.turn(),
    }
}

/// Play one multi-board game to completion
pub fn play_multi_game<B: MultiBot, R: Rng + ?Sized>(
    bot: &mut B,
    secrets: Vec<Word>,
    max_turns: usize,
    rng: &mut R,
) -> GameOutcome {
    bot.reset();
    let mut game = MultiBoardState::new(secrets, max_turns);
    while !game.is_finished() {
        let guess = bot.generate_guess(&game, rng);
        log::trace!("turn {}: {guess} ({} boards won)", game.turn() + 1, game.wins());
        if let Err(err) = game.apply_word(&guess) {
            log::warn!("{} multi-board game stopped: {err}", bot.name());
            break;
        }
    }
    log::debug!(
        "{}: {:?} with {}/{} boards after {} turns",
        bot.name(),
        game.status(),
        game.wins(),
        game.num_boards(),
        game.turn()
    );
    GameOutcome {
        won: game.status() == GameStatus::Won,
        turns: game.turn(),
    }
}

/// Play one dual-secret game to completion
pub fn play_quantum_game<R: Rng + ?Sized>(
    bot: &mut QuantumBot<'_>,
    secrets: (Word, Word),
    max_turns: usize,
    rng: &mut R,
) -> GameOutcome {
    bot.reset();
    let mut game = QuantumGame::new(secrets.0, secrets.1, max_turns);
    while !game.is_finished() {
        let guess = bot.generate_guess(&game, rng);
        log::trace!("turn {}: {guess}", game.turn() + 1);
        if let Err(err) = game.apply_word(&guess) {
            log::warn!("quantum game stopped: {err}");
            break;
        }
    }
    let [first, second] = game.secrets();
    log::debug!(
        "quantum vs {first}/{second}: {:?} after {} turns",
        game.status(),
        game.turn()
    );
    GameOutcome {
        won: game.status() == GameStatus::Won,
        turns: game.turn(),
    }
}

pub struct Orchestrator<'a> {
    corpus: &'a WordCorpus,
    config: SimulationConfig,
    seed: u64,
    progress: Option<ProgressBar>,
}

impl<'a> Orchestrator<'a> {
    /// Validate `config` and fix the base seed for the run
    ///
    /// # Errors
    /// Any [`SimulationConfig::validate`] failure.
    pub fn new(corpus: &'a WordCorpus, config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        log::info!(
            "simulation: {} games, {} turns, {} board(s), seed {seed}",
            config.games,
            config.max_turns,
            config.boards
        );
        Ok(Self {
            corpus,
            config,
            seed,
            progress: None,
        })
    }

    /// Advance `bar` once per finished game
    #[must_use]
    pub fn with_progress(mut self, bar: ProgressBar) -> Self {
        self.progress = Some(bar);
        self
    }

    /// Base seed actually used, for replaying the run
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn corpus(&self) -> &'a WordCorpus {
        self.corpus
    }

    /// Generator for game `index`
    #[must_use]
    pub fn game_rng(&self, index: usize) -> StdRng {
        StdRng::seed_from_u64(self.seed.wrapping_add(index as u64))
    }

    fn tick(&self) {
        if let Some(bar) = &self.progress {
            bar.inc(1);
        }
    }

    /// Run `games` games across the rayon pool with one state per worker
    fn run_parallel<T, I, F>(&self, games: usize, init: I, play: F) -> SimulationReport
    where
        I: Fn() -> T + Sync + Send,
        F: Fn(&mut T, usize, &mut StdRng) -> GameOutcome + Sync + Send,
    {
        let report = (0..games)
            .into_par_iter()
            .map_init(init, |state, index| {
                let mut rng = self.game_rng(index);
                let outcome = play(state, index, &mut rng);
                self.tick();
                outcome
            })
            .fold(SimulationReport::new, |mut report, outcome| {
                report.record(outcome);
                report
            })
            .reduce(SimulationReport::new, SimulationReport::merge);

        log::info!(
            "{}/{} games won ({:.1}%)",
            report.won,
            report.games,
            report.win_rate() * 100.0
        );
        report
    }

    /// Single-board games against sampled secrets
    #[must_use]
    pub fn run(&self, bot: BotConfig) -> SimulationReport {
        log::info!("single-board run with the {bot} bot");
        let max_turns = self.config.max_turns;
        self.run_parallel(
            self.config.games,
            || bot.build(self.corpus),
            |bot, _, rng| {
                let secret = self.corpus.sample_answer(rng);
                play_game(bot, secret, max_turns, rng)
            },
        )
    }

    /// Single-board games, one per supplied secret
    #[must_use]
    pub fn run_with_secrets(&self, bot: BotConfig, secrets: &[Word]) -> SimulationReport {
        log::info!("single-board run with the {bot} bot on {} fixed secrets", secrets.len());
        let max_turns = self.config.max_turns;
        self.run_parallel(
            secrets.len(),
            || bot.build(self.corpus),
            |bot, index, rng| play_game(bot, secrets[index].clone(), max_turns, rng),
        )
    }

    /// Sequential single-board games on one caller-owned bot
    pub fn play_games<B: Bot>(&self, bot: &mut B) -> SimulationReport {
        (0..self.config.games)
            .map(|index| {
                let mut rng = self.game_rng(index);
                let secret = self.corpus.sample_answer(&mut rng);
                let outcome = play_game(bot, secret, self.config.max_turns, &mut rng);
                self.tick();
                outcome
            })
            .collect()
    }

    fn check_boards(&self) -> Result<(), ConfigError> {
        let available = self.corpus.answers().len();
        if self.config.boards > available {
            return Err(ConfigError::SecretCount {
                expected: self.config.boards,
                found: available,
            });
        }
        Ok(())
    }

    /// Multi-board games with pairwise distinct sampled secrets
    ///
    /// # Errors
    /// `SecretCount` when the corpus has fewer answers than boards.
    pub fn run_multi(&self, scheduler: MultiBotConfig) -> Result<SimulationReport, ConfigError> {
        self.check_boards()?;
        log::info!(
            "{}-board run with the {scheduler} scheduler",
            self.config.boards
        );
        let SimulationConfig {
            boards, max_turns, ..
        } = self.config;
        Ok(self.run_parallel(
            self.config.games,
            || scheduler.build(self.corpus),
            |bot, _, rng| {
                let secrets = self.corpus.sample_distinct_answers(boards, rng);
                play_multi_game(bot, secrets, max_turns, rng)
            },
        ))
    }

    /// Multi-board games, one per supplied secret list
    ///
    /// # Errors
    /// `SecretCount` when a list does not hold exactly one secret per board.
    pub fn run_multi_with_secrets(
        &self,
        scheduler: MultiBotConfig,
        secrets: &[Vec<Word>],
    ) -> Result<SimulationReport, ConfigError> {
        let boards = self.config.boards;
        if let Some(bad) = secrets.iter().find(|list| list.len() != boards) {
            return Err(ConfigError::SecretCount {
                expected: boards,
                found: bad.len(),
            });
        }
        let max_turns = self.config.max_turns;
        Ok(self.run_parallel(
            secrets.len(),
            || scheduler.build(self.corpus),
            |bot, index, rng| play_multi_game(bot, secrets[index].clone(), max_turns, rng),
        ))
    }

    /// Sequential multi-board games on one caller-owned scheduler
    ///
    /// # Errors
    /// `SecretCount` when the corpus has fewer answers than boards.
    pub fn play_multi_games<B: MultiBot>(
        &self,
        bot: &mut B,
    ) -> Result<SimulationReport, ConfigError> {
        self.check_boards()?;
        Ok((0..self.config.games)
            .map(|index| {
                let mut rng = self.game_rng(index);
                let secrets = self
                    .corpus
                    .sample_distinct_answers(self.config.boards, &mut rng);
                let outcome = play_multi_game(bot, secrets, self.config.max_turns, &mut rng);
                self.tick();
                outcome
            })
            .collect())
    }

    /// Dual-secret games; the second secret avoids the first one's letters when possible
    #[must_use]
    pub fn run_quantum(&self, pick: Pick) -> SimulationReport {
        log::info!("quantum run");
        let max_turns = self.config.max_turns;
        self.run_parallel(
            self.config.games,
            || QuantumBot::new(self.corpus, pick),
            |bot, _, rng| {
                let secrets = self.corpus.sample_secret_pair(rng);
                play_quantum_game(bot, secrets, max_turns, rng)
            },
        )
    }

    /// Dual-secret games, one per supplied pair, accepted as given
    #[must_use]
    pub fn run_quantum_with_secrets(&self, pick: Pick, pairs: &[(Word, Word)]) -> SimulationReport {
        let max_turns = self.config.max_turns;
        self.run_parallel(
            pairs.len(),
            || QuantumBot::new(self.corpus, pick),
            |bot, index, rng| play_quantum_game(bot, pairs[index].clone(), max_turns, rng),
        )
    }

    /// Sequential dual-secret games on one caller-owned bot
    pub fn play_quantum_games(&self, bot: &mut QuantumBot<'_>) -> SimulationReport {
        (0..self.config.games)
            .map(|index| {
                let mut rng = self.game_rng(index);
                let secrets = self.corpus.sample_secret_pair(&mut rng);
                let outcome = play_quantum_game(bot, secrets, self.config.max_turns, &mut rng);
                self.tick();
                outcome
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::default_multi_turns;
    use crate::solver::{GreedyBot, MiddleBot, NaiveBot};

    fn config(games: usize) -> SimulationConfig {
        SimulationConfig {
            games,
            seed: Some(7),
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn parallel_and_sequential_runs_agree() {
        let corpus = WordCorpus::sample();
        let orchestrator = Orchestrator::new(&corpus, config(40)).unwrap();

        let parallel = orchestrator.run(BotConfig::Middle);
        let mut bot = MiddleBot::new(&corpus, Pick::Random);
        let sequential = orchestrator.play_games(&mut bot);

        assert_eq!(parallel, sequential);
        assert_eq!(parallel.games, 40);
        assert_eq!(parallel.won + parallel.lost, 40);
    }

    #[test]
    fn same_seed_same_report() {
        let corpus = WordCorpus::sample();
        let first = Orchestrator::new(&corpus, config(25)).unwrap();
        let second = Orchestrator::new(&corpus, config(25)).unwrap();
        assert_eq!(first.run(BotConfig::Simple), second.run(BotConfig::Simple));
    }

    #[test]
    fn fixed_secrets_play_one_game_each() {
        let corpus = WordCorpus::sample();
        let orchestrator = Orchestrator::new(&corpus, config(1)).unwrap();
        let secrets: Vec<Word> = ["crane", "sassy", "pilot"]
            .iter()
            .map(|s| corpus.find(s).unwrap().clone())
            .collect();

        let report = orchestrator.run_with_secrets(BotConfig::Frequency, &secrets);
        assert_eq!(report.games, 3);
        assert!(report.distribution.keys().all(|&turns| (1..=6).contains(&turns)));
        assert_eq!(report.distribution.values().sum::<usize>(), report.won);
    }

    #[test]
    fn narrowing_bots_win_most_games() {
        let corpus = WordCorpus::sample();
        let orchestrator = Orchestrator::new(&corpus, config(60)).unwrap();
        let report = orchestrator.run(BotConfig::Frequency);
        assert!(report.win_rate() > 0.5, "win rate {}", report.win_rate());
        let average = report.average_turns_to_win().unwrap();
        assert!((1.0..=6.0).contains(&average));
    }

    #[test]
    fn multi_board_runs_agree_and_validate_secrets() {
        let corpus = WordCorpus::sample();
        let config = SimulationConfig {
            games: 10,
            boards: 3,
            max_turns: default_multi_turns(3),
            seed: Some(11),
        };
        let orchestrator = Orchestrator::new(&corpus, config).unwrap();

        let parallel = orchestrator.run_multi(MultiBotConfig::Greedy).unwrap();
        let mut bot = GreedyBot::new(&corpus, Pick::Random);
        let sequential = orchestrator.play_multi_games(&mut bot).unwrap();
        assert_eq!(parallel, sequential);

        let naive = orchestrator.run_multi(MultiBotConfig::Naive).unwrap();
        let mut bot = NaiveBot::new(&corpus, Pick::Random);
        assert_eq!(naive, orchestrator.play_multi_games(&mut bot).unwrap());

        let short = vec![vec![corpus.find("crane").unwrap().clone()]];
        assert_eq!(
            orchestrator.run_multi_with_secrets(MultiBotConfig::Naive, &short),
            Err(ConfigError::SecretCount {
                expected: 3,
                found: 1
            })
        );
    }

    #[test]
    fn quantum_runs_agree() {
        let corpus = WordCorpus::sample();
        let config = SimulationConfig {
            games: 10,
            max_turns: 10,
            seed: Some(3),
            ..SimulationConfig::default()
        };
        let orchestrator = Orchestrator::new(&corpus, config).unwrap();

        let parallel = orchestrator.run_quantum(Pick::Random);
        let mut bot = QuantumBot::new(&corpus, Pick::Random);
        assert_eq!(parallel, orchestrator.play_quantum_games(&mut bot));
        assert_eq!(parallel.games, 10);

        let pair = (
            corpus.find("stare").unwrap().clone(),
            corpus.find("crane").unwrap().clone(),
        );
        let report = orchestrator.run_quantum_with_secrets(Pick::Random, &[pair]);
        assert_eq!(report.games, 1);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let corpus = WordCorpus::sample();
        let config = SimulationConfig {
            max_turns: 0,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            Orchestrator::new(&corpus, config),
            Err(ConfigError::ZeroTurns)
        ));
    }
}
