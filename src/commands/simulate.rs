//! Simulation command
//!
//! Runs many games of one variant and returns the aggregate with timing.

use crate::core::{Word, WordError};
use crate::simulation::{
    BotConfig, ConfigError, MultiBotConfig, Orchestrator, SimulationConfig, SimulationReport,
};
use crate::solver::Pick;
use crate::wordlists::WordCorpus;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Game variant and the policy that plays it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Single(BotConfig),
    Multi(MultiBotConfig),
    Quantum(Pick),
}

impl Variant {
    /// Secrets consumed per game
    #[must_use]
    pub const fn secrets_per_game(&self, boards: usize) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Multi(_) => boards,
            Self::Quantum(_) => 2,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(bot) => write!(f, "{bot} bot"),
            Self::Multi(scheduler) => write!(f, "{scheduler} scheduler"),
            Self::Quantum(Pick::Random) => f.write_str("quantum bot"),
            Self::Quantum(Pick::Frequency) => f.write_str("quantum bot (frequency)"),
        }
    }
}

/// Result of a simulation run
pub struct SimulationResult {
    pub label: String,
    pub config: SimulationConfig,
    pub seed: u64,
    pub report: SimulationReport,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Parse secret words given on the command line
///
/// # Errors
/// The first word that is not five letters, ignoring case and surrounding space.
pub fn parse_secrets(texts: &[String]) -> Result<Vec<Word>, WordError> {
    texts.iter().map(|text| Word::normalize(text)).collect()
}

fn progress_bar(len: usize) -> ProgressBar {
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
    {
        bar.set_style(style.progress_chars("█▓▒░"));
    }
    bar
}

/// Run a simulation of `variant`
///
/// With `secrets`, one game is played per group of
/// [`Variant::secrets_per_game`] words and `config.games` is ignored.
///
/// # Errors
/// Invalid `config`, or a secret list that does not split evenly into games.
pub fn run_simulation(
    corpus: &WordCorpus,
    config: SimulationConfig,
    variant: Variant,
    secrets: Option<&[Word]>,
    show_progress: bool,
) -> Result<SimulationResult, ConfigError> {
    let per_game = variant.secrets_per_game(config.boards);
    if let Some(secrets) = secrets
        && (secrets.is_empty() || secrets.len() % per_game != 0)
    {
        return Err(ConfigError::SecretCount {
            expected: per_game,
            found: secrets.len(),
        });
    }
    let games = secrets.map_or(config.games, |s| s.len() / per_game);

    let mut orchestrator = Orchestrator::new(corpus, config)?;
    let bar = show_progress.then(|| progress_bar(games));
    if let Some(bar) = &bar {
        orchestrator = orchestrator.with_progress(bar.clone());
    }

    let start = Instant::now();
    let report = match (variant, secrets) {
        (Variant::Single(bot), None) => orchestrator.run(bot),
        (Variant::Single(bot), Some(secrets)) => orchestrator.run_with_secrets(bot, secrets),
        (Variant::Multi(scheduler), None) => orchestrator.run_multi(scheduler)?,
        (Variant::Multi(scheduler), Some(secrets)) => {
            let groups: Vec<Vec<Word>> = secrets.chunks(per_game).map(<[Word]>::to_vec).collect();
            orchestrator.run_multi_with_secrets(scheduler, &groups)?
        }
        (Variant::Quantum(pick), None) => orchestrator.run_quantum(pick),
        (Variant::Quantum(pick), Some(secrets)) => {
            let pairs: Vec<(Word, Word)> = secrets
                .chunks_exact(2)
                .map(|pair| (pair[0].clone(), pair[1].clone()))
                .collect();
            orchestrator.run_quantum_with_secrets(pick, &pairs)
        }
    };
    let duration = start.elapsed();

    if let Some(bar) = bar {
        bar.finish_with_message("done");
    }

    Ok(SimulationResult {
        label: variant.to_string(),
        config: *orchestrator.config(),
        seed: orchestrator.seed(),
        games_per_second: report.games as f64 / duration.as_secs_f64().max(f64::EPSILON),
        report,
        duration,
    })
}
