//! Run configuration and policy selection

use crate::solver::{
    BotType, GreedyBot, HardBot, MiddleBot, NaiveBot, Pick, SchedulerType, SimpleBot,
    ThresholdMetric,
};
use crate::wordlists::WordCorpus;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown bot '{0}' (expected simple, middle, frequency or hard)")]
    UnknownBot(String),

    #[error("unknown scheduler '{0}' (expected naive or greedy)")]
    UnknownScheduler(String),

    #[error("unknown threshold metric '{0}' (expected green, yellow, aggregate or pool)")]
    UnknownMetric(String),

    #[error("the hard bot needs both a threshold metric and a threshold value")]
    MissingThreshold,

    #[error("number of games must be at least 1")]
    ZeroGames,

    #[error("max turns must be at least 1")]
    ZeroTurns,

    #[error("number of boards must be at least 1")]
    ZeroBoards,

    #[error("expected {expected} secrets per game, got {found}")]
    SecretCount { expected: usize, found: usize },
}

/// Shape of a simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Games to play when secrets are sampled
    pub games: usize,
    /// Turn budget per game (shared by all boards in multi-board play)
    pub max_turns: usize,
    /// Sub-boards per multi-board game
    pub boards: usize,
    /// Base seed; game `i` uses `seed + i`. Drawn at random when `None`
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 100,
            max_turns: crate::game::DEFAULT_MAX_TURNS,
            boards: 1,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// # Errors
    /// Returns the first zero-valued count found.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::ZeroGames);
        }
        if self.max_turns == 0 {
            return Err(ConfigError::ZeroTurns);
        }
        if self.boards == 0 {
            return Err(ConfigError::ZeroBoards);
        }
        Ok(())
    }
}

/// Default turn budget for `boards` simultaneous boards: `max(6, floor(boards * 2.5))`
#[must_use]
pub const fn default_multi_turns(boards: usize) -> usize {
    let scaled = boards * 5 / 2;
    if scaled > crate::game::DEFAULT_MAX_TURNS {
        scaled
    } else {
        crate::game::DEFAULT_MAX_TURNS
    }
}

/// Single-board policy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotConfig {
    Simple,
    Middle,
    Frequency,
    Hard {
        metric: ThresholdMetric,
        threshold: usize,
    },
}

impl BotConfig {
    /// Parse a policy name, with metric and threshold for `hard`
    ///
    /// # Errors
    /// `UnknownBot`, `UnknownMetric`, or `MissingThreshold` when `hard` lacks
    /// either parameter.
    pub fn from_name(
        name: &str,
        metric: Option<&str>,
        threshold: Option<usize>,
    ) -> Result<Self, ConfigError> {
        match name.to_ascii_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "middle" | "random" => Ok(Self::Middle),
            "frequency" => Ok(Self::Frequency),
            "hard" => {
                let (Some(metric), Some(threshold)) = (metric, threshold) else {
                    return Err(ConfigError::MissingThreshold);
                };
                let metric = ThresholdMetric::from_name(metric)
                    .ok_or_else(|| ConfigError::UnknownMetric(metric.to_string()))?;
                Ok(Self::Hard { metric, threshold })
            }
            other => Err(ConfigError::UnknownBot(other.to_string())),
        }
    }

    /// Fresh bot over `corpus`
    #[must_use]
    pub fn build<'a>(&self, corpus: &'a WordCorpus) -> BotType<'a> {
        match *self {
            Self::Simple => BotType::Simple(SimpleBot::new(corpus)),
            Self::Middle => BotType::Middle(MiddleBot::new(corpus, Pick::Random)),
            Self::Frequency => BotType::Middle(MiddleBot::new(corpus, Pick::Frequency)),
            Self::Hard { metric, threshold } => {
                BotType::Hard(HardBot::new(corpus, metric, threshold))
            }
        }
    }
}

impl std::fmt::Display for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Simple => f.write_str("simple"),
            Self::Middle => f.write_str("middle"),
            Self::Frequency => f.write_str("frequency"),
            Self::Hard { metric, threshold } => write!(f, "hard ({metric} {threshold})"),
        }
    }
}

/// Multi-board scheduler selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiBotConfig {
    Naive,
    Greedy,
}

impl MultiBotConfig {
    /// # Errors
    /// `UnknownScheduler` for anything but "naive" or "greedy".
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name.to_ascii_lowercase().as_str() {
            "naive" | "sequential" => Ok(Self::Naive),
            "greedy" => Ok(Self::Greedy),
            other => Err(ConfigError::UnknownScheduler(other.to_string())),
        }
    }

    #[must_use]
    pub fn build<'a>(&self, corpus: &'a WordCorpus) -> SchedulerType<'a> {
        match self {
            Self::Naive => SchedulerType::Naive(NaiveBot::new(corpus, Pick::Random)),
            Self::Greedy => SchedulerType::Greedy(GreedyBot::new(corpus, Pick::Random)),
        }
    }
}

impl std::fmt::Display for MultiBotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Naive => f.write_str("naive"),
            Self::Greedy => f.write_str("greedy"),
        }
    }
}
