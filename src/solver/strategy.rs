//! Single-board bot policies
//!
//! Defines the `Bot` trait and the `BotType` wrapper used to pick a policy at
//! runtime.

use super::{HardBot, MiddleBot, SimpleBot};
use crate::core::Word;
use crate::game::GameState;
use rand::Rng;

/// A policy that produces one guess per turn for a single board
///
/// Implementations own their scratch state (candidate pool, exploration
/// pool, switch flags) and must be `reset` between games.
pub trait Bot {
    /// Short identifier used in logs and reports
    fn name(&self) -> &'static str;

    /// Drop all per-game state so the next game starts from the full corpus
    fn reset(&mut self);

    /// Choose the next guess for `game`
    ///
    /// The guess is drawn from the current candidates, or from the full
    /// corpus when they are exhausted, and is never a word already played on
    /// the board while an alternative exists.
    fn generate_guess<R: Rng + ?Sized>(&mut self, game: &GameState, rng: &mut R) -> Word;
}

/// Enum wrapper for all single-board bots
///
/// Allows runtime selection of a policy while keeping static dispatch.
#[derive(Debug, Clone)]
pub enum BotType<'a> {
    /// Explore with fresh letters, then converge
    Simple(SimpleBot<'a>),
    /// Narrow every turn and pick from the candidates
    Middle(MiddleBot<'a>),
    /// Explore until a metric crosses its threshold, then narrow
    Hard(HardBot<'a>),
}

impl Bot for BotType<'_> {
    fn name(&self) -> &'static str {
        match self {
            Self::Simple(b) => b.name(),
            Self::Middle(b) => b.name(),
            Self::Hard(b) => b.name(),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Simple(b) => b.reset(),
            Self::Middle(b) => b.reset(),
            Self::Hard(b) => b.reset(),
        }
    }

    fn generate_guess<R: Rng + ?Sized>(&mut self, game: &GameState, rng: &mut R) -> Word {
        match self {
            Self::Simple(b) => b.generate_guess(game, rng),
            Self::Middle(b) => b.generate_guess(game, rng),
            Self::Hard(b) => b.generate_guess(game, rng),
        }
    }
}

/// Quantity watched by [`HardBot`] to decide when to stop exploring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThresholdMetric {
    /// Positions with a known letter
    Green,
    /// Letters known present but not yet placed
    Yellow,
    /// Distinct letters known present
    Aggregate,
    /// Words left in the exploration pool; crosses when it falls to the threshold
    Pool,
}

impl ThresholdMetric {
    /// Parse a metric name
    ///
    /// Accepts "green", "yellow", "aggregate" (or "green+yellow") and "pool".
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "green" => Some(Self::Green),
            "yellow" => Some(Self::Yellow),
            "aggregate" | "green+yellow" => Some(Self::Aggregate),
            "pool" => Some(Self::Pool),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Aggregate => "aggregate",
            Self::Pool => "pool",
        }
    }

    /// Whether `value` has crossed `threshold`
    ///
    /// Knowledge metrics cross upward; the pool metric crosses downward.
    #[must_use]
    pub const fn crossed(self, value: usize, threshold: usize) -> bool {
        match self {
            Self::Pool => value <= threshold,
            Self::Green | Self::Yellow | Self::Aggregate => value >= threshold,
        }
    }
}

impl std::fmt::Display for ThresholdMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
