//! Aggregate results of a simulation run

use std::collections::BTreeMap;

/// Result of one finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub won: bool,
    /// Guesses made, including the winning one
    pub turns: usize,
}

/// Aggregate over many games
///
/// Reports merge associatively, so per-worker partial reports can be
/// combined in any grouping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationReport {
    pub games: usize,
    pub won: usize,
    pub lost: usize,
    /// Sum of turns over won games only
    pub total_turns_won: usize,
    /// Won games by number of turns taken
    pub distribution: BTreeMap<usize, usize>,
}

impl SimulationReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: GameOutcome) {
        self.games += 1;
        if outcome.won {
            self.won += 1;
            self.total_turns_won += outcome.turns;
            *self.distribution.entry(outcome.turns).or_insert(0) += 1;
        } else {
            self.lost += 1;
        }
    }

    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.games += other.games;
        self.won += other.won;
        self.lost += other.lost;
        self.total_turns_won += other.total_turns_won;
        for (turns, count) in other.distribution {
            *self.distribution.entry(turns).or_insert(0) += count;
        }
        self
    }

    /// Fraction of games won, 0.0 for an empty report
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.won as f64 / self.games as f64
        }
    }

    /// Mean turns among won games, `None` when nothing was won
    #[must_use]
    pub fn average_turns_to_win(&self) -> Option<f64> {
        (self.won > 0).then(|| self.total_turns_won as f64 / self.won as f64)
    }
}

impl FromIterator<GameOutcome> for SimulationReport {
    fn from_iter<I: IntoIterator<Item = GameOutcome>>(iter: I) -> Self {
        let mut report = Self::new();
        for outcome in iter {
            report.record(outcome);
        }
        report
    }
}
