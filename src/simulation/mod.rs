//! Simulation runs: configuration, the game driver, and aggregate reports

mod config;
mod orchestrator;
mod report;

pub use config::{BotConfig, ConfigError, MultiBotConfig, SimulationConfig, default_multi_turns};
pub use orchestrator::{Orchestrator, play_game, play_multi_game, play_quantum_game};
pub use report::{GameOutcome, SimulationReport};
