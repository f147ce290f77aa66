//! Command implementations

pub mod simulate;
pub mod solve;

pub use simulate::{SimulationResult, Variant, parse_secrets, run_simulation};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
