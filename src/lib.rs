//! Wordle Genius
//!
//! A Wordle simulator: a duplicate-aware feedback and constraint engine, a
//! family of guessing bots, and a parallel driver that measures their win
//! rate over many games. Besides the standard game it covers simultaneous
//! multi-board play and a "quantum" variant with two secrets.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_genius::core::{Feedback, Word};
//! use wordle_genius::simulation::{BotConfig, Orchestrator, SimulationConfig};
//! use wordle_genius::wordlists::WordCorpus;
//!
//! // Feedback for a single guess
//! let guess = Word::new("trace").unwrap();
//! let secret = Word::new("crane").unwrap();
//! println!("{}", Feedback::calculate(&guess, &secret).to_emoji());
//!
//! // Win rate of a bot over 100 games
//! let corpus = WordCorpus::sample();
//! let orchestrator = Orchestrator::new(&corpus, SimulationConfig::default()).unwrap();
//! let report = orchestrator.run(BotConfig::Frequency);
//! println!("won {} of {}", report.won, report.games);
//! ```

// Core domain types
pub mod core;

// Game engines
pub mod game;

// Constraint engine and bots
pub mod solver;

// Repeated-game driver
pub mod simulation;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
