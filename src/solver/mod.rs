//! Constraint engine and bot policies
//!
//! `ConstraintSet` turns feedback into facts, `CandidateSet` applies them
//! to the corpus, and the bots decide what to guess next.

pub mod candidates;
pub mod constraints;
mod hard;
mod middle;
pub mod multi;
pub mod quantum;
pub mod selection;
mod simple;
pub mod strategy;

pub use candidates::{CandidateSet, fallback_guess};
pub use constraints::ConstraintSet;
pub use hard::HardBot;
pub use middle::MiddleBot;
pub use multi::{GreedyBot, MultiBot, NaiveBot, SchedulerType};
pub use quantum::{HalfClue, HalfKind, QuantumBot};
pub use selection::Pick;
pub use simple::{ExplorationPool, SimpleBot};
pub use strategy::{Bot, BotType, ThresholdMetric};
