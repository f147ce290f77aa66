//! Game engines
//!
//! Authoritative feedback computation and turn/termination tracking for the
//! three variants: a single secret, N independent boards, and two secrets
//! scored together ("quantum").

mod board;
mod error;
mod multi;
mod quantum;

pub use board::{GameState, GameStatus, GuessRecord};
pub use error::GameError;
pub use multi::MultiBoardState;
pub use quantum::{QuantumGame, QuantumRecord};

/// Standard Wordle turn budget
pub const DEFAULT_MAX_TURNS: usize = 6;
