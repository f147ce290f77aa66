//! Core domain types for Wordle
//!
//! Words and feedback, with no knowledge of games or strategies.
//! All types here are pure values with clear equality semantics.

mod feedback;
mod quantum;
mod word;

pub use feedback::{Feedback, LetterFeedback};
pub use quantum::{QuantumFeedback, QuantumLetterFeedback};
pub use word::{WORD_LEN, Word, WordError};
