//! Word lists for Wordle simulation
//!
//! Provides the immutable corpus, file loaders, and a small embedded sample
//! corpus compiled into the binary.

mod corpus;
mod embedded;
pub mod loader;

pub use corpus::{CorpusError, WordCorpus};
pub use loader::{RejectedLine, WordList};
pub use embedded::{SAMPLE_ANSWERS, SAMPLE_ANSWERS_COUNT, SAMPLE_GUESSES, SAMPLE_GUESSES_COUNT};
