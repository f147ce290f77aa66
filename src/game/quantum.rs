//! Dual-secret ("quantum") game state
//!
//! A guess equal to either secret wins. The turn counter advances on every
//! guess, including the winning one.

use super::{GameError, GameStatus};
use crate::core::{QuantumFeedback, Word};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantumRecord {
    pub guess: Word,
    pub feedback: QuantumFeedback,
}

#[derive(Debug, Clone)]
pub struct QuantumGame {
    secrets: [Word; 2],
    history: Vec<QuantumRecord>,
    max_turns: usize,
    status: GameStatus,
}

impl QuantumGame {
    #[must_use]
    pub fn new(first: Word, second: Word, max_turns: usize) -> Self {
        debug_assert!(max_turns > 0, "a game needs at least one turn");
        Self {
            secrets: [first, second],
            history: Vec::with_capacity(max_turns),
            max_turns,
            status: GameStatus::InProgress,
        }
    }

    /// Validate and play a textual guess
    ///
    /// # Errors
    /// `InvalidGuess` for malformed text, `GameAlreadyFinished` once terminal.
    pub fn apply_guess(
        &mut self,
        guess: &str,
    ) -> Result<(QuantumFeedback, GameStatus), GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameAlreadyFinished);
        }
        let word = Word::new(guess)?;
        self.apply_word(&word)
    }

    /// # Errors
    /// `GameAlreadyFinished` once terminal.
    pub fn apply_word(
        &mut self,
        guess: &Word,
    ) -> Result<(QuantumFeedback, GameStatus), GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameAlreadyFinished);
        }

        let [first, second] = &self.secrets;
        let feedback = QuantumFeedback::calculate(guess, first, second);
        self.history.push(QuantumRecord {
            guess: guess.clone(),
            feedback,
        });

        if self.secrets.contains(guess) {
            self.status = GameStatus::Won;
        } else if self.turn() >= self.max_turns {
            self.status = GameStatus::Lost;
        }

        Ok((feedback, self.status))
    }

    #[inline]
    #[must_use]
    pub const fn secrets(&self) -> &[Word; 2] {
        &self.secrets
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[QuantumRecord] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub const fn max_turns(&self) -> usize {
        self.max_turns
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    #[must_use]
    pub fn has_guessed(&self, word: &Word) -> bool {
        self.history.iter().any(|record| record.guess == *word)
    }
}
