//! Single-secret game state

use super::GameError;
use crate::core::{Feedback, Word};

/// Lifecycle of a board: `InProgress` moves to exactly one terminal state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One played guess with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub feedback: Feedback,
}

impl GuessRecord {
    #[must_use]
    pub const fn new(guess: Word, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }
}

/// A single Wordle board
///
/// `turn()` is always `history().len()`; the board only changes through
/// [`GameState::apply_word`].
#[derive(Debug, Clone)]
pub struct GameState {
    secret: Word,
    history: Vec<GuessRecord>,
    max_turns: usize,
    status: GameStatus,
}

impl GameState {
    /// Start a game against `secret` with a budget of `max_turns` guesses
    #[must_use]
    pub fn new(secret: Word, max_turns: usize) -> Self {
        debug_assert!(max_turns > 0, "a game needs at least one turn");
        Self {
            secret,
            history: Vec::with_capacity(max_turns),
            max_turns,
            status: GameStatus::InProgress,
        }
    }

    /// Validate and play a textual guess
    ///
    /// # Errors
    /// `InvalidGuess` if the text is not five lowercase letters `a..=z`,
    /// `GameAlreadyFinished` if the board is terminal.
    pub fn apply_guess(&mut self, guess: &str) -> Result<(Feedback, GameStatus), GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameAlreadyFinished);
        }
        let word = Word::new(guess)?;
        self.apply_word(&word)
    }

    /// Play a guess and return its feedback and the resulting status
    ///
    /// # Errors
    /// `GameAlreadyFinished` if the board is terminal.
    pub fn apply_word(&mut self, guess: &Word) -> Result<(Feedback, GameStatus), GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameAlreadyFinished);
        }

        let feedback = Feedback::calculate(guess, &self.secret);
        self.history.push(GuessRecord::new(guess.clone(), feedback));

        if feedback.is_perfect() {
            self.status = GameStatus::Won;
        } else if self.turn() >= self.max_turns {
            self.status = GameStatus::Lost;
        }

        Ok((feedback, self.status))
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Number of guesses made so far
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
    pub fn turns_remaining(&self) -> usize {
        self.max_turns.saturating_sub(self.turn())
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

    #[inline]
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    #[must_use]
    pub fn last_feedback(&self) -> Option<Feedback> {
        self.history.last().map(|record| record.feedback)
    }

    /// Whether `word` was already played on this board
    #[must_use]
    pub fn has_guessed(&self, word: &Word) -> bool {
        self.history.iter().any(|record| record.guess == *word)
    }
}
