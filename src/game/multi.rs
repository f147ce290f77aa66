//! Simultaneous multi-board game
//!
//! Every guess is played on each sub-board that is still in progress. The
//! aggregate is won once every board is won and lost when the shared turn
//! budget runs out first.

use super::{GameError, GameState, GameStatus};
use crate::core::{Feedback, Word};

#[derive(Debug, Clone)]
pub struct MultiBoardState {
    boards: Vec<GameState>,
    guesses: Vec<Word>,
    max_turns: usize,
    wins: usize,
    status: GameStatus,
}

impl MultiBoardState {
    /// One sub-board per secret, all sharing `max_turns`
    #[must_use]
    pub fn new(secrets: Vec<Word>, max_turns: usize) -> Self {
        debug_assert!(!secrets.is_empty(), "a multi-board game needs a board");
        let boards = secrets
            .into_iter()
            .map(|secret| GameState::new(secret, max_turns))
            .collect();
        Self {
            boards,
            guesses: Vec::with_capacity(max_turns),
            max_turns,
            wins: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Validate and play a textual guess on every open board
    ///
    /// # Errors
    /// `InvalidGuess` for malformed text, `GameAlreadyFinished` once terminal.
    pub fn apply_guess(
        &mut self,
        guess: &str,
    ) -> Result<(Vec<Option<Feedback>>, GameStatus), GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameAlreadyFinished);
        }
        let word = Word::new(guess)?;
        self.apply_word(&word)
    }

    /// Play a guess on every open board
    ///
    /// Returns one entry per board: the feedback, or `None` for a board that
    /// was already terminal and therefore skipped.
    ///
    /// # Errors
    /// `GameAlreadyFinished` once the aggregate game is terminal.
    pub fn apply_word(
        &mut self,
        guess: &Word,
    ) -> Result<(Vec<Option<Feedback>>, GameStatus), GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameAlreadyFinished);
        }

        let mut feedback = Vec::with_capacity(self.boards.len());
        for board in &mut self.boards {
            if board.is_finished() {
                feedback.push(None);
            } else {
                feedback.push(Some(board.apply_word(guess)?.0));
            }
        }
        self.guesses.push(guess.clone());

        self.wins = self.boards.iter().filter(|b| b.is_won()).count();
        if self.wins == self.boards.len() {
            self.status = GameStatus::Won;
        } else if self.turn() >= self.max_turns {
            self.status = GameStatus::Lost;
        }

        Ok((feedback, self.status))
    }

    #[inline]
    #[must_use]
    pub fn boards(&self) -> &[GameState] {
        &self.boards
    }

    #[inline]
    #[must_use]
    pub fn board(&self, index: usize) -> Option<&GameState> {
        self.boards.get(index)
    }

    #[inline]
    #[must_use]
    pub fn num_boards(&self) -> usize {
        self.boards.len()
    }

    /// Every guess made, in order
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Aggregate turn counter
    #[inline]
    #[must_use]
    pub fn turn(&self) -> usize {
        self.guesses.len()
    }

    #[inline]
    #[must_use]
    pub const fn max_turns(&self) -> usize {
        self.max_turns
    }

    /// Number of sub-boards won so far
    #[inline]
    #[must_use]
    pub const fn wins(&self) -> usize {
        self.wins
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

    /// Indices of boards still in progress, ascending
    pub fn unsolved(&self) -> impl Iterator<Item = usize> + '_ {
        self.boards
            .iter()
            .enumerate()
            .filter(|(_, board)| !board.is_finished())
            .map(|(index, _)| index)
    }

    #[must_use]
    pub fn has_guessed(&self, word: &Word) -> bool {
        self.guesses.contains(word)
    }
}
