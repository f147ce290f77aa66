//! The immutable word corpus shared by every game and strategy
//!
//! Holds the answer-eligible words (secrets are sampled from these) and the
//! union of answers and guess-only words (the guessable vocabulary). Both are
//! kept sorted and deduplicated so that iteration order is canonical.

use super::loader::{load_from_file, words_from_slice};
use super::{SAMPLE_ANSWERS, SAMPLE_GUESSES};
use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Attempts at drawing a second secret sharing no letter with the first
const DISJOINT_ATTEMPTS: usize = 256;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read word list {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("answer list contains no valid words")]
    EmptyAnswers,
}

/// Valid tokens: answers ∪ guess-only words
#[derive(Debug, Clone)]
pub struct WordCorpus {
    words: Vec<Word>,
    answers: Vec<Word>,
    lookup: FxHashSet<Word>,
}

impl WordCorpus {
    /// Build a corpus from an answer list and a guess-only list
    ///
    /// # Errors
    /// Returns `CorpusError::EmptyAnswers` if no answer word is given.
    pub fn new(answers: Vec<Word>, guess_only: Vec<Word>) -> Result<Self, CorpusError> {
        if answers.is_empty() {
            return Err(CorpusError::EmptyAnswers);
        }
        Ok(Self::build(answers, guess_only))
    }

    /// Load both lists from newline-delimited files
    ///
    /// # Errors
    /// Returns an error if either file cannot be read or the answer list is empty.
    pub fn from_files(
        answers_path: impl AsRef<Path>,
        guesses_path: impl AsRef<Path>,
    ) -> Result<Self, CorpusError> {
        let read = |path: &Path| {
            load_from_file(path)
                .map(|list| list.words)
                .map_err(|source| CorpusError::Io {
                    path: path.to_path_buf(),
                    source,
                })
        };
        let answers = read(answers_path.as_ref())?;
        let guesses = read(guesses_path.as_ref())?;
        log::info!(
            "loaded {} answers and {} guess-only words",
            answers.len(),
            guesses.len()
        );
        Self::new(answers, guesses)
    }

    /// The embedded sample corpus
    #[must_use]
    pub fn sample() -> Self {
        Self::build(
            words_from_slice(SAMPLE_ANSWERS),
            words_from_slice(SAMPLE_GUESSES),
        )
    }

    fn build(mut answers: Vec<Word>, guess_only: Vec<Word>) -> Self {
        answers.sort();
        answers.dedup();

        let mut words: Vec<Word> = answers.iter().cloned().chain(guess_only).collect();
        words.sort();
        words.dedup();

        let lookup = words.iter().cloned().collect();
        Self {
            words,
            answers,
            lookup,
        }
    }

    /// Every guessable word, in canonical order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Answer-eligible words, in canonical order
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word)
    }

    /// Look up a guessable word by text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        let word = Word::normalize(text).ok()?;
        self.words
            .binary_search(&word)
            .ok()
            .map(|index| &self.words[index])
    }

    /// Draw one answer uniformly
    pub fn sample_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        self.answers[rng.random_range(0..self.answers.len())].clone()
    }

    /// Draw `count` pairwise distinct answers (fewer if the answer list is shorter)
    pub fn sample_distinct_answers<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Word> {
        self.answers.choose_multiple(rng, count).cloned().collect()
    }

    /// Draw two secrets for a quantum game
    ///
    /// The second secret shares no letter with the first when such a word can
    /// be found; otherwise any other answer is used.
    pub fn sample_secret_pair<R: Rng + ?Sized>(&self, rng: &mut R) -> (Word, Word) {
        let first = self.sample_answer(rng);

        for _ in 0..DISJOINT_ATTEMPTS {
            let candidate = &self.answers[rng.random_range(0..self.answers.len())];
            if candidate.is_disjoint_from(&first) {
                return (first, candidate.clone());
            }
        }

        let fallback: Vec<&Word> = self.answers.iter().filter(|w| **w != first).collect();
        let second = fallback
            .choose(rng)
            .map_or_else(|| first.clone(), |w| (*w).clone());
        (first, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<Word> {
        words_from_slice(list)
    }

    #[test]
    fn union_is_sorted_and_deduplicated() {
        let corpus =
            WordCorpus::new(words(&["slate", "crane", "crane"]), words(&["adieu", "slate"])).unwrap();
        let texts: Vec<&str> = corpus.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["adieu", "crane", "slate"]);
        assert_eq!(corpus.answers().len(), 2);
        assert!(corpus.contains(&Word::new("adieu").unwrap()));
        assert!(!corpus.contains(&Word::new("pilot").unwrap()));
    }

    #[test]
    fn empty_answers_rejected() {
        assert!(matches!(
            WordCorpus::new(Vec::new(), words(&["crane"])),
            Err(CorpusError::EmptyAnswers)
        ));
    }

    #[test]
    fn find_by_text() {
        let corpus = WordCorpus::sample();
        assert_eq!(corpus.find("CRANE").map(Word::text), Some("crane"));
        assert!(corpus.find("zzzzz").is_none());
        assert!(corpus.find("nope").is_none());
    }

    #[test]
    fn sampled_answers_are_distinct() {
        let corpus = WordCorpus::sample();
        let mut rng = StdRng::seed_from_u64(7);
        let drawn = corpus.sample_distinct_answers(4, &mut rng);
        assert_eq!(drawn.len(), 4);
        let unique: FxHashSet<&Word> = drawn.iter().collect();
        assert_eq!(unique.len(), 4);
        assert!(drawn.iter().all(|w| corpus.answers().contains(w)));
    }

    #[test]
    fn secret_pair_prefers_disjoint_letters() {
        let corpus = WordCorpus::sample();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let (first, second) = corpus.sample_secret_pair(&mut rng);
            assert_ne!(first, second);
            assert!(first.is_disjoint_from(&second));
        }
    }

    #[test]
    fn secret_pair_falls_back_without_disjoint_word() {
        let corpus = WordCorpus::new(words(&["crane", "trace"]), Vec::new()).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let (first, second) = corpus.sample_secret_pair(&mut rng);
        assert_ne!(first, second);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = WordCorpus::from_files("/nonexistent/answers.txt", "/nonexistent/guesses.txt")
            .unwrap_err();
        assert!(matches!(err, CorpusError::Io { ref path, .. } if path.ends_with("answers.txt")));
    }
}
