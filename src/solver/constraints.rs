//! Constraint model derived from feedback history
//!
//! A `ConstraintSet` is the conjunction of every fact learned so far. Facts
//! only ever accumulate (greens are fixed, exclusions grow, lower letter
//! bounds rise, upper bounds fall), so merging records is commutative and
//! idempotent: absorbing a history one record at a time gives the same set
//! as deriving it from the full history at once.

use crate::core::{LetterFeedback, WORD_LEN, Word};
use crate::game::GuessRecord;
use rustc_hash::FxHashSet;

#[inline]
const fn slot(letter: u8) -> usize {
    (letter - b'a') as usize
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    green: [Option<u8>; WORD_LEN],
    yellow_excluded: [FxHashSet<u8>; WORD_LEN],
    required_letters: FxHashSet<u8>,
    forbidden_letters: FxHashSet<u8>,
    min_counts: [u8; 26],
    max_counts: [Option<u8>; 26],
    contradiction: bool,
}

impl ConstraintSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the constraints of a complete history
    #[must_use]
    pub fn from_history(history: &[GuessRecord]) -> Self {
        let mut constraints = Self::new();
        for record in history {
            constraints.update(record);
        }
        constraints
    }

    /// Absorb the facts of one guess
    ///
    /// - GREEN fixes the letter at its position.
    /// - YELLOW requires the letter and excludes it from that position.
    /// - GRAY caps the letter's count at the number of green/yellow marks it
    ///   received in the same guess. With no such marks the letter is
    ///   forbidden outright; otherwise only the excess is ruled out and the
    ///   gray position is excluded.
    pub fn update(&mut self, record: &GuessRecord) {
        let guess = &record.guess;
        let marks = record.feedback.marks();

        let mut hits = [0u8; 26];
        for (i, &mark) in marks.iter().enumerate() {
            let letter = guess.char_at(i);
            match mark {
                LetterFeedback::Green => {
                    self.require_green(i, letter);
                    hits[slot(letter)] += 1;
                }
                LetterFeedback::Yellow => {
                    self.exclude_at(i, letter);
                    hits[slot(letter)] += 1;
                }
                LetterFeedback::Gray => {}
            }
        }

        for &letter in guess.chars() {
            self.require_count(letter, hits[slot(letter)]);
        }

        for (i, &mark) in marks.iter().enumerate() {
            if mark != LetterFeedback::Gray {
                continue;
            }
            let letter = guess.char_at(i);
            let confirmed = hits[slot(letter)];
            if confirmed > 0 {
                self.exclude_at(i, letter);
            }
            self.cap_count(letter, confirmed);
        }
    }

    /// `letter` sits at `position`
    pub fn require_green(&mut self, position: usize, letter: u8) {
        match self.green[position] {
            Some(existing) if existing != letter => {
                self.contradiction = true;
                self.green[position] = Some(existing.min(letter));
            }
            _ => self.green[position] = Some(letter),
        }
        self.require_count(letter, 1);
    }

    /// `letter` is not at `position`
    pub fn exclude_at(&mut self, position: usize, letter: u8) {
        self.yellow_excluded[position].insert(letter);
    }

    /// `letter` occurs at least `count` times
    pub fn require_count(&mut self, letter: u8, count: u8) {
        if count == 0 {
            return;
        }
        let min = &mut self.min_counts[slot(letter)];
        *min = (*min).max(count);
        self.required_letters.insert(letter);
    }

    /// `letter` occurs at most `count` times
    pub fn cap_count(&mut self, letter: u8, count: u8) {
        let max = &mut self.max_counts[slot(letter)];
        *max = Some(max.map_or(count, |current| current.min(count)));
        if count == 0 {
            self.forbidden_letters.insert(letter);
        }
    }

    /// `letter` does not occur at all
    pub fn forbid(&mut self, letter: u8) {
        self.cap_count(letter, 0);
    }

    /// Check a word against every recorded fact
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        if self.contradiction {
            return false;
        }

        for (i, &letter) in word.chars().iter().enumerate() {
            if self.green[i].is_some_and(|green| green != letter) {
                return false;
            }
            if self.yellow_excluded[i].contains(&letter) {
                return false;
            }
        }

        let counts = word.char_counts();
        counts
            .iter()
            .zip(self.min_counts.iter().zip(&self.max_counts))
            .all(|(&count, (&min, max))| count >= min && max.is_none_or(|max| count <= max))
    }

    #[inline]
    #[must_use]
    pub const fn green(&self) -> &[Option<u8>; WORD_LEN] {
        &self.green
    }

    /// Letters known absent from `position` (but possibly present elsewhere)
    #[inline]
    #[must_use]
    pub fn yellow_excluded(&self, position: usize) -> &FxHashSet<u8> {
        &self.yellow_excluded[position]
    }

    #[inline]
    #[must_use]
    pub const fn required_letters(&self) -> &FxHashSet<u8> {
        &self.required_letters
    }

    #[inline]
    #[must_use]
    pub const fn forbidden_letters(&self) -> &FxHashSet<u8> {
        &self.forbidden_letters
    }

    #[inline]
    #[must_use]
    pub const fn min_count(&self, letter: u8) -> u8 {
        self.min_counts[slot(letter)]
    }

    #[inline]
    #[must_use]
    pub const fn max_count(&self, letter: u8) -> Option<u8> {
        self.max_counts[slot(letter)]
    }

    /// Number of positions with a known letter
    #[must_use]
    pub fn green_count(&self) -> usize {
        self.green.iter().flatten().count()
    }

    /// Letters known present whose position is still unknown
    #[must_use]
    pub fn yellow_count(&self) -> usize {
        self.required_letters
            .iter()
            .filter(|letter| !self.green.contains(&Some(**letter)))
            .count()
    }

    /// Distinct letters known present
    #[must_use]
    pub fn known_letter_count(&self) -> usize {
        self.required_letters.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_contradictory(&self) -> bool {
        self.contradiction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use crate::wordlists::WordCorpus;
    use rand::rngs::StdRng;
    use rand::seq::IndexedRandom;
    use rand::SeedableRng;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn record(guess: &str, secret: &str) -> GuessRecord {
        let guess = word(guess);
        let feedback = Feedback::calculate(&guess, &word(secret));
        GuessRecord::new(guess, feedback)
    }

    #[test]
    fn derives_green_yellow_gray_facts() {
        // trace vs crane: - G G Y G
        let constraints = ConstraintSet::from_history(&[record("trace", "crane")]);

        assert_eq!(
            constraints.green(),
            &[None, Some(b'r'), Some(b'a'), None, Some(b'e')]
        );
        assert!(constraints.yellow_excluded(3).contains(&b'c'));
        assert!(constraints.required_letters().contains(&b'c'));
        assert!(constraints.forbidden_letters().contains(&b't'));
        assert_eq!(constraints.green_count(), 3);
        assert_eq!(constraints.yellow_count(), 1);
        assert_eq!(constraints.known_letter_count(), 4);
    }

    #[test]
    fn gray_duplicate_only_caps_the_excess() {
        // speed vs abide: - - Y - Y; the second e is gray but one e exists
        let constraints = ConstraintSet::from_history(&[record("speed", "abide")]);

        assert!(!constraints.forbidden_letters().contains(&b'e'));
        assert_eq!(constraints.min_count(b'e'), 1);
        assert_eq!(constraints.max_count(b'e'), Some(1));
        assert!(constraints.yellow_excluded(3).contains(&b'e'));

        assert!(constraints.matches(&word("abide")));
        assert!(!constraints.matches(&word("eerie")));
    }

    #[test]
    fn double_letter_secrets_survive() {
        // grass vs sassy: - - Y G Y, no gray s so the count stays open-ended
        let constraints = ConstraintSet::from_history(&[record("grass", "sassy")]);
        assert!(constraints.matches(&word("sassy")));
        assert_eq!(constraints.min_count(b's'), 2);
        assert_eq!(constraints.max_count(b's'), None);
        assert!(constraints.forbidden_letters().contains(&b'g'));

        // sassy vs grass: the third s is gray, capping s at two
        let constraints = ConstraintSet::from_history(&[record("sassy", "grass")]);
        assert!(constraints.matches(&word("grass")));
        assert!(!constraints.forbidden_letters().contains(&b's'));
        assert_eq!(constraints.max_count(b's'), Some(2));
    }

    #[test]
    fn guessed_word_is_excluded_unless_it_won() {
        let miss = record("trace", "crane");
        assert!(!ConstraintSet::from_history(&[miss]).matches(&word("trace")));

        let hit = record("crane", "crane");
        assert!(ConstraintSet::from_history(&[hit]).matches(&word("crane")));
    }

    #[test]
    fn conflicting_greens_match_nothing() {
        let mut constraints = ConstraintSet::new();
        constraints.require_green(0, b'c');
        constraints.require_green(0, b's');
        assert!(constraints.is_contradictory());
        assert!(!constraints.matches(&word("crane")));
        assert!(!constraints.matches(&word("slate")));
    }

    #[test]
    fn update_order_does_not_matter() {
        let a = record("trace", "sassy");
        let b = record("grass", "sassy");
        let c = record("pilot", "sassy");

        let forward = ConstraintSet::from_history(&[a.clone(), b.clone(), c.clone()]);
        let backward = ConstraintSet::from_history(&[c, b.clone(), a]);
        assert_eq!(forward, backward);

        let mut twice = forward.clone();
        twice.update(&b);
        assert_eq!(twice, forward);
    }

    #[test]
    fn filtering_is_exact_against_replayed_feedback() {
        let corpus = WordCorpus::sample();
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..25 {
            let secret = corpus.sample_answer(&mut rng);
            let history: Vec<GuessRecord> = (0..3)
                .map(|_| {
                    let guess = corpus.words().choose(&mut rng).unwrap().clone();
                    let feedback = Feedback::calculate(&guess, &secret);
                    GuessRecord::new(guess, feedback)
                })
                .collect();
            let constraints = ConstraintSet::from_history(&history);

            for candidate in corpus.words() {
                let consistent = history
                    .iter()
                    .all(|r| Feedback::calculate(&r.guess, candidate) == r.feedback);
                assert_eq!(
                    constraints.matches(candidate),
                    consistent,
                    "{candidate} against secret {secret}"
                );
            }
            assert!(constraints.matches(&secret));
        }
    }
}
