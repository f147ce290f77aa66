//! Feedback for the dual-secret ("quantum") variant
//!
//! The guess is scored against both secrets with the standard two-pass rule.
//! A position that hits (green or yellow) under both secrets at once is
//! reported as a half mark: true for at least one secret, ambiguous which.

use super::feedback::{Feedback, LetterFeedback};
use super::Word;
use super::word::WORD_LEN;

/// Outcome for a single letter position against two secrets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QuantumLetterFeedback {
    Gray,
    HalfYellow,
    Yellow,
    HalfGreen,
    Green,
}

impl QuantumLetterFeedback {
    /// Combine the standard marks a position received under each secret
    #[must_use]
    pub const fn combine(first: LetterFeedback, second: LetterFeedback) -> Self {
        use LetterFeedback::{Gray, Green, Yellow};
        match (first, second) {
            (Gray, Gray) => Self::Gray,
            (Green, Gray) | (Gray, Green) => Self::Green,
            (Yellow, Gray) | (Gray, Yellow) => Self::Yellow,
            (Green, _) | (_, Green) => Self::HalfGreen,
            (Yellow, Yellow) => Self::HalfYellow,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_half(self) -> bool {
        matches!(self, Self::HalfYellow | Self::HalfGreen)
    }

    #[inline]
    #[must_use]
    pub const fn is_hit(self) -> bool {
        !matches!(self, Self::Gray)
    }

    /// Whether `mark`, scored against one of the secrets, could have produced `self`
    #[must_use]
    pub const fn admits(self, mark: LetterFeedback) -> bool {
        use LetterFeedback::{Gray, Green, Yellow};
        match self {
            Self::Gray => matches!(mark, Gray),
            Self::Green => matches!(mark, Green | Gray),
            Self::Yellow => matches!(mark, Yellow | Gray),
            Self::HalfGreen => matches!(mark, Green | Yellow),
            Self::HalfYellow => matches!(mark, Yellow),
        }
    }
}

/// Quantum feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuantumFeedback([QuantumLetterFeedback; WORD_LEN]);

impl QuantumFeedback {
    #[inline]
    #[must_use]
    pub const fn new(marks: [QuantumLetterFeedback; WORD_LEN]) -> Self {
        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[QuantumLetterFeedback; WORD_LEN] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, position: usize) -> QuantumLetterFeedback {
        self.0[position]
    }

    /// Calculate feedback of `guess` against both secrets
    ///
    /// # Examples
    /// ```
    /// use wordle_genius::core::{QuantumFeedback, QuantumLetterFeedback, Word};
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let first = Word::new("stare").unwrap();
    /// let second = Word::new("crane").unwrap();
    /// let feedback = QuantumFeedback::calculate(&guess, &first, &second);
    /// assert_eq!(feedback.get(2), QuantumLetterFeedback::HalfGreen);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, first: &Word, second: &Word) -> Self {
        let a = Feedback::calculate(guess, first);
        let b = Feedback::calculate(guess, second);

        let mut result = [QuantumLetterFeedback::Gray; WORD_LEN];
        for (i, mark) in result.iter_mut().enumerate() {
            *mark = QuantumLetterFeedback::combine(a.get(i), b.get(i));
        }
        Self(result)
    }

    /// Whether `candidate` could be one of the two secrets behind this feedback
    ///
    /// Each plain mark holds for only one secret, so a candidate must agree
    /// with the mark or be gray there; it never has to satisfy both.
    #[must_use]
    pub fn admits(&self, guess: &Word, candidate: &Word) -> bool {
        let own = Feedback::calculate(guess, candidate);
        self.0
            .iter()
            .zip(own.marks())
            .all(|(quantum, &mark)| quantum.admits(mark))
    }

    #[must_use]
    pub fn count_half(&self) -> usize {
        self.0.iter().filter(|m| m.is_half()).count()
    }

    /// Convert to a compact string: G/Y full, g/y half, - gray
    #[must_use]
    pub fn to_code(&self) -> String {
        self.0
            .iter()
            .map(|m| match m {
                QuantumLetterFeedback::Green => 'G',
                QuantumLetterFeedback::HalfGreen => 'g',
                QuantumLetterFeedback::Yellow => 'Y',
                QuantumLetterFeedback::HalfYellow => 'y',
                QuantumLetterFeedback::Gray => '-',
            })
            .collect()
    }
}

impl std::fmt::Display for QuantumFeedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use QuantumLetterFeedback::{Gray, Green, HalfGreen, HalfYellow, Yellow};

    fn calc(guess: &str, first: &str, second: &str) -> QuantumFeedback {
        QuantumFeedback::calculate(
            &Word::new(guess).unwrap(),
            &Word::new(first).unwrap(),
            &Word::new(second).unwrap(),
        )
    }

    #[test]
    fn hits_under_both_secrets_become_half() {
        // trace vs stare: Y Y G - G
        // trace vs crane: - G G Y G
        let feedback = calc("trace", "stare", "crane");
        assert_eq!(
            feedback.marks(),
            &[Yellow, HalfGreen, HalfGreen, Yellow, HalfGreen]
        );
        assert_eq!(feedback.count_half(), 3);
        assert_eq!(feedback.to_code(), "YggYg");
    }

    #[test]
    fn no_position_hit_by_both_is_plain() {
        let guess = Word::new("trace").unwrap();
        let first = Word::new("stare").unwrap();
        let second = Word::new("crane").unwrap();
        let feedback = QuantumFeedback::calculate(&guess, &first, &second);
        let a = Feedback::calculate(&guess, &first);
        let b = Feedback::calculate(&guess, &second);

        for i in 0..WORD_LEN {
            if a.get(i).is_hit() && b.get(i).is_hit() {
                assert!(feedback.get(i).is_half());
            }
        }
    }

    #[test]
    fn disjoint_secrets_never_produce_half_marks() {
        let feedback = calc("crane", "pilot", "crane");
        assert_eq!(feedback.marks(), &[Green; WORD_LEN]);

        let feedback = calc("plank", "pilot", "crane");
        assert_eq!(feedback.marks(), &[Green, Yellow, Green, Green, Gray]);
    }

    #[test]
    fn both_secrets_are_admitted() {
        let guess = Word::new("clout").unwrap();
        let crane = Word::new("crane").unwrap();
        let pilot = Word::new("pilot").unwrap();
        let feedback = QuantumFeedback::calculate(&guess, &crane, &pilot);
        assert_eq!(feedback.to_code(), "GYY-G");

        assert!(feedback.admits(&guess, &crane));
        assert!(feedback.admits(&guess, &pilot));
        // a plain mark allows gray in its place, never a different hit
        assert!(feedback.admits(&guess, &Word::new("caret").unwrap()));
        assert!(!feedback.admits(&guess, &Word::new("lotus").unwrap()));
        assert!(!feedback.admits(&guess, &Word::new("octal").unwrap()));
    }

    #[test]
    fn half_yellow_admits_only_yellow() {
        assert!(HalfYellow.admits(LetterFeedback::Yellow));
        assert!(!HalfYellow.admits(LetterFeedback::Green));
        assert!(!HalfGreen.admits(LetterFeedback::Gray));
        assert!(Green.admits(LetterFeedback::Gray));
        assert!(!Gray.admits(LetterFeedback::Yellow));
    }

    #[test]
    fn combine_table() {
        use LetterFeedback as L;
        assert_eq!(QuantumLetterFeedback::combine(L::Gray, L::Gray), Gray);
        assert_eq!(QuantumLetterFeedback::combine(L::Yellow, L::Yellow), HalfYellow);
        assert_eq!(QuantumLetterFeedback::combine(L::Yellow, L::Green), HalfGreen);
        assert_eq!(QuantumLetterFeedback::combine(L::Gray, L::Yellow), Yellow);
        assert_eq!(QuantumLetterFeedback::combine(L::Green, L::Gray), Green);
    }
}
