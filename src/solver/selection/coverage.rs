//! Letter-coverage scoring
//!
//! A letter's coverage is the number of pool words containing it at least
//! once. A word scores the sum of the coverage of its distinct letters, so
//! words built from common, non-repeated letters rank first.

use crate::core::Word;

/// Number of words in `words` containing each letter, indexed `a..=z`
#[must_use]
pub fn letter_coverage(words: &[&Word]) -> [usize; 26] {
    let mut coverage = [0usize; 26];
    for word in words {
        let mut seen = [false; 26];
        for &letter in word.chars() {
            let slot = (letter - b'a') as usize;
            if !seen[slot] {
                seen[slot] = true;
                coverage[slot] += 1;
            }
        }
    }
    coverage
}

/// Score of `word` against a precomputed coverage table
#[must_use]
pub fn coverage_score(word: &Word, coverage: &[usize; 26]) -> usize {
    let mut seen = [false; 26];
    let mut score = 0;
    for &letter in word.chars() {
        let slot = (letter - b'a') as usize;
        if !seen[slot] {
            seen[slot] = true;
            score += coverage[slot];
        }
    }
    score
}

/// Highest-scoring word, computed fresh from `words` itself
///
/// Ties keep the earliest word, so a canonically ordered pool gives a
/// reproducible choice. Returns `None` for an empty pool.
#[must_use]
pub fn best_by_coverage<'a>(words: &[&'a Word]) -> Option<&'a Word> {
    let coverage = letter_coverage(words);
    let mut best: Option<(&'a Word, usize)> = None;
    for &word in words {
        let score = coverage_score(word, &coverage);
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((word, score));
        }
    }
    best.map(|(word, _)| word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn coverage_counts_words_not_occurrences() {
        let pool = words(&["sassy", "grass", "pilot"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let coverage = letter_coverage(&refs);

        assert_eq!(coverage[(b's' - b'a') as usize], 2);
        assert_eq!(coverage[(b'a' - b'a') as usize], 2);
        assert_eq!(coverage[(b'p' - b'a') as usize], 1);
        assert_eq!(coverage[(b'z' - b'a') as usize], 0);
    }

    #[test]
    fn repeated_letters_score_once() {
        let pool = words(&["sassy", "grass"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let coverage = letter_coverage(&refs);

        // s(2) + a(2) + y(1)
        assert_eq!(coverage_score(&pool[0], &coverage), 5);
        // g(1) + r(1) + a(2) + s(2)
        assert_eq!(coverage_score(&pool[1], &coverage), 6);
    }

    #[test]
    fn best_word_prefers_shared_letters() {
        let pool = words(&["crane", "trace", "pilot", "crate"]);
        let refs: Vec<&Word> = pool.iter().collect();
        // pilot shares only t with the rest of the pool
        let best = best_by_coverage(&refs).unwrap();
        assert_ne!(best.text(), "pilot");
    }

    #[test]
    fn ties_go_to_the_first_word() {
        let pool = words(&["abcde", "edcba", "fghij"]);
        let refs: Vec<&Word> = pool.iter().collect();
        assert_eq!(best_by_coverage(&refs).unwrap().text(), "abcde");

        let reversed: Vec<&Word> = refs.iter().rev().copied().collect();
        assert_eq!(best_by_coverage(&reversed).unwrap().text(), "edcba");
    }

    #[test]
    fn empty_pool_has_no_best() {
        assert!(best_by_coverage(&[]).is_none());
    }
}
