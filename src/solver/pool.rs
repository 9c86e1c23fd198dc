//! Candidate pool: the answers still consistent with every observation

use crate::core::Word;

/// Set of words that could still be the solution
///
/// Stored sorted and de-duplicated so membership is a binary search and
/// iteration order is canonical. Pools are never mutated in place; filtering
/// produces a new pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePool {
    words: Vec<Word>,
}

impl CandidatePool {
    /// Build a pool from any collection of words
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut words: Vec<Word> = words.into_iter().collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    /// Wrap words already known to be sorted and unique
    pub(crate) fn from_sorted(words: Vec<Word>) -> Self {
        debug_assert!(words.windows(2).all(|w| w[0] < w[1]));
        Self { words }
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
        self.words.binary_search(word).is_ok()
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// The only remaining word, if exactly one is left
    #[must_use]
    pub fn single(&self) -> Option<&Word> {
        match self.words.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}

impl<'a> IntoIterator for &'a CandidatePool {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(words: &[&str]) -> CandidatePool {
        CandidatePool::new(words.iter().map(|w| Word::new(w).unwrap()))
    }

    #[test]
    fn pool_sorts_and_dedups() {
        let p = pool(&["trace", "crane", "slate", "crane"]);
        assert_eq!(p.len(), 3);
        let text: Vec<String> = p.iter().map(ToString::to_string).collect();
        assert_eq!(text, ["crane", "slate", "trace"]);
    }

    #[test]
    fn pool_contains() {
        let p = pool(&["crane", "slate"]);
        assert!(p.contains(&Word::new("slate").unwrap()));
        assert!(!p.contains(&Word::new("trace").unwrap()));
    }

    #[test]
    fn pool_single() {
        assert_eq!(
            pool(&["slate"]).single(),
            Some(&Word::new("slate").unwrap())
        );
        assert_eq!(pool(&["crane", "slate"]).single(), None);
        assert_eq!(CandidatePool::default().single(), None);
        assert!(CandidatePool::default().is_empty());
    }
}
