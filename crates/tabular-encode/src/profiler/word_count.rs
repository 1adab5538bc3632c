//! Ordered dictionary of categorical values.

use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;

/// Occurrence counts of distinct values, ordered lexicographically.
///
/// A value's slot is its rank among the distinct values, so two dictionaries
/// built over the same set of values agree on every slot regardless of the
/// order values were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCount {
    words: BTreeMap<String, usize>,
    count: usize,
}

impl WordCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `word`.
    pub fn add(&mut self, word: &str) {
        match self.words.get_mut(word) {
            Some(n) => *n += 1,
            None => {
                self.words.insert(word.to_string(), 1);
            }
        }
        self.count += 1;
    }

    /// Number of distinct values.
    pub fn diff(&self) -> usize {
        self.words.len()
    }

    /// Total occurrences across all values.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Occurrences of `word`, 0 if never added.
    pub fn count_of(&self, word: &str) -> usize {
        self.words.get(word).copied().unwrap_or(0)
    }

    /// Zero-based rank of `word` among the distinct values, `None` if absent.
    pub fn word_idx(&self, word: &str) -> Option<usize> {
        if !self.words.contains_key(word) {
            return None;
        }
        Some(
            self.words
                .range::<str, _>((Bound::Unbounded, Bound::Excluded(word)))
                .count(),
        )
    }

    /// Slot of every distinct value, for repeated lookups.
    ///
    /// `word_idx` walks the smaller keys on each call; encoders that look up
    /// every row should build this once instead.
    pub fn slots(&self) -> HashMap<&str, usize> {
        self.words
            .keys()
            .enumerate()
            .map(|(slot, word)| (word.as_str(), slot))
            .collect()
    }

    /// Distinct values in slot order with their counts.
    pub fn words(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.words.iter().map(|(w, n)| (w.as_str(), *n))
    }
}

impl<'a> FromIterator<&'a str> for WordCount {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut wc = WordCount::new();
        for word in iter {
            wc.add(word);
        }
        wc
    }
}
