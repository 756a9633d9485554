//! Order-preserving word frequency table.

use ahash::AHashMap;

/// A mapping from word to occurrence count.
///
/// Iteration yields words in the order they were first recorded. Lookups go
/// through a hash index over the entry vector.
///
/// # Examples
///
/// ```
/// use glossa::vocabulary::FrequencyTable;
///
/// let table: FrequencyTable = ["b", "a", "b"].into_iter().collect();
/// let entries: Vec<_> = table.iter().collect();
/// assert_eq!(entries, vec![("b", 2), ("a", 1)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable {
    /// Word to position in `entries`.
    index: AHashMap<String, usize>,
    /// Words and counts in first-occurrence order.
    entries: Vec<(String, u64)>,
}

impl FrequencyTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        FrequencyTable {
            index: AHashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Create with initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        FrequencyTable {
            index: AHashMap::with_capacity(capacity),
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Record one occurrence of a word.
    pub fn record(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), 1));
            }
        }
    }

    /// Get the count of a word, or `None` if it was never recorded.
    pub fn get(&self, word: &str) -> Option<u64> {
        self.index.get(word).map(|&slot| self.entries[slot].1)
    }

    /// Check if a word was recorded.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Get the number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Iterate over words and counts in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
    }

    /// Iterate over words in first-occurrence order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(word, _)| word.as_str())
    }
}

impl<S: AsRef<str>> Extend<S> for FrequencyTable {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.record(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        table.extend(iter);
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_get() {
        let mut table = FrequencyTable::new();
        table.record("cat");
        table.record("dog");
        table.record("cat");

        assert_eq!(table.get("cat"), Some(2));
        assert_eq!(table.get("dog"), Some(1));
        assert_eq!(table.get("bird"), None);
        assert!(table.contains("dog"));
        assert_eq!(table.len(), 2);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn test_first_occurrence_order() {
        let table: FrequencyTable = ["zeta", "alpha", "mid", "alpha", "zeta", "zeta"]
            .into_iter()
            .collect();

        let words: Vec<&str> = table.words().collect();
        assert_eq!(words, vec!["zeta", "alpha", "mid"]);
        assert_eq!(table.get("zeta"), Some(3));
    }

    #[test]
    fn test_extend_continues_counting() {
        let mut table: FrequencyTable = vec!["a".to_string()].into_iter().collect();
        table.extend(vec!["b", "a"]);

        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries, vec![("a", 2), ("b", 1)]);
    }

    #[test]
    fn test_empty_table() {
        let table = FrequencyTable::with_capacity(16);
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert_eq!(table.iter().count(), 0);
    }
}
