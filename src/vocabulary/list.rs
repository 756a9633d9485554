//! The filtered vocabulary.

use serde::Serialize;

/// A word that met the frequency threshold, with its count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VocabularyEntry {
    pub word: String,
    pub count: u64,
}

/// Words that met the frequency threshold, in first-occurrence order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Vocabulary {
    entries: Vec<VocabularyEntry>,
}

impl Vocabulary {
    /// Create a new empty vocabulary.
    pub fn new() -> Self {
        Vocabulary {
            entries: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, word: &str, count: u64) {
        self.entries.push(VocabularyEntry {
            word: word.to_string(),
            count,
        });
    }

    /// Get the number of words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if a word is part of the vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.iter().any(|entry| entry.word == word)
    }

    /// Iterate over entries in output order.
    pub fn iter(&self) -> impl Iterator<Item = &VocabularyEntry> {
        self.entries.iter()
    }

    /// Iterate over words in output order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.word.as_str())
    }

    /// Consume the vocabulary, returning its words in output order.
    pub fn into_words(self) -> Vec<String> {
        self.entries.into_iter().map(|entry| entry.word).collect()
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a VocabularyEntry;
    type IntoIter = std::slice::Iter<'a, VocabularyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
