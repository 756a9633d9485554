//! Word-frequency vocabulary extraction.
//!
//! This is the core of Glossa. Raw tokens flow through three stages:
//!
//! ```text
//! raw tokens ──normalize──▶ words ──count──▶ FrequencyTable ──filter──▶ Vocabulary
//! ```
//!
//! - [`normalize`] keeps purely alphabetic tokens and lowercases them
//! - [`count`] builds an order-preserving [`FrequencyTable`]
//! - [`filter`] keeps the words whose count reaches a [`MinFrequency`]
//!
//! Every stage is a pure function. The vocabulary keeps the order in which
//! words first occurred in the text; it is not sorted.
//!
//! # Examples
//!
//! ```
//! use glossa::vocabulary::{extract_vocabulary, MinFrequency};
//!
//! let tokens = ["The", "cat", "sat", "on", "the", "mat", "The", "cat", "ran"];
//! let vocabulary = extract_vocabulary(tokens, MinFrequency::new(2).unwrap());
//!
//! assert_eq!(vocabulary.words().collect::<Vec<_>>(), vec!["the", "cat"]);
//! ```

mod frequency;
mod list;
mod normalize;
mod threshold;

pub use frequency::FrequencyTable;
pub use list::{Vocabulary, VocabularyEntry};
pub use normalize::{is_alphabetic_word, normalize, normalize_token};
pub use threshold::MinFrequency;

use log::debug;
use serde::Serialize;

/// Count the occurrences of each word.
pub fn count<I, S>(words: I) -> FrequencyTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words.into_iter().collect()
}

/// Keep the words of `table` whose count is at least `min_frequency`.
///
/// An empty result is not an error.
pub fn filter(table: &FrequencyTable, min_frequency: MinFrequency) -> Vocabulary {
    let mut vocabulary = Vocabulary::new();
    for (word, count) in table.iter() {
        if min_frequency.admits(count) {
            vocabulary.push(word, count);
        }
    }
    vocabulary
}

/// Run the whole pipeline: `filter(count(normalize(tokens)), min_frequency)`.
pub fn extract_vocabulary<I, S>(tokens: I, min_frequency: MinFrequency) -> Vocabulary
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    filter(&count(normalize(tokens)), min_frequency)
}

/// Counters describing one extraction run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    /// Tokens produced by the tokenizer
    pub raw_tokens: usize,
    /// Tokens that survived normalization
    pub normalized_words: usize,
    /// Distinct normalized words
    pub distinct_words: usize,
    /// Words that met the threshold
    pub exported_words: usize,
}

/// Vocabulary extraction with a fixed threshold.
#[derive(Clone, Copy, Debug, Default)]
pub struct VocabularyExtractor {
    min_frequency: MinFrequency,
}

impl VocabularyExtractor {
    /// Create an extractor for the given threshold.
    pub fn new(min_frequency: MinFrequency) -> Self {
        VocabularyExtractor { min_frequency }
    }

    /// Get the threshold.
    pub fn min_frequency(&self) -> MinFrequency {
        self.min_frequency
    }

    /// Extract the vocabulary from a token sequence.
    pub fn extract<I, S>(&self, tokens: I) -> Vocabulary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        extract_vocabulary(tokens, self.min_frequency)
    }

    /// Extract the vocabulary and report counters for each stage.
    pub fn extract_with_stats<I, S>(&self, tokens: I) -> (Vocabulary, ExtractionStats)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut raw_tokens = 0;
        let words = normalize(tokens.into_iter().inspect(|_| raw_tokens += 1));
        let table = count(&words);
        let vocabulary = filter(&table, self.min_frequency);

        let stats = ExtractionStats {
            raw_tokens,
            normalized_words: words.len(),
            distinct_words: table.len(),
            exported_words: vocabulary.len(),
        };
        debug!(
            "{} raw tokens, {} words, {} distinct, {} at frequency >= {}",
            stats.raw_tokens,
            stats.normalized_words,
            stats.distinct_words,
            stats.exported_words,
            self.min_frequency
        );

        (vocabulary, stats)
    }
}
