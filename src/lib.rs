//! # Glossa
//!
//! Extract the recurring vocabulary of an EPUB book.
//!
//! The book's content documents are tokenized, purely alphabetic tokens are
//! lowercased and counted, and every word that occurs at least a minimum
//! number of times is written to a text file, one per line, in order of
//! first occurrence.
//!
//! ## Modules
//!
//! - [`epub`] - EPUB container, package and content document reading
//! - [`analysis`] - Tokenizers
//! - [`vocabulary`] - Normalize, count and threshold-filter words
//! - [`export`] - Plain-text vocabulary output
//! - [`config`] - Extraction settings
//! - [`cli`] - Command line interface
//!
//! ## Example
//!
//! ```
//! use glossa::analysis::tokenizer::{Tokenizer, WordTokenizer};
//! use glossa::vocabulary::{extract_vocabulary, MinFrequency};
//!
//! let tokens: Vec<String> = WordTokenizer::new()
//!     .tokenize("The cat sat. The cat ran. The end!")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! let vocabulary = extract_vocabulary(&tokens, MinFrequency::new(2).unwrap());
//! assert_eq!(vocabulary.words().collect::<Vec<_>>(), vec!["the", "cat"]);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod epub;
pub mod error;
pub mod export;
pub mod vocabulary;

pub mod prelude {
    pub use crate::analysis::tokenizer::{Tokenizer, TokenizerKind};
    pub use crate::config::ExtractionConfig;
    pub use crate::epub::{EpubBook, MarkupMode};
    pub use crate::error::{GlossaError, Result};
    pub use crate::vocabulary::{MinFrequency, Vocabulary, extract_vocabulary};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
