//! Word tokenizer implementation.
//!
//! This module provides the default tokenizer. It splits text using Unicode
//! word boundary rules (UAX #29) and then separates English contraction
//! suffixes from their stems the way Penn Treebank tokenization does, so
//! `"don't"` becomes `"do"` and `"n't"`.
//!
//! Unlike a search-oriented tokenizer, punctuation and numbers are kept as
//! tokens. Deciding which tokens count as words is the vocabulary pipeline's
//! job.
//!
//! # Examples
//!
//! ```
//! use glossa::analysis::tokenizer::Tokenizer;
//! use glossa::analysis::tokenizer::word::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new();
//! let tokens: Vec<_> = tokenizer
//!     .tokenize("Don't panic, world!")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(tokens, vec!["Do", "n't", "panic", ",", "world", "!"]);
//! ```

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

lazy_static! {
    /// Contraction rules, compiled once per process on first use.
    static ref CLITIC_PATTERN: Regex = {
        debug!("compiling contraction rules");
        Regex::new(r"(?i)^(?P<stem>\w+?)(?P<clitic>n['’]t|['’](?:s|re|ve|ll|d|m))$")
            .expect("contraction pattern should be valid")
    };
}

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Whitespace segments are dropped. Every other segment becomes a token,
/// including punctuation marks and numbers. Word segments that end in an
/// English clitic (`n't`, `'s`, `'re`, `'ve`, `'ll`, `'d`, `'m`, with a
/// straight or curly apostrophe) are split in two.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    split_contractions: bool,
}

impl WordTokenizer {
    /// Create a new word tokenizer with contraction splitting enabled.
    pub fn new() -> Self {
        WordTokenizer {
            split_contractions: true,
        }
    }

    /// Enable or disable contraction splitting.
    pub fn with_contraction_splitting(mut self, enabled: bool) -> Self {
        self.split_contractions = enabled;
        self
    }

    /// Initialize the process-wide contraction rules.
    ///
    /// Tokenizing initializes them on demand; calling this first only moves
    /// the cost up front. Repeated calls are no-ops.
    pub fn warm_up() {
        lazy_static::initialize(&CLITIC_PATTERN);
    }

    fn push_segment(&self, tokens: &mut Vec<Token>, segment: &str, offset: usize) {
        if self.split_contractions {
            if let Some(caps) = CLITIC_PATTERN.captures(segment) {
                if let (Some(stem), Some(clitic)) = (caps.name("stem"), caps.name("clitic")) {
                    tokens.push(Token::with_offsets(
                        stem.as_str(),
                        tokens.len(),
                        offset + stem.start(),
                        offset + stem.end(),
                    ));
                    tokens.push(
                        Token::with_offsets(
                            clitic.as_str(),
                            tokens.len(),
                            offset + clitic.start(),
                            offset + clitic.end(),
                        )
                        .with_token_type(TokenType::Clitic),
                    );
                    return;
                }
            }
        }

        tokens.push(Token::with_offsets(
            segment,
            tokens.len(),
            offset,
            offset + segment.len(),
        ));
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();

        for (offset, segment) in text.split_word_bound_indices() {
            if segment.chars().all(char::is_whitespace) {
                continue;
            }
            self.push_segment(&mut tokens, segment, offset);
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}
