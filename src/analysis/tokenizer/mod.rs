//! Tokenizer implementations for text analysis.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analysis::token::TokenStream;
use crate::error::{GlossaError, Result};

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod whitespace;
pub mod word;

pub use whitespace::WhitespaceTokenizer;
pub use word::WordTokenizer;

/// Selects one of the built-in tokenizers by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    /// Unicode word boundaries with contraction splitting
    #[default]
    Word,
    /// Split on whitespace only
    Whitespace,
}

impl TokenizerKind {
    /// Build the tokenizer this kind names, running any one-time setup it
    /// needs.
    pub fn build(self) -> Box<dyn Tokenizer> {
        match self {
            TokenizerKind::Word => {
                WordTokenizer::warm_up();
                Box::new(WordTokenizer::new())
            }
            TokenizerKind::Whitespace => Box::new(WhitespaceTokenizer::new()),
        }
    }

    /// The configuration name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenizerKind::Word => "word",
            TokenizerKind::Whitespace => "whitespace",
        }
    }
}

impl fmt::Display for TokenizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenizerKind {
    type Err = GlossaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "word" => Ok(TokenizerKind::Word),
            "whitespace" => Ok(TokenizerKind::Whitespace),
            other => Err(GlossaError::invalid_config(format!(
                "unknown tokenizer '{other}' (expected 'word' or 'whitespace')"
            ))),
        }
    }
}
