//! Token types produced by the tokenizers.
//!
//! A [`Token`] is a raw slice of source text with its position in the token
//! stream and its byte offsets. Tokens are not normalized here; case folding
//! and the alphabetic-only rule belong to the vocabulary pipeline.
//!
//! # Examples
//!
//! ```
//! use glossa::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("World", 1, 6, 11).with_token_type(TokenType::Word);
//! assert_eq!(token.text, "World");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.token_type, TokenType::Word);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::vocabulary::is_alphabetic_word;

/// A token represents a single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Coarse classification of the token content
    pub token_type: TokenType,
}

/// Token type classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Letters only
    Word,
    /// Numeric values
    Num,
    /// Letters mixed with digits or joiners ("mp3", "well-known")
    Alphanum,
    /// Punctuation marks
    Punctuation,
    /// Contraction suffix split off a word ("n't", "'s")
    Clitic,
    /// Other/unknown token types
    #[default]
    Other,
}

impl TokenType {
    /// Classify a segment of text.
    pub fn detect(text: &str) -> TokenType {
        if text.is_empty() {
            return TokenType::Other;
        }

        if is_alphabetic_word(text) {
            return TokenType::Word;
        }

        if text.chars().all(char::is_numeric) {
            return TokenType::Num;
        }

        if text.chars().any(char::is_alphanumeric) {
            return TokenType::Alphanum;
        }

        TokenType::Punctuation
    }
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        let token_type = TokenType::detect(&text);
        Token {
            text,
            position,
            start_offset: 0,
            end_offset: 0,
            token_type,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            start_offset,
            end_offset,
            ..Token::new(text, position)
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Override the detected token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from a tokenizer.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}
