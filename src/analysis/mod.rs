//! Text analysis module for Glossa.
//!
//! This module turns document text into raw tokens. It stops at
//! segmentation: filtering and case folding are done by
//! [`crate::vocabulary`].

pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use token::*;
pub use tokenizer::*;
