//! Token normalization.
//!
//! A raw token becomes a word only if it is non-empty and made of letters
//! alone, letters being the Unicode general category `L` (`Lu`, `Ll`, `Lt`,
//! `Lm`, `Lo`). Letter-like numbers (`Ⅻ`), circled letters (`ⓐ`) and
//! combining marks do not qualify. Such tokens are lowercased with full Unicode case
//! mapping; everything else (numbers, punctuation, `"world!"`, `"mp3"`,
//! contraction suffixes like `"n't"`) is dropped.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LETTERS: Regex = Regex::new(r"^\p{L}+$").expect("letter pattern should be valid");
}

/// Check whether a token consists entirely of letters.
///
/// The empty string is not a word.
///
/// # Examples
///
/// ```
/// use glossa::vocabulary::is_alphabetic_word;
///
/// assert!(is_alphabetic_word("Straße"));
/// assert!(!is_alphabetic_word("world!"));
/// assert!(!is_alphabetic_word("123"));
/// assert!(!is_alphabetic_word(""));
/// assert!(!is_alphabetic_word("Ⅻ"));
/// ```
pub fn is_alphabetic_word(token: &str) -> bool {
    LETTERS.is_match(token)
}

/// Normalize a single token, or `None` if it is not a word.
pub fn normalize_token(token: &str) -> Option<String> {
    is_alphabetic_word(token).then(|| token.to_lowercase())
}

/// Normalize a token sequence, keeping the order of the surviving words.
///
/// # Examples
///
/// ```
/// use glossa::vocabulary::normalize;
///
/// let words = normalize(["Hello", "123", "world!", "HELLO"]);
/// assert_eq!(words, vec!["hello", "hello"]);
/// ```
pub fn normalize<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .filter_map(|token| normalize_token(token.as_ref()))
        .collect()
}
