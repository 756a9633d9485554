//! Extraction configuration.
//!
//! Settings come from four layers, later ones winning: built-in defaults, an
//! optional JSON file, environment variables and command-line flags. The
//! last two are handled by the CLI; this module owns the defaults and the
//! file format.
//!
//! # Examples
//!
//! ```
//! use glossa::config::ExtractionConfig;
//!
//! let config: ExtractionConfig = serde_json::from_str(r#"{ "min_frequency": 5 }"#).unwrap();
//! assert_eq!(config.min_frequency().unwrap().get(), 5);
//! assert_eq!(config.tokenizer.as_str(), "word");
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::TokenizerKind;
use crate::epub::MarkupMode;
use crate::error::{GlossaError, Result};
use crate::vocabulary::MinFrequency;

/// Settings for one vocabulary extraction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractionConfig {
    /// Minimum number of occurrences for a word to be exported.
    ///
    /// Kept signed so that zero and negative values from any source are
    /// reported as configuration errors by [`Self::min_frequency`].
    pub min_frequency: i64,

    /// Tokenizer used to split document text.
    pub tokenizer: TokenizerKind,

    /// Whether document markup is stripped before tokenizing.
    pub markup: MarkupMode,

    /// Whether the EPUB 3 navigation document is counted with the content.
    pub include_navigation: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        ExtractionConfig {
            min_frequency: MinFrequency::DEFAULT as i64,
            tokenizer: TokenizerKind::default(),
            markup: MarkupMode::default(),
            include_navigation: false,
        }
    }
}

impl ExtractionConfig {
    /// Load a configuration from a JSON file.
    ///
    /// Fields missing from the file keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading configuration from {}", path.display());

        let content = fs::read_to_string(path).map_err(|e| {
            GlossaError::invalid_config(format!("cannot read {}: {e}", path.display()))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            GlossaError::invalid_config(format!("invalid configuration {}: {e}", path.display()))
        })
    }

    /// Set the minimum frequency.
    pub fn with_min_frequency(mut self, min_frequency: i64) -> Self {
        self.min_frequency = min_frequency;
        self
    }

    /// Set the tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: TokenizerKind) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Set the markup mode.
    pub fn with_markup(mut self, markup: MarkupMode) -> Self {
        self.markup = markup;
        self
    }

    /// Set whether the navigation document is counted.
    pub fn with_navigation(mut self, include: bool) -> Self {
        self.include_navigation = include;
        self
    }

    /// The validated minimum frequency.
    pub fn min_frequency(&self) -> Result<MinFrequency> {
        MinFrequency::new(self.min_frequency)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        self.min_frequency().map(|_| ())
    }
}
