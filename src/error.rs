//! Error types for the Glossa library.
//!
//! All errors are represented by the [`GlossaError`] enum. The vocabulary
//! pipeline itself never fails; errors come from the boundaries around it
//! (command-line input, configuration, reading the EPUB container, writing
//! the output file).
//!
//! # Examples
//!
//! ```
//! use glossa::error::{GlossaError, Result};
//!
//! fn check_extension(name: &str) -> Result<()> {
//!     if !name.ends_with(".epub") {
//!         return Err(GlossaError::input(format!("not an EPUB file: {name}")));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_extension("book.mobi").is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Glossa operations.
#[derive(Error, Debug)]
pub enum GlossaError {
    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid user input (missing file, wrong extension)
    #[error("Input error: {0}")]
    Input(String),

    /// The book yielded no tokens
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Invalid configuration (threshold, config file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Structurally invalid EPUB container
    #[error("EPUB error: {0}")]
    Epub(String),

    /// ZIP archive errors
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// XML parsing errors (container, package, content documents)
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with GlossaError.
pub type Result<T> = std::result::Result<T, GlossaError>;

impl From<quick_xml::events::attributes::AttrError> for GlossaError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        GlossaError::Xml(quick_xml::Error::from(err))
    }
}

impl GlossaError {
    /// Create a new input error.
    pub fn input<S: Into<String>>(msg: S) -> Self {
        GlossaError::Input(msg.into())
    }

    /// Create a new extraction error.
    pub fn extraction<S: Into<String>>(msg: S) -> Self {
        GlossaError::Extraction(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        GlossaError::Config(msg.into())
    }

    /// Create a new EPUB structure error.
    pub fn epub<S: Into<String>>(msg: S) -> Self {
        GlossaError::Epub(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        GlossaError::Input(format!("Not found: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        GlossaError::Other(msg.into())
    }
}
