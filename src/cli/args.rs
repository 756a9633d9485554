//! Command line argument parsing for Glossa CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::TokenizerKind;

/// Glossa - extract the recurring vocabulary of an EPUB book
#[derive(Parser, Debug, Clone)]
#[command(name = "glossa")]
#[command(about = "Extract a frequency-filtered vocabulary list from an EPUB book")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Glossa Contributors")]
#[command(long_about = None)]
pub struct GlossaArgs {
    /// EPUB file to read
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Minimum number of occurrences for a word to be exported [default: 3]
    #[arg(
        short = 'm',
        long,
        env = "GLOSSA_MIN_FREQUENCY",
        allow_negative_numbers = true
    )]
    pub min_frequency: Option<i64>,

    /// Output file (.txt) [default: INPUT with a .txt extension]
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Tokenizer to split text with (word, whitespace)
    #[arg(long)]
    pub tokenizer: Option<TokenizerKind>,

    /// Tokenize the raw XHTML markup instead of the extracted text
    #[arg(long)]
    pub raw_markup: bool,

    /// Count the EPUB 3 navigation document (table of contents) as content
    #[arg(long)]
    pub include_navigation: bool,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Summary output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl GlossaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output formats for the run summary
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_minimal_invocation() {
        let args = GlossaArgs::try_parse_from(["glossa", "book.epub"]).unwrap();

        assert_eq!(args.input, PathBuf::from("book.epub"));
        assert_eq!(args.output, None);
        assert_eq!(args.tokenizer, None);
        assert!(!args.raw_markup);
        assert!(!args.include_navigation);
        assert_eq!(args.output_format, OutputFormat::Human);
        assert_eq!(args.verbosity(), 1);
    }

    #[test]
    fn test_all_options() {
        let args = GlossaArgs::try_parse_from([
            "glossa",
            "book.epub",
            "-m",
            "5",
            "-o",
            "words.txt",
            "--config",
            "glossa.json",
            "--tokenizer",
            "whitespace",
            "--raw-markup",
            "--include-navigation",
            "--format",
            "json",
            "--pretty",
            "-vv",
        ])
        .unwrap();

        assert_eq!(args.min_frequency, Some(5));
        assert_eq!(args.output, Some(PathBuf::from("words.txt")));
        assert_eq!(args.config, Some(PathBuf::from("glossa.json")));
        assert_eq!(args.tokenizer, Some(TokenizerKind::Whitespace));
        assert!(args.raw_markup);
        assert!(args.include_navigation);
        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
        assert_eq!(args.verbosity(), 2);
    }

    #[test]
    fn test_negative_min_frequency_parses() {
        let args = GlossaArgs::try_parse_from(["glossa", "book.epub", "-m", "-1"]).unwrap();
        assert_eq!(args.min_frequency, Some(-1));
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = GlossaArgs::try_parse_from(["glossa", "book.epub", "-vvv", "-q"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_unknown_tokenizer_is_rejected() {
        assert!(GlossaArgs::try_parse_from(["glossa", "book.epub", "--tokenizer", "nltk"]).is_err());
    }

    #[test]
    fn test_input_is_required() {
        assert!(GlossaArgs::try_parse_from(["glossa"]).is_err());
    }
}
