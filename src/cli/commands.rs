//! Command implementation for Glossa CLI.

use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{info, warn};

use crate::cli::args::GlossaArgs;
use crate::cli::output::{ExtractionSummary, output_result};
use crate::config::ExtractionConfig;
use crate::epub::{EpubBook, MarkupMode};
use crate::error::{GlossaError, Result};
use crate::export::{default_output_path, export_vocabulary};
use crate::vocabulary::VocabularyExtractor;

/// Execute the CLI command and print its summary.
pub fn execute_command(args: GlossaArgs) -> Result<()> {
    let summary = run(&args)?;
    output_result(&summary, &args)
}

/// Run one extraction without printing anything.
///
/// Every input and configuration check happens before the book is read, and
/// the output file is only created once a vocabulary has been computed.
pub fn run(args: &GlossaArgs) -> Result<ExtractionSummary> {
    let start_time = Instant::now();

    validate_input(&args.input)?;
    let output = resolve_output(args)?;
    let config = resolve_config(args)?;
    let min_frequency = config.min_frequency()?;

    let book = EpubBook::open(&args.input)?.with_navigation(config.include_navigation);
    let tokenizer = config.tokenizer.build();
    info!(
        "tokenizing {} with the {} tokenizer ({:?} markup)",
        args.input.display(),
        tokenizer.name(),
        config.markup
    );
    let tokens = book.tokens(&*tokenizer, config.markup)?;
    if tokens.is_empty() {
        return Err(GlossaError::extraction(format!(
            "no words could be extracted from {}",
            args.input.display()
        )));
    }

    let (vocabulary, stats) = VocabularyExtractor::new(min_frequency).extract_with_stats(&tokens);
    if vocabulary.is_empty() {
        warn!("no word occurs at least {min_frequency} times; the output file will be empty");
    }
    export_vocabulary(vocabulary.words(), &output)?;

    Ok(ExtractionSummary {
        input: args.input.display().to_string(),
        output: output.display().to_string(),
        title: book.title().map(str::to_string),
        min_frequency: min_frequency.get(),
        tokenizer: config.tokenizer.to_string(),
        raw_tokens: stats.raw_tokens,
        normalized_words: stats.normalized_words,
        distinct_words: stats.distinct_words,
        exported_words: stats.exported_words,
        duration_ms: start_time.elapsed().as_millis() as u64,
    })
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

/// Check that the input is an existing `.epub` file.
pub fn validate_input(input: &Path) -> Result<()> {
    if !has_extension(input, "epub") {
        return Err(GlossaError::input(format!(
            "{} is not an EPUB file (expected a .epub extension)",
            input.display()
        )));
    }
    if !input.is_file() {
        return Err(GlossaError::not_found(input.display().to_string()));
    }
    Ok(())
}

/// Determine the output path, checking its extension.
pub fn resolve_output(args: &GlossaArgs) -> Result<PathBuf> {
    match &args.output {
        Some(output) if !has_extension(output, "txt") => Err(GlossaError::input(format!(
            "output file {} must have a .txt extension",
            output.display()
        ))),
        Some(output) => Ok(output.clone()),
        None => Ok(default_output_path(&args.input)),
    }
}

/// Merge the configuration file and command-line flags.
///
/// The environment variable for the threshold is folded into
/// `args.min_frequency` by clap.
pub fn resolve_config(args: &GlossaArgs) -> Result<ExtractionConfig> {
    let mut config = match &args.config {
        Some(path) => ExtractionConfig::from_file(path)?,
        None => ExtractionConfig::default(),
    };

    if let Some(min_frequency) = args.min_frequency {
        config = config.with_min_frequency(min_frequency);
    }
    if let Some(tokenizer) = args.tokenizer {
        config = config.with_tokenizer(tokenizer);
    }
    if args.raw_markup {
        config = config.with_markup(MarkupMode::Raw);
    }
    if args.include_navigation {
        config = config.with_navigation(true);
    }

    config.validate()?;
    Ok(config)
}
