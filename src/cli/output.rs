//! Output formatting for the run summary.

use serde::{Deserialize, Serialize};

use crate::cli::args::{GlossaArgs, OutputFormat};
use crate::error::Result;
use crate::vocabulary::ExtractionStats;

/// Result structure for one extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionSummary {
    pub input: String,
    pub output: String,
    pub title: Option<String>,
    pub min_frequency: u64,
    pub tokenizer: String,
    pub raw_tokens: usize,
    pub normalized_words: usize,
    pub distinct_words: usize,
    pub exported_words: usize,
    pub duration_ms: u64,
}

impl ExtractionSummary {
    /// Get the pipeline counters of this run.
    pub fn stats(&self) -> ExtractionStats {
        ExtractionStats {
            raw_tokens: self.raw_tokens,
            normalized_words: self.normalized_words,
            distinct_words: self.distinct_words,
            exported_words: self.exported_words,
        }
    }
}

/// Output a result in the specified format.
pub fn output_result(summary: &ExtractionSummary, args: &GlossaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            print!("{}", format_human(summary, args.verbosity()));
            Ok(())
        }
        OutputFormat::Json => output_json(summary, args),
    }
}

/// Render the summary for a terminal.
///
/// Quiet mode renders nothing; higher verbosity adds the intermediate
/// counters.
pub fn format_human(summary: &ExtractionSummary, verbosity: u8) -> String {
    let mut out = String::new();
    if verbosity == 0 {
        return out;
    }

    if verbosity > 1 {
        if let Some(title) = &summary.title {
            out.push_str(&format!("Book: {title}\n"));
        }
    }
    out.push_str(&format!("Total words in book: {}\n", summary.raw_tokens));
    if verbosity > 1 {
        out.push_str(&format!("Alphabetic words: {}\n", summary.normalized_words));
        out.push_str(&format!("Distinct words: {}\n", summary.distinct_words));
    }
    out.push_str(&format!(
        "Exported words (frequency >= {}): {}\n",
        summary.min_frequency, summary.exported_words
    ));
    out.push_str(&format!("Vocabulary written to: {}\n", summary.output));
    if verbosity > 1 {
        out.push_str(&format!("Duration: {} ms\n", summary.duration_ms));
    }
    out
}

/// Output in JSON format.
fn output_json(summary: &ExtractionSummary, args: &GlossaArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(summary)?
    } else {
        serde_json::to_string(summary)?
    };

    println!("{json}");
    Ok(())
}
