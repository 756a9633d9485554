//! Vocabulary export to plain-text files.
//!
//! The output is UTF-8, one word per line, every line terminated by `\n`,
//! with no header. The file is written next to its destination under a
//! temporary name and renamed into place, so an interrupted export never
//! leaves a partial file behind.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{GlossaError, Result};

/// Default output path for an input file: same path, `.txt` extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use glossa::export::default_output_path;
///
/// assert_eq!(
///     default_output_path(Path::new("books/tmora.epub")),
///     Path::new("books/tmora.txt")
/// );
/// ```
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("txt")
}

fn staging_path(path: &Path) -> Result<PathBuf> {
    let name = path
        .file_name()
        .ok_or_else(|| GlossaError::input(format!("{} is not a file path", path.display())))?;
    let mut staging = name.to_os_string();
    staging.push(".part");
    Ok(path.with_file_name(staging))
}

fn write_lines<I, S>(path: &Path, words: I) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    let mut written = 0;
    for word in words {
        writer.write_all(word.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

/// Write words to `path`, one per line. Returns the number of lines written.
pub fn export_vocabulary<I, S>(words: I, path: &Path) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let staging = staging_path(path)?;

    let written = match write_lines(&staging, words) {
        Ok(written) => written,
        Err(err) => {
            let _ = fs::remove_file(&staging);
            return Err(err);
        }
    };
    if let Err(err) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(err.into());
    }

    debug!("wrote {written} words to {}", path.display());
    Ok(written)
}
