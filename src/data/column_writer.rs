// ============================================================
// Layer 4: Column Writer
// ============================================================
// Writes one column of a partition to its own plain text file:
// one value per line, no header, no quoting.
//
// File naming:
//   data/test.csv  + "questions"  →  data/testquestions.csv
//   data/test.csv  + "answers"    →  data/testanswers.csv

use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Suffix of the file holding the question column
pub const QUESTIONS_SUFFIX: &str = "questions";

/// Suffix of the file holding the answer column
pub const ANSWERS_SUFFIX: &str = "answers";

/// Output path for a column extracted from `input`: the input's
/// file stem with `suffix` appended, `.csv` extension, same directory.
pub fn column_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    input.with_file_name(format!("{stem}{suffix}.csv"))
}

/// Write `values` to `path`, each followed by a newline.
pub fn write_column(path: &Path, values: &[String]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Cannot create '{}'", path.display()))?;
    let mut out = BufWriter::new(file);

    for value in values {
        writeln!(out, "{value}")
            .with_context(|| format!("Cannot write to '{}'", path.display()))?;
    }

    out.flush()
        .with_context(|| format!("Cannot flush '{}'", path.display()))?;

    tracing::debug!("Wrote {} lines to '{}'", values.len(), path.display());
    Ok(())
}
