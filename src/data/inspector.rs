// ============================================================
// Layer 4: Column Inspector
// ============================================================
// Peeks at the first lines of an extracted column file,
// e.g. testquestions.csv. Purely diagnostic.

use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// File peeked at when no other is given
pub const DEFAULT_INSPECT_FILE: &str = "testquestions.csv";

/// Number of lines peeked at when no other count is given
pub const DEFAULT_INSPECT_LINES: usize = 5;

/// First `count` lines of a text file, without line terminators.
/// Stops reading as soon as enough lines were seen.
pub fn head_lines(path: &Path, count: usize) -> Result<Vec<String>> {
    let file = File::open(path)
        .with_context(|| format!("Cannot open '{}'", path.display()))?;

    BufReader::new(file)
        .lines()
        .take(count)
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Cannot read '{}' as UTF-8 text", path.display()))
}
