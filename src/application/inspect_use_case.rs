// ============================================================
// Layer 2: InspectUseCase
// ============================================================
// Diagnostic peek at an extracted column file. Not part of the
// split → extract pipeline.

use anyhow::Result;
use std::path::PathBuf;

use crate::data::inspector::head_lines;

pub struct InspectUseCase {
    file:  PathBuf,
    lines: usize,
}

impl InspectUseCase {
    pub fn new(file: impl Into<PathBuf>, lines: usize) -> Self {
        Self {
            file: file.into(),
            lines,
        }
    }

    /// Lines to be printed by the caller
    pub fn execute(&self) -> Result<Vec<String>> {
        tracing::debug!("Reading {} lines of '{}'", self.lines, self.file.display());
        head_lines(&self.file, self.lines)
    }
}
