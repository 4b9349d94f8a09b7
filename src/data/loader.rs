// ============================================================
// Layer 4: Partition Loader
// ============================================================
// Reads a delimited partition file as named records and pulls
// out the `Question` and `Answer` fields of every row.
//
// The header is looked up once; the two column positions are
// then used for every record. Any other columns are ignored.
// Ragged rows are accepted: extra fields are ignored and a
// field missing from a short row reads as empty.
//
//   Question,Answer,Source         QaPair { "2+2?", "4" }
//   2+2?,4,quiz          ──────▶   QaPair { "3+3?", "6" }
//   3+3?,6,quiz

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use std::path::{Path, PathBuf};

use crate::domain::error::CorpusError;
use crate::domain::qa_pair::{QaPair, ANSWER_COLUMN, QUESTION_COLUMN};
use crate::domain::traits::QaSource;

/// Loads question/answer rows from one partition file.
/// Implements the QaSource trait from Layer 3.
pub struct CsvQaLoader {
    path:      PathBuf,
    delimiter: u8,
}

impl CsvQaLoader {
    pub fn new(path: impl Into<PathBuf>, delimiter: u8) -> Self {
        Self {
            path: path.into(),
            delimiter,
        }
    }
}

impl QaSource for CsvQaLoader {
    fn load_all(&self) -> Result<Vec<QaPair>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .with_context(|| format!("Cannot open '{}'", self.path.display()))?;

        let headers = reader
            .headers()
            .with_context(|| format!("Cannot read header of '{}'", self.path.display()))?
            .clone();

        let question_idx = column_index(&headers, QUESTION_COLUMN, &self.path)?;
        let answer_idx   = column_index(&headers, ANSWER_COLUMN, &self.path)?;

        let mut pairs = Vec::new();

        for (line, record) in reader.records().enumerate() {
            let record = record.with_context(|| {
                format!("Cannot read row {} of '{}'", line + 1, self.path.display())
            })?;

            pairs.push(QaPair::new(
                record.get(question_idx).unwrap_or_default(),
                record.get(answer_idx).unwrap_or_default(),
            ));
        }

        tracing::debug!("Loaded {} rows from '{}'", pairs.len(), self.path.display());
        Ok(pairs)
    }
}

/// Position of `name` in the header, or a MissingColumn error
fn column_index(headers: &StringRecord, name: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| {
            CorpusError::MissingColumn {
                path:   path.to_path_buf(),
                column: name.to_string(),
            }
            .into()
        })
}
