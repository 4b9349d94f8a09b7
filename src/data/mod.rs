// ============================================================
// Layer 4: Data Pipeline
// ============================================================
// Everything that touches corpus files on disk.
//
// The pipeline flows in this order:
//
//   source.csv
//       │
//       ▼
//   CsvSplitter       → train.csv / test.csv / val.csv
//       │
//       ▼
//   CsvQaLoader       → Question / Answer rows of one partition
//       │
//       ▼
//   column_writer     → <stem>questions.csv / <stem>answers.csv
//
// `inspector` peeks at the first lines of an extracted column.

/// Splits a corpus into train/test/validation files
pub mod splitter;

/// Loads Question/Answer rows from a partition file
pub mod loader;

/// Writes single-column text files
pub mod column_writer;

/// Reads the first lines of a text file
pub mod inspector;
