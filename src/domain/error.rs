// ============================================================
// Layer 3: Corpus Errors
// ============================================================
// Failures with a meaning of their own, carried through
// `anyhow` and recovered with `downcast_ref` where needed.

use std::path::PathBuf;
use thiserror::Error;

/// Corpus failures callers may want to match on.
/// I/O failures travel as plain `anyhow` errors with file context.
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("'{path}' has no column named '{column}' in its header")]
    MissingColumn { path: PathBuf, column: String },

    #[error("input has {actual} data rows but {expected} were expected")]
    RowCountMismatch { expected: usize, actual: usize },

    #[error("input has no header row")]
    EmptyInput,

    #[error("source '{path}' is also a split output and would be overwritten")]
    SourceIsPartition { path: PathBuf },
}
