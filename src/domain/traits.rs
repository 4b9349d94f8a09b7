// ============================================================
// Layer 3: Core Traits (Abstractions)
// ============================================================
// The application layer reads question/answer rows through
// this trait instead of a concrete CSV reader.
//
// Implementations:
//   - CsvQaLoader → reads a delimited partition file

use anyhow::Result;
use crate::domain::qa_pair::QaPair;

// ─── QaSource ─────────────────────────────────────────────────────────────────
/// Any component that can produce the question/answer rows of a partition.
pub trait QaSource {
    /// Load every row, in source order.
    fn load_all(&self) -> Result<Vec<QaPair>>;
}
