// ============================================================
// Layer 6: Infrastructure Layer
// ============================================================
// Cross-cutting persistence that doesn't belong to a single
// use case:
//
//   manifest.rs: Split manifest
//                 Saves the SplitConfig and the per-partition
//                 row counts as JSON next to the partitions,
//                 and loads them back for the extractor.

/// Split manifest saving and loading
pub mod manifest;
