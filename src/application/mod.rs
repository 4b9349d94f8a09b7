// ============================================================
// Layer 2: Application / Use Cases
// ============================================================
// Coordinates the data and infra layers for each command.
// No printing here (that's Layer 1) and no CSV parsing
// (that's Layer 4).

// Partition a corpus into train/test/val
pub mod split_use_case;

// Separate Question/Answer columns of a partition
pub mod extract_use_case;

// Peek at the first lines of an extracted column
pub mod inspect_use_case;
