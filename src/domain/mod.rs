// ============================================================
// Layer 3: Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing the corpus:
// what a row is, how rows map onto partitions, and what can
// go wrong. No file I/O lives here.

// A question/answer row and its column-wise view
pub mod qa_pair;

// Train/test/val ranges and the counts a split produces
pub mod partition;

// Typed corpus errors
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
