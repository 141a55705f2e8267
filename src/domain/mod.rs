// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums and traits that define what the
// feature pipeline works on and what it produces.
//
// Rules for this layer:
//   - NO file I/O
//   - NO tagger or lexicon loading code
//   - Only plain data types and the trait seams other layers implement
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// One (Question, Answer, Sentence) triple under evaluation
pub mod candidate;

// Feature keys, the per-row feature vector and fallback records
pub mod feature;

// Stop-word and quantifier-word sets
pub mod lexicon;

// A candidate merged with its features, and the ordered output table
pub mod result_row;

// Per-feature failure taxonomy
pub mod error;

// Tagger and candidate-source abstractions
pub mod traits;
