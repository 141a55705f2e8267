// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Adapters between the feature pipeline and the outside world:
//
//   lexicon_store.rs — Lexicon Provider
//                      Loads stop-word and quantifier sets from
//                      word-list files or the built-in lists.
//                      Loading failures are fatal.
//
//   tagger.rs        — Linguistic Tagger
//                      Rule-based Penn Treebank tagger behind
//                      the domain `Tagger` trait.
//
//   table_writer.rs  — Output
//                      Writes the result table as JSON Lines,
//                      JSON or CSV.
//
//   diagnostics.rs   — Fallback diagnostics
//                      CSV record of every defaulted feature.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Stop-word and quantifier-word loading
pub mod lexicon_store;

/// Built-in part-of-speech tagger
pub mod tagger;

/// Result table output
pub mod table_writer;

/// Defaulted-feature CSV logger
pub mod diagnostics;
