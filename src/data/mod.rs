// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between a candidate file on disk and the token
// lists the features consume:
//
//   candidates.jsonl / candidates.json
//       │
//       ▼
//   CandidateLoader   → reads records into Candidate values
//       │
//       ▼
//   tokens            → whitespace tokenisation, token policy,
//                       upper-case test
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Loads candidates from JSON or JSON Lines files
pub mod loader;

/// Tokenisation helpers and the token policy switch
pub mod tokens;
