// ============================================================
// aqg-features
// ============================================================
// Feature construction for ranking candidate answers in an
// automatic question-generation pipeline. For every
// (Question, Answer, Sentence) candidate it computes a fixed
// set of numeric features for the downstream ranker.
//
// Layers (outermost first):
//   cli          — argument parsing and printing
//   application  — build / inspect workflows
//   features     — the feature functions, row processor, table builder
//   data         — candidate loading and tokenisation
//   infra        — lexicon loading, tagger, writers, diagnostics
//   domain       — plain types and trait seams

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod features;
pub mod infra;

pub use domain::candidate::Candidate;
pub use domain::feature::{FeatureKind, FeatureVector};
pub use domain::lexicon::Lexicon;
pub use domain::result_row::{ResultRow, ResultTable};
pub use domain::traits::{TaggedToken, Tagger};
pub use features::{RowOutcome, RowProcessor, TableBuilder};
