// ============================================================
// Layer 3 — Feature Errors
// ============================================================
// The three ways a single feature computation can fail.
// None of them ever escapes the row processor: each one is
// turned into the feature's default value and recorded as a
// `Fallback` so operators can still see it.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureError {
    /// A required field is absent, or the span it covers is empty
    #[error("missing input: {0}")]
    MissingInput(String),

    /// Division by zero or by a non-positive denominator
    #[error("undefined arithmetic: {0}")]
    UndefinedArithmetic(String),

    /// The linguistic tagger could not process the text
    #[error("tagger failure: {0}")]
    TaggerFailure(String),
}

impl FeatureError {
    /// Short stable name of the failure kind, used in diagnostics output.
    pub fn kind(&self) -> &'static str {
        match self {
            FeatureError::MissingInput(_)        => "MissingInput",
            FeatureError::UndefinedArithmetic(_) => "UndefinedArithmetic",
            FeatureError::TaggerFailure(_)       => "TaggerFailure",
        }
    }
}

/// Result of one feature computation
pub type FeatureResult = Result<f64, FeatureError>;
