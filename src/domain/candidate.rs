// ============================================================
// Layer 3 — Candidate Domain Type
// ============================================================
// One (Question, Answer, Sentence) triple produced by the
// upstream question generator. Immutable inside this crate.
//
// Every field is optional: upstream records sometimes omit a
// field or carry a non-string value. Those never fail
// deserialisation; they are stored as `None` and every feature
// that reads them falls back to its default.
//
// The serialised keys (`Question`, `Answer`, `Sentence`) are
// part of the contract with the downstream ranker.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::error::FeatureError;

/// The three text fields of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateField {
    Question,
    Answer,
    Sentence,
}

impl CandidateField {
    /// The column name used in input and output records
    pub fn key(self) -> &'static str {
        match self {
            CandidateField::Question => "Question",
            CandidateField::Answer   => "Answer",
            CandidateField::Sentence => "Sentence",
        }
    }
}

impl fmt::Display for CandidateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A question/answer/sentence triple awaiting scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// The generated question
    #[serde(rename = "Question", default, deserialize_with = "lenient_text")]
    pub question: Option<String>,

    /// The candidate answer span
    #[serde(rename = "Answer", default, deserialize_with = "lenient_text")]
    pub answer: Option<String>,

    /// The source sentence the question was generated from
    #[serde(rename = "Sentence", default, deserialize_with = "lenient_text")]
    pub sentence: Option<String>,
}

impl Candidate {
    /// Create a candidate with all three fields present.
    pub fn new(
        question: impl Into<String>,
        answer:   impl Into<String>,
        sentence: impl Into<String>,
    ) -> Self {
        Self {
            question: Some(question.into()),
            answer:   Some(answer.into()),
            sentence: Some(sentence.into()),
        }
    }

    /// Borrow a field's text, failing with `MissingInput` when absent.
    /// An empty string is present; callers decide whether empty is usable.
    pub fn text(&self, field: CandidateField) -> Result<&str, FeatureError> {
        let value = match field {
            CandidateField::Question => &self.question,
            CandidateField::Answer   => &self.answer,
            CandidateField::Sentence => &self.sentence,
        };
        value
            .as_deref()
            .ok_or_else(|| FeatureError::MissingInput(format!("{field} is absent")))
    }
}

/// Accept any JSON value for a text field.
/// Strings pass through, numbers and booleans keep their textual
/// form, and null/arrays/objects become `None`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b)   => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}
