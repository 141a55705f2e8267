// ============================================================
// Layer 3 — Feature Keys and Feature Vectors
// ============================================================
// The closed set of feature keys, in the order the row
// processor computes them, plus the vector that holds one
// value per key.
//
// A `FeatureVector` is always complete: it is backed by a
// fixed-size array indexed by `FeatureKind`, so a partial
// vector cannot be represented. While a row is being built
// the processor accumulates into `PartialFeatures` instead.
//
// The key strings (mixed casing included) are consumed
// verbatim by the downstream ranker.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::error::FeatureError;

/// One named feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureKind {
    NumTokensInAnswer,
    NumTokensInSentence,
    NumTokenMatchQuestion,
    PercentageTokenInAnswer,
    PercentageTokenInOutAnswer,
    AnswerCapitalizedWordDensity,
    AnswerPronominalDensity,
    AnswerStopwordDensity,
    AnswerEndsWithQuantifier,
    AnswerStartsWithQuantifier,
    AnswerQuantifierDensity,
    PercentCapitalizedWordsInAnswer,
    PercentPronominalsInAnswer,
}

impl FeatureKind {
    /// Number of features in every vector
    pub const COUNT: usize = 13;

    /// Every feature, in computation (and output column) order
    pub const ALL: [FeatureKind; FeatureKind::COUNT] = [
        FeatureKind::NumTokensInAnswer,
        FeatureKind::NumTokensInSentence,
        FeatureKind::NumTokenMatchQuestion,
        FeatureKind::PercentageTokenInAnswer,
        FeatureKind::PercentageTokenInOutAnswer,
        FeatureKind::AnswerCapitalizedWordDensity,
        FeatureKind::AnswerPronominalDensity,
        FeatureKind::AnswerStopwordDensity,
        FeatureKind::AnswerEndsWithQuantifier,
        FeatureKind::AnswerStartsWithQuantifier,
        FeatureKind::AnswerQuantifierDensity,
        FeatureKind::PercentCapitalizedWordsInAnswer,
        FeatureKind::PercentPronominalsInAnswer,
    ];

    /// The output column name
    pub fn key(self) -> &'static str {
        match self {
            FeatureKind::NumTokensInAnswer               => "Num_Tokens_In_Answer",
            FeatureKind::NumTokensInSentence             => "Num_Tokens_In_Sentence",
            FeatureKind::NumTokenMatchQuestion           => "Num_Token_Match_Question",
            FeatureKind::PercentageTokenInAnswer         => "Percentage_Token_In_Answer",
            FeatureKind::PercentageTokenInOutAnswer      => "Percentage_Token_In_Out_Answer",
            FeatureKind::AnswerCapitalizedWordDensity    => "Answer_Capitalized_Word_Density",
            FeatureKind::AnswerPronominalDensity         => "ANSWER_PRONOMINAL_DENSITY",
            FeatureKind::AnswerStopwordDensity           => "ANSWER_STOPWORD_DENSITY",
            FeatureKind::AnswerEndsWithQuantifier        => "ANSWER_ENDS_WITH_QUANTIFIER",
            FeatureKind::AnswerStartsWithQuantifier      => "ANSWER_STARTS_WITH_QUANTIFIER",
            FeatureKind::AnswerQuantifierDensity         => "ANSWER_QUANTIFIER_DENSITY",
            FeatureKind::PercentCapitalizedWordsInAnswer => "PERCENT_CAPITALIZED_WORDS_IN_ANSWER",
            FeatureKind::PercentPronominalsInAnswer      => "PERCENT_PRONOMINALS_IN_ANSWER",
        }
    }

    /// Look a feature up by its column name
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == key)
    }

    /// Position of this feature inside a vector
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The complete set of feature values for one candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    values: [f64; FeatureKind::COUNT],
}

impl FeatureVector {
    /// Value of one feature
    pub fn get(&self, kind: FeatureKind) -> f64 {
        self.values[kind.index()]
    }

    /// Always `FeatureKind::COUNT`
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// A feature vector is never empty
    pub fn is_empty(&self) -> bool {
        false
    }

    /// (feature, value) pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (FeatureKind, f64)> + '_ {
        FeatureKind::ALL.into_iter().map(move |k| (k, self.get(k)))
    }

    /// Raw values in column order
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

/// Serialised as a map from column name to value, in column order.
/// This is what lets a `ResultRow` flatten the vector next to the
/// candidate's own fields.
impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (kind, value) in self.iter() {
            map.serialize_entry(kind.key(), &value)?;
        }
        map.end()
    }
}

/// The vector under construction while a row is being processed.
/// Later features read earlier results through `get`.
#[derive(Debug, Clone, Default)]
pub struct PartialFeatures {
    values: [Option<f64>; FeatureKind::COUNT],
}

impl PartialFeatures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of an already computed feature, if any
    pub fn get(&self, kind: FeatureKind) -> Option<f64> {
        self.values[kind.index()]
    }

    /// Record a feature's final value (computed or default)
    pub fn set(&mut self, kind: FeatureKind, value: f64) {
        self.values[kind.index()] = Some(value);
    }

    /// Freeze into a complete vector. Slots never set hold the default 0.
    pub fn complete(self) -> FeatureVector {
        FeatureVector {
            values: self.values.map(|v| v.unwrap_or(0.0)),
        }
    }
}

/// One feature that fell back to its default for one row.
#[derive(Debug, Clone, PartialEq)]
pub struct Fallback {
    pub feature: FeatureKind,
    pub reason:  FeatureError,
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> 0 ({})", self.feature, self.reason)
    }
}
