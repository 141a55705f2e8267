// ============================================================
// Layer 5 — Feature Computation
// ============================================================
// The thirteen feature functions, the row processor that
// applies them to one candidate, and the table builder that
// applies the processor to a whole candidate list.
//
//   Candidate
//       │
//       ▼
//   RowProcessor   → runs PIPELINE in order, substitutes the
//       │            default 0 for every failed feature and
//       │            records it as a Fallback
//       ▼
//   FeatureVector
//       │
//       ▼
//   TableBuilder   → one ResultRow per candidate, input order
//
// Every feature function is a plain `fn` from a FeatureInput
// to a FeatureResult. They share no state: the only thing a
// feature can see of its neighbours is the read-only view of
// the features computed before it in the same row.

pub mod lexical;
pub mod pronominal;
pub mod processor;
pub mod table;
pub mod token_stats;

pub use processor::{RowOutcome, RowProcessor};
pub use table::TableBuilder;

use crate::data::tokens::{whitespace_tokens, TokenPolicy};
use crate::domain::candidate::{Candidate, CandidateField};
use crate::domain::error::{FeatureError, FeatureResult};
use crate::domain::feature::{FeatureKind, PartialFeatures};
use crate::domain::lexicon::Lexicon;
use crate::domain::traits::{TaggedToken, Tagger};

/// Signature shared by every feature function
pub type FeatureFn = fn(&FeatureInput<'_>) -> FeatureResult;

/// Every feature paired with the function computing it, in
/// computation order. The two percentage features come after
/// the token counts they read.
pub const PIPELINE: [(FeatureKind, FeatureFn); FeatureKind::COUNT] = [
    (FeatureKind::NumTokensInAnswer,               token_stats::num_tokens_in_answer),
    (FeatureKind::NumTokensInSentence,             token_stats::num_tokens_in_sentence),
    (FeatureKind::NumTokenMatchQuestion,           token_stats::num_token_match_question),
    (FeatureKind::PercentageTokenInAnswer,         token_stats::percentage_token_in_answer),
    (FeatureKind::PercentageTokenInOutAnswer,      token_stats::percentage_token_in_out_answer),
    (FeatureKind::AnswerCapitalizedWordDensity,    lexical::answer_capitalized_word_density),
    (FeatureKind::AnswerPronominalDensity,         pronominal::answer_pronominal_density),
    (FeatureKind::AnswerStopwordDensity,           lexical::answer_stopword_density),
    (FeatureKind::AnswerEndsWithQuantifier,        lexical::answer_ends_with_quantifier),
    (FeatureKind::AnswerStartsWithQuantifier,      lexical::answer_starts_with_quantifier),
    (FeatureKind::AnswerQuantifierDensity,         lexical::answer_quantifier_density),
    (FeatureKind::PercentCapitalizedWordsInAnswer, lexical::percent_capitalized_words_in_answer),
    (FeatureKind::PercentPronominalsInAnswer,      pronominal::percent_pronominals_in_answer),
];

/// Everything a feature function may read.
pub struct FeatureInput<'a> {
    pub candidate: &'a Candidate,
    pub lexicon:   &'a Lexicon,
    pub tagger:    &'a dyn Tagger,
    pub policy:    TokenPolicy,
    /// Features already computed for this row
    pub computed:  &'a PartialFeatures,
}

impl<'a> FeatureInput<'a> {
    /// Raw text of a field; `MissingInput` when absent
    pub fn text(&self, field: CandidateField) -> Result<&'a str, FeatureError> {
        self.candidate.text(field)
    }

    /// Tokens of a field under the configured policy
    pub fn tokens(&self, field: CandidateField) -> Result<Vec<String>, FeatureError> {
        let text = self.text(field)?;
        match self.policy {
            TokenPolicy::Whitespace => Ok(whitespace_tokens(text)
                .into_iter()
                .map(str::to_owned)
                .collect()),
            TokenPolicy::Tagger => Ok(self
                .tag(text)?
                .into_iter()
                .map(|t| t.token)
                .collect()),
        }
    }

    /// Tokens of a field that must not be empty
    pub fn non_empty_tokens(&self, field: CandidateField) -> Result<Vec<String>, FeatureError> {
        let tokens = self.tokens(field)?;
        if tokens.is_empty() {
            return Err(FeatureError::MissingInput(format!("{field} has no tokens")));
        }
        Ok(tokens)
    }

    /// Tagged tokens of a field, regardless of policy
    pub fn tagged(&self, field: CandidateField) -> Result<Vec<TaggedToken>, FeatureError> {
        let text = self.text(field)?;
        self.tag(text)
    }

    /// A feature computed earlier in the same row
    pub fn prior(&self, kind: FeatureKind) -> Result<f64, FeatureError> {
        self.computed
            .get(kind)
            .ok_or_else(|| FeatureError::MissingInput(format!("{kind} not computed yet")))
    }

    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, FeatureError> {
        self.tagger
            .tag(text)
            .map_err(|e| FeatureError::TaggerFailure(e.to_string()))
    }
}

/// `numerator / denominator`, undefined for a non-positive denominator
pub fn ratio(numerator: f64, denominator: f64) -> FeatureResult {
    if denominator <= 0.0 {
        return Err(FeatureError::UndefinedArithmetic(format!(
            "{numerator} / {denominator}"
        )));
    }
    Ok(numerator / denominator)
}

/// 1.0 for true, 0.0 for false
pub fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}
