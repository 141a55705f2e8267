// ============================================================
// Layer 5 — Lexical Features
// ============================================================
// Capitalisation and lexicon-membership features over the
// Answer, plus one cross feature over the Sentence:
//
//   Answer_Capitalized_Word_Density      all-caps answer tokens / answer tokens
//   ANSWER_STOPWORD_DENSITY              stop words / answer tokens
//   ANSWER_ENDS_WITH_QUANTIFIER          last answer token is a quantifier
//   ANSWER_STARTS_WITH_QUANTIFIER        first answer token is a quantifier
//   ANSWER_QUANTIFIER_DENSITY            quantifiers / answer tokens
//   PERCENT_CAPITALIZED_WORDS_IN_ANSWER  all-caps sentence tokens that occur
//                                        inside the answer text / sentence tokens
//
// An answer with no tokens has no density; those features
// report MissingInput and fall back to 0.

use super::{flag, ratio, FeatureInput};
use crate::data::tokens::is_upper_token;
use crate::domain::candidate::CandidateField;
use crate::domain::error::FeatureResult;

/// Share of `tokens` satisfying `pred`
fn density<F>(tokens: &[String], pred: F) -> FeatureResult
where
    F: Fn(&str) -> bool,
{
    let hits = tokens.iter().filter(|t| pred(t.as_str())).count();
    ratio(hits as f64, tokens.len() as f64)
}

pub fn answer_capitalized_word_density(input: &FeatureInput<'_>) -> FeatureResult {
    let tokens = input.non_empty_tokens(CandidateField::Answer)?;
    density(&tokens, is_upper_token)
}

pub fn answer_stopword_density(input: &FeatureInput<'_>) -> FeatureResult {
    let tokens = input.non_empty_tokens(CandidateField::Answer)?;
    density(&tokens, |t| input.lexicon.is_stopword(t))
}

pub fn answer_ends_with_quantifier(input: &FeatureInput<'_>) -> FeatureResult {
    let tokens = input.non_empty_tokens(CandidateField::Answer)?;
    let last = tokens.last().map(String::as_str).unwrap_or_default();
    Ok(flag(input.lexicon.is_quantifier(last)))
}

pub fn answer_starts_with_quantifier(input: &FeatureInput<'_>) -> FeatureResult {
    let tokens = input.non_empty_tokens(CandidateField::Answer)?;
    let first = tokens.first().map(String::as_str).unwrap_or_default();
    Ok(flag(input.lexicon.is_quantifier(first)))
}

pub fn answer_quantifier_density(input: &FeatureInput<'_>) -> FeatureResult {
    let tokens = input.non_empty_tokens(CandidateField::Answer)?;
    density(&tokens, |t| input.lexicon.is_quantifier(t))
}

/// Substring containment against the raw answer text, so a
/// capitalised sentence token counts when the answer holds it
/// with different surrounding punctuation.
pub fn percent_capitalized_words_in_answer(input: &FeatureInput<'_>) -> FeatureResult {
    let answer   = input.text(CandidateField::Answer)?;
    let sentence = input.non_empty_tokens(CandidateField::Sentence)?;

    let captured = sentence
        .iter()
        .filter(|t| is_upper_token(t) && answer.contains(t.as_str()))
        .count();
    ratio(captured as f64, sentence.len() as f64)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::candidate::Candidate;
    use crate::domain::error::FeatureError;
    use crate::features::test_support::{answer, eval};
    use crate::features::FeatureFn;

    #[test]
    fn test_capitalized_density() {
        assert_eq!(eval(answer_capitalized_word_density, &answer("THE apple")).unwrap(), 0.5);
        assert_eq!(
            eval(answer_capitalized_word_density, &answer("many apples were eaten")).unwrap(),
            0.0
        );
    }

    #[test]
    fn test_stopword_density() {
        // "the" and "were" are stop words, "apples" is not
        assert!(
            (eval(answer_stopword_density, &answer("the apples were")).unwrap() - 2.0 / 3.0).abs()
                < 1e-12
        );
    }

    #[test]
    fn test_quantifier_flags_are_boolean() {
        let c = answer("many apples were eaten");
        assert_eq!(eval(answer_starts_with_quantifier, &c).unwrap(), 1.0);
        assert_eq!(eval(answer_ends_with_quantifier, &c).unwrap(), 0.0);

        let c = answer("apples and some");
        assert_eq!(eval(answer_starts_with_quantifier, &c).unwrap(), 0.0);
        assert_eq!(eval(answer_ends_with_quantifier, &c).unwrap(), 1.0);
    }

    #[test]
    fn test_quantifier_density() {
        assert_eq!(eval(answer_quantifier_density, &answer("few or many")).unwrap(), 2.0 / 3.0);
        assert_eq!(eval(answer_quantifier_density, &answer("apples")).unwrap(), 0.0);
    }

    #[test]
    fn test_empty_answer_falls_back_for_every_answer_feature() {
        let empty = answer("   ");
        for f in [
            answer_capitalized_word_density as FeatureFn,
            answer_stopword_density,
            answer_ends_with_quantifier,
            answer_starts_with_quantifier,
            answer_quantifier_density,
        ] {
            assert!(matches!(eval(f, &empty), Err(FeatureError::MissingInput(_))));
        }
    }

    #[test]
    fn test_percent_capitalized_words_in_answer() {
        // caps tokens in the sentence: NASA, JPL; only NASA is in the answer; 6 tokens total
        let c = Candidate::new("", "the NASA rover", "NASA and JPL built the rover");
        let v = eval(percent_capitalized_words_in_answer, &c).unwrap();
        assert!((v - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_percent_capitalized_words_with_empty_sentence() {
        let c = Candidate::new("", "NASA", "");
        assert!(matches!(
            eval(percent_capitalized_words_in_answer, &c),
            Err(FeatureError::MissingInput(_))
        ));
    }
}
