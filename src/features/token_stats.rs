// ============================================================
// Layer 5 — Token Statistics Features
// ============================================================
// Length and overlap features:
//
//   Num_Tokens_In_Answer            tokens in the Answer
//   Num_Tokens_In_Sentence          tokens in the Question
//   Num_Token_Match_Question        Answer tokens also in the Question
//   Percentage_Token_In_Answer      answer / (question - answer)
//   Percentage_Token_In_Out_Answer  answer / question
//
// The two percentages read the counts from the row being
// built rather than re-tokenising.

use std::collections::HashSet;

use super::{ratio, FeatureInput};
use crate::domain::candidate::CandidateField;
use crate::domain::error::FeatureResult;
use crate::domain::feature::FeatureKind;

pub fn num_tokens_in_answer(input: &FeatureInput<'_>) -> FeatureResult {
    Ok(input.tokens(CandidateField::Answer)?.len() as f64)
}

/// Counts the Question's tokens; the column name is historical.
pub fn num_tokens_in_sentence(input: &FeatureInput<'_>) -> FeatureResult {
    Ok(input.tokens(CandidateField::Question)?.len() as f64)
}

/// Answer tokens (with repetition) equal to some Question token.
pub fn num_token_match_question(input: &FeatureInput<'_>) -> FeatureResult {
    let answer   = input.tokens(CandidateField::Answer)?;
    let question = input.tokens(CandidateField::Question)?;
    let question: HashSet<&str> = question.iter().map(String::as_str).collect();

    let matches = answer
        .iter()
        .filter(|t| question.contains(t.as_str()))
        .count();
    Ok(matches as f64)
}

pub fn percentage_token_in_answer(input: &FeatureInput<'_>) -> FeatureResult {
    let answer_len   = input.prior(FeatureKind::NumTokensInAnswer)?;
    let question_len = input.prior(FeatureKind::NumTokensInSentence)?;
    ratio(answer_len, question_len - answer_len)
}

pub fn percentage_token_in_out_answer(input: &FeatureInput<'_>) -> FeatureResult {
    let answer_len   = input.prior(FeatureKind::NumTokensInAnswer)?;
    let question_len = input.prior(FeatureKind::NumTokensInSentence)?;
    ratio(answer_len, question_len)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::tokens::TokenPolicy;
    use crate::domain::candidate::Candidate;
    use crate::domain::error::FeatureError;
    use crate::domain::feature::PartialFeatures;
    use crate::features::test_support::{answer, eval, eval_with};

    fn counts(answer_len: f64, question_len: f64) -> PartialFeatures {
        let mut p = PartialFeatures::new();
        p.set(FeatureKind::NumTokensInAnswer, answer_len);
        p.set(FeatureKind::NumTokensInSentence, question_len);
        p
    }

    #[test]
    fn test_counts_answer_tokens() {
        assert_eq!(eval(num_tokens_in_answer, &answer("many apples were eaten")).unwrap(), 4.0);
        assert_eq!(eval(num_tokens_in_answer, &answer("")).unwrap(), 0.0);
    }

    #[test]
    fn test_absent_answer_is_missing_input() {
        let c = Candidate::default();
        assert!(matches!(eval(num_tokens_in_answer, &c), Err(FeatureError::MissingInput(_))));
    }

    #[test]
    fn test_sentence_count_reads_the_question() {
        let c = Candidate::new("Who ate THE apple", "THE apple", "one two");
        assert_eq!(eval(num_tokens_in_sentence, &c).unwrap(), 4.0);
    }

    #[test]
    fn test_match_counts_answer_tokens_found_in_question() {
        let c = Candidate::new("Who ate THE apple", "THE apple pie", "");
        assert_eq!(eval(num_token_match_question, &c).unwrap(), 2.0);

        // repetition in the answer counts each time
        let c = Candidate::new("apple", "apple apple", "");
        assert_eq!(eval(num_token_match_question, &c).unwrap(), 2.0);

        // token equality, not substring containment
        let c = Candidate::new("pineapple", "apple", "");
        assert_eq!(eval(num_token_match_question, &c).unwrap(), 0.0);
    }

    #[test]
    fn test_percentages_use_prior_counts() {
        let c = Candidate::default();
        let p = counts(2.0, 6.0);
        let pct_in = eval_with(percentage_token_in_answer, &c, TokenPolicy::Whitespace, &p);
        let pct_out = eval_with(percentage_token_in_out_answer, &c, TokenPolicy::Whitespace, &p);
        assert_eq!(pct_in.unwrap(), 0.5);
        assert!((pct_out.unwrap() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_percentages_undefined_on_zero_or_negative_denominator() {
        let c = Candidate::default();
        for p in [counts(0.0, 0.0), counts(4.0, 4.0), counts(5.0, 3.0)] {
            assert!(matches!(
                eval_with(percentage_token_in_answer, &c, TokenPolicy::Whitespace, &p),
                Err(FeatureError::UndefinedArithmetic(_))
            ));
        }
        assert!(matches!(
            eval_with(percentage_token_in_out_answer, &c, TokenPolicy::Whitespace, &counts(0.0, 0.0)),
            Err(FeatureError::UndefinedArithmetic(_))
        ));
    }

    #[test]
    fn test_percentages_without_prior_counts_are_missing_input() {
        assert!(matches!(
            eval(percentage_token_in_out_answer, &Candidate::default()),
            Err(FeatureError::MissingInput(_))
        ));
    }

    #[test]
    fn test_tagger_policy_counts_punctuation() {
        let c = answer("Tom, Dick.");
        let ws = eval_with(num_tokens_in_answer, &c, TokenPolicy::Whitespace, &PartialFeatures::new());
        let tg = eval_with(num_tokens_in_answer, &c, TokenPolicy::Tagger, &PartialFeatures::new());
        assert_eq!(ws.unwrap(), 2.0);
        assert_eq!(tg.unwrap(), 4.0);
    }
}
