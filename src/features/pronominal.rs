// ============================================================
// Layer 5 — Pronominal Features
// ============================================================
// Features built on the linguistic tagger's output. A token is
// a pronoun when its tag is one of PRP, PRP$, WP or WP$.
//
//   ANSWER_PRONOMINAL_DENSITY      pronoun tokens / tagged answer tokens
//   PERCENT_PRONOMINALS_IN_ANSWER  sentence pronouns occurring inside the
//                                  answer text / tagged sentence tokens
//
// These always use the tagger's tokenisation, whatever the
// token policy says, since the tags are attached to it.

use super::{ratio, FeatureInput};
use crate::domain::candidate::CandidateField;
use crate::domain::error::{FeatureError, FeatureResult};
use crate::domain::traits::TaggedToken;

fn non_empty_tagged(
    input: &FeatureInput<'_>,
    field: CandidateField,
) -> Result<Vec<TaggedToken>, FeatureError> {
    let tagged = input.tagged(field)?;
    if tagged.is_empty() {
        return Err(FeatureError::MissingInput(format!("{field} has no tagged tokens")));
    }
    Ok(tagged)
}

pub fn answer_pronominal_density(input: &FeatureInput<'_>) -> FeatureResult {
    let tagged = non_empty_tagged(input, CandidateField::Answer)?;
    let pronouns = tagged.iter().filter(|t| t.is_pronoun()).count();
    ratio(pronouns as f64, tagged.len() as f64)
}

pub fn percent_pronominals_in_answer(input: &FeatureInput<'_>) -> FeatureResult {
    let answer = input.text(CandidateField::Answer)?;
    let tagged = non_empty_tagged(input, CandidateField::Sentence)?;

    let captured = tagged
        .iter()
        .filter(|t| t.is_pronoun() && answer.contains(t.token.as_str()))
        .count();
    ratio(captured as f64, tagged.len() as f64)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::tokens::TokenPolicy;
    use crate::domain::candidate::Candidate;
    use crate::domain::feature::PartialFeatures;
    use crate::domain::lexicon::Lexicon;
    use crate::domain::traits::Tagger;
    use crate::features::test_support::{answer, eval};

    struct BrokenTagger;

    impl Tagger for BrokenTagger {
        fn tag(&self, _text: &str) -> anyhow::Result<Vec<TaggedToken>> {
            anyhow::bail!("model not loaded")
        }
    }

    #[test]
    fn test_answer_pronominal_density() {
        // "he" and "his" are pronouns among four tokens
        assert_eq!(eval(answer_pronominal_density, &answer("he lost his keys")).unwrap(), 0.5);
        assert_eq!(eval(answer_pronominal_density, &answer("the keys")).unwrap(), 0.0);
    }

    #[test]
    fn test_empty_answer_has_no_pronominal_density() {
        assert!(matches!(
            eval(answer_pronominal_density, &answer("")),
            Err(FeatureError::MissingInput(_))
        ));
    }

    #[test]
    fn test_percent_pronominals_in_answer() {
        // tokens: She | gave | him | the | book | .  → pronouns She, him
        let c = Candidate::new("", "She", "She gave him the book.");
        let v = eval(percent_pronominals_in_answer, &c).unwrap();
        assert!((v - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_sentence_without_pronouns_is_zero() {
        let c = Candidate::new("", "the apple", "Tom ate the apple.");
        assert_eq!(eval(percent_pronominals_in_answer, &c).unwrap(), 0.0);
    }

    #[test]
    fn test_tagger_failure_is_reported() {
        let c = answer("he ran");
        let lexicon = Lexicon::english();
        let computed = PartialFeatures::new();
        let input = FeatureInput {
            candidate: &c,
            lexicon:   &lexicon,
            tagger:    &BrokenTagger,
            policy:    TokenPolicy::Whitespace,
            computed:  &computed,
        };
        match answer_pronominal_density(&input) {
            Err(FeatureError::TaggerFailure(msg)) => assert!(msg.contains("model not loaded")),
            other => panic!("expected a tagger failure, got {other:?}"),
        }
    }
}
