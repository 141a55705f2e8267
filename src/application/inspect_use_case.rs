// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Computes the feature vector of a single candidate given on
// the command line, together with the features that fell back
// to their default. Useful for checking how a lexicon or token
// policy change affects one example.

use anyhow::Result;

use crate::application::build_features_use_case::FeatureConfig;
use crate::domain::candidate::Candidate;
use crate::features::{RowOutcome, RowProcessor};

pub struct InspectUseCase {
    processor: RowProcessor,
}

impl InspectUseCase {
    /// Only the lexicon paths and token policy of `config` are used
    pub fn new(config: &FeatureConfig) -> Result<Self> {
        Ok(Self { processor: config.row_processor()? })
    }

    pub fn inspect(&self, candidate: &Candidate) -> RowOutcome {
        self.processor.compute_with_diagnostics(candidate)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::tokens::TokenPolicy;
    use crate::domain::feature::FeatureKind;

    #[test]
    fn test_inspect_single_candidate() {
        let uc = InspectUseCase::new(&FeatureConfig::default()).unwrap();
        let outcome = uc.inspect(&Candidate::new("Who ate THE apple", "THE apple", "Tom ate THE apple."));
        assert_eq!(outcome.features.get(FeatureKind::AnswerCapitalizedWordDensity), 0.5);
        assert!(outcome.fallbacks.is_empty());
    }

    #[test]
    fn test_inspect_respects_token_policy() {
        let cfg = FeatureConfig { token_policy: TokenPolicy::Tagger, ..FeatureConfig::default() };
        let uc = InspectUseCase::new(&cfg).unwrap();
        let outcome = uc.inspect(&Candidate::new("Who?", "Tom.", "Tom ran."));
        assert_eq!(outcome.features.get(FeatureKind::NumTokensInAnswer), 2.0);
    }
}
