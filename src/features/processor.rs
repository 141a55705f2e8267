// ============================================================
// Layer 5 — Row Processor
// ============================================================
// Applies every feature function to one candidate and folds
// the results into a fresh FeatureVector.
//
// Failure policy: a feature that returns an error (or a
// non-finite number) gets the default value 0. The row is
// never aborted. Each substitution is kept as a Fallback in
// the RowOutcome and logged at debug level, so callers can
// see exactly which features were defaulted and why.

use std::sync::Arc;

use super::{FeatureInput, PIPELINE};
use crate::data::tokens::TokenPolicy;
use crate::domain::candidate::Candidate;
use crate::domain::error::{FeatureError, FeatureResult};
use crate::domain::feature::{Fallback, FeatureKind, FeatureVector, PartialFeatures};
use crate::domain::lexicon::Lexicon;
use crate::domain::traits::Tagger;

/// Value substituted for any feature that cannot be computed
pub const DEFAULT_VALUE: f64 = 0.0;

/// A computed vector together with the features that fell back.
#[derive(Debug, Clone, PartialEq)]
pub struct RowOutcome {
    pub features:  FeatureVector,
    pub fallbacks: Vec<Fallback>,
}

/// Computes the feature vector of a single candidate.
///
/// Cheap to clone; the lexicon and tagger are shared.
#[derive(Clone)]
pub struct RowProcessor {
    lexicon: Arc<Lexicon>,
    tagger:  Arc<dyn Tagger>,
    policy:  TokenPolicy,
}

impl RowProcessor {
    pub fn new(lexicon: Arc<Lexicon>, tagger: Arc<dyn Tagger>) -> Self {
        Self { lexicon, tagger, policy: TokenPolicy::default() }
    }

    /// Use a different tokenisation for the surface features
    pub fn with_policy(mut self, policy: TokenPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> TokenPolicy {
        self.policy
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// The complete feature vector for `candidate`
    pub fn compute(&self, candidate: &Candidate) -> FeatureVector {
        self.compute_with_diagnostics(candidate).features
    }

    /// The feature vector plus every fallback taken on the way
    pub fn compute_with_diagnostics(&self, candidate: &Candidate) -> RowOutcome {
        let mut computed  = PartialFeatures::new();
        let mut fallbacks = Vec::new();

        for (kind, feature_fn) in PIPELINE {
            let result = {
                let input = FeatureInput {
                    candidate,
                    lexicon:  &self.lexicon,
                    tagger:   self.tagger.as_ref(),
                    policy:   self.policy,
                    computed: &computed,
                };
                feature_fn(&input)
            };

            computed.set(kind, settle(kind, result, &mut fallbacks));
        }

        RowOutcome { features: computed.complete(), fallbacks }
    }
}

/// Turn one feature result into its stored value, recording a
/// Fallback for errors and non-finite numbers.
fn settle(kind: FeatureKind, result: FeatureResult, fallbacks: &mut Vec<Fallback>) -> f64 {
    let reason = match result {
        Ok(v) if v.is_finite() => return v,
        Ok(v) => FeatureError::UndefinedArithmetic(format!("non-finite result {v}")),
        Err(reason) => reason,
    };
    tracing::debug!("{} fell back to default: {}", kind, reason);
    fallbacks.push(Fallback { feature: kind, reason });
    DEFAULT_VALUE
}
