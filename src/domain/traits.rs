// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two seams where the feature pipeline meets the outside:
//   - Tagger          → part-of-speech tagging of raw text
//   - CandidateSource → where candidate triples come from
//
// The features only see `&dyn Tagger`, so any tagger that
// produces Penn-Treebank-compatible pronoun tags can be
// substituted without touching them.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::candidate::Candidate;

/// Part-of-speech tags that mark a pronoun
pub const PRONOUN_TAGS: [&str; 4] = ["PRP", "PRP$", "WP", "WP$"];

/// One token and its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub token: String,
    pub tag:   String,
}

impl TaggedToken {
    pub fn new(token: impl Into<String>, tag: impl Into<String>) -> Self {
        Self { token: token.into(), tag: tag.into() }
    }

    /// True for personal, possessive and wh- pronouns
    pub fn is_pronoun(&self) -> bool {
        PRONOUN_TAGS.contains(&self.tag.as_str())
    }
}

// ─── Tagger ───────────────────────────────────────────────────────────────────
/// Produces an ordered (token, tag) sequence for a piece of text.
///
/// Implementations must be deterministic and safe to call from
/// several worker threads at once.
///
/// Implementations:
///   - RuleTagger → dictionary and suffix rules (infra::tagger)
pub trait Tagger: Send + Sync {
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>>;
}

// ─── CandidateSource ──────────────────────────────────────────────────────────
/// Any component that can supply the candidates to score.
///
/// Implementations:
///   - CandidateLoader → JSON array or JSON Lines file (data::loader)
pub trait CandidateSource {
    /// Load every candidate, in source order.
    fn load_all(&self) -> Result<Vec<Candidate>>;
}
