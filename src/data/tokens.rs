// ============================================================
// Layer 4 — Tokenisation Helpers
// ============================================================
// Two tokenisation strategies coexist:
//
//   Whitespace → split on runs of whitespace. Used by the
//                surface features (counts, capitalisation,
//                stop words, quantifiers). This is the default
//                and matches the numbers the ranker was
//                trained on.
//
//   Tagger     → use the linguistic tagger's own tokens for
//                every feature, so that counts agree between
//                surface and pronoun features. Punctuation
//                becomes separate tokens, which changes values.
//
// Pronoun features always use the tagger's tokens.

use serde::{Deserialize, Serialize};

/// Which tokenisation the surface features use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenPolicy {
    #[default]
    Whitespace,
    Tagger,
}

/// Split on whitespace, borrowing from the input
pub fn whitespace_tokens(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// A token is upper-case when it has at least one cased
/// character and every cased character is upper-case.
/// "THE," and "U.S." qualify; "123" and "The" do not.
pub fn is_upper_token(token: &str) -> bool {
    let mut has_cased = false;
    for c in token.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokens_collapse_runs() {
        assert_eq!(whitespace_tokens("  many \t apples\nwere "), vec!["many", "apples", "were"]);
        assert!(whitespace_tokens("   ").is_empty());
    }

    #[test]
    fn test_is_upper_token() {
        assert!(is_upper_token("THE"));
        assert!(is_upper_token("THE,"));
        assert!(is_upper_token("U.S."));
        assert!(is_upper_token("A"));
        assert!(!is_upper_token("The"));
        assert!(!is_upper_token("123"));
        assert!(!is_upper_token(""));
    }

    #[test]
    fn test_policy_serialises_lowercase() {
        assert_eq!(serde_json::to_string(&TokenPolicy::Tagger).unwrap(), "\"tagger\"");
    }
}
