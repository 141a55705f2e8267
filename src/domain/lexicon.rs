// ============================================================
// Layer 3 — Lexicon
// ============================================================
// Two immutable word sets read by the lexical features:
//   - stop words       (high-frequency, low-information words)
//   - quantifier words (vague-quantity words: many, few, ...)
//
// A Lexicon is built once at start-up (see infra::lexicon_store)
// and handed to the row processor as an `Arc<Lexicon>`.
// Membership is exact and case-sensitive.

use std::collections::HashSet;

/// The standard English stop-word list (lowercase).
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
    "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "she's", "her", "hers", "herself", "it", "it's",
    "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "that'll", "these", "those", "am", "is", "are",
    "was", "were", "be", "been", "being", "have", "has", "had", "having", "do",
    "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because",
    "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to",
    "from", "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t",
    "can", "will", "just", "don", "don't", "should", "should've", "now", "d", "ll",
    "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't",
    "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't",
    "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't", "mustn",
    "mustn't", "needn", "needn't", "shan", "shan't", "shouldn", "shouldn't", "wasn",
    "wasn't", "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
];

/// Words denoting a vague quantity.
pub const ENGLISH_QUANTIFIERS: &[&str] = &[
    "all", "any", "both", "each", "either", "enough", "every", "few", "fewer",
    "less", "little", "lots", "many", "more", "most", "much", "neither", "none",
    "numerous", "plenty", "several", "some", "various",
];

/// Stop-word and quantifier-word sets shared read-only by every feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    stopwords:   HashSet<String>,
    quantifiers: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from any two collections of words
    pub fn new<S, Q>(stopwords: S, quantifiers: Q) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        Q: IntoIterator,
        Q::Item: Into<String>,
    {
        Self {
            stopwords:   stopwords.into_iter().map(Into::into).collect(),
            quantifiers: quantifiers.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in English lists
    pub fn english() -> Self {
        Self::new(
            ENGLISH_STOPWORDS.iter().copied(),
            ENGLISH_QUANTIFIERS.iter().copied(),
        )
    }

    pub fn stopwords(&self) -> &HashSet<String> {
        &self.stopwords
    }

    pub fn quantifier_words(&self) -> &HashSet<String> {
        &self.quantifiers
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    pub fn is_quantifier(&self, token: &str) -> bool {
        self.quantifiers.contains(token)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_lists() {
        let lex = Lexicon::english();
        assert_eq!(lex.stopwords().len(), 179);
        for q in ["many", "few", "several", "all", "some"] {
            assert!(lex.is_quantifier(q), "{q} should be a quantifier");
        }
        assert!(lex.is_stopword("the"));
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        let lex = Lexicon::english();
        assert!(!lex.is_stopword("The"));
        assert!(!lex.is_quantifier("Many"));
    }
}
