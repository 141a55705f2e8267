// ============================================================
// Layer 6 — Lexicon Store
// ============================================================
// Loads the stop-word and quantifier-word sets once, at
// start-up. Each set comes either from a word-list file or
// from the built-in English list.
//
// Word-list file format:
//   - one entry per line, surrounding whitespace trimmed
//   - blank lines and lines starting with '#' are ignored
//
// A list that cannot be read, or that holds no entries, is a
// fatal error. Every lexical feature depends on these sets,
// and an empty set would silently zero them all.

use anyhow::{bail, Context, Result};
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::domain::lexicon::{Lexicon, ENGLISH_QUANTIFIERS, ENGLISH_STOPWORDS};

pub struct LexiconStore {
    stopwords_path:   Option<PathBuf>,
    quantifiers_path: Option<PathBuf>,
}

impl LexiconStore {
    /// `None` for either path selects the built-in English list
    pub fn new(stopwords_path: Option<PathBuf>, quantifiers_path: Option<PathBuf>) -> Self {
        Self { stopwords_path, quantifiers_path }
    }

    /// Load both sets into a shared, immutable Lexicon
    pub fn load(&self) -> Result<Arc<Lexicon>> {
        let stopwords   = load_set(self.stopwords_path.as_deref(), ENGLISH_STOPWORDS, "stop-word")?;
        let quantifiers = load_set(self.quantifiers_path.as_deref(), ENGLISH_QUANTIFIERS, "quantifier")?;

        tracing::info!(
            "Lexicon ready: {} stop words, {} quantifier words",
            stopwords.len(),
            quantifiers.len()
        );
        Ok(Arc::new(Lexicon::new(stopwords, quantifiers)))
    }
}

fn load_set(path: Option<&Path>, builtin: &[&str], what: &str) -> Result<HashSet<String>> {
    match path {
        Some(path) => {
            let words = read_word_list(path)?;
            tracing::debug!("Loaded {} {} entries from '{}'", words.len(), what, path.display());
            Ok(words)
        }
        None => Ok(builtin.iter().map(|w| w.to_string()).collect()),
    }
}

/// Read one word list file
pub fn read_word_list(path: &Path) -> Result<HashSet<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Cannot read word list '{}'", path.display()))?;

    let words: HashSet<String> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect();

    if words.is_empty() {
        bail!("Word list '{}' has no entries", path.display());
    }
    Ok(words)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn word_file(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "{contents}").unwrap();
        f
    }

    #[test]
    fn test_builtin_lists_by_default() {
        let lex = LexiconStore::new(None, None).load().unwrap();
        assert_eq!(*lex, Lexicon::english());
    }

    #[test]
    fn test_reads_word_list_skipping_comments_and_blanks() {
        let f = word_file("# quantifiers\nmany\n\n  few  \nsome\n");
        let store = LexiconStore::new(None, Some(f.path().to_path_buf()));
        let lex = store.load().unwrap();
        assert_eq!(lex.quantifier_words().len(), 3);
        assert!(lex.is_quantifier("few"));
        assert!(!lex.is_quantifier("several"));
        // stop words still come from the built-in list
        assert!(lex.is_stopword("the"));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let store = LexiconStore::new(Some(PathBuf::from("/no/such/stopwords.txt")), None);
        let err = store.load().unwrap_err();
        assert!(err.to_string().contains("/no/such/stopwords.txt"));
    }

    #[test]
    fn test_empty_file_is_fatal() {
        let f = word_file("# nothing here\n\n");
        let store = LexiconStore::new(Some(f.path().to_path_buf()), None);
        assert!(store.load().is_err());
    }
}
