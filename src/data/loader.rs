// ============================================================
// Layer 4 — Candidate Loader
// ============================================================
// Reads candidate triples from a file. Two layouts are
// accepted, detected from the first non-whitespace byte:
//
//   [ {...}, {...} ]      → a JSON array of records
//   {...}\n{...}\n        → JSON Lines, one record per line
//
// Field values are read leniently (see domain::candidate), so
// a record with a missing or odd-typed field still loads. A
// line that is not a JSON object at all is a hard error.
//
// Reference: serde_json crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{bail, Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::candidate::Candidate;
use crate::domain::traits::CandidateSource;

/// Loads candidates from a JSON or JSON Lines file.
/// Implements the CandidateSource trait from Layer 3.
pub struct CandidateLoader {
    path: PathBuf,
}

impl CandidateLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CandidateSource for CandidateLoader {
    fn load_all(&self) -> Result<Vec<Candidate>> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read candidates from '{}'", self.path.display()))?;

        let candidates = parse_candidates(&text)
            .with_context(|| format!("Cannot parse candidates in '{}'", self.path.display()))?;

        tracing::info!(
            "Loaded {} candidates from '{}'",
            candidates.len(),
            self.path.display()
        );
        Ok(candidates)
    }
}

/// Parse candidates from in-memory text in either layout.
pub fn parse_candidates(text: &str) -> Result<Vec<Candidate>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let trimmed = text.trim_start();

    if trimmed.starts_with('[') {
        let candidates: Vec<Candidate> =
            serde_json::from_str(trimmed).context("Invalid JSON array of candidates")?;
        return Ok(candidates);
    }

    let mut candidates = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !line.starts_with('{') {
            bail!("line {}: expected a JSON object", idx + 1);
        }
        let candidate: Candidate = serde_json::from_str(line)
            .with_context(|| format!("line {}: invalid candidate record", idx + 1))?;
        candidates.push(candidate);
    }

    tracing::debug!("Parsed {} JSON Lines records", candidates.len());
    Ok(candidates)
}
