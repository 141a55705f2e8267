// ============================================================
// Layer 3 — Result Rows and the Result Table
// ============================================================
// A ResultRow is a candidate's own fields with its feature
// vector merged on top. The merge only ever adds keys: the
// feature column names never collide with `Question`,
// `Answer` or `Sentence`.
//
// A ResultTable keeps rows in the same order as the input
// candidates, so downstream code may match rows back to the
// candidate list by position.

use serde::Serialize;

use crate::domain::candidate::Candidate;
use crate::domain::feature::{Fallback, FeatureKind, FeatureVector};

/// One output row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    #[serde(flatten)]
    pub candidate: Candidate,

    #[serde(flatten)]
    pub features: FeatureVector,

    /// Features that fell back to their default for this row.
    /// Diagnostic only; not part of the serialised row.
    #[serde(skip)]
    pub fallbacks: Vec<Fallback>,
}

impl ResultRow {
    pub fn new(candidate: Candidate, features: FeatureVector, fallbacks: Vec<Fallback>) -> Self {
        Self { candidate, features, fallbacks }
    }

    /// True when every feature was computed without falling back
    pub fn is_clean(&self) -> bool {
        self.fallbacks.is_empty()
    }
}

/// The ordered output of a table build.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    rows: Vec<ResultRow>,
}

impl ResultTable {
    pub fn new(rows: Vec<ResultRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<ResultRow> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of fallbacks across all rows
    pub fn fallback_count(&self) -> usize {
        self.rows.iter().map(|r| r.fallbacks.len()).sum()
    }

    /// Number of fallbacks per feature, in column order.
    /// Features that never fell back are omitted.
    pub fn fallback_summary(&self) -> Vec<(FeatureKind, usize)> {
        let mut counts = [0usize; FeatureKind::COUNT];
        for fallback in self.rows.iter().flat_map(|r| &r.fallbacks) {
            counts[fallback.feature.index()] += 1;
        }
        FeatureKind::ALL
            .into_iter()
            .zip(counts)
            .filter(|(_, n)| *n > 0)
            .collect()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::FeatureError;
    use crate::domain::feature::PartialFeatures;

    fn row(answer: &str, fallbacks: Vec<Fallback>) -> ResultRow {
        ResultRow::new(
            Candidate::new("q", answer, "s"),
            PartialFeatures::new().complete(),
            fallbacks,
        )
    }

    #[test]
    fn test_row_serialises_fields_then_features() {
        let json = serde_json::to_value(row("a", Vec::new())).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 3 + FeatureKind::COUNT);
        assert_eq!(obj["Answer"], "a");
        assert_eq!(obj["ANSWER_QUANTIFIER_DENSITY"], 0.0);
    }

    #[test]
    fn test_fallback_summary_counts_per_feature() {
        let missing = || Fallback {
            feature: FeatureKind::AnswerStopwordDensity,
            reason:  FeatureError::MissingInput("Answer is empty".into()),
        };
        let table = ResultTable::new(vec![
            row("", vec![missing()]),
            row("x", Vec::new()),
            row("", vec![missing()]),
        ]);
        assert_eq!(table.fallback_count(), 2);
        assert_eq!(
            table.fallback_summary(),
            vec![(FeatureKind::AnswerStopwordDensity, 2)]
        );
        assert!(table.rows()[1].is_clean());
    }
}
