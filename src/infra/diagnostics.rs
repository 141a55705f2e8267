// ============================================================
// Layer 6 — Fallback Diagnostics Logger
// ============================================================
// Records every feature that fell back to its default value,
// so defaulted features are visible to whoever runs the
// pipeline rather than silently folded into the table.
//
// One CSV row per fallback:
//   row:     position of the candidate in the input (0-based)
//   feature: the feature column that was defaulted
//   kind:    MissingInput | UndefinedArithmetic | TaggerFailure
//   reason:  human-readable detail
//
// Example CSV output:
//   row,feature,kind,reason
//   3,ANSWER_STOPWORD_DENSITY,MissingInput,missing input: Answer has no tokens
//   3,Percentage_Token_In_Answer,UndefinedArithmetic,undefined arithmetic: 0 / 0
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::domain::result_row::ResultTable;

/// Writes fallback records to a CSV file.
pub struct FallbackLogger {
    csv_path: PathBuf,
}

impl FallbackLogger {
    /// Create the logger. The file is (re)created with its header row.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let csv_path = path.into();

        if let Some(dir) = csv_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let mut f = File::create(&csv_path)
            .with_context(|| format!("Cannot create diagnostics file '{}'", csv_path.display()))?;
        writeln!(f, "row,feature,kind,reason")?;
        tracing::debug!("Created diagnostics CSV: '{}'", csv_path.display());

        Ok(Self { csv_path })
    }

    /// Append one record per fallback in the table.
    /// Returns the number of records written.
    pub fn log_table(&self, table: &ResultTable) -> Result<usize> {
        let file = fs::OpenOptions::new()
            .append(true)
            .open(&self.csv_path)
            .with_context(|| format!("Cannot open '{}'", self.csv_path.display()))?;
        let mut wtr = csv::Writer::from_writer(BufWriter::new(file));

        let mut written = 0usize;
        for (idx, row) in table.rows().iter().enumerate() {
            for fallback in &row.fallbacks {
                wtr.write_record([
                    idx.to_string(),
                    fallback.feature.key().to_string(),
                    fallback.reason.kind().to_string(),
                    fallback.reason.to_string(),
                ])?;
                written += 1;
            }
        }
        wtr.flush()?;

        tracing::info!(
            "Logged {} fallbacks to '{}'",
            written,
            self.csv_path.display()
        );
        Ok(written)
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}
