// ============================================================
// Layer 6 — Table Writer
// ============================================================
// Writes a ResultTable for the downstream ranker in one of
// three layouts:
//
//   jsonl → one JSON object per row (default)
//   json  → a pretty-printed JSON array
//   csv   → header row, then one record per row
//
// Column order is always Question, Answer, Sentence followed
// by the feature columns in computation order. An absent
// candidate field is written as null (JSON) or an empty cell
// (CSV).
//
// Reference: csv crate documentation
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::domain::candidate::CandidateField;
use crate::domain::feature::FeatureKind;
use crate::domain::result_row::ResultTable;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Csv,
}

pub struct TableWriter {
    format: OutputFormat,
}

impl TableWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Write to a file, or to stdout when `path` is None
    pub fn write_to_path(&self, table: &ResultTable, path: Option<&Path>) -> Result<()> {
        match path {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Cannot create output directory '{}'", parent.display())
                    })?;
                }
                let file = File::create(path)
                    .with_context(|| format!("Cannot create output file '{}'", path.display()))?;
                self.write(table, BufWriter::new(file))
                    .with_context(|| format!("Cannot write features to '{}'", path.display()))?;
                tracing::info!("Wrote {} rows to '{}'", table.len(), path.display());
                Ok(())
            }
            None => {
                let stdout = io::stdout();
                self.write(table, stdout.lock())
            }
        }
    }

    /// Write the table to any writer
    pub fn write<W: Write>(&self, table: &ResultTable, mut out: W) -> Result<()> {
        match self.format {
            OutputFormat::Jsonl => {
                for row in table.rows() {
                    serde_json::to_writer(&mut out, row)?;
                    writeln!(out)?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut out, table.rows())?;
                writeln!(out)?;
            }
            OutputFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(&mut out);
                wtr.write_record(header())?;
                for row in table.rows() {
                    let c = &row.candidate;
                    let mut record: Vec<String> = [&c.question, &c.answer, &c.sentence]
                        .into_iter()
                        .map(|f| f.clone().unwrap_or_default())
                        .collect();
                    record.extend(row.features.iter().map(|(_, v)| v.to_string()));
                    wtr.write_record(&record)?;
                }
                wtr.flush()?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

/// Output column names, in order
pub fn header() -> Vec<&'static str> {
    [CandidateField::Question, CandidateField::Answer, CandidateField::Sentence]
        .into_iter()
        .map(CandidateField::key)
        .chain(FeatureKind::ALL.into_iter().map(FeatureKind::key))
        .collect()
}
