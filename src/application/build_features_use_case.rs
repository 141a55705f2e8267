// ============================================================
// Layer 2 — BuildFeaturesUseCase
// ============================================================
// Orchestrates one feature-table build:
//
//   Step 1: Load the lexicon            (Layer 6 - infra)
//   Step 2: Build the row processor     (Layer 5 - features)
//   Step 3: Load the candidates         (Layer 4 - data)
//   Step 4: Build the table             (Layer 5 - features)
//   Step 5: Write fallback diagnostics  (Layer 6 - infra)
//   Step 6: Write the table             (Layer 6 - infra)
//
// The classifier path is not used by any of these steps. It
// is carried in the config and handed back in the BuildReport
// for the ranking stage that runs after this one.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, sync::Arc};

use crate::data::{loader::CandidateLoader, tokens::TokenPolicy};
use crate::domain::feature::FeatureKind;
use crate::domain::traits::CandidateSource;
use crate::features::{RowProcessor, TableBuilder};
use crate::infra::{
    diagnostics::FallbackLogger,
    lexicon_store::LexiconStore,
    table_writer::{OutputFormat, TableWriter},
    tagger::RuleTagger,
};

// ─── Feature Configuration ───────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureConfig {
    pub input:            PathBuf,
    /// None writes to stdout
    pub output:           Option<PathBuf>,
    pub format:           OutputFormat,
    /// None uses the built-in English stop words
    pub stopwords:        Option<PathBuf>,
    /// None uses the built-in English quantifiers
    pub quantifiers:      Option<PathBuf>,
    pub token_policy:     TokenPolicy,
    /// 1 builds on the calling thread; 0 uses every core
    pub jobs:             usize,
    /// Where to write the fallback CSV, if anywhere
    pub diagnostics:      Option<PathBuf>,
    /// Passed through untouched to the ranking stage
    pub classifier_path:  Option<String>,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            input:           PathBuf::from("candidates.jsonl"),
            output:          None,
            format:          OutputFormat::default(),
            stopwords:       None,
            quantifiers:     None,
            token_policy:    TokenPolicy::default(),
            jobs:            1,
            diagnostics:     None,
            classifier_path: None,
        }
    }
}

impl FeatureConfig {
    /// Load the lexicon and wire up a row processor for this config
    pub fn row_processor(&self) -> Result<RowProcessor> {
        let lexicon = LexiconStore::new(self.stopwords.clone(), self.quantifiers.clone()).load()?;
        Ok(RowProcessor::new(lexicon, Arc::new(RuleTagger::new())).with_policy(self.token_policy))
    }
}

/// What a finished build hands back to its caller.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildReport {
    pub rows:            usize,
    pub fallbacks:       usize,
    pub summary:         Vec<(FeatureKind, usize)>,
    pub classifier_path: Option<String>,
}

// ─── BuildFeaturesUseCase ─────────────────────────────────────────────────────
pub struct BuildFeaturesUseCase {
    config: FeatureConfig,
}

impl BuildFeaturesUseCase {
    pub fn new(config: FeatureConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FeatureConfig {
        &self.config
    }

    /// Execute the full build end to end
    pub fn execute(&self) -> Result<BuildReport> {
        let cfg = &self.config;

        // ── Step 1 + 2: Lexicon and row processor ─────────────────────────────
        let processor = cfg.row_processor()?;
        let builder   = TableBuilder::new(processor).with_jobs(cfg.jobs);

        // ── Step 3: Candidates ────────────────────────────────────────────────
        let candidates = CandidateLoader::new(&cfg.input).load_all()?;

        // ── Step 4: Feature table ─────────────────────────────────────────────
        let table = if cfg.jobs == 1 {
            builder.build(candidates)
        } else {
            builder.build_parallel(candidates)?
        };

        // ── Step 5: Diagnostics ───────────────────────────────────────────────
        match &cfg.diagnostics {
            Some(path) => {
                FallbackLogger::new(path)?.log_table(&table)?;
            }
            None => {
                let dirty = table.rows().iter().filter(|r| !r.is_clean()).count();
                if dirty > 0 {
                    tracing::warn!(
                        "{} of {} rows have defaulted features; pass --diagnostics to record them",
                        dirty,
                        table.len()
                    );
                }
            }
        }
        let summary = table.fallback_summary();
        for (kind, count) in &summary {
            tracing::info!("  {:<38} {} fallback(s)", kind.key(), count);
        }

        // ── Step 6: Output ────────────────────────────────────────────────────
        TableWriter::new(cfg.format).write_to_path(&table, cfg.output.as_deref())?;

        Ok(BuildReport {
            rows:            table.len(),
            fallbacks:       table.fallback_count(),
            summary,
            classifier_path: cfg.classifier_path.clone(),
        })
    }
}
