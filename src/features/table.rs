// ============================================================
// Layer 5 — Table Builder
// ============================================================
// Runs the row processor over a candidate list and merges
// each vector onto its candidate.
//
// Rows are independent, so `build_parallel` hands them to a
// rayon worker pool. Collecting an indexed parallel iterator
// into a Vec keeps the input order, so both builders return
// row i for candidate i.
//
// Reference: rayon crate documentation (IndexedParallelIterator)

use anyhow::{Context, Result};
use rayon::prelude::*;

use super::RowProcessor;
use crate::domain::candidate::Candidate;
use crate::domain::result_row::{ResultRow, ResultTable};

pub struct TableBuilder {
    processor: RowProcessor,
    /// Worker threads for `build_parallel`; 0 uses rayon's global pool
    jobs: usize,
}

impl TableBuilder {
    pub fn new(processor: RowProcessor) -> Self {
        Self { processor, jobs: 0 }
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    pub fn processor(&self) -> &RowProcessor {
        &self.processor
    }

    /// Build the table on the calling thread.
    pub fn build(&self, candidates: Vec<Candidate>) -> ResultTable {
        let rows: Vec<ResultRow> = candidates
            .into_iter()
            .enumerate()
            .map(|(idx, c)| self.row(idx, c))
            .collect();
        self.finish(rows)
    }

    /// Build the table on a worker pool. Fails only if a
    /// dedicated pool of `jobs` threads cannot be started.
    pub fn build_parallel(&self, candidates: Vec<Candidate>) -> Result<ResultTable> {
        let run = || -> Vec<ResultRow> {
            candidates
                .into_par_iter()
                .enumerate()
                .map(|(idx, c)| self.row(idx, c))
                .collect()
        };

        let rows = if self.jobs == 0 {
            run()
        } else {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.jobs)
                .build()
                .with_context(|| format!("Cannot start a pool of {} worker threads", self.jobs))?;
            pool.install(run)
        };
        Ok(self.finish(rows))
    }

    fn row(&self, idx: usize, candidate: Candidate) -> ResultRow {
        let outcome = self.processor.compute_with_diagnostics(&candidate);
        if !outcome.fallbacks.is_empty() {
            tracing::debug!(
                "Row {}: {} feature(s) fell back to default",
                idx,
                outcome.fallbacks.len()
            );
        }
        ResultRow::new(candidate, outcome.features, outcome.fallbacks)
    }

    fn finish(&self, rows: Vec<ResultRow>) -> ResultTable {
        let table = ResultTable::new(rows);
        tracing::info!(
            "Built feature table: {} rows, {} fallbacks",
            table.len(),
            table.fallback_count()
        );
        table
    }
}
