//! Run orchestration: builder → evaluator → differ per (model, corpus)
//! pair, with per-pair run locks and batch fan-out across models.

use std::sync::Arc;

use dashmap::DashMap;
use rayon::prelude::*;
use tracing::{info, warn};

use causeway_core::config::ModelConfig;
use causeway_core::errors::{BuildError, CausewayError, CausewayResult, CorpusError, PersistenceError};
use causeway_core::models::{RunReport, RunSummary, Statement, TestCorpus};
use causeway_core::traits::{CorpusSource, RecordStore, StatementSource};
use causeway_graph::{build, StatementFilter};

use crate::differ;
use crate::evaluator;

type RunKey = (String, String);

/// Result of one (model, corpus) unit in a batch run. A failed unit never
/// aborts the others; its error is captured here.
#[derive(Debug)]
pub struct ModelRunOutcome {
    pub model_id: String,
    pub corpus_id: String,
    pub result: CausewayResult<RunReport>,
}

/// Orchestrates evaluation runs against a record store.
///
/// Concurrent runs on the same (model, corpus) key are refused: the
/// previous/current record slot has exactly one writer at a time. Runs on
/// distinct keys proceed in parallel; no shared mutable state crosses them.
pub struct RunEngine {
    store: Arc<dyn RecordStore>,
    in_flight: DashMap<RunKey, ()>,
}

/// Releases the run lock when the run finishes, on success or failure.
struct RunGuard<'a> {
    locks: &'a DashMap<RunKey, ()>,
    key: RunKey,
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.locks.remove(&self.key);
    }
}

impl RunEngine {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            in_flight: DashMap::new(),
        }
    }

    fn acquire(&self, key: RunKey) -> CausewayResult<RunGuard<'_>> {
        match self.in_flight.entry(key.clone()) {
            dashmap::mapref::entry::Entry::Occupied(_) => {
                Err(PersistenceError::RunInProgress {
                    model: key.0,
                    corpus: key.1,
                }
                .into())
            }
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                entry.insert(());
                Ok(RunGuard {
                    locks: &self.in_flight,
                    key,
                })
            }
        }
    }

    /// Run one model against one corpus: the sole entry point.
    ///
    /// Fetches the previous record, builds every configured graph variant
    /// (a variant's build failure is absorbed unless all fail), evaluates,
    /// diffs, and stores the new record. Persistence happens once, at the
    /// end; an abort anywhere leaves no partial record behind.
    pub fn run(
        &self,
        config: &ModelConfig,
        statements: &[Statement],
        corpus: &TestCorpus,
    ) -> CausewayResult<RunReport> {
        let _guard = self.acquire((config.model_id.clone(), corpus.id.clone()))?;
        info!(
            model = %config.model_id,
            corpus = %corpus.id,
            version = %corpus.version,
            statements = statements.len(),
            tests = corpus.tests.len(),
            "starting evaluation run"
        );

        if corpus.tests.is_empty() {
            return Err(CorpusError::EmptyCorpus {
                corpus: corpus.id.clone(),
            }
            .into());
        }

        let previous = self.store.fetch_latest(&config.model_id, &corpus.id)?;
        let filter = StatementFilter::from_corpus_config(&config.corpus_config(&corpus.id));

        let mut graphs = Vec::with_capacity(config.variants.len());
        let mut last_build_error: Option<BuildError> = None;
        for &variant in &config.variants {
            match build(statements, variant, &filter) {
                Ok(graph) => graphs.push(graph),
                Err(err) => {
                    warn!(model = %config.model_id, %variant, error = %err, "graph build failed");
                    last_build_error = Some(err);
                }
            }
        }
        if graphs.is_empty() {
            return Err(CausewayError::Build(last_build_error.unwrap_or(
                BuildError::EmptyInput {
                    variant: "any".to_string(),
                },
            )));
        }

        let statement_hashes = statements.iter().map(|s| s.hash.clone()).collect();
        let (record, skipped) = evaluator::evaluate(
            &graphs,
            corpus,
            &config.search,
            &config.model_id,
            statement_hashes,
        );
        let events = differ::diff(previous.as_ref(), &record, statements);
        let summary = RunSummary::from_record(&record, skipped);

        self.store.store(&record)?;

        info!(
            model = %config.model_id,
            corpus = %corpus.id,
            applied = summary.applied,
            passed = summary.passed,
            failed = summary.failed,
            timed_out = summary.timed_out,
            skipped = summary.skipped.len(),
            events = events.len(),
            "evaluation run complete"
        );
        Ok(RunReport {
            record,
            events,
            summary,
        })
    }

    /// Run every configured (model, corpus) pair, in parallel. Each pair is
    /// fully independent: its statements and corpus are fetched for it
    /// alone, and a failure is captured in its outcome without touching the
    /// other pairs.
    pub fn run_all(
        &self,
        configs: &[ModelConfig],
        statements: &dyn StatementSource,
        corpora: &dyn CorpusSource,
    ) -> Vec<ModelRunOutcome> {
        let pairs: Vec<(&ModelConfig, &str)> = configs
            .iter()
            .flat_map(|config| {
                config
                    .corpora
                    .iter()
                    .map(move |c| (config, c.corpus_id.as_str()))
            })
            .collect();

        pairs
            .par_iter()
            .map(|&(config, corpus_id)| {
                let result = self.run_pair(config, corpus_id, statements, corpora);
                if let Err(err) = &result {
                    warn!(model = %config.model_id, corpus = corpus_id, error = %err, "model run aborted");
                }
                ModelRunOutcome {
                    model_id: config.model_id.clone(),
                    corpus_id: corpus_id.to_string(),
                    result,
                }
            })
            .collect()
    }

    fn run_pair(
        &self,
        config: &ModelConfig,
        corpus_id: &str,
        statements: &dyn StatementSource,
        corpora: &dyn CorpusSource,
    ) -> CausewayResult<RunReport> {
        let statements = statements.statements(&config.model_id)?;
        let corpus = corpora.corpus(corpus_id)?;
        self.run(config, &statements, &corpus)
    }
}
