//! In-memory collaborator implementations. Production deployments supply
//! their own backends behind the same traits; these cover tests and
//! embedding callers.

use dashmap::DashMap;

use causeway_core::errors::{CausewayResult, CorpusError};
use causeway_core::models::{EvaluationRecord, Statement, TestCorpus};
use causeway_core::traits::{CorpusSource, RecordStore, StatementSource};

/// Record store keeping every round per (model, corpus) key, newest last.
#[derive(Default)]
pub struct InMemoryRecordStore {
    records: DashMap<(String, String), Vec<EvaluationRecord>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rounds for a key.
    pub fn round_count(&self, model_id: &str, corpus_id: &str) -> usize {
        self.records
            .get(&(model_id.to_string(), corpus_id.to_string()))
            .map_or(0, |r| r.len())
    }
}

impl RecordStore for InMemoryRecordStore {
    fn fetch_latest(
        &self,
        model_id: &str,
        corpus_id: &str,
    ) -> CausewayResult<Option<EvaluationRecord>> {
        Ok(self
            .records
            .get(&(model_id.to_string(), corpus_id.to_string()))
            .and_then(|rounds| rounds.last().cloned()))
    }

    fn store(&self, record: &EvaluationRecord) -> CausewayResult<()> {
        self.records
            .entry((record.model_id.clone(), record.corpus_id.clone()))
            .or_default()
            .push(record.clone());
        Ok(())
    }
}

/// Fixed statement snapshot per model.
#[derive(Default)]
pub struct InMemoryStatementSource {
    by_model: DashMap<String, Vec<Statement>>,
}

impl InMemoryStatementSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, model_id: impl Into<String>, statements: Vec<Statement>) {
        self.by_model.insert(model_id.into(), statements);
    }
}

impl StatementSource for InMemoryStatementSource {
    fn statements(&self, model_id: &str) -> CausewayResult<Vec<Statement>> {
        Ok(self
            .by_model
            .get(model_id)
            .map(|s| s.clone())
            .unwrap_or_default())
    }
}

/// Fixed set of named corpora.
#[derive(Default)]
pub struct InMemoryCorpusSource {
    corpora: DashMap<String, TestCorpus>,
}

impl InMemoryCorpusSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, corpus: TestCorpus) {
        self.corpora.insert(corpus.id.clone(), corpus);
    }
}

impl CorpusSource for InMemoryCorpusSource {
    fn corpus(&self, corpus_id: &str) -> CausewayResult<TestCorpus> {
        self.corpora
            .get(corpus_id)
            .map(|c| c.clone())
            .ok_or_else(|| {
                CorpusError::LoadFailed {
                    corpus: corpus_id.to_string(),
                    reason: "unknown corpus".to_string(),
                }
                .into()
            })
    }
}
