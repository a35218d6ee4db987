use crate::errors::CausewayResult;
use crate::models::{Statement, TestCorpus};

/// Append-mostly set of statements keyed by content hash, with curation
/// annotations attached out of band.
pub trait StatementSource: Send + Sync {
    fn statements(&self, model_id: &str) -> CausewayResult<Vec<Statement>>;
}

/// Versioned, named test corpora; read-only per evaluation run.
pub trait CorpusSource: Send + Sync {
    fn corpus(&self, corpus_id: &str) -> CausewayResult<TestCorpus>;
}
