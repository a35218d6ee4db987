use crate::errors::CausewayResult;
use crate::models::EvaluationRecord;

/// Persistence collaborator for evaluation records, addressed by
/// (model id, corpus id, run date). The previous record is read once at the
/// start of a run and the current record is written once at the end, so
/// persistence is all-or-nothing per run.
pub trait RecordStore: Send + Sync {
    /// Most recent record for a (model, corpus) pair, if any.
    fn fetch_latest(
        &self,
        model_id: &str,
        corpus_id: &str,
    ) -> CausewayResult<Option<EvaluationRecord>>;

    /// Persist a freshly produced record.
    fn store(&self, record: &EvaluationRecord) -> CausewayResult<()>;
}
