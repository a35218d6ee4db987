use serde::{Deserialize, Serialize};

use super::change_event::ChangeEvent;
use super::record::EvaluationRecord;

/// A corpus entry that was not evaluated, with the reason. Skipped is
/// reported distinctly from failed in every run summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedTest {
    pub test: String,
    pub reason: String,
}

/// Operator-facing summary of one run: applied/passed/failed/timed-out
/// counts plus the skipped-test list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub model_id: String,
    pub corpus_id: String,
    pub applied: usize,
    pub passed: usize,
    pub failed: usize,
    pub timed_out: usize,
    pub skipped: Vec<SkippedTest>,
}

impl RunSummary {
    pub fn from_record(record: &EvaluationRecord, skipped: Vec<SkippedTest>) -> Self {
        let applied = record.applied_count();
        let passed = record.passed_count();
        let timed_out = record.timed_out_count();
        Self {
            model_id: record.model_id.clone(),
            corpus_id: record.corpus_id.clone(),
            applied,
            passed,
            failed: applied - passed - timed_out,
            timed_out,
            skipped,
        }
    }

    /// Passed over applied. 0.0 when nothing was applied.
    pub fn pass_ratio(&self) -> f64 {
        if self.applied == 0 {
            0.0
        } else {
            self.passed as f64 / self.applied as f64
        }
    }
}

/// Round-over-round numeric deltas between two evaluation records, the
/// figures the dashboard and notification collaborators consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsDelta {
    pub statements: i64,
    pub applied: i64,
    pub passed: i64,
    pub pass_ratio: f64,
}

impl StatsDelta {
    pub fn between(previous: &EvaluationRecord, current: &EvaluationRecord) -> Self {
        let ratio = |r: &EvaluationRecord| {
            if r.applied_count() == 0 {
                0.0
            } else {
                r.passed_count() as f64 / r.applied_count() as f64
            }
        };
        Self {
            statements: current.statement_hashes.len() as i64
                - previous.statement_hashes.len() as i64,
            applied: current.applied_count() as i64 - previous.applied_count() as i64,
            passed: current.passed_count() as i64 - previous.passed_count() as i64,
            pass_ratio: ratio(current) - ratio(previous),
        }
    }
}

/// Everything one run produces: the record, the classified change events,
/// and the operator summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub record: EvaluationRecord,
    pub events: Vec<ChangeEvent>,
    pub summary: RunSummary,
}
