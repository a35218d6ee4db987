//! Test evaluation: every valid test against every built graph variant.
//!
//! Tests are independent, so they evaluate in parallel; the graphs are
//! read-only during the pass and all results land in ordered maps, so the
//! produced record is identical regardless of schedule.

use std::collections::{BTreeMap, BTreeSet};

use chrono::Utc;
use rayon::prelude::*;
use tracing::{debug, warn};

use causeway_core::config::SearchConfig;
use causeway_core::models::{
    EvaluationRecord, OutcomeByVariant, SkippedTest, StatementHash, TestCorpus, TestHash,
    TestOutcome, TestStatement,
};
use causeway_graph::{find_paths, CausalGraph};

/// Evaluate a corpus against the built graph variants.
///
/// Malformed corpus entries are skipped and reported, never counted as
/// failed. A variant whose build failed is simply absent from `graphs`;
/// the remaining variants still evaluate every test.
pub fn evaluate(
    graphs: &[CausalGraph],
    corpus: &TestCorpus,
    search: &SearchConfig,
    model_id: &str,
    statement_hashes: BTreeSet<StatementHash>,
) -> (EvaluationRecord, Vec<SkippedTest>) {
    let mut valid: Vec<&TestStatement> = Vec::with_capacity(corpus.tests.len());
    let mut skipped = Vec::new();
    for test in &corpus.tests {
        match test.validate() {
            Ok(()) => valid.push(test),
            Err(err) => {
                warn!(test = %test.hash, error = %err, "skipping malformed test");
                skipped.push(SkippedTest {
                    test: test.hash.0.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }

    let outcomes: BTreeMap<TestHash, OutcomeByVariant> = valid
        .par_iter()
        .map(|test| {
            let mut by_variant = BTreeMap::new();
            for graph in graphs {
                let found = find_paths(graph, test, search);
                let outcome = if !found.paths.is_empty() {
                    TestOutcome::Passed { paths: found.paths }
                } else if found.timed_out {
                    TestOutcome::TimedOut
                } else {
                    TestOutcome::Failed
                };
                by_variant.insert(graph.variant, outcome);
            }
            let result = OutcomeByVariant { by_variant };
            debug!(test = %test.hash, passed = result.overall_passed(), "evaluated test");
            (test.hash.clone(), result)
        })
        .collect();

    let record = EvaluationRecord {
        model_id: model_id.to_string(),
        corpus_id: corpus.id.clone(),
        corpus_version: corpus.version.clone(),
        run_at: Utc::now(),
        variants: graphs.iter().map(|g| g.variant).collect(),
        statement_hashes,
        entities: graphs.iter().flat_map(|g| g.entity_keys()).collect(),
        outcomes,
    };
    (record, skipped)
}
