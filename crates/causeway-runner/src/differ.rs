//! Snapshot diffing: classify what changed between the previous evaluation
//! round and the current one.

use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use causeway_core::models::{ChangeEvent, EvaluationRecord, RedundancyKey, Statement, StatementHash};

/// Compare `current` against `previous` and classify the changes, in
/// precedence order: new statements, newly explained tests, newly capable
/// entities.
///
/// `statements` is the full statement slice the current run was built from.
/// The statement set grows monotonically per model, so every previously
/// known statement is still in the slice; that is what lets the redundancy
/// filter recover the previous round's semantic keys without persisting
/// them.
///
/// With no previous record (first run), only new-statement events fire,
/// against the empty baseline: there is no "newly explained" without a
/// prior round.
pub fn diff(
    previous: Option<&EvaluationRecord>,
    current: &EvaluationRecord,
    statements: &[Statement],
) -> Vec<ChangeEvent> {
    let empty = BTreeSet::new();
    let prev_hashes: &BTreeSet<StatementHash> =
        previous.map_or(&empty, |record| &record.statement_hashes);

    let mut events = new_statement_events(prev_hashes, statements);

    if let Some(previous) = previous {
        events.extend(newly_explained_events(previous, current));
        events.extend(new_capability_events(previous, current));
    }

    debug!(
        model = %current.model_id,
        corpus = %current.corpus_id,
        events = events.len(),
        "diffed evaluation rounds"
    );
    events
}

/// Rule 1: statements absent from the previous round's statement set, minus
/// those semantically redundant with a known statement (same type, entity
/// set, and polarity).
fn new_statement_events(
    prev_hashes: &BTreeSet<StatementHash>,
    statements: &[Statement],
) -> Vec<ChangeEvent> {
    let known_keys: HashSet<RedundancyKey> = statements
        .iter()
        .filter(|s| prev_hashes.contains(&s.hash))
        .map(Statement::redundancy_key)
        .collect();

    let mut fresh: Vec<&Statement> = statements
        .iter()
        .filter(|s| !prev_hashes.contains(&s.hash) && !known_keys.contains(&s.redundancy_key()))
        .collect();
    fresh.sort_by(|a, b| a.hash.cmp(&b.hash));
    fresh.dedup_by(|a, b| a.hash == b.hash);

    fresh
        .into_iter()
        .map(|s| ChangeEvent::NewStatement {
            statement: s.clone(),
        })
        .collect()
}

/// Rule 2: tests failed (or absent) previously and passed now, carrying the
/// shortest accepted path.
fn newly_explained_events(
    previous: &EvaluationRecord,
    current: &EvaluationRecord,
) -> Vec<ChangeEvent> {
    current
        .outcomes
        .iter()
        .filter(|(test, outcome)| outcome.overall_passed() && !previous.test_passed(test))
        .filter_map(|(test, outcome)| {
            outcome.best_path().map(|path| ChangeEvent::NewlyExplainedTest {
                test: test.clone(),
                path: path.clone(),
            })
        })
        .collect()
}

/// Rule 3: entities new to the graph that participate in at least one
/// passing path, listing the tests they help explain.
fn new_capability_events(
    previous: &EvaluationRecord,
    current: &EvaluationRecord,
) -> Vec<ChangeEvent> {
    current
        .entities
        .difference(&previous.entities)
        .filter_map(|entity| {
            let tests: Vec<_> = current
                .outcomes
                .iter()
                .filter(|(_, outcome)| {
                    outcome
                        .by_variant
                        .values()
                        .flat_map(|o| o.paths().iter())
                        .any(|path| path.visits(entity))
                })
                .map(|(test, _)| test.clone())
                .collect();
            if tests.is_empty() {
                None
            } else {
                Some(ChangeEvent::NewExplanatoryCapability {
                    entity: entity.clone(),
                    tests,
                })
            }
        })
        .collect()
}
