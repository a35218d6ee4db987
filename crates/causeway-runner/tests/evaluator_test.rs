//! Tests for the evaluator: variant policy, skip semantics, idempotence.

use std::collections::BTreeSet;

use causeway_core::config::SearchConfig;
use causeway_core::models::{
    CurationStatus, EntityRef, GraphVariant, Participant, Polarity, RunSummary, Statement,
    StatementHash, TestCorpus, TestOutcome, TestStatement,
};
use causeway_graph::{build, CausalGraph, StatementFilter};
use causeway_runner::evaluate;

fn make_statement(subj: &str, obj: &str, polarity: Polarity, belief: f64) -> Statement {
    Statement::new(
        "Activation",
        vec![
            Participant::subject(EntityRef::new("HGNC", subj)),
            Participant::object(EntityRef::new("HGNC", obj)),
        ],
        polarity,
        1,
        belief,
        CurationStatus::Uncurated,
    )
    .unwrap()
}

fn make_test(source: &str, target: &str, expected: Option<Polarity>) -> TestStatement {
    TestStatement::new(
        "Activation",
        EntityRef::new("HGNC", source),
        EntityRef::new("HGNC", target),
        expected,
    )
    .unwrap()
}

fn graphs(statements: &[Statement], variants: &[GraphVariant]) -> Vec<CausalGraph> {
    variants
        .iter()
        .map(|&v| build(statements, v, &StatementFilter::default()).unwrap())
        .collect()
}

fn hashes(statements: &[Statement]) -> BTreeSet<StatementHash> {
    statements.iter().map(|s| s.hash.clone()).collect()
}

#[test]
fn any_variant_passing_passes_the_test() {
    let statements = vec![
        make_statement("A", "B", Polarity::Positive, 0.9),
        make_statement("B", "C", Polarity::Positive, 0.8),
    ];
    let graphs = graphs(&statements, &[GraphVariant::Signed, GraphVariant::Unsigned]);

    // Signed search rejects the positive chain for a negative expectation;
    // unsigned search ignores polarity and passes.
    let corpus = TestCorpus::new(
        "corpus",
        "1",
        vec![make_test("A", "C", Some(Polarity::Negative))],
    );
    let (record, skipped) = evaluate(
        &graphs,
        &corpus,
        &SearchConfig::default(),
        "model",
        hashes(&statements),
    );

    assert!(skipped.is_empty());
    let outcome = record.outcomes.values().next().unwrap();
    assert!(!outcome.by_variant[&GraphVariant::Signed].passed());
    assert!(outcome.by_variant[&GraphVariant::Unsigned].passed());
    assert!(outcome.overall_passed());
}

#[test]
fn malformed_tests_are_skipped_not_failed() {
    let statements = vec![make_statement("A", "B", Polarity::Positive, 0.9)];
    let graphs = graphs(&statements, &[GraphVariant::Unsigned]);

    let corpus = TestCorpus::new(
        "corpus",
        "1",
        vec![
            make_test("A", "B", None),
            make_test("", "B", None),
        ],
    );
    let (record, skipped) = evaluate(
        &graphs,
        &corpus,
        &SearchConfig::default(),
        "model",
        hashes(&statements),
    );

    assert_eq!(record.applied_count(), 1);
    assert_eq!(skipped.len(), 1);
    assert_eq!(record.passed_count(), 1);
}

#[test]
fn evaluation_is_idempotent() {
    let statements: Vec<Statement> = (0..8)
        .map(|i| {
            make_statement(
                &format!("N{i}"),
                &format!("N{}", (i + 1) % 8),
                Polarity::Positive,
                0.5 + (i as f64) * 0.05,
            )
        })
        .collect();
    let graphs = graphs(&statements, &[GraphVariant::Signed, GraphVariant::Unsigned]);

    let tests: Vec<TestStatement> = (0..8)
        .flat_map(|i| {
            (0..8)
                .filter(move |&j| j != i)
                .map(move |j| make_test(&format!("N{i}"), &format!("N{j}"), None))
        })
        .collect();
    let corpus = TestCorpus::new("corpus", "1", tests);
    let config = SearchConfig {
        max_depth: 4,
        max_paths: 2,
        timeout_ms: None,
    };

    let (first, _) = evaluate(&graphs, &corpus, &config, "model", hashes(&statements));
    let (second, _) = evaluate(&graphs, &corpus, &config, "model", hashes(&statements));

    // run_at differs; everything the diff consumes must not.
    assert_eq!(first.outcomes, second.outcomes);
    assert_eq!(first.entities, second.entities);
    assert_eq!(first.statement_hashes, second.statement_hashes);
}

#[test]
fn exhausted_budget_is_recorded_as_timed_out() {
    let statements = vec![
        make_statement("A", "B", Polarity::Positive, 0.9),
        make_statement("B", "C", Polarity::Positive, 0.8),
    ];
    let graphs = graphs(&statements, &[GraphVariant::Signed, GraphVariant::Unsigned]);

    // The path exists, but a zero budget expires before the first level.
    let corpus = TestCorpus::new("corpus", "1", vec![make_test("A", "C", None)]);
    let zero_budget = SearchConfig {
        max_depth: 3,
        max_paths: 1,
        timeout_ms: Some(0),
    };
    let (record, skipped) = evaluate(&graphs, &corpus, &zero_budget, "model", hashes(&statements));

    let outcome = record.outcomes.values().next().unwrap();
    for variant_outcome in outcome.by_variant.values() {
        assert_eq!(*variant_outcome, TestOutcome::TimedOut);
    }
    assert!(!outcome.overall_passed());
    assert!(outcome.overall_timed_out());

    let summary = RunSummary::from_record(&record, skipped);
    assert_eq!(summary.applied, 1);
    assert_eq!(summary.timed_out, 1);
    assert_eq!(summary.failed, 0, "timed out is not failed");
    assert_eq!(summary.passed, 0);
}

#[test]
fn record_carries_graph_metadata() {
    let statements = vec![make_statement("A", "B", Polarity::Positive, 0.9)];
    let graphs = graphs(&statements, &[GraphVariant::Signed, GraphVariant::Unsigned]);

    let corpus = TestCorpus::new("corpus", "3", vec![make_test("A", "B", None)]);
    let (record, _) = evaluate(
        &graphs,
        &corpus,
        &SearchConfig::default(),
        "model",
        hashes(&statements),
    );

    assert_eq!(record.corpus_version, "3");
    assert_eq!(
        record.variants,
        vec![GraphVariant::Signed, GraphVariant::Unsigned]
    );
    assert!(record.entities.contains("HGNC:A"));
    assert!(record.entities.contains("HGNC:B"));
}
