//! Tests for the snapshot differ: the three rules, the redundancy filter,
//! and the monotonicity property.

use std::collections::BTreeSet;

use causeway_core::config::SearchConfig;
use causeway_core::models::{
    ChangeEvent, CurationStatus, EntityRef, EvaluationRecord, GraphVariant, Participant,
    Polarity, Statement, TestCorpus, TestStatement,
};
use causeway_graph::{build, StatementFilter};
use causeway_runner::{diff, evaluate};

fn make_statement(stmt_type: &str, subj: &str, obj: &str, polarity: Polarity) -> Statement {
    Statement::new(
        stmt_type,
        vec![
            Participant::subject(EntityRef::new("HGNC", subj)),
            Participant::object(EntityRef::new("HGNC", obj)),
        ],
        polarity,
        1,
        0.8,
        CurationStatus::Uncurated,
    )
    .unwrap()
}

fn make_test(source: &str, target: &str) -> TestStatement {
    TestStatement::new(
        "Activation",
        EntityRef::new("HGNC", source),
        EntityRef::new("HGNC", target),
        None,
    )
    .unwrap()
}

/// Build unsigned graphs and evaluate, producing a record for diffing.
fn record_for(statements: &[Statement], tests: &[TestStatement]) -> EvaluationRecord {
    let graph = build(
        statements,
        GraphVariant::Unsigned,
        &StatementFilter::default(),
    )
    .unwrap();
    let corpus = TestCorpus::new("corpus", "1", tests.to_vec());
    let hashes: BTreeSet<_> = statements.iter().map(|s| s.hash.clone()).collect();
    let (record, _) = evaluate(
        &[graph],
        &corpus,
        &SearchConfig::default(),
        "model",
        hashes,
    );
    record
}

#[test]
fn first_run_reports_only_new_statements() {
    let statements = vec![
        make_statement("Activation", "A", "B", Polarity::Positive),
        make_statement("Activation", "B", "C", Polarity::Positive),
    ];
    let current = record_for(&statements, &[make_test("A", "C")]);

    let events = diff(None, &current, &statements);
    assert_eq!(events.len(), 2);
    assert!(events
        .iter()
        .all(|e| matches!(e, ChangeEvent::NewStatement { .. })));
}

#[test]
fn failed_to_passed_emits_exactly_one_newly_explained() {
    let test = make_test("A", "C");
    let old = vec![make_statement("Activation", "A", "B", Polarity::Positive)];
    let previous = record_for(&old, std::slice::from_ref(&test));
    assert!(!previous.test_passed(&test.hash));

    let mut updated = old.clone();
    updated.push(make_statement("Activation", "B", "C", Polarity::Positive));
    let current = record_for(&updated, std::slice::from_ref(&test));
    assert!(current.test_passed(&test.hash));

    let events = diff(Some(&previous), &current, &updated);
    let explained: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            ChangeEvent::NewlyExplainedTest { test, path } => Some((test, path)),
            _ => None,
        })
        .collect();
    assert_eq!(explained.len(), 1);
    assert_eq!(*explained[0].0, test.hash);
    assert_eq!(explained[0].1.len(), 2, "carries the shortest path");
}

#[test]
fn unchanged_outcomes_emit_no_test_events() {
    let test = make_test("A", "B");
    let statements = vec![make_statement("Activation", "A", "B", Polarity::Positive)];
    let previous = record_for(&statements, std::slice::from_ref(&test));
    let current = record_for(&statements, std::slice::from_ref(&test));

    let events = diff(Some(&previous), &current, &statements);
    assert!(events.is_empty(), "identical rounds produce no events");

    // Both failed: a disconnected test stays silent too.
    let failing = make_test("B", "A");
    let previous = record_for(&statements, std::slice::from_ref(&failing));
    let current = record_for(&statements, std::slice::from_ref(&failing));
    assert!(diff(Some(&previous), &current, &statements).is_empty());
}

#[test]
fn redundant_statements_are_filtered() {
    let known = make_statement("Activation", "A", "B", Polarity::Positive);
    let previous = record_for(std::slice::from_ref(&known), &[make_test("A", "B")]);

    // Same type, same entity set, same polarity — different participant
    // order, so a different hash.
    let redundant = Statement::new(
        "Activation",
        vec![
            Participant::object(EntityRef::new("HGNC", "B")),
            Participant::subject(EntityRef::new("HGNC", "A")),
        ],
        Polarity::Positive,
        1,
        0.9,
        CurationStatus::Uncurated,
    )
    .unwrap();
    assert_ne!(known.hash, redundant.hash);

    // A genuinely distinct statement: different polarity.
    let distinct = make_statement("Inhibition", "A", "B", Polarity::Negative);

    let updated = vec![known.clone(), redundant, distinct.clone()];
    let current = record_for(&updated, &[make_test("A", "B")]);

    let new_statements: Vec<_> = diff(Some(&previous), &current, &updated)
        .into_iter()
        .filter_map(|e| match e {
            ChangeEvent::NewStatement { statement } => Some(statement.hash),
            _ => None,
        })
        .collect();
    assert_eq!(new_statements, vec![distinct.hash]);
}

#[test]
fn new_entity_on_passing_path_reports_capability() {
    let test = make_test("A", "C");
    let old = vec![make_statement("Activation", "A", "B", Polarity::Positive)];
    let previous = record_for(&old, std::slice::from_ref(&test));

    // D is new and sits on the only passing path A → D → C.
    let mut updated = old.clone();
    updated.push(make_statement("Activation", "A", "D", Polarity::Positive));
    updated.push(make_statement("Activation", "D", "C", Polarity::Positive));
    let current = record_for(&updated, std::slice::from_ref(&test));

    let events = diff(Some(&previous), &current, &updated);
    let capability: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            ChangeEvent::NewExplanatoryCapability { entity, tests } => Some((entity, tests)),
            _ => None,
        })
        .collect();
    assert!(capability
        .iter()
        .any(|(entity, tests)| *entity == "HGNC:D" && tests.contains(&test.hash)));
    // C is also new to the graph and on the path; B is not on any passing
    // path so it must not appear.
    assert!(!capability.iter().any(|(entity, _)| *entity == "HGNC:B"));
}

#[test]
fn monotonic_addition_without_new_edges_changes_nothing() {
    let test = make_test("A", "B");
    let base = vec![make_statement("Activation", "A", "B", Polarity::Positive)];
    let previous = record_for(&base, std::slice::from_ref(&test));

    // Same entities, same unsigned edge — merged into the existing one.
    let mut updated = base.clone();
    updated.push(make_statement("IncreaseAmount", "A", "B", Polarity::Positive));
    let current = record_for(&updated, std::slice::from_ref(&test));

    assert_eq!(
        previous.outcomes.keys().collect::<Vec<_>>(),
        current.outcomes.keys().collect::<Vec<_>>()
    );
    for (test_hash, outcome) in &previous.outcomes {
        assert_eq!(
            outcome.overall_passed(),
            current.outcomes[test_hash].overall_passed(),
            "outcome flipped for {test_hash}"
        );
    }

    let events = diff(Some(&previous), &current, &updated);
    // The added statement is a distinct type, so it is reported; but no
    // test or capability events fire.
    assert!(events
        .iter()
        .all(|e| matches!(e, ChangeEvent::NewStatement { .. })));
}
