//! Line-delimited JSON export of evaluation records: one object per
//! (test, variant) outcome. This is a compatibility surface consumed by the
//! bulk-export collaborators; field names are frozen.

use std::io::Write;

use serde::Serialize;

use causeway_core::errors::CausewayResult;
use causeway_core::models::{
    EvaluationRecord, GraphVariant, Path, Polarity, StatementHash, TestOutcome,
};

#[derive(Serialize)]
struct EdgeJson<'a> {
    source: &'a str,
    target: &'a str,
    polarity: Polarity,
    statements: &'a [StatementHash],
}

#[derive(Serialize)]
struct PathJson<'a> {
    nodes: Vec<String>,
    edges: Vec<EdgeJson<'a>>,
}

#[derive(Serialize)]
struct OutcomeRow<'a> {
    model: &'a str,
    corpus: &'a str,
    test: &'a str,
    variant: GraphVariant,
    status: &'a str,
    paths: Vec<PathJson<'a>>,
}

fn path_json(path: &Path) -> PathJson<'_> {
    PathJson {
        nodes: path.node_keys(),
        edges: path
            .edges
            .iter()
            .map(|e| EdgeJson {
                source: &e.source,
                target: &e.target,
                polarity: e.polarity,
                statements: &e.statements,
            })
            .collect(),
    }
}

fn status(outcome: &TestOutcome) -> &'static str {
    match outcome {
        TestOutcome::Passed { .. } => "passed",
        TestOutcome::Failed => "failed",
        TestOutcome::TimedOut => "timed_out",
    }
}

/// Write one JSON object per (test, variant) outcome, each on its own line.
/// Iteration follows the record's ordered maps, so output is deterministic.
pub fn write_jsonl<W: Write>(record: &EvaluationRecord, writer: &mut W) -> CausewayResult<()> {
    for (test, by_variant) in &record.outcomes {
        for (&variant, outcome) in &by_variant.by_variant {
            let row = OutcomeRow {
                model: &record.model_id,
                corpus: &record.corpus_id,
                test: &test.0,
                variant,
                status: status(outcome),
                paths: outcome.paths().iter().map(path_json).collect(),
            };
            serde_json::to_writer(&mut *writer, &row)?;
            writer.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Render the full record as a JSONL string.
pub fn to_jsonl_string(record: &EvaluationRecord) -> CausewayResult<String> {
    let mut out = String::new();
    for (test, by_variant) in &record.outcomes {
        for (&variant, outcome) in &by_variant.by_variant {
            let row = OutcomeRow {
                model: &record.model_id,
                corpus: &record.corpus_id,
                test: &test.0,
                variant,
                status: status(outcome),
                paths: outcome.paths().iter().map(path_json).collect(),
            };
            out.push_str(&serde_json::to_string(&row)?);
            out.push('\n');
        }
    }
    Ok(out)
}
