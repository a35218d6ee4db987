use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::path::Path;
use super::statement::StatementHash;
use super::test_statement::TestHash;

/// Which causal-graph semantics a build uses. Signed preserves edge
/// polarity; unsigned erases it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum GraphVariant {
    Signed,
    Unsigned,
}

impl std::fmt::Display for GraphVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphVariant::Signed => f.write_str("signed"),
            GraphVariant::Unsigned => f.write_str("unsigned"),
        }
    }
}

/// Outcome of one test under one graph variant. `TimedOut` marks a search
/// that exhausted its budget before finding anything; it counts as
/// not-passed but is reported distinctly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TestOutcome {
    Passed { paths: Vec<Path> },
    Failed,
    TimedOut,
}

impl TestOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, TestOutcome::Passed { .. })
    }

    pub fn timed_out(&self) -> bool {
        matches!(self, TestOutcome::TimedOut)
    }

    /// Accepted paths, best first. Empty for non-passing outcomes.
    pub fn paths(&self) -> &[Path] {
        match self {
            TestOutcome::Passed { paths } => paths,
            _ => &[],
        }
    }
}

/// Per-variant outcomes for one test. A model explains a test if it can do
/// so under any graph semantics it supports, so the overall outcome is
/// passed iff any variant passed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OutcomeByVariant {
    pub by_variant: BTreeMap<GraphVariant, TestOutcome>,
}

impl OutcomeByVariant {
    pub fn overall_passed(&self) -> bool {
        self.by_variant.values().any(TestOutcome::passed)
    }

    /// All variants exhausted their budget and none passed.
    pub fn overall_timed_out(&self) -> bool {
        !self.overall_passed() && self.by_variant.values().any(TestOutcome::timed_out)
    }

    /// The best accepted path across variants: shortest, then highest
    /// minimum belief, then lexical node order. Deterministic because the
    /// variant map is ordered.
    pub fn best_path(&self) -> Option<&Path> {
        self.by_variant
            .values()
            .flat_map(|o| o.paths().iter())
            .min_by(|a, b| {
                a.len()
                    .cmp(&b.len())
                    .then_with(|| b.min_belief().total_cmp(&a.min_belief()))
                    .then_with(|| a.node_keys().cmp(&b.node_keys()))
            })
    }
}

/// The full set of per-test outcomes for one (model, test-corpus) pair at a
/// point in time. Recomputed wholesale each run, never patched; persisted as
/// the "current" snapshot and read back as "previous" on the next run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub model_id: String,
    pub corpus_id: String,
    pub corpus_version: String,
    pub run_at: DateTime<Utc>,
    /// Variants that were actually built for this run.
    pub variants: Vec<GraphVariant>,
    /// Hashes of the full statement set the run was given (pre-filter).
    pub statement_hashes: BTreeSet<StatementHash>,
    /// Entity keys present in any built graph.
    pub entities: BTreeSet<String>,
    /// Per-test outcomes, keyed by test hash.
    pub outcomes: BTreeMap<TestHash, OutcomeByVariant>,
}

impl EvaluationRecord {
    pub fn test_passed(&self, test: &TestHash) -> bool {
        self.outcomes
            .get(test)
            .is_some_and(OutcomeByVariant::overall_passed)
    }

    pub fn passed_count(&self) -> usize {
        self.outcomes
            .values()
            .filter(|o| o.overall_passed())
            .count()
    }

    pub fn timed_out_count(&self) -> usize {
        self.outcomes
            .values()
            .filter(|o| o.overall_timed_out())
            .count()
    }

    pub fn applied_count(&self) -> usize {
        self.outcomes.len()
    }
}
