use serde::{Deserialize, Serialize};

use super::path::Path;
use super::statement::Statement;
use super::test_statement::TestHash;

/// A classified difference between two evaluation records (or one record and
/// the empty baseline on a first run). Derived by the differ, consumed by
/// notification/storage collaborators; never persisted by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChangeEvent {
    /// A statement not present in the previous run's statement set and not
    /// semantically redundant with one that was.
    NewStatement { statement: Statement },
    /// A test that was failed (or absent) previously and passed now,
    /// carrying the shortest accepted path.
    NewlyExplainedTest { test: TestHash, path: Path },
    /// An entity new to the graph that participates in passing paths.
    NewExplanatoryCapability {
        entity: String,
        tests: Vec<TestHash>,
    },
}
