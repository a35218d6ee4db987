use serde::{Deserialize, Serialize};

use super::entity::EntityRef;
use super::statement::Polarity;
use crate::errors::{CausewayResult, CorpusError};

/// blake3 hex digest identifying a test statement by content.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestHash(pub String);

impl std::fmt::Display for TestHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An externally supplied observation the network is checked against: does
/// a supporting causal path exist from `source` to `target`? Read-only input,
/// drawn from a versioned test corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestStatement {
    pub stmt_type: String,
    pub source: EntityRef,
    pub target: EntityRef,
    /// Net path polarity the test expects, if it specifies a direction.
    /// Only the signed graph variant enforces this.
    pub expected_polarity: Option<Polarity>,
    pub hash: TestHash,
}

#[derive(Serialize)]
struct CanonicalTest<'a> {
    stmt_type: &'a str,
    source: &'a EntityRef,
    target: &'a EntityRef,
    expected_polarity: Option<Polarity>,
}

impl TestStatement {
    pub fn new(
        stmt_type: impl Into<String>,
        source: EntityRef,
        target: EntityRef,
        expected_polarity: Option<Polarity>,
    ) -> CausewayResult<Self> {
        let stmt_type = stmt_type.into();
        let canonical = CanonicalTest {
            stmt_type: &stmt_type,
            source: &source,
            target: &target,
            expected_polarity,
        };
        let serialized = serde_json::to_string(&canonical)?;
        let hash = TestHash(blake3::hash(serialized.as_bytes()).to_hex().to_string());
        Ok(Self {
            stmt_type,
            source,
            target,
            expected_polarity,
            hash,
        })
    }

    /// Reject malformed corpus entries. A skipped test is reported as
    /// skipped, never as failed: "failed" implies the model was evaluated
    /// against it.
    pub fn validate(&self) -> Result<(), CorpusError> {
        if self.source.is_empty() || self.target.is_empty() {
            return Err(CorpusError::MalformedTest {
                test: self.hash.0.clone(),
                reason: "ungrounded source or target entity".to_string(),
            });
        }
        if self.source == self.target {
            return Err(CorpusError::MalformedTest {
                test: self.hash.0.clone(),
                reason: "source and target are the same entity".to_string(),
            });
        }
        Ok(())
    }
}

/// A versioned, named, read-only sequence of test statements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCorpus {
    pub id: String,
    pub version: String,
    pub tests: Vec<TestStatement>,
}

impl TestCorpus {
    pub fn new(id: impl Into<String>, version: impl Into<String>, tests: Vec<TestStatement>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
            tests,
        }
    }
}
