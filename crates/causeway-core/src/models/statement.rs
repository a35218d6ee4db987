use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::entity::EntityRef;
use crate::errors::CausewayResult;

/// Edge polarity carried by a statement: positive regulation, negative
/// regulation, or no sign at all (e.g. a bare binding event).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Negative,
    #[default]
    Unsigned,
}

impl Polarity {
    /// +1 / -1 / 0.
    pub fn sign(self) -> i8 {
        match self {
            Polarity::Positive => 1,
            Polarity::Negative => -1,
            Polarity::Unsigned => 0,
        }
    }

    /// Sign composition along a path. Anything composed with an unsigned
    /// step is unsigned.
    pub fn compose(self, other: Polarity) -> Polarity {
        match (self, other) {
            (Polarity::Unsigned, _) | (_, Polarity::Unsigned) => Polarity::Unsigned,
            (a, b) if a == b => Polarity::Positive,
            _ => Polarity::Negative,
        }
    }
}

/// Role an entity plays in a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Subject,
    Object,
}

/// One participating entity with its role.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Participant {
    pub role: Role,
    pub entity: EntityRef,
}

impl Participant {
    pub fn subject(entity: EntityRef) -> Self {
        Self {
            role: Role::Subject,
            entity,
        }
    }

    pub fn object(entity: EntityRef) -> Self {
        Self {
            role: Role::Object,
            entity,
        }
    }
}

/// Out-of-band curation status attached to a statement. `Incorrect`
/// statements are excluded from every graph build.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum CurationStatus {
    #[default]
    Uncurated,
    Correct,
    Incorrect,
    Ambiguous,
}

/// blake3 hex digest identifying a statement by content.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatementHash(pub String);

impl std::fmt::Display for StatementHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Semantic identity coarser than the content hash: statement type, the
/// unordered entity key set, and polarity. Two statements with the same
/// redundancy key explain the same thing even if their participant order
/// or roles differ.
pub type RedundancyKey = (String, BTreeSet<String>, Polarity);

/// An extracted causal assertion. Identity is the content hash over
/// (type, participants, polarity); belief, evidence count and curation are
/// annotations attached out of band and do not affect identity. Immutable
/// once hashed — a superseding statement gets a new hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    /// Type tag, e.g. `Activation`, `Inhibition`, `Phosphorylation`.
    pub stmt_type: String,
    /// Ordered participants with roles.
    pub participants: Vec<Participant>,
    /// Sign this statement implies on its edges.
    pub polarity: Polarity,
    /// Number of supporting evidences.
    pub evidence_count: u32,
    /// Belief score in [0, 1].
    pub belief: f64,
    /// Curation status.
    pub curation: CurationStatus,
    /// Content hash (see `compute_hash`).
    pub hash: StatementHash,
}

/// The identity-bearing subset of a statement, serialized canonically.
#[derive(Serialize)]
struct CanonicalStatement<'a> {
    stmt_type: &'a str,
    participants: &'a [Participant],
    polarity: Polarity,
}

impl Statement {
    /// Build a statement, computing its content hash. Belief is clamped
    /// into [0, 1].
    pub fn new(
        stmt_type: impl Into<String>,
        participants: Vec<Participant>,
        polarity: Polarity,
        evidence_count: u32,
        belief: f64,
        curation: CurationStatus,
    ) -> CausewayResult<Self> {
        let stmt_type = stmt_type.into();
        let hash = Self::compute_hash(&stmt_type, &participants, polarity)?;
        Ok(Self {
            stmt_type,
            participants,
            polarity,
            evidence_count,
            belief: belief.clamp(0.0, 1.0),
            curation,
            hash,
        })
    }

    /// blake3 over the canonical JSON of the identity-bearing fields.
    pub fn compute_hash(
        stmt_type: &str,
        participants: &[Participant],
        polarity: Polarity,
    ) -> CausewayResult<StatementHash> {
        let canonical = CanonicalStatement {
            stmt_type,
            participants,
            polarity,
        };
        let serialized = serde_json::to_string(&canonical)?;
        Ok(StatementHash(
            blake3::hash(serialized.as_bytes()).to_hex().to_string(),
        ))
    }

    /// Entities playing the subject role, in participant order.
    pub fn subjects(&self) -> impl Iterator<Item = &EntityRef> {
        self.participants
            .iter()
            .filter(|p| p.role == Role::Subject)
            .map(|p| &p.entity)
    }

    /// Entities playing the object role, in participant order.
    pub fn objects(&self) -> impl Iterator<Item = &EntityRef> {
        self.participants
            .iter()
            .filter(|p| p.role == Role::Object)
            .map(|p| &p.entity)
    }

    /// All entity keys, deduplicated.
    pub fn entity_keys(&self) -> BTreeSet<String> {
        self.participants.iter().map(|p| p.entity.key()).collect()
    }

    /// Coarse semantic key used by the new-statement redundancy filter.
    pub fn redundancy_key(&self) -> RedundancyKey {
        (self.stmt_type.clone(), self.entity_keys(), self.polarity)
    }
}
