use serde::{Deserialize, Serialize};

/// Normalized grounding key for an entity: a namespace (e.g. `HGNC`, `CHEBI`)
/// plus an identifier within it. Entities appear in many statements; two
/// references with the same key denote the same entity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    pub namespace: String,
    pub id: String,
}

impl EntityRef {
    pub fn new(namespace: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            id: id.into(),
        }
    }

    /// Rendered grounding key, `namespace:id`. The lexical order of these
    /// keys is the total order used for deterministic tie-breaks.
    pub fn key(&self) -> String {
        format!("{}:{}", self.namespace, self.id)
    }

    /// True when either component is empty; such references cannot ground.
    pub fn is_empty(&self) -> bool {
        self.namespace.is_empty() || self.id.is_empty()
    }
}

impl std::fmt::Display for EntityRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.namespace, self.id)
    }
}
