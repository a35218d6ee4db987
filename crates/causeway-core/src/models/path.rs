use serde::{Deserialize, Serialize};

use super::statement::{Polarity, StatementHash};

/// One step of a path: a directed edge with its sign and the hashes of the
/// statements supporting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathEdge {
    /// Source entity key.
    pub source: String,
    /// Target entity key.
    pub target: String,
    pub polarity: Polarity,
    /// Supporting statement hashes, sorted and deduplicated.
    pub statements: Vec<StatementHash>,
    /// Best supporting-statement belief for this edge.
    pub belief: f64,
}

/// An ordered edge sequence from a test's source entity to its target,
/// evidencing an explanation. Length is bounded by the configured search
/// depth; a path never revisits a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub edges: Vec<PathEdge>,
}

impl Path {
    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Entity keys visited, in order: source, intermediates, target.
    pub fn node_keys(&self) -> Vec<String> {
        let mut keys = Vec::with_capacity(self.edges.len() + 1);
        if let Some(first) = self.edges.first() {
            keys.push(first.source.clone());
        }
        for edge in &self.edges {
            keys.push(edge.target.clone());
        }
        keys
    }

    /// Composed polarity along the path.
    pub fn net_polarity(&self) -> Polarity {
        self.edges
            .iter()
            .fold(Polarity::Positive, |net, e| net.compose(e.polarity))
    }

    /// Weakest supporting belief along the path, the score used for
    /// equal-length ranking. 1.0 for an empty path.
    pub fn min_belief(&self) -> f64 {
        self.edges.iter().map(|e| e.belief).fold(1.0, f64::min)
    }

    /// True if any edge touches the given entity key.
    pub fn visits(&self, entity_key: &str) -> bool {
        self.edges
            .iter()
            .any(|e| e.source == entity_key || e.target == entity_key)
    }
}
