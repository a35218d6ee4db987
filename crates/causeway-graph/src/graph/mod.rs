//! The causal graph: a directed multigraph over entities with a string-keyed
//! node index, one edge per (source, target, polarity) triple.

pub mod builder;

use std::collections::{BTreeSet, HashMap};

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use causeway_core::models::{GraphVariant, Polarity, StatementHash};

/// Node payload: the entity's rendered grounding key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityNode {
    pub key: String,
}

/// Edge payload: polarity plus the supporting statements. Parallel edges of
/// identical polarity are merged at build time, so `statements` is the union
/// of every supporting hash, sorted and deduplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct CausalEdge {
    pub polarity: Polarity,
    pub statements: Vec<StatementHash>,
    /// Best supporting-statement belief.
    pub belief: f64,
}

/// A causal graph over entities, tagged with the variant it was built as.
/// Identity is the node/edge set, not construction order: two builds from
/// the same statement set compare equal via [`CausalGraph::edge_fingerprint`].
#[derive(Debug, Clone)]
pub struct CausalGraph {
    pub graph: StableDiGraph<EntityNode, CausalEdge>,
    pub variant: GraphVariant,
    node_index: HashMap<String, NodeIndex>,
}

impl CausalGraph {
    pub fn new(variant: GraphVariant) -> Self {
        Self {
            graph: StableDiGraph::new(),
            variant,
            node_index: HashMap::new(),
        }
    }

    /// Node index for an entity key, inserting the node if absent.
    pub fn ensure_node(&mut self, key: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(key) {
            return idx;
        }
        let idx = self.graph.add_node(EntityNode {
            key: key.to_string(),
        });
        self.node_index.insert(key.to_string(), idx);
        idx
    }

    /// Node index for an entity key, if present.
    pub fn node(&self, key: &str) -> Option<NodeIndex> {
        self.node_index.get(key).copied()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All entity keys, sorted.
    pub fn entity_keys(&self) -> BTreeSet<String> {
        self.node_index.keys().cloned().collect()
    }

    /// Order-independent handle on the edge set: one entry per edge with its
    /// endpoints, polarity, and supporting hashes. Two graphs built from the
    /// same statement set produce identical fingerprints regardless of
    /// insertion order.
    pub fn edge_fingerprint(&self) -> BTreeSet<(String, String, Polarity, Vec<StatementHash>)> {
        self.graph
            .edge_references()
            .map(|e| {
                let src = &self.graph[e.source()].key;
                let tgt = &self.graph[e.target()].key;
                (
                    src.clone(),
                    tgt.clone(),
                    e.weight().polarity,
                    e.weight().statements.clone(),
                )
            })
            .collect()
    }

    /// Merge an edge into the graph: if an edge with the same endpoints and
    /// polarity exists, union the supporting hashes and keep the higher
    /// belief; otherwise insert a new edge.
    pub(crate) fn merge_edge(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
        polarity: Polarity,
        statement: StatementHash,
        belief: f64,
    ) {
        let existing = self
            .graph
            .edges_connecting(source, target)
            .find(|e| e.weight().polarity == polarity)
            .map(|e| e.id());
        match existing {
            Some(edge_idx) => {
                let weight = &mut self.graph[edge_idx];
                if let Err(pos) = weight.statements.binary_search(&statement) {
                    weight.statements.insert(pos, statement);
                }
                weight.belief = weight.belief.max(belief);
            }
            None => {
                self.graph.add_edge(
                    source,
                    target,
                    CausalEdge {
                        polarity,
                        statements: vec![statement],
                        belief,
                    },
                );
            }
        }
    }
}
