//! Graph assembly: filter the statement snapshot, then add one edge per
//! (subject, object) role pair each surviving statement implies.

use std::collections::BTreeSet;

use tracing::debug;

use causeway_core::config::CorpusConfig;
use causeway_core::errors::BuildError;
use causeway_core::models::{CurationStatus, GraphVariant, Polarity, Statement};

use super::CausalGraph;

/// Build-time statement filters: curation is always enforced; belief and
/// namespace restrictions apply when configured.
#[derive(Debug, Clone, Default)]
pub struct StatementFilter {
    pub min_belief: Option<f64>,
    pub namespaces: Option<BTreeSet<String>>,
}

impl StatementFilter {
    pub fn from_corpus_config(config: &CorpusConfig) -> Self {
        Self {
            min_belief: config.min_belief,
            namespaces: config.namespaces.clone(),
        }
    }

    fn keeps(&self, stmt: &Statement) -> bool {
        if stmt.curation == CurationStatus::Incorrect {
            return false;
        }
        if let Some(min) = self.min_belief {
            if stmt.belief < min {
                return false;
            }
        }
        if let Some(namespaces) = &self.namespaces {
            if !stmt
                .participants
                .iter()
                .all(|p| namespaces.contains(&p.entity.namespace))
            {
                return false;
            }
        }
        true
    }
}

/// Build a causal graph from a statement snapshot.
///
/// The signed variant preserves polarity and drops statements without one;
/// the unsigned variant collapses polarity on every edge. Parallel edges of
/// identical polarity merge, keeping the union of supporting hashes.
/// Insertion order never affects the result. A surviving statement with no
/// subject/object pair cannot imply an edge and fails the build.
pub fn build(
    statements: &[Statement],
    variant: GraphVariant,
    filter: &StatementFilter,
) -> Result<CausalGraph, BuildError> {
    let mut graph = CausalGraph::new(variant);
    let mut surviving = 0usize;

    for stmt in statements {
        if !filter.keeps(stmt) {
            continue;
        }
        if stmt.subjects().next().is_none() || stmt.objects().next().is_none() {
            return Err(BuildError::InvalidStatement {
                hash: stmt.hash.0.clone(),
                reason: "no subject/object pair".to_string(),
            });
        }
        let polarity = match variant {
            GraphVariant::Signed => match stmt.polarity {
                Polarity::Unsigned => continue,
                signed => signed,
            },
            GraphVariant::Unsigned => Polarity::Unsigned,
        };
        surviving += 1;
        for subject in stmt.subjects() {
            for object in stmt.objects() {
                if subject == object {
                    continue;
                }
                let src = graph.ensure_node(&subject.key());
                let tgt = graph.ensure_node(&object.key());
                graph.merge_edge(src, tgt, polarity, stmt.hash.clone(), stmt.belief);
            }
        }
    }

    if surviving == 0 {
        return Err(BuildError::EmptyInput {
            variant: variant.to_string(),
        });
    }

    debug!(
        variant = %variant,
        statements = surviving,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built causal graph"
    );
    Ok(graph)
}
