//! Level-by-level BFS over partial paths. Expanding a whole depth level
//! before selecting keeps the shorter-first / higher-belief / lexical
//! tie-break exact: every candidate of a given length is seen before any is
//! chosen.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use petgraph::stable_graph::NodeIndex;
use petgraph::visit::EdgeRef;

use causeway_core::config::SearchConfig;
use causeway_core::models::{Path, PathEdge, Polarity, TestStatement};

use super::polarity;
use super::SearchResult;
use crate::graph::CausalGraph;

/// A partial path: the node it currently ends at, the edges walked so far,
/// the per-path visited set (cycles are excluded by construction), and the
/// composed polarity.
struct Partial {
    node: NodeIndex,
    edges: Vec<PathEdge>,
    visited: HashSet<NodeIndex>,
    net: Polarity,
}

pub fn run(graph: &CausalGraph, test: &TestStatement, config: &SearchConfig) -> SearchResult {
    let mut result = SearchResult::default();
    if config.max_paths == 0 || config.max_depth == 0 {
        return result;
    }
    let (Some(src), Some(tgt)) = (graph.node(&test.source.key()), graph.node(&test.target.key()))
    else {
        // An endpoint the graph has never seen cannot be explained.
        return result;
    };

    let deadline = config
        .timeout_ms
        .map(|ms| Instant::now() + Duration::from_millis(ms));

    let mut frontier = vec![Partial {
        node: src,
        edges: Vec::new(),
        visited: HashSet::from([src]),
        net: Polarity::Positive,
    }];

    for depth in 1..=config.max_depth {
        let mut next = Vec::new();
        let mut accepted: Vec<Path> = Vec::new();

        for partial in &frontier {
            if deadline.is_some_and(|d| Instant::now() >= d) {
                result.timed_out = true;
                break;
            }
            for edge in graph.graph.edges(partial.node) {
                let neighbor = edge.target();
                if partial.visited.contains(&neighbor) {
                    continue;
                }
                let weight = edge.weight();
                let net = partial.net.compose(weight.polarity);
                let step = PathEdge {
                    source: graph.graph[partial.node].key.clone(),
                    target: graph.graph[neighbor].key.clone(),
                    polarity: weight.polarity,
                    statements: weight.statements.clone(),
                    belief: weight.belief,
                };
                if neighbor == tgt {
                    if polarity::accepts(graph.variant, net, test.expected_polarity) {
                        let mut edges = partial.edges.clone();
                        edges.push(step);
                        accepted.push(Path { edges });
                    }
                } else if depth < config.max_depth {
                    let mut visited = partial.visited.clone();
                    visited.insert(neighbor);
                    let mut edges = partial.edges.clone();
                    edges.push(step);
                    next.push(Partial {
                        node: neighbor,
                        edges,
                        visited,
                        net,
                    });
                }
            }
        }

        // Rank this level's candidates: highest minimum belief first, then
        // lexical node-key order. Shorter paths already won by being
        // selected in an earlier level. Parallel edges of opposite polarity
        // can yield paths with identical node keys, so the polarity sequence
        // is the final disambiguator.
        accepted.sort_by(|a, b| {
            b.min_belief()
                .total_cmp(&a.min_belief())
                .then_with(|| a.node_keys().cmp(&b.node_keys()))
                .then_with(|| {
                    a.edges
                        .iter()
                        .map(|e| e.polarity)
                        .cmp(b.edges.iter().map(|e| e.polarity))
                })
        });
        for path in accepted {
            if result.paths.len() >= config.max_paths {
                break;
            }
            result.paths.push(path);
        }

        if result.paths.len() >= config.max_paths || result.timed_out || next.is_empty() {
            break;
        }
        frontier = next;
    }

    result
}
