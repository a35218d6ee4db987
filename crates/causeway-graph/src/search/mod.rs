//! Bounded path search: breadth-first enumeration of supporting paths from a
//! test's source entity to its target, capped by depth, result count, and a
//! wall-clock budget. Never mutates the graph; deterministic across runs and
//! thread schedules.

pub mod bfs;
pub mod polarity;

use causeway_core::config::SearchConfig;
use causeway_core::models::{Path, TestStatement};

use crate::graph::CausalGraph;

/// Outcome of one search: accepted paths in rank order, plus whether the
/// wall-clock budget ran out before the frontier was exhausted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResult {
    pub paths: Vec<Path>,
    pub timed_out: bool,
}

/// Find up to `config.max_paths` supporting paths for `test` in `graph`.
///
/// Paths are ranked shortest first; among equal-length candidates the path
/// with the highest minimum supporting-statement belief wins, with the
/// lexical order of the path's node keys as the deterministic fallback.
pub fn find_paths(graph: &CausalGraph, test: &TestStatement, config: &SearchConfig) -> SearchResult {
    bfs::run(graph, test, config)
}
