use serde::{Deserialize, Serialize};

use crate::constants;

/// Bounds for a single path search. Causal graphs have combinatorially many
/// paths; unbounded search is not tractable at corpus scale, so both depth
/// and result count are capped and each test carries a wall-clock budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum path length in edges.
    pub max_depth: usize,
    /// Maximum number of accepted paths per test.
    pub max_paths: usize,
    /// Per-test search budget in milliseconds. `None` disables the deadline.
    pub timeout_ms: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: constants::DEFAULT_MAX_DEPTH,
            max_paths: constants::DEFAULT_MAX_PATHS,
            timeout_ms: Some(constants::DEFAULT_SEARCH_TIMEOUT_MS),
        }
    }
}
