//! Workspace-wide default values.

/// Default maximum path length (edges) for a single search.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Default maximum number of paths collected per test.
pub const DEFAULT_MAX_PATHS: usize = 1;

/// Default per-test search budget in milliseconds. `None` disables the
/// deadline; batch runs should keep one configured so a single pathological
/// test cannot stall the round.
pub const DEFAULT_SEARCH_TIMEOUT_MS: u64 = 30_000;
