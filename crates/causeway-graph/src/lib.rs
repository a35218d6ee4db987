//! # causeway-graph
//!
//! Typed causal graphs built from statement sets, plus bounded path search.
//! The graph is rebuilt wholesale each evaluation run from the current
//! statement snapshot and is read-only afterwards.

pub mod graph;
pub mod search;

pub use graph::builder::{build, StatementFilter};
pub use graph::{CausalEdge, CausalGraph, EntityNode};
pub use search::{find_paths, SearchResult};
