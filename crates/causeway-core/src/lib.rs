//! # causeway-core
//!
//! Foundation crate for the Causeway model-testing engine.
//! Defines all shared models, errors, config, constants, and the
//! collaborator traits. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{CorpusConfig, ModelConfig, SearchConfig};
pub use errors::{CausewayError, CausewayResult};
pub use models::{
    ChangeEvent, CurationStatus, EntityRef, EvaluationRecord, GraphVariant, Path, PathEdge,
    Polarity, Statement, StatementHash, TestCorpus, TestHash, TestOutcome, TestStatement,
};
