//! # causeway-runner
//!
//! Runs the evaluation pipeline per model: build graphs, evaluate every test
//! against every built variant, diff the result against the previous round,
//! and persist the new record. Also hosts the stable JSONL export surface
//! and the in-memory collaborator implementations used by tests and
//! embedding callers.

pub mod differ;
pub mod evaluator;
pub mod export;
pub mod runner;
pub mod store;

pub use differ::diff;
pub use evaluator::evaluate;
pub use export::{to_jsonl_string, write_jsonl};
pub use runner::{ModelRunOutcome, RunEngine};
pub use store::{InMemoryCorpusSource, InMemoryRecordStore, InMemoryStatementSource};
