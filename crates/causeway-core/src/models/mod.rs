//! Data model for the evaluation engine.

pub mod change_event;
pub mod entity;
pub mod path;
pub mod record;
pub mod statement;
pub mod summary;
pub mod test_statement;

pub use change_event::ChangeEvent;
pub use entity::EntityRef;
pub use path::{Path, PathEdge};
pub use record::{EvaluationRecord, GraphVariant, OutcomeByVariant, TestOutcome};
pub use statement::{
    CurationStatus, Participant, Polarity, RedundancyKey, Role, Statement, StatementHash,
};
pub use summary::{RunReport, RunSummary, SkippedTest, StatsDelta};
pub use test_statement::{TestCorpus, TestHash, TestStatement};
