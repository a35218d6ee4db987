//! Narrow seams to the external collaborators: statement source, test
//! corpus source, and the evaluation-record store. The core never talks to
//! storage, the network, or delivery channels directly.

pub mod record_store;
pub mod sources;

pub use record_store::RecordStore;
pub use sources::{CorpusSource, StatementSource};
