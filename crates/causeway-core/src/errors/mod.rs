//! Error taxonomy. Per-domain enums wrapped by the top-level
//! [`CausewayError`]. Errors local to one test or one graph variant are
//! absorbed by the caller and downgraded to recorded outcomes; corpus and
//! persistence errors abort the run for that model only.

pub mod build_error;
pub mod corpus_error;
pub mod persistence_error;

pub use build_error::BuildError;
pub use corpus_error::CorpusError;
pub use persistence_error::PersistenceError;

/// Top-level error for the Causeway workspace.
#[derive(Debug, thiserror::Error)]
pub enum CausewayError {
    #[error("build error: {0}")]
    Build(#[from] BuildError),

    #[error("corpus error: {0}")]
    Corpus(#[from] CorpusError),

    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the workspace.
pub type CausewayResult<T> = Result<T, CausewayError>;
