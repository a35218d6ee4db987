/// Record store errors. Fatal to the run for that model; the run is retried
/// wholesale on the next invocation, never partially.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersistenceError {
    #[error("previous record for {model}/{corpus} unreadable: {reason}")]
    ReadFailed {
        model: String,
        corpus: String,
        reason: String,
    },

    #[error("record for {model}/{corpus} unwritable: {reason}")]
    WriteFailed {
        model: String,
        corpus: String,
        reason: String,
    },

    #[error("a run for {model}/{corpus} is already in progress")]
    RunInProgress { model: String, corpus: String },
}
