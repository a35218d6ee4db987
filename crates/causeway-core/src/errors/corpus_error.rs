/// Test corpus errors. A malformed single entry is skipped and logged;
/// a corpus that cannot be used at all aborts the model's run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CorpusError {
    #[error("malformed test {test}: {reason}")]
    MalformedTest { test: String, reason: String },

    #[error("corpus {corpus} contains no tests")]
    EmptyCorpus { corpus: String },

    #[error("corpus {corpus} could not be loaded: {reason}")]
    LoadFailed { corpus: String, reason: String },
}
