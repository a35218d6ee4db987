/// Graph construction errors. Fatal for one graph variant only: the
/// evaluator still attempts the remaining variants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("no statements left after filtering for the {variant} graph")]
    EmptyInput { variant: String },

    #[error("statement {hash} is invalid: {reason}")]
    InvalidStatement { hash: String, reason: String },
}
