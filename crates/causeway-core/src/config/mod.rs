//! Per-model configuration supplied by external collaborators.

pub mod model_config;
pub mod search_config;

pub use model_config::{CorpusConfig, ModelConfig};
pub use search_config::SearchConfig;
