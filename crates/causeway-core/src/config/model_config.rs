use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::search_config::SearchConfig;
use crate::models::GraphVariant;

/// Per-corpus statement filters applied at graph build time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CorpusConfig {
    pub corpus_id: String,
    /// Drop statements below this belief score.
    pub min_belief: Option<f64>,
    /// When set, keep only statements whose entities all ground into one of
    /// these namespaces.
    pub namespaces: Option<BTreeSet<String>>,
}

impl CorpusConfig {
    pub fn new(corpus_id: impl Into<String>) -> Self {
        Self {
            corpus_id: corpus_id.into(),
            ..Default::default()
        }
    }
}

/// Configuration for one model: which graph variants to build, the search
/// bounds, and which test corpora to run with which filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub model_id: String,
    pub variants: Vec<GraphVariant>,
    pub search: SearchConfig,
    pub corpora: Vec<CorpusConfig>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_id: String::new(),
            variants: vec![GraphVariant::Signed, GraphVariant::Unsigned],
            search: SearchConfig::default(),
            corpora: Vec::new(),
        }
    }
}

impl ModelConfig {
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            ..Default::default()
        }
    }

    /// Filters configured for a corpus, or the permissive default.
    pub fn corpus_config(&self, corpus_id: &str) -> CorpusConfig {
        self.corpora
            .iter()
            .find(|c| c.corpus_id == corpus_id)
            .cloned()
            .unwrap_or_else(|| CorpusConfig::new(corpus_id))
    }
}
