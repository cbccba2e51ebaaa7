//! Pool-file plumbing for the `labelq` binary.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use labelq_core::{ActiveLearner, Prediction, RecommendationRequest, TextElement};

/// A candidate pool snapshot as exported by the storage and model layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolFile {
    pub workspace_id: String,
    pub dataset_name: String,
    pub category_name: String,
    pub elements: Vec<TextElement>,
    pub predictions: Vec<Prediction>,
}

/// One line of the printed labeling batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendedItem {
    pub rank: usize,
    pub uri: String,
    pub text: String,
    pub score: f64,
}

impl PoolFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).with_context(|| format!("Failed to read pool file {}", path.display()))?;
        let pool: PoolFile =
            serde_json::from_str(&raw).with_context(|| format!("Failed to parse pool file {}", path.display()))?;
        Ok(pool)
    }

    pub fn request(&self, sample_size: usize) -> RecommendationRequest<'_> {
        RecommendationRequest::new(
            &self.workspace_id,
            &self.dataset_name,
            &self.category_name,
            &self.elements,
            &self.predictions,
            sample_size,
        )
    }
}

/// Run `learner` over the pool and attach each pick's prediction score.
pub fn recommend(pool: &PoolFile, learner: &dyn ActiveLearner, sample_size: usize) -> Result<Vec<RecommendedItem>> {
    let request = pool.request(sample_size);
    let batch = learner
        .recommend_positions(&request)
        .with_context(|| format!("{} failed on {} elements", learner.name(), pool.elements.len()))?;
    Ok(batch
        .into_iter()
        .enumerate()
        .map(|(rank, pos)| RecommendedItem {
            rank: rank + 1,
            uri: pool.elements[pos].uri.clone(),
            text: pool.elements[pos].text.clone(),
            score: pool.predictions[pos].score,
        })
        .collect())
}
