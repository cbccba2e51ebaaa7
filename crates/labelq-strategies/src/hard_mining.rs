use labelq_core::selection::{self, ScoreOrder};
use labelq_core::{ActiveLearner, RecommendationRequest, Result};

/// Binary decision boundary for positive-class probabilities.
pub const DECISION_BOUNDARY: f64 = 0.5;

/// Uncertainty sampling: elements whose score is closest to the decision
/// boundary come first. Equal distances keep input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct HardMiningLearner;

impl HardMiningLearner {
    pub fn new() -> Self {
        Self
    }

    /// `|score - 0.5|` per element; smaller means more uncertain.
    pub fn per_element_scores(&self, request: &RecommendationRequest<'_>) -> Result<Vec<f64>> {
        selection::check_pool(request.elements, request.predictions)?;
        Ok(request
            .predictions
            .iter()
            .map(|p| (p.score - DECISION_BOUNDARY).abs())
            .collect())
    }
}

impl ActiveLearner for HardMiningLearner {
    fn name(&self) -> &str {
        "hard_mining"
    }

    fn rank(&self, request: &RecommendationRequest<'_>) -> Result<Vec<usize>> {
        let distances = self.per_element_scores(request)?;
        Ok(selection::order_by_score(&distances, ScoreOrder::Ascending))
    }
}
