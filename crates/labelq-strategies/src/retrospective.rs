use labelq_core::selection::{self, ScoreOrder};
use labelq_core::{ActiveLearner, Label, RecommendationRequest, Result, RetrospectiveMode};

/// Confidence review: the elements the model is most sure about come first.
///
/// In [`RetrospectiveMode::Confidence`] (the default) elements are ranked by
/// raw positive-class score. In [`RetrospectiveMode::Disagreement`] the score
/// is the model's confidence in the class that contradicts the element's
/// known label for the request's category, so confidently-wrong predictions
/// surface first. Unlabeled elements fall back to the raw score.
#[derive(Debug, Clone, Copy, Default)]
pub struct RetrospectiveLearner {
    mode: RetrospectiveMode,
}

impl RetrospectiveLearner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: RetrospectiveMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> RetrospectiveMode {
        self.mode
    }

    pub fn per_element_scores(&self, request: &RecommendationRequest<'_>) -> Result<Vec<f64>> {
        selection::check_pool(request.elements, request.predictions)?;
        let scores = request
            .elements
            .iter()
            .zip(request.predictions)
            .map(|(element, p)| match self.mode {
                RetrospectiveMode::Confidence => p.score,
                RetrospectiveMode::Disagreement => match element.label_for(request.category_name) {
                    Some(Label::Positive) => 1.0 - p.score,
                    Some(Label::Negative) | None => p.score,
                },
            })
            .collect();
        Ok(scores)
    }
}

impl ActiveLearner for RetrospectiveLearner {
    fn name(&self) -> &str {
        match self.mode {
            RetrospectiveMode::Confidence => "retrospective",
            RetrospectiveMode::Disagreement => "retrospective_disagreement",
        }
    }

    fn rank(&self, request: &RecommendationRequest<'_>) -> Result<Vec<usize>> {
        let scores = self.per_element_scores(request)?;
        Ok(selection::order_by_score(&scores, ScoreOrder::Descending))
    }
}
