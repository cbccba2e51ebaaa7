use crate::error::Result;
use crate::selection;
use crate::types::{RecommendationRequest, TextElement};

/// A strategy that orders a candidate pool for labeling.
///
/// Implementors provide `rank`, a full ordering of the pool expressed as
/// positions into `request.elements` (most recommended first). `recommend`
/// runs that ranking through the shared selection policy.
pub trait ActiveLearner: Send + Sync {
    fn name(&self) -> &str;

    /// Order every element of the pool. `request.sample_size` is ignored.
    fn rank(&self, request: &RecommendationRequest<'_>) -> Result<Vec<usize>>;

    /// Positions of the next `request.sample_size` elements to label, best first.
    fn recommend_positions(&self, request: &RecommendationRequest<'_>) -> Result<Vec<usize>> {
        selection::validate(request)?;
        let order = self.rank(request)?;
        tracing::debug!(
            strategy = self.name(),
            workspace = request.workspace_id,
            category = request.category_name,
            pool = request.len(),
            sample_size = request.sample_size,
            "ranked candidate pool"
        );
        selection::top_positions(&order, request.len(), request.sample_size)
    }

    /// The next `request.sample_size` elements to label, best first.
    fn recommend<'a>(&self, request: &RecommendationRequest<'a>) -> Result<Vec<&'a TextElement>> {
        let top = self.recommend_positions(request)?;
        Ok(top.into_iter().map(|pos| &request.elements[pos]).collect())
    }
}

impl<T: ActiveLearner + ?Sized> ActiveLearner for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn rank(&self, request: &RecommendationRequest<'_>) -> Result<Vec<usize>> {
        (**self).rank(request)
    }

    fn recommend_positions(&self, request: &RecommendationRequest<'_>) -> Result<Vec<usize>> {
        (**self).recommend_positions(request)
    }

    fn recommend<'a>(&self, request: &RecommendationRequest<'a>) -> Result<Vec<&'a TextElement>> {
        (**self).recommend(request)
    }
}
