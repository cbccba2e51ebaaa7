//! labelq-hybrid
//!
//! Rank fusion over several strategies, plus the catalog that builds a
//! learner from configuration.

pub mod catalog;

pub use catalog::{available_strategies, build_learner};

use labelq_core::selection;
use labelq_core::{ActiveLearner, Error, RecommendationRequest, Result};

/// Combines strategies by summing each element's 1-based rank across all of
/// them (equal weight), then ordering by that sum. Ties keep input order, so
/// the result does not depend on the order the strategies were given in.
pub struct HybridLearner {
    learners: Vec<Box<dyn ActiveLearner>>,
    name: String,
}

impl HybridLearner {
    pub fn new(learners: Vec<Box<dyn ActiveLearner>>) -> Result<Self> {
        if learners.len() < 2 {
            return Err(Error::InvalidArgument(format!(
                "hybrid learner needs at least two strategies, got {}",
                learners.len()
            )));
        }
        let members: Vec<&str> = learners.iter().map(|l| l.name()).collect();
        let name = format!("hybrid({})", members.join("+"));
        Ok(Self { learners, name })
    }

    pub fn learners(&self) -> &[Box<dyn ActiveLearner>] { &self.learners }

    /// Summed rank per element, indexed by input position.
    pub fn fused_ranks(&self, request: &RecommendationRequest<'_>) -> Result<Vec<u64>> {
        let n = request.len();
        let mut totals = vec![0u64; n];
        for learner in &self.learners {
            // full ranking of the pool, independent of sample_size
            let order = learner.rank(request)?;
            let ranks = selection::rank_positions(&order, n).map_err(|e| match e {
                Error::InvalidRanking(msg) => Error::InvalidRanking(format!("{}: {}", learner.name(), msg)),
                other => other,
            })?;
            for (total, rank) in totals.iter_mut().zip(ranks) { *total += rank; }
        }
        Ok(totals)
    }
}

impl ActiveLearner for HybridLearner {
    fn name(&self) -> &str { &self.name }

    fn rank(&self, request: &RecommendationRequest<'_>) -> Result<Vec<usize>> {
        let totals = self.fused_ranks(request)?;
        tracing::debug!(strategy = %self.name, pool = totals.len(), "fused constituent rankings");
        Ok(selection::order_by_key(&totals))
    }
}
