use std::hash::Hasher;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use twox_hash::XxHash64;

use labelq_core::selection;
use labelq_core::{ActiveLearner, RecommendationRequest, Result};

/// Uniform random ordering, reproducible per request.
///
/// The shuffle is seeded from a hash of the request identifiers and the
/// element URIs, so identical calls return identical batches while different
/// workspaces, categories or pools get independent orderings. Predictions
/// are not consulted.
#[derive(Debug, Clone, Default)]
pub struct RandomSampling {
    hash_seed: u64,
}

impl RandomSampling {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different hash seed, giving a different (still reproducible) stream.
    pub fn with_seed(hash_seed: u64) -> Self {
        Self { hash_seed }
    }

    /// Seed for the request. `sample_size` is not hashed, so a
    /// smaller batch is a prefix of the full ordering.
    pub fn seed_for(&self, request: &RecommendationRequest<'_>) -> u64 {
        let mut hasher = XxHash64::with_seed(self.hash_seed);
        for part in [request.workspace_id, request.dataset_name, request.category_name] {
            hasher.write(part.as_bytes());
            hasher.write_u8(0xff);
        }
        hasher.write_u64(request.len() as u64);
        for element in request.elements {
            hasher.write(element.uri.as_bytes());
            hasher.write_u8(0xff);
        }
        hasher.finish()
    }
}

impl ActiveLearner for RandomSampling {
    fn name(&self) -> &str {
        "random"
    }

    fn rank(&self, request: &RecommendationRequest<'_>) -> Result<Vec<usize>> {
        selection::check_pool(request.elements, request.predictions)?;
        let seed = self.seed_for(request);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut order: Vec<usize> = (0..request.len()).collect();
        order.shuffle(&mut rng);
        tracing::trace!(seed, pool = request.len(), "shuffled pool");
        Ok(order)
    }
}
