//! Strategy catalog: turns configured strategy names into boxed learners.

use labelq_core::config::ActiveLearningConfig;
use labelq_core::{ActiveLearner, Error, Result, StrategyKind};
use labelq_strategies::{HardMiningLearner, RandomSampling, RetrospectiveLearner};

use crate::HybridLearner;

pub fn available_strategies() -> &'static [StrategyKind] { &StrategyKind::ALL }

/// Build the learner selected by `config.strategy`.
pub fn build_learner(config: &ActiveLearningConfig) -> Result<Box<dyn ActiveLearner>> {
    config.validate()?;
    let learner = match config.strategy {
        StrategyKind::Hybrid => {
            let members = config
                .hybrid_members
                .iter()
                .map(|&kind| build_single(kind, config))
                .collect::<Result<Vec<_>>>()?;
            Box::new(HybridLearner::new(members)?) as Box<dyn ActiveLearner>
        }
        kind => build_single(kind, config)?,
    };
    tracing::debug!(strategy = learner.name(), "built active learner");
    Ok(learner)
}

fn build_single(kind: StrategyKind, config: &ActiveLearningConfig) -> Result<Box<dyn ActiveLearner>> {
    match kind {
        StrategyKind::Random => Ok(Box::new(RandomSampling::with_seed(config.random_seed))),
        StrategyKind::HardMining => Ok(Box::new(HardMiningLearner::new())),
        StrategyKind::Retrospective => Ok(Box::new(RetrospectiveLearner::with_mode(config.retrospective_mode))),
        StrategyKind::Hybrid => {
            tracing::warn!("rejected nested hybrid strategy");
            Err(Error::InvalidConfig("hybrid strategies cannot be nested".to_string()))
        }
    }
}
