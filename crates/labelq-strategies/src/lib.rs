//! labelq-strategies
//!
//! Single-criterion recommendation strategies. Each one implements
//! `labelq_core::ActiveLearner`; see `labelq-hybrid` for fusing them.

pub mod hard_mining;
pub mod random;
pub mod retrospective;

pub use hard_mining::HardMiningLearner;
pub use random::RandomSampling;
pub use retrospective::RetrospectiveLearner;
