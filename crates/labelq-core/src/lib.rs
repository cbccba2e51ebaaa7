#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

//! labelq-core
//!
//! Shared vocabulary for the labeling-queue strategies: scoring primitives,
//! the `ActiveLearner` contract, the selection policy every strategy goes
//! through, errors and configuration.

pub mod config;
pub mod error;
pub mod selection;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::ActiveLearner;
pub use types::{Label, Prediction, RecommendationRequest, RetrospectiveMode, StrategyKind, TextElement};
