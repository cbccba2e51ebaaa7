//! Domain types consumed by every recommendation strategy.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

pub type ElementUri = String;
pub type Meta = HashMap<String, String>;

/// A human-assigned label for one category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Positive,
    Negative,
}

/// A candidate element (sentence or passage) from the storage layer.
///
/// - `uri`: unique within its dataset; used for tie-break identity and
///   random-sampling seeds, never for scoring
/// - `span`: character offsets of the element inside its document
/// - `category_to_label`: labels assigned so far; a missing category is unset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextElement {
    pub uri: ElementUri,
    pub text: String,
    #[serde(default)]
    pub span: Vec<(usize, usize)>,
    #[serde(default)]
    pub metadata: Meta,
    #[serde(default)]
    pub category_to_label: HashMap<String, Label>,
}

impl TextElement {
    pub fn new(uri: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            text: text.into(),
            span: Vec::new(),
            metadata: Meta::new(),
            category_to_label: HashMap::new(),
        }
    }

    pub fn with_span(mut self, start: usize, end: usize) -> Self {
        self.span.push((start, end));
        self
    }

    pub fn with_label(mut self, category: impl Into<String>, label: Label) -> Self {
        self.category_to_label.insert(category.into(), label);
        self
    }

    pub fn label_for(&self, category: &str) -> Option<Label> {
        self.category_to_label.get(category).copied()
    }
}

/// Classifier output for one element.
///
/// `score` is the probability of the positive class and must lie in `[0, 1]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Prediction {
    pub label: bool,
    pub score: f64,
}

impl Prediction {
    pub fn new(label: bool, score: f64) -> Self {
        Self { label, score }
    }
}

/// One recommendation call: request identity plus the aligned candidate pool.
///
/// `elements[i]` and `predictions[i]` describe the same item. Strategies only
/// ever refer to items by that shared position.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationRequest<'a> {
    pub workspace_id: &'a str,
    pub dataset_name: &'a str,
    pub category_name: &'a str,
    pub elements: &'a [TextElement],
    pub predictions: &'a [Prediction],
    pub sample_size: usize,
}

impl<'a> RecommendationRequest<'a> {
    pub fn new(
        workspace_id: &'a str,
        dataset_name: &'a str,
        category_name: &'a str,
        elements: &'a [TextElement],
        predictions: &'a [Prediction],
        sample_size: usize,
    ) -> Self {
        Self { workspace_id, dataset_name, category_name, elements, predictions, sample_size }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Names under which strategies are registered in the catalog and config.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Random,
    HardMining,
    Retrospective,
    Hybrid,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::Random,
        StrategyKind::HardMining,
        StrategyKind::Retrospective,
        StrategyKind::Hybrid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Random => "random",
            StrategyKind::HardMining => "hard_mining",
            StrategyKind::Retrospective => "retrospective",
            StrategyKind::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| Error::UnknownStrategy(s.to_string()))
    }
}

/// What the retrospective strategy ranks by.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RetrospectiveMode {
    /// Raw positive-class confidence, highest first.
    #[default]
    Confidence,
    /// Confidence in the class contradicting the element's known label.
    Disagreement,
}
