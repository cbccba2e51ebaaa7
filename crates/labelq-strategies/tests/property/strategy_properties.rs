use std::collections::HashSet;

use labelq_core::{ActiveLearner, Prediction, RecommendationRequest, TextElement};
use labelq_strategies::{HardMiningLearner, RandomSampling, RetrospectiveLearner};
use proptest::prelude::*;

fn elements(n: usize) -> Vec<TextElement> {
    (0..n).map(|i| TextElement::new(format!("pool-0-{i}"), format!("sentence {i}"))).collect()
}

fn predictions(scores: &[f64]) -> Vec<Prediction> {
    scores.iter().map(|&s| Prediction::new(s >= 0.5, s)).collect()
}

/// A pool of scores plus a valid sample size for it.
fn pool_and_k() -> impl Strategy<Value = (Vec<f64>, usize)> {
    prop::collection::vec(0.0f64..=1.0, 1..60).prop_flat_map(|scores| {
        let n = scores.len();
        (Just(scores), 1..=n)
    })
}

fn positions(batch: &[&TextElement], pool: &[TextElement]) -> Vec<usize> {
    batch
        .iter()
        .map(|e| pool.iter().position(|p| p.uri == e.uri).expect("element from pool"))
        .collect()
}

proptest! {
    #[test]
    fn batches_are_distinct_members_of_the_pool((scores, k) in pool_and_k()) {
        let pool = elements(scores.len());
        let preds = predictions(&scores);
        let req = RecommendationRequest::new("ws", "ds", "cat", &pool, &preds, k);
        let learners: Vec<Box<dyn ActiveLearner>> = vec![
            Box::new(RandomSampling::new()),
            Box::new(HardMiningLearner::new()),
            Box::new(RetrospectiveLearner::new()),
        ];
        for learner in &learners {
            let batch = learner.recommend(&req).unwrap();
            prop_assert_eq!(batch.len(), k);
            let uris: HashSet<&str> = batch.iter().map(|e| e.uri.as_str()).collect();
            prop_assert_eq!(uris.len(), k, "{} repeated an element", learner.name());
        }
    }

    #[test]
    fn hard_mining_orders_by_distance_to_boundary(scores in prop::collection::vec(0.0f64..=1.0, 1..60)) {
        let pool = elements(scores.len());
        let preds = predictions(&scores);
        let req = RecommendationRequest::new("ws", "ds", "cat", &pool, &preds, scores.len());
        let batch = HardMiningLearner::new().recommend(&req).unwrap();
        let order = positions(&batch, &pool);
        for pair in order.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let (da, db) = ((scores[a] - 0.5).abs(), (scores[b] - 0.5).abs());
            prop_assert!(da < db || (da == db && a < b), "{a} ({da}) ranked before {b} ({db})");
        }
    }

    #[test]
    fn retrospective_orders_by_confidence(scores in prop::collection::vec(0.0f64..=1.0, 1..60)) {
        let pool = elements(scores.len());
        let preds = predictions(&scores);
        let req = RecommendationRequest::new("ws", "ds", "cat", &pool, &preds, scores.len());
        let batch = RetrospectiveLearner::new().recommend(&req).unwrap();
        let order = positions(&batch, &pool);
        for pair in order.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(scores[a] > scores[b] || (scores[a] == scores[b] && a < b));
        }
    }

    #[test]
    fn random_sampling_is_deterministic((scores, k) in pool_and_k(), workspace in "[a-z]{1,8}") {
        let pool = elements(scores.len());
        let preds = predictions(&scores);
        let req = RecommendationRequest::new(&workspace, "ds", "cat", &pool, &preds, k);
        let learner = RandomSampling::new();
        prop_assert_eq!(learner.recommend(&req).unwrap(), learner.recommend(&req).unwrap());
    }

    #[test]
    fn smaller_batches_are_prefixes((scores, k) in pool_and_k()) {
        let pool = elements(scores.len());
        let preds = predictions(&scores);
        let full = RecommendationRequest::new("ws", "ds", "cat", &pool, &preds, scores.len());
        let part = RecommendationRequest { sample_size: k, ..full };
        let learners: Vec<Box<dyn ActiveLearner>> = vec![
            Box::new(RandomSampling::new()),
            Box::new(HardMiningLearner::new()),
            Box::new(RetrospectiveLearner::new()),
        ];
        for learner in &learners {
            let all = learner.recommend(&full).unwrap();
            let top = learner.recommend(&part).unwrap();
            prop_assert_eq!(&all[..k], &top[..]);
        }
    }
}
