use labelq_core::selection;
use labelq_core::{ActiveLearner, Prediction, RecommendationRequest, TextElement};
use labelq_hybrid::HybridLearner;
use labelq_strategies::{HardMiningLearner, RandomSampling, RetrospectiveLearner};
use proptest::prelude::*;

fn elements(n: usize) -> Vec<TextElement> {
    (0..n).map(|i| TextElement::new(format!("pool-0-{i}"), format!("sentence {i}"))).collect()
}

fn predictions(scores: &[f64]) -> Vec<Prediction> {
    scores.iter().map(|&s| Prediction::new(s >= 0.5, s)).collect()
}

fn constituents() -> Vec<Box<dyn ActiveLearner>> {
    vec![
        Box::new(HardMiningLearner::new()),
        Box::new(RetrospectiveLearner::new()),
        Box::new(RandomSampling::new()),
    ]
}

proptest! {
    #[test]
    fn fused_rank_is_sum_of_constituent_ranks(scores in prop::collection::vec(0.0f64..=1.0, 1..50)) {
        let pool = elements(scores.len());
        let preds = predictions(&scores);
        let req = RecommendationRequest::new("ws", "ds", "cat", &pool, &preds, 1);

        let mut expected = vec![0u64; scores.len()];
        for learner in constituents() {
            let ranks = selection::rank_positions(&learner.rank(&req).unwrap(), scores.len()).unwrap();
            for (e, r) in expected.iter_mut().zip(ranks) { *e += r; }
        }
        let hybrid = HybridLearner::new(constituents()).unwrap();
        prop_assert_eq!(hybrid.fused_ranks(&req).unwrap(), expected);
    }

    #[test]
    fn fusion_is_commutative(scores in prop::collection::vec(0.0f64..=1.0, 1..50), k_seed in any::<usize>()) {
        let pool = elements(scores.len());
        let preds = predictions(&scores);
        let k = k_seed % scores.len() + 1;
        let req = RecommendationRequest::new("ws", "ds", "cat", &pool, &preds, k);

        let forward = HybridLearner::new(constituents()).unwrap();
        let mut reversed_members = constituents();
        reversed_members.reverse();
        let reversed = HybridLearner::new(reversed_members).unwrap();
        prop_assert_eq!(forward.recommend(&req).unwrap(), reversed.recommend(&req).unwrap());
    }

    #[test]
    fn fused_batch_is_ordered_by_rank_sum(scores in prop::collection::vec(0.0f64..=1.0, 1..50)) {
        let pool = elements(scores.len());
        let preds = predictions(&scores);
        let req = RecommendationRequest::new("ws", "ds", "cat", &pool, &preds, scores.len());
        let hybrid = HybridLearner::new(constituents()).unwrap();
        let totals = hybrid.fused_ranks(&req).unwrap();
        let batch = hybrid.recommend(&req).unwrap();
        let order: Vec<usize> = batch
            .iter()
            .map(|e| pool.iter().position(|p| p.uri == e.uri).unwrap())
            .collect();
        prop_assert_eq!(order.len(), scores.len());
        for pair in order.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(totals[a] < totals[b] || (totals[a] == totals[b] && a < b));
        }
    }
}
