//! Truncation and selection policy shared by all strategies.
//!
//! Strategies express a ranking as a list of positions into the request's
//! element slice. This module validates requests, builds stable score
//! orderings, and cuts the final batch out of a ranking.

use crate::error::{Error, Result};
use crate::types::{Prediction, RecommendationRequest, TextElement};

/// Sort direction for [`order_by_score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreOrder {
    Ascending,
    Descending,
}

/// Check positional alignment and prediction scores.
pub fn check_pool(elements: &[TextElement], predictions: &[Prediction]) -> Result<()> {
    if elements.len() != predictions.len() {
        return Err(Error::InvalidArgument(format!(
            "elements and predictions are not aligned: {} elements vs {} predictions",
            elements.len(),
            predictions.len()
        )));
    }
    if let Some((pos, p)) = predictions
        .iter()
        .enumerate()
        .find(|(_, p)| !p.score.is_finite() || !(0.0..=1.0).contains(&p.score))
    {
        return Err(Error::InvalidArgument(format!(
            "prediction score {} at position {} ({}) is outside [0, 1]",
            p.score, pos, elements[pos].uri
        )));
    }
    Ok(())
}

/// Validate a full request before ranking: alignment, scores and `sample_size`.
pub fn validate(request: &RecommendationRequest<'_>) -> Result<()> {
    check_pool(request.elements, request.predictions)?;
    if request.sample_size == 0 {
        return Err(Error::InvalidArgument("sample_size must be positive".to_string()));
    }
    if request.is_empty() {
        return Err(Error::EmptyPool { requested: request.sample_size });
    }
    if request.sample_size > request.len() {
        return Err(Error::InvalidArgument(format!(
            "sample_size {} exceeds pool size {}",
            request.sample_size,
            request.len()
        )));
    }
    Ok(())
}

/// Positions `0..scores.len()` ordered by score.
///
/// Uses a stable sort so equal scores keep their input order. `-0.0` and
/// `0.0` compare equal.
pub fn order_by_score(scores: &[f64], order: ScoreOrder) -> Vec<usize> {
    let mut positions: Vec<usize> = (0..scores.len()).collect();
    positions.sort_by(|&a, &b| {
        // `+ 0.0` folds -0.0 into 0.0; `total_cmp` alone orders them apart.
        let cmp = (scores[a] + 0.0).total_cmp(&(scores[b] + 0.0));
        match order {
            ScoreOrder::Ascending => cmp,
            ScoreOrder::Descending => cmp.reverse(),
        }
    });
    positions
}

/// Positions `0..keys.len()` ordered ascending by an integer key, ties by position.
pub fn order_by_key(keys: &[u64]) -> Vec<usize> {
    let mut positions: Vec<usize> = (0..keys.len()).collect();
    positions.sort_by_key(|&pos| keys[pos]);
    positions
}

/// Convert an ordering into 1-based ranks indexed by position.
///
/// Fails unless `order` is a permutation of `0..n`.
pub fn rank_positions(order: &[usize], n: usize) -> Result<Vec<u64>> {
    if order.len() != n {
        return Err(Error::InvalidRanking(format!(
            "ranking covers {} of {} elements",
            order.len(),
            n
        )));
    }
    let mut ranks = vec![0u64; n];
    for (rank, &pos) in order.iter().enumerate() {
        match ranks.get_mut(pos) {
            None => {
                return Err(Error::InvalidRanking(format!("position {pos} is outside the pool of {n}")));
            }
            Some(slot) if *slot != 0 => {
                return Err(Error::InvalidRanking(format!("position {pos} is ranked twice")));
            }
            Some(slot) => *slot = rank as u64 + 1,
        }
    }
    Ok(ranks)
}

/// First `k` positions of `order`, after checking it is a permutation of `0..n`.
///
/// `k` is expected to have passed [`validate`]; it is not re-checked here.
pub fn top_positions(order: &[usize], n: usize, k: usize) -> Result<Vec<usize>> {
    rank_positions(order, n)?;
    debug_assert!(k <= n, "sample_size {k} exceeds pool size {n}");
    Ok(order.iter().take(k).copied().collect())
}

/// First `k` elements of `order`. Never reorders, duplicates, or leaves the pool.
pub fn take_top<'a>(elements: &'a [TextElement], order: &[usize], k: usize) -> Result<Vec<&'a TextElement>> {
    let top = top_positions(order, elements.len(), k)?;
    Ok(top.into_iter().map(|pos| &elements[pos]).collect())
}
