use crate::matching::matcher::MatchResult;

/// Sorts results by score, highest first.
///
/// The sort is stable: roles with equal scores keep their catalog order.
pub fn rank(mut results: Vec<MatchResult>) -> Vec<MatchResult> {
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results
}

/// The first `n` ranked results, or all of them if there are fewer.
pub fn top_n(ranked: &[MatchResult], n: usize) -> &[MatchResult] {
    &ranked[..n.min(ranked.len())]
}
