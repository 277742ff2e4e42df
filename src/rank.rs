//! Tie-aware fractional ranking.
//!
//! Converts a sequence into 1-based ranks where every run of tied values
//! shares the average of its positions (the mid-rank convention Spearman
//! correlation requires). Ranks are computed independently per sequence;
//! a value appearing with different multiplicities in two sequences ranks
//! correctly in each.

use std::cmp::Ordering;

/// Fractional ranks of `xs`, returned in the original input order.
///
/// For a tie-free sequence the result is a permutation of `1..=n`.
/// `[3.0, 1.0, 2.0, 2.0]` ranks as `[4.0, 1.0, 2.5, 2.5]`.
pub fn fractional_ranks(xs: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let mut by_value: Vec<(usize, f64)> = xs.iter().copied().enumerate().collect();
    by_value.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

    let mut ranks = vec![0.0; n];
    let mut start = 0;
    while start < n {
        // Extend over the run of values tied with position `start`
        let mut end = start;
        while end < n && by_value[end].1 == by_value[start].1 {
            end += 1;
        }

        // 1-based positions start+1 ..= end average to (start + end + 1) / 2
        let mid_rank = (start + end + 1) as f64 / 2.0;
        for &(original, _) in &by_value[start..end] {
            ranks[original] = mid_rank;
        }

        start = end;
    }

    ranks
}
