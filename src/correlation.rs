//! Pearson and Spearman correlation.
//!
//! Pearson uses the raw-moment formula; Spearman ranks each sequence with
//! the mid-rank convention and applies the classic difference formula.

use crate::error::{DivergeError, Result};
use crate::rank::fractional_ranks;

/// Pearson product-moment correlation via the raw-moment formula:
///
/// `r = (n*Σpq - Σp*Σq) / sqrt((n*Σp² - (Σp)²) * (n*Σq² - (Σq)²))`
///
/// When either sequence has zero variance the denominator vanishes and
/// the correlation is undefined; this returns 0.0 as a deliberate safe
/// default rather than failing. Unequal lengths are compared over the
/// common index range.
pub fn pearson(p: &[f64], q: &[f64]) -> f64 {
    let n = p.len().min(q.len()) as f64;

    let mut sum_p = 0.0;
    let mut sum_q = 0.0;
    let mut sum_pq = 0.0;
    let mut sum_p_sq = 0.0;
    let mut sum_q_sq = 0.0;
    for (&pi, &qi) in p.iter().zip(q.iter()) {
        sum_p += pi;
        sum_q += qi;
        sum_pq += pi * qi;
        sum_p_sq += pi * pi;
        sum_q_sq += qi * qi;
    }

    let var_p = n * sum_p_sq - sum_p * sum_p;
    let var_q = n * sum_q_sq - sum_q * sum_q;
    let denominator = (var_p * var_q).sqrt();
    if denominator == 0.0 {
        return 0.0;
    }

    (n * sum_pq - sum_p * sum_q) / denominator
}

/// Spearman rank correlation:
///
/// `rho = 1 - 6*Σd² / (n*(n² - 1))` with `d_i = rank(p)_i - rank(q)_i`
///
/// Each sequence is ranked independently with [`fractional_ranks`].
/// Fails with [`DivergeError::DegenerateSample`] when `n < 2`, where the
/// denominator is zero.
pub fn spearman(p: &[f64], q: &[f64]) -> Result<f64> {
    let n = p.len().min(q.len());
    if n < 2 {
        return Err(DivergeError::DegenerateSample { n });
    }

    let ranks_p = fractional_ranks(&p[..n]);
    let ranks_q = fractional_ranks(&q[..n]);

    let sum_d_sq: f64 = ranks_p
        .iter()
        .zip(ranks_q.iter())
        .map(|(&rp, &rq)| {
            let d = rp - rq;
            d * d
        })
        .sum();

    let nf = n as f64;
    Ok(1.0 - 6.0 * sum_d_sq / (nf * (nf * nf - 1.0)))
}
