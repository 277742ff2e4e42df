//! Information-theoretic divergence measures.
//!
//! Implements the directional Kullback-Leibler divergence and the two
//! symmetric measures built from it:
//!
//! - J-divergence, the symmetrized-KL shortcut `0.5 * (KL(P||Q) + KL(Q||P))`
//! - Jensen-Shannon divergence, the canonical form through the pointwise
//!   midpoint distribution `M = 0.5 * (P + Q)`
//!
//! Both have circulated under the name "Jensen-Shannon"; they are exposed
//! as distinct operations so callers get exactly the formula they expect.
//! All results are in nats (natural logarithm).

use crate::error::{DivergeError, Result};

/// KL divergence `D_KL(P || Q) = Σ p_i * ln(p_i / q_i)`
///
/// Measures the information lost when Q is used to approximate P.
///
/// Properties:
/// - Non-negative for probability vectors, zero iff P = Q
/// - Asymmetric: `D_KL(P || Q) != D_KL(Q || P)`
///
/// A zero `p[i]` contributes nothing. Fails with
/// [`DivergeError::UndefinedDivergence`] at the first index where
/// `p[i] > 0` and `q[i] == 0`, and with [`DivergeError::LengthMismatch`]
/// when the slices differ in length.
#[inline]
pub fn kl_divergence(p: &[f64], q: &[f64]) -> Result<f64> {
    if p.len() != q.len() {
        return Err(DivergeError::LengthMismatch {
            left: p.len(),
            right: q.len(),
        });
    }

    let mut kl = 0.0;
    for (index, (&pi, &qi)) in p.iter().zip(q.iter()).enumerate() {
        if pi > 0.0 && qi == 0.0 {
            return Err(DivergeError::UndefinedDivergence { index });
        }
        if pi != 0.0 {
            kl += pi * (pi / qi).ln();
        }
    }

    Ok(kl)
}

/// J-divergence `J(P,Q) = 0.5 * (D_KL(P || Q) + D_KL(Q || P))`
///
/// Symmetric, but inherits KL's domain: it fails whenever either
/// directional term is undefined, i.e. whenever P and Q do not share
/// support. Callers needing a divergence that is defined for every
/// non-negative pair should use [`jensen_shannon`].
#[inline]
pub fn j_divergence(p: &[f64], q: &[f64]) -> Result<f64> {
    Ok(0.5 * (kl_divergence(p, q)? + kl_divergence(q, p)?))
}

/// Jensen-Shannon divergence (canonical form)
///
/// `JS(P,Q) = 0.5 * D_KL(P || M) + 0.5 * D_KL(Q || M)` with
/// `M = 0.5 * (P + Q)` the pointwise midpoint.
///
/// Properties:
/// - Symmetric: `JS(P,Q) = JS(Q,P)`
/// - Total over non-negative pairs: `q_i = 0` implies `m_i = p_i / 2`,
///   and a zero `p_i` skips its term entirely, so the undefined KL case
///   cannot arise.
///
/// Slices of unequal length are compared over the common index range.
#[inline]
pub fn jensen_shannon(p: &[f64], q: &[f64]) -> f64 {
    let m: Vec<f64> = p
        .iter()
        .zip(q.iter())
        .map(|(&pi, &qi)| 0.5 * (pi + qi))
        .collect();

    0.5 * (kl_against_midpoint(p, &m) + kl_against_midpoint(q, &m))
}

/// KL sum without the zero-denominator check.
///
/// Valid only when every `p_i > 0` has `m_i > 0`, which the midpoint
/// distribution guarantees. Working on raw slices here also keeps the
/// nested evaluations outside any pair construction, so no normalization
/// warning can fire for `M`.
fn kl_against_midpoint(p: &[f64], m: &[f64]) -> f64 {
    let mut kl = 0.0;
    for (&pi, &mi) in p.iter().zip(m.iter()) {
        if pi != 0.0 {
            kl += pi * (pi / mi).ln();
        }
    }
    kl
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn test_kl_identical_distributions() {
        let p = vec![0.25, 0.25, 0.25, 0.25];
        assert!(approx_eq(kl_divergence(&p, &p).unwrap(), 0.0, 1e-12));
    }

    #[test]
    fn test_kl_known_value() {
        // 0.5*ln(0.5/0.9) + 0.5*ln(0.5/0.1) = 0.510826...
        let kl = kl_divergence(&[0.5, 0.5], &[0.9, 0.1]).unwrap();
        assert!(approx_eq(kl, 0.5108256238, 1e-9));
    }

    #[test]
    fn test_kl_non_negative() {
        let pairs: &[(&[f64], &[f64])] = &[
            (&[0.5, 0.5], &[0.9, 0.1]),
            (&[0.2, 0.3, 0.5], &[0.3, 0.3, 0.4]),
            (&[0.7, 0.2, 0.1], &[0.1, 0.2, 0.7]),
        ];
        for (p, q) in pairs {
            assert!(kl_divergence(p, q).unwrap() >= 0.0);
        }
    }

    #[test]
    fn test_kl_zero_p_term_is_skipped() {
        // p[0] = 0 contributes nothing; remaining term is 1 * ln(1/0.5)
        let kl = kl_divergence(&[0.0, 1.0], &[0.5, 0.5]).unwrap();
        assert!(approx_eq(kl, std::f64::consts::LN_2, 1e-12));
    }

    #[test]
    fn test_kl_undefined_when_q_has_zero_under_p_support() {
        let err = kl_divergence(&[0.5, 0.5], &[1.0, 0.0]).unwrap_err();
        assert_eq!(err, DivergeError::UndefinedDivergence { index: 1 });
    }

    #[test]
    fn test_kl_length_mismatch() {
        let err = kl_divergence(&[0.5, 0.5], &[1.0]).unwrap_err();
        assert_eq!(err, DivergeError::LengthMismatch { left: 2, right: 1 });
    }

    #[test]
    fn test_j_divergence_symmetric() {
        let p = [0.2, 0.3, 0.5];
        let q = [0.4, 0.4, 0.2];
        let forward = j_divergence(&p, &q).unwrap();
        let backward = j_divergence(&q, &p).unwrap();
        assert!(approx_eq(forward, backward, 1e-12));
        assert!(forward > 0.0);
    }

    #[test]
    fn test_j_divergence_fails_on_disjoint_support() {
        assert!(j_divergence(&[1.0, 0.0], &[0.0, 1.0]).is_err());
    }

    #[test]
    fn test_jensen_shannon_symmetric() {
        let p = [0.5, 0.5];
        let q = [0.9, 0.1];
        assert!(approx_eq(jensen_shannon(&p, &q), jensen_shannon(&q, &p), 1e-12));
    }

    #[test]
    fn test_jensen_shannon_zero_for_identical() {
        let p = [0.1, 0.2, 0.3, 0.4];
        assert!(approx_eq(jensen_shannon(&p, &p), 0.0, 1e-12));
    }

    #[test]
    fn test_jensen_shannon_defined_on_disjoint_support() {
        // Disjoint support maxes JS out at ln(2) nats
        let js = jensen_shannon(&[1.0, 0.0], &[0.0, 1.0]);
        assert!(approx_eq(js, std::f64::consts::LN_2, 1e-12));
    }

    #[test]
    fn test_jensen_shannon_matches_expanded_form() {
        let p = [0.5, 0.5];
        let q = [0.9, 0.1];
        let m = [0.7, 0.3];
        let expected =
            0.5 * (kl_divergence(&p, &m).unwrap() + kl_divergence(&q, &m).unwrap());
        assert!(approx_eq(jensen_shannon(&p, &q), expected, 1e-12));
    }
}
