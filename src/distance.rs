//! Elementwise distance and error measures.
//!
//! - Total variation distance (half the L1 distance)
//! - Mean square error and its root

/// Total variation distance `TV(P,Q) = 0.5 * Σ |p_i - q_i|`
///
/// Ranges over [0, 1] for probability vectors: 0 = identical,
/// 1 = disjoint support. Indices past either slice's end read as 0, so
/// unequal lengths degrade gracefully instead of truncating mass.
#[inline]
pub fn total_variation_distance(p: &[f64], q: &[f64]) -> f64 {
    let n = p.len().max(q.len());
    let l1: f64 = (0..n)
        .map(|i| {
            let pi = p.get(i).copied().unwrap_or(0.0);
            let qi = q.get(i).copied().unwrap_or(0.0);
            (pi - qi).abs()
        })
        .sum();

    0.5 * l1
}

/// Mean square error `MSE(P,Q) = (1/n) * Σ (p_i - q_i)^2`
///
/// Returns 0.0 for empty input.
#[inline]
pub fn mean_square_error(p: &[f64], q: &[f64]) -> f64 {
    if p.is_empty() {
        return 0.0;
    }

    let sum_sq: f64 = p
        .iter()
        .zip(q.iter())
        .map(|(&pi, &qi)| {
            let diff = pi - qi;
            diff * diff
        })
        .sum();

    sum_sq / p.len() as f64
}

/// Root mean square deviation `RMSD(P,Q) = sqrt(MSE(P,Q))`
#[inline]
pub fn root_mean_square_deviation(p: &[f64], q: &[f64]) -> f64 {
    mean_square_error(p, q).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn test_tvd_known_value() {
        let tvd = total_variation_distance(&[0.5, 0.5], &[0.9, 0.1]);
        assert!(approx_eq(tvd, 0.4, 1e-12));
    }

    #[test]
    fn test_tvd_bounds() {
        assert!(approx_eq(
            total_variation_distance(&[0.3, 0.7], &[0.3, 0.7]),
            0.0,
            1e-12
        ));
        assert!(approx_eq(
            total_variation_distance(&[1.0, 0.0], &[0.0, 1.0]),
            1.0,
            1e-12
        ));
    }

    #[test]
    fn test_tvd_missing_elements_read_as_zero() {
        let tvd = total_variation_distance(&[0.5, 0.5], &[0.5]);
        assert!(approx_eq(tvd, 0.25, 1e-12));
    }

    #[test]
    fn test_mse_known_value() {
        // ((0.5-0.9)^2 + (0.5-0.1)^2) / 2 = 0.16
        let mse = mean_square_error(&[0.5, 0.5], &[0.9, 0.1]);
        assert!(approx_eq(mse, 0.16, 1e-12));
    }

    #[test]
    fn test_mse_zero_for_identical() {
        let p = [0.2, 0.3, 0.5];
        assert!(approx_eq(mean_square_error(&p, &p), 0.0, 1e-12));
    }

    #[test]
    fn test_mse_empty_input() {
        assert_eq!(mean_square_error(&[], &[]), 0.0);
    }

    #[test]
    fn test_rmsd_is_sqrt_of_mse() {
        let p = [0.5, 0.5];
        let q = [0.9, 0.1];
        let rmsd = root_mean_square_deviation(&p, &q);
        assert!(approx_eq(rmsd, mean_square_error(&p, &q).sqrt(), 1e-12));
        assert!(approx_eq(rmsd, 0.4, 1e-12));
    }
}
