//! Construction-time validation of a distribution pair.

use crate::diagnostics::Diagnostics;
use crate::error::{DivergeError, Result};

/// Absolute tolerance for the soft sum-to-one check.
///
/// Exact equality with 1 is almost never true after floating-point
/// accumulation; a small band keeps the warning meaningful instead of
/// firing on every input.
pub const NORMALIZATION_TOLERANCE: f64 = 1e-9;

/// Checks the preconditions on a pair of sequences.
///
/// A length mismatch is the only hard rejection. A side whose sum deviates
/// from 1 is reported through the diagnostic sink and computation proceeds
/// with the values as given.
pub(crate) fn validate(p: &[f64], q: &[f64], diagnostics: &Diagnostics) -> Result<()> {
    if p.len() != q.len() {
        return Err(DivergeError::LengthMismatch {
            left: p.len(),
            right: q.len(),
        });
    }

    check_normalized(p, "first", diagnostics);
    check_normalized(q, "second", diagnostics);

    Ok(())
}

fn check_normalized(xs: &[f64], side: &str, diagnostics: &Diagnostics) {
    if !diagnostics.is_enabled() {
        return;
    }

    let sum: f64 = xs.iter().sum();
    if (sum - 1.0).abs() > NORMALIZATION_TOLERANCE {
        diagnostics.report(&format!(
            "warning: the {side} argument does not sum to 1, the sum is {sum}"
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn capturing_diagnostics() -> (Diagnostics, Arc<Mutex<Vec<String>>>) {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let sink = {
            let captured = Arc::clone(&captured);
            Arc::new(move |message: &str| {
                captured.lock().unwrap().push(message.to_string());
            })
        };
        (Diagnostics::with_sink(sink), captured)
    }

    #[test]
    fn test_length_mismatch_is_hard() {
        let err = validate(&[1.0, 2.0], &[1.0, 2.0, 3.0], &Diagnostics::disabled()).unwrap_err();
        assert_eq!(err, DivergeError::LengthMismatch { left: 2, right: 3 });
    }

    #[test]
    fn test_normalized_pair_is_quiet() {
        let (diag, captured) = capturing_diagnostics();
        validate(&[0.5, 0.5], &[0.9, 0.1], &diag).unwrap();
        assert!(captured.lock().unwrap().is_empty());
    }

    #[test]
    fn test_unnormalized_sides_are_reported_not_rejected() {
        let (diag, captured) = capturing_diagnostics();
        validate(&[1.0, 2.0], &[0.3, 0.3], &diag).unwrap();

        let messages = captured.lock().unwrap();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("first argument does not sum to 1"));
        assert!(messages[1].contains("second argument does not sum to 1"));
    }

    #[test]
    fn test_tolerance_absorbs_accumulation_error() {
        // 10 x 0.1 does not sum to exactly 1.0 in binary floating point
        let tenths = vec![0.1; 10];
        let (diag, captured) = capturing_diagnostics();
        validate(&tenths, &tenths, &diag).unwrap();
        assert!(captured.lock().unwrap().is_empty());
    }

    #[test]
    fn test_disabled_diagnostics_stay_silent() {
        // Would warn on both sides if enabled; must not panic or emit
        validate(&[2.0, 2.0], &[3.0, 3.0], &Diagnostics::disabled()).unwrap();
    }
}
