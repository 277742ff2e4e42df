//! # Diverge
//!
//! Divergence, distance, and correlation measures between two discrete
//! numeric distributions supplied as same-length ordered sequences.
//!
//! ## Measures
//!
//! ```text
//! KL(P||Q)   = Σ p_i * ln(p_i / q_i)                 directional
//! J(P,Q)     = 0.5 * (KL(P||Q) + KL(Q||P))           symmetrized KL
//! JS(P,Q)    = 0.5 * (KL(P||M) + KL(Q||M)),  M = (P+Q)/2
//! TV(P,Q)    = 0.5 * Σ |p_i - q_i|
//! MSE(P,Q)   = (1/n) * Σ (p_i - q_i)^2
//! ```
//!
//! plus root mean square deviation, Pearson correlation (raw-moment
//! formula), and Spearman rank correlation with tie-averaged fractional
//! ranks.
//!
//! ## Example
//!
//! ```rust
//! use diverge::DistributionPair;
//!
//! let pair = DistributionPair::new(vec![0.5, 0.5], vec![0.9, 0.1]).unwrap();
//!
//! let kl = pair.kullback_leibler(false).unwrap();
//! assert!((kl - 0.5108).abs() < 1e-4);
//!
//! assert!((pair.total_variation_distance() - 0.4).abs() < 1e-12);
//! assert!(pair.jensen_shannon() > 0.0);
//! ```
//!
//! ## Degenerate inputs
//!
//! Construction rejects only a length mismatch. Sequences that do not sum
//! to 1 are accepted and reported through a configurable diagnostic sink
//! (silent by default, see [`Diagnostics`]). Directional KL fails where
//! `p_i > 0` meets `q_i = 0`; the canonical [`DistributionPair::jensen_shannon`]
//! never does for non-negative input. Negative elements are not rejected
//! and yield NaN divergences.

pub mod correlation;
pub mod diagnostics;
pub mod distance;
pub mod divergence;
pub mod error;
pub mod pair;
pub mod rank;

mod validate;

// Re-exports
pub use diagnostics::{Diagnostics, ReportFn};
pub use error::{DivergeError, Result};
pub use pair::{DistributionPair, Measure, MeasureSet};
pub use validate::NORMALIZATION_TOLERANCE;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
