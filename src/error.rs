//! Error types for measure computations.

use thiserror::Error;

/// Main error type for divergence and correlation operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DivergeError {
    /// The two sequences differ in length
    #[error("the two discrete distributions must have the same number of elements: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Directional KL hit an index with P(i) > 0 and Q(i) = 0
    #[error("Kullback-Leibler is not defined when P(i) > 0 and Q(i) = 0 (index {index})")]
    UndefinedDivergence { index: usize },

    /// Too few observations for a rank correlation
    #[error("Spearman correlation requires at least 2 observations, got {n}")]
    DegenerateSample { n: usize },

    /// No measure is registered under the given name
    #[error("unknown measure: {0}")]
    UnknownMeasure(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for measure operations.
pub type Result<T> = std::result::Result<T, DivergeError>;

impl DivergeError {
    /// Whether the same pair can still answer other measures.
    ///
    /// Every error except a length mismatch aborts only the invoked
    /// operation; a length mismatch rejects the pair itself and needs
    /// new input.
    pub fn is_call_scoped(&self) -> bool {
        !matches!(self, DivergeError::LengthMismatch { .. })
    }
}
