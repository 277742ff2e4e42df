//! The distribution pair facade.
//!
//! A [`DistributionPair`] owns two same-length sequences, validates them
//! once at construction, and exposes every measure as a method. The
//! [`Measure`] enum gives the same surface as a closed dispatch table for
//! callers selecting a measure by name at runtime.

use crate::correlation;
use crate::diagnostics::Diagnostics;
use crate::distance;
use crate::divergence;
use crate::error::{DivergeError, Result};
use crate::validate::validate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An immutable pair of same-length numeric sequences.
///
/// Construction enforces the hard length precondition and reports soft
/// normalization warnings through the pair's diagnostic sink. All measure
/// methods are read-only; a single pair can be shared freely across
/// threads.
#[derive(Debug, Clone, Serialize)]
pub struct DistributionPair {
    p: Vec<f64>,
    q: Vec<f64>,
    #[serde(skip)]
    diagnostics: Diagnostics,
}

impl DistributionPair {
    /// Validates and wraps the two sequences with silent diagnostics.
    pub fn new(p: Vec<f64>, q: Vec<f64>) -> Result<Self> {
        Self::with_diagnostics(p, q, Diagnostics::default())
    }

    /// Validates with an explicit diagnostic configuration; normalization
    /// warnings go through its sink.
    pub fn with_diagnostics(p: Vec<f64>, q: Vec<f64>, diagnostics: Diagnostics) -> Result<Self> {
        validate(&p, &q, &diagnostics)?;
        Ok(Self { p, q, diagnostics })
    }

    /// First sequence.
    #[inline]
    pub fn p(&self) -> &[f64] {
        &self.p
    }

    /// Second sequence.
    #[inline]
    pub fn q(&self) -> &[f64] {
        &self.q
    }

    /// Number of elements in each sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.p.len()
    }

    /// Whether the sequences hold no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.p.is_empty()
    }

    /// The diagnostic configuration this pair was built with.
    #[inline]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Directional KL divergence; `reverse` computes `D_KL(Q || P)`.
    pub fn kullback_leibler(&self, reverse: bool) -> Result<f64> {
        if reverse {
            divergence::kl_divergence(&self.q, &self.p)
        } else {
            divergence::kl_divergence(&self.p, &self.q)
        }
    }

    /// Short alias for [`Self::kullback_leibler`].
    #[inline]
    pub fn kl(&self, reverse: bool) -> Result<f64> {
        self.kullback_leibler(reverse)
    }

    /// Symmetrized KL, `0.5 * (KL(P||Q) + KL(Q||P))`. Fails when the
    /// sequences do not share support.
    pub fn j_divergence(&self) -> Result<f64> {
        divergence::j_divergence(&self.p, &self.q)
    }

    /// Canonical Jensen-Shannon divergence through the pointwise midpoint
    /// distribution. Defined for every non-negative pair.
    pub fn jensen_shannon(&self) -> f64 {
        divergence::jensen_shannon(&self.p, &self.q)
    }

    /// Short alias for [`Self::jensen_shannon`].
    #[inline]
    pub fn js(&self) -> f64 {
        self.jensen_shannon()
    }

    /// Half the L1 distance between the sequences.
    pub fn total_variation_distance(&self) -> f64 {
        distance::total_variation_distance(&self.p, &self.q)
    }

    /// Short alias for [`Self::total_variation_distance`].
    #[inline]
    pub fn tvd(&self) -> f64 {
        self.total_variation_distance()
    }

    pub fn mean_square_error(&self) -> f64 {
        distance::mean_square_error(&self.p, &self.q)
    }

    pub fn root_mean_square_deviation(&self) -> f64 {
        distance::root_mean_square_deviation(&self.p, &self.q)
    }

    /// Pearson correlation; 0.0 under zero variance in either sequence.
    pub fn pearson(&self) -> f64 {
        correlation::pearson(&self.p, &self.q)
    }

    /// Spearman rank correlation. Fails for fewer than two observations.
    pub fn spearman(&self) -> Result<f64> {
        correlation::spearman(&self.p, &self.q)
    }

    /// Dispatch by measure. The measure set is closed, so runtime
    /// selection reduces to one match.
    pub fn measure(&self, measure: Measure) -> Result<f64> {
        match measure {
            Measure::KullbackLeibler => self.kullback_leibler(false),
            Measure::ReverseKullbackLeibler => self.kullback_leibler(true),
            Measure::JDivergence => self.j_divergence(),
            Measure::JensenShannon => Ok(self.jensen_shannon()),
            Measure::TotalVariationDistance => Ok(self.total_variation_distance()),
            Measure::MeanSquareError => Ok(self.mean_square_error()),
            Measure::RootMeanSquareDeviation => Ok(self.root_mean_square_deviation()),
            Measure::Pearson => Ok(self.pearson()),
            Measure::Spearman => self.spearman(),
        }
    }

    /// Every measure at once.
    ///
    /// Measures that are undefined on this input come back as `None`
    /// instead of aborting the whole set.
    pub fn all_measures(&self) -> MeasureSet {
        MeasureSet {
            kl_p_q: self.kullback_leibler(false).ok(),
            kl_q_p: self.kullback_leibler(true).ok(),
            j_divergence: self.j_divergence().ok(),
            jensen_shannon: self.jensen_shannon(),
            total_variation_distance: self.total_variation_distance(),
            mean_square_error: self.mean_square_error(),
            root_mean_square_deviation: self.root_mean_square_deviation(),
            pearson: self.pearson(),
            spearman: self.spearman().ok(),
        }
    }

    /// Serialize the two sequences to JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| DivergeError::Serialization(e.to_string()))
    }
}

/// The closed set of supported measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    KullbackLeibler,
    ReverseKullbackLeibler,
    JDivergence,
    JensenShannon,
    TotalVariationDistance,
    MeanSquareError,
    RootMeanSquareDeviation,
    Pearson,
    Spearman,
}

impl Measure {
    /// Every supported measure, in a stable order.
    pub const ALL: [Measure; 9] = [
        Measure::KullbackLeibler,
        Measure::ReverseKullbackLeibler,
        Measure::JDivergence,
        Measure::JensenShannon,
        Measure::TotalVariationDistance,
        Measure::MeanSquareError,
        Measure::RootMeanSquareDeviation,
        Measure::Pearson,
        Measure::Spearman,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Measure::KullbackLeibler => "kullback_leibler",
            Measure::ReverseKullbackLeibler => "reverse_kullback_leibler",
            Measure::JDivergence => "j_divergence",
            Measure::JensenShannon => "jensen_shannon",
            Measure::TotalVariationDistance => "total_variation_distance",
            Measure::MeanSquareError => "mean_square_error",
            Measure::RootMeanSquareDeviation => "root_mean_square_deviation",
            Measure::Pearson => "pearson",
            Measure::Spearman => "spearman",
        }
    }

    /// Look a measure up by its snake_case name.
    pub fn from_name(name: &str) -> Option<Measure> {
        Measure::ALL.iter().copied().find(|m| m.as_str() == name)
    }
}

impl FromStr for Measure {
    type Err = DivergeError;

    fn from_str(s: &str) -> Result<Self> {
        Measure::from_name(s).ok_or_else(|| DivergeError::UnknownMeasure(s.to_string()))
    }
}

impl std::fmt::Display for Measure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Every measure for one pair, computed in one call.
///
/// `None` marks a measure undefined on this input (directional KL or
/// J-divergence without shared support, Spearman with fewer than two
/// observations).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasureSet {
    pub kl_p_q: Option<f64>,
    pub kl_q_p: Option<f64>,
    pub j_divergence: Option<f64>,
    pub jensen_shannon: f64,
    pub total_variation_distance: f64,
    pub mean_square_error: f64,
    pub root_mean_square_deviation: f64,
    pub pearson: f64,
    pub spearman: Option<f64>,
}

impl MeasureSet {
    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| DivergeError::Serialization(e.to_string()))
    }
}
