//! Significance filtering of ranked measures
//!
//! t-test scores are compared against the two-sided Student's t critical
//! value with `N - 1` degrees of freedom. Chi-square and log-likelihood
//! scores are both compared against the chi-square critical value with one
//! degree of freedom. PMI and MI have no test and are reported unfiltered.

use crate::error::{CollocateError, CollocateResult};
use crate::measures::Measure;
use crate::models::ScoredEntry;
use statrs::distribution::{ChiSquared, ContinuousCDF, StudentsT};
use tracing::debug;

/// Significance level, guaranteed to lie strictly between 0 and 1.
///
/// Levels so small that `1 - alpha / 2` rounds to exactly 1 are rejected:
/// the upper-tail probability would be lost and the critical value with it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Alpha(f64);

impl Alpha {
    pub const DEFAULT: f64 = 0.0005;

    pub fn new(value: f64) -> CollocateResult<Self> {
        if value > 0.0 && value < 1.0 && 1.0 - value / 2.0 < 1.0 {
            Ok(Self(value))
        } else {
            Err(CollocateError::InvalidAlpha(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Alpha {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Hypothesis test used to pick a critical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignificanceTest {
    /// Two-sided Student's t with `corpus_size - 1` degrees of freedom
    StudentT { corpus_size: u64 },
    /// Chi-square with one degree of freedom
    ChiSquare,
}

impl SignificanceTest {
    /// The test that filters a measure's ranking, if it has one.
    pub fn for_measure(measure: Measure, corpus_size: u64) -> Option<Self> {
        match measure {
            Measure::TTest => Some(SignificanceTest::StudentT { corpus_size }),
            Measure::ChiSquare | Measure::LikelihoodRatio => Some(SignificanceTest::ChiSquare),
            Measure::Pmi | Measure::Mi => None,
        }
    }

    /// Critical value at significance level `alpha`.
    pub fn quantile(&self, alpha: Alpha) -> CollocateResult<f64> {
        match *self {
            SignificanceTest::StudentT { corpus_size } => t_quantile(alpha, corpus_size),
            SignificanceTest::ChiSquare => chi2_quantile(alpha),
        }
    }
}

/// Inverse CDF of Student's t at `1 - alpha/2` with `corpus_size - 1` dof.
pub fn t_quantile(alpha: Alpha, corpus_size: u64) -> CollocateResult<f64> {
    let freedom = corpus_size.saturating_sub(1) as f64;
    let dist = StudentsT::new(0.0, 1.0, freedom)
        .map_err(|e| CollocateError::Distribution(format!("Student's t with {} dof: {}", freedom, e)))?;
    Ok(dist.inverse_cdf(1.0 - alpha.value() / 2.0))
}

/// Inverse CDF of chi-square at `1 - alpha` with one dof.
pub fn chi2_quantile(alpha: Alpha) -> CollocateResult<f64> {
    let dist = ChiSquared::new(1.0)
        .map_err(|e| CollocateError::Distribution(format!("chi-square with 1 dof: {}", e)))?;
    Ok(dist.inverse_cdf(1.0 - alpha.value()))
}

/// Entries that passed a test, with the critical value they were held to.
#[derive(Debug, Clone, PartialEq)]
pub struct Filtered {
    pub entries: Vec<ScoredEntry>,
    pub quantile: f64,
}

/// Keep entries with `score > quantile`, preserving rank order. NaN never passes.
pub fn filter_ranked(entries: &[ScoredEntry], quantile: f64) -> Vec<ScoredEntry> {
    entries
        .iter()
        .filter(|e| e.score > quantile)
        .cloned()
        .collect()
}

/// Compute the critical value for `test` and filter `entries` against it.
pub fn apply(
    test: SignificanceTest,
    entries: &[ScoredEntry],
    alpha: Alpha,
) -> CollocateResult<Filtered> {
    let quantile = test.quantile(alpha)?;
    let kept = filter_ranked(entries, quantile);
    debug!(
        "{:?}: {} of {} entries above {}",
        test,
        kept.len(),
        entries.len(),
        quantile
    );
    Ok(Filtered {
        entries: kept,
        quantile,
    })
}
