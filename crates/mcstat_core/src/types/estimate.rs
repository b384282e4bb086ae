//! Monte-Carlo integral estimate.

use std::fmt;

/// Value of a Monte-Carlo integral together with its statistical uncertainty.
///
/// `uncertainty` is one standard error and is always non-negative.
///
/// # Examples
///
/// ```
/// use mcstat_core::types::IntegralEstimate;
///
/// let est = IntegralEstimate::new(2.0, 0.01);
/// assert!((est.confidence_95() - 0.0196).abs() < 1e-12);
/// assert!(est.is_consistent_with(2.03, 5.0));
/// println!("{}", est); // 2 ± 0.01
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntegralEstimate {
    /// Estimated integral.
    pub value: f64,
    /// Standard error of the estimate.
    pub uncertainty: f64,
}

impl IntegralEstimate {
    /// Create an estimate; the uncertainty is stored as its absolute value.
    #[inline]
    pub fn new(value: f64, uncertainty: f64) -> Self {
        Self {
            value,
            uncertainty: uncertainty.abs(),
        }
    }

    /// Half-width of the 95% confidence interval (1.96 standard errors).
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.uncertainty
    }

    /// Half-width of the 99% confidence interval (2.576 standard errors).
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.uncertainty
    }

    /// Whether `expected` lies within `n_sigma` standard errors of the value.
    #[inline]
    pub fn is_consistent_with(&self, expected: f64, n_sigma: f64) -> bool {
        (self.value - expected).abs() <= n_sigma * self.uncertainty
    }
}

impl fmt::Display for IntegralEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} ± {:.*}", p, self.value, p, self.uncertainty),
            None => write!(f, "{} ± {}", self.value, self.uncertainty),
        }
    }
}
