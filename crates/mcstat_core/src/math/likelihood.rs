//! Likelihood of i.i.d. samples under a one-parameter density.

/// Exponential density `e^{-x/τ}/τ`.
///
/// Returns 1 when `tau` is zero.
///
/// # Examples
///
/// ```
/// use mcstat_core::math::likelihood::exp_pdf;
///
/// assert!((exp_pdf(0.0, 2.0) - 0.5).abs() < 1e-15);
/// assert_eq!(exp_pdf(3.0, 0.0), 1.0);
/// ```
#[inline]
pub fn exp_pdf(x: f64, tau: f64) -> f64 {
    if tau == 0.0 {
        return 1.0;
    }
    (-x / tau).exp() / tau
}

/// Product of `pdf(x, theta)` over the sample.
///
/// An empty sample has likelihood 1.
pub fn likelihood<F>(theta: f64, pdf: F, sample: &[f64]) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    sample.iter().map(|&x| pdf(x, theta)).product()
}

/// Sum of `ln pdf(x, theta)` over the sample.
///
/// Points where the density is not strictly positive are skipped, so the
/// result is always finite for finite positive densities.
///
/// # Examples
///
/// ```
/// use mcstat_core::math::likelihood::{exp_pdf, log_likelihood};
///
/// let sample = [0.5, 1.0, 1.5];
/// let ll = log_likelihood(1.0, exp_pdf, &sample);
/// assert!((ll + 3.0).abs() < 1e-12);
/// ```
pub fn log_likelihood<F>(theta: f64, pdf: F, sample: &[f64]) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    sample
        .iter()
        .map(|&x| pdf(x, theta))
        .filter(|&p| p > 0.0)
        .map(f64::ln)
        .sum()
}
