//! Crude (mean-value) Monte-Carlo integration.
//!
//! `∫ g ≈ L·mean(g(xᵢ))` with `xᵢ` uniform on the domain of length `L`; the
//! uncertainty is the standard error of the mean scaled by `L`, using the
//! bias-corrected sample variance. With a single point the variance is taken
//! as zero.

use tracing::debug;

use super::{check_trials, Integrator};
use crate::rng::RandomStream;
use crate::{IntegralEstimate, Interval, Result};

/// Crude Monte-Carlo estimate of `∫ g` over `domain` from `n_rand` points.
///
/// # Errors
///
/// `SamplingError::InvalidArgument` if `n_rand` is zero.
///
/// # Examples
///
/// ```
/// use mcstat_engine::integration::integral_crude_mc;
/// use mcstat_engine::rng::RandomStream;
/// use mcstat_engine::Interval;
///
/// let mut rng = RandomStream::from_seed(42);
/// let domain = Interval::new(0.0, 2.0).unwrap();
/// let est = integral_crude_mc(&mut rng, |x| x, domain, 100_000).unwrap();
/// assert!(est.is_consistent_with(2.0, 5.0));
/// ```
pub fn integral_crude_mc<G>(
    rng: &mut RandomStream,
    g: G,
    domain: Interval,
    n_rand: usize,
) -> Result<IntegralEstimate>
where
    G: Fn(f64) -> f64,
{
    check_trials("n_rand", n_rand)?;

    // Running mean and sum of squared deviations, stable under large offsets.
    let mut mean = 0.0;
    let mut m2 = 0.0;
    for k in 1..=n_rand {
        let value = g(rng.uniform_in(domain));
        let delta = value - mean;
        mean += delta / k as f64;
        m2 += delta * (value - mean);
    }

    let n = n_rand as f64;
    let variance = if n_rand > 1 { m2 / (n - 1.0) } else { 0.0 };

    let length = domain.length();
    let estimate = IntegralEstimate::new(mean * length, (variance / n).sqrt() * length);

    debug!(
        n_rand,
        value = estimate.value,
        uncertainty = estimate.uncertainty,
        "crude Monte-Carlo integration complete"
    );
    Ok(estimate)
}

/// [`Integrator`] form of [`integral_crude_mc`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrudeMonteCarlo {
    /// Number of points sampled.
    pub n_rand: usize,
}

impl CrudeMonteCarlo {
    /// Create a crude Monte-Carlo integrator.
    pub fn new(n_rand: usize) -> Self {
        Self { n_rand }
    }
}

impl Integrator for CrudeMonteCarlo {
    fn name(&self) -> &'static str {
        "crude"
    }

    fn integrate(
        &self,
        rng: &mut RandomStream,
        f: &dyn Fn(f64) -> f64,
        domain: Interval,
    ) -> Result<IntegralEstimate> {
        integral_crude_mc(rng, f, domain, self.n_rand)
    }
}
