//! Hit-or-miss (geometric) Monte-Carlo integration.
//!
//! Points are thrown uniformly into the rectangle `[x_min, x_max] × [0, y_max]`
//! and the fraction `p` falling below the curve estimates the ratio of the
//! integral to the rectangle area `A`. The hit count is binomial, so
//!
//! ```text
//! I ≈ A·p        σ_I² = A²·p·(1 − p)/N
//! ```
//!
//! `y_max` must dominate `f` on the domain; otherwise the estimate is biased
//! low and nothing signals it.

use tracing::debug;

use super::{check_trials, Integrator};
use crate::rng::RandomStream;
use crate::{IntegralEstimate, Interval, Result, SamplingError};

/// Hit-or-miss estimate of `∫ f` over `domain` from `n_evt` points.
///
/// # Errors
///
/// `SamplingError::InvalidArgument` if `n_evt` is zero or `y_max` is negative
/// or not finite.
///
/// # Examples
///
/// ```
/// use mcstat_engine::integration::integral_hom;
/// use mcstat_engine::rng::RandomStream;
/// use mcstat_engine::Interval;
///
/// let mut rng = RandomStream::from_seed(42);
/// let est = integral_hom(&mut rng, |_| 1.0, Interval::unit(), 1.0, 100_000).unwrap();
/// assert!((est.value - 1.0).abs() <= 5.0 * est.uncertainty + 1e-12);
/// ```
pub fn integral_hom<F>(
    rng: &mut RandomStream,
    f: F,
    domain: Interval,
    y_max: f64,
    n_evt: usize,
) -> Result<IntegralEstimate>
where
    F: Fn(f64) -> f64,
{
    check_trials("n_evt", n_evt)?;
    if !y_max.is_finite() || y_max < 0.0 {
        return Err(SamplingError::invalid_argument(
            "y_max",
            format!("must be finite and non-negative, got {}", y_max),
        ));
    }
    let heights = Interval::new(0.0, y_max)?;

    let mut hits = 0_usize;
    for _ in 0..n_evt {
        let x = rng.uniform_in(domain);
        let y = rng.uniform_in(heights);
        if y < f(x) {
            hits += 1;
        }
    }

    let area = domain.length() * y_max;
    let n = n_evt as f64;
    let fraction = hits as f64 / n;
    let variance = area * area * fraction * (1.0 - fraction) / n;
    let estimate = IntegralEstimate::new(area * fraction, variance.sqrt());

    debug!(
        n_evt,
        hits,
        value = estimate.value,
        uncertainty = estimate.uncertainty,
        "hit-or-miss integration complete"
    );
    Ok(estimate)
}

/// [`Integrator`] form of [`integral_hom`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitOrMiss {
    /// Upper bound of the integrand on the domain.
    pub y_max: f64,
    /// Number of points thrown.
    pub n_evt: usize,
}

impl HitOrMiss {
    /// Create a hit-or-miss integrator.
    pub fn new(y_max: f64, n_evt: usize) -> Self {
        Self { y_max, n_evt }
    }
}

impl Integrator for HitOrMiss {
    fn name(&self) -> &'static str {
        "hit-or-miss"
    }

    fn integrate(
        &self,
        rng: &mut RandomStream,
        f: &dyn Fn(f64) -> f64,
        domain: Interval,
    ) -> Result<IntegralEstimate> {
        integral_hom(rng, f, domain, self.y_max, self.n_evt)
    }
}
