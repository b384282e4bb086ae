//! Central-limit approximation of a Gaussian variate.
//!
//! The mean of `n_sum` independent uniforms on `[x_min, x_max]` has mean
//! `(x_min + x_max)/2` and variance `(x_max − x_min)²/(12·n_sum)`, and tends
//! to a Gaussian as `n_sum` grows. The result is bounded by the interval, so
//! the tails are always truncated; how good the approximation is for a given
//! `n_sum` is left to the caller.

use crate::rng::RandomStream;
use crate::{Interval, Result, Sample, SamplingError};

/// Number of uniforms averaged per value when the caller has no preference.
pub const DEFAULT_N_SUM: usize = 10;

fn check_n_sum(n_sum: usize) -> Result<()> {
    if n_sum == 0 {
        return Err(SamplingError::invalid_argument(
            "n_sum",
            "must be at least 1",
        ));
    }
    Ok(())
}

/// Interval `mean ± sqrt(3·n_sum)·sigma` whose `n_sum`-uniform average has
/// standard deviation `sigma`.
///
/// # Errors
///
/// `SamplingError::InvalidArgument` if `n_sum` is zero, `sigma` is negative
/// or the bounds are not finite.
///
/// # Examples
///
/// ```
/// use mcstat_engine::variates::clt::clt_interval;
///
/// let domain = clt_interval(0.0, 1.0, 12).unwrap();
/// assert!((domain.max() - 6.0).abs() < 1e-12);
/// ```
pub fn clt_interval(mean: f64, sigma: f64, n_sum: usize) -> Result<Interval> {
    check_n_sum(n_sum)?;
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(SamplingError::invalid_argument(
            "sigma",
            format!("must be finite and non-negative, got {}", sigma),
        ));
    }
    let delta = (3.0 * n_sum as f64).sqrt() * sigma;
    Interval::symmetric(mean, delta)
}

fn average(rng: &mut RandomStream, domain: Interval, n_sum: usize) -> f64 {
    let total: f64 = (0..n_sum).map(|_| rng.uniform_in(domain)).sum();
    total / n_sum as f64
}

/// Mean of `n_sum` uniforms on `domain`.
///
/// # Errors
///
/// `SamplingError::InvalidArgument` if `n_sum` is zero.
pub fn rand_tcl(rng: &mut RandomStream, domain: Interval, n_sum: usize) -> Result<f64> {
    check_n_sum(n_sum)?;
    Ok(average(rng, domain, n_sum))
}

/// `n` values from [`rand_tcl`].
///
/// # Errors
///
/// `SamplingError::InvalidArgument` if `n_sum` is zero.
pub fn generate_tcl(
    rng: &mut RandomStream,
    domain: Interval,
    n: usize,
    n_sum: usize,
    seed: Option<u64>,
) -> Result<Sample> {
    check_n_sum(n_sum)?;
    rng.apply_seed(seed);
    Ok((0..n).map(|_| average(rng, domain, n_sum)).collect())
}

/// Approximately Gaussian value with the given mean and standard deviation.
///
/// # Errors
///
/// As for [`clt_interval`].
///
/// # Examples
///
/// ```
/// use mcstat_engine::rng::RandomStream;
/// use mcstat_engine::variates::{rand_tcl_ms, DEFAULT_N_SUM};
///
/// let mut rng = RandomStream::from_seed(5);
/// let x = rand_tcl_ms(&mut rng, 10.0, 2.0, DEFAULT_N_SUM).unwrap();
/// assert!(x.is_finite());
/// ```
pub fn rand_tcl_ms(rng: &mut RandomStream, mean: f64, sigma: f64, n_sum: usize) -> Result<f64> {
    let domain = clt_interval(mean, sigma, n_sum)?;
    Ok(average(rng, domain, n_sum))
}

/// `n` values from [`rand_tcl_ms`].
///
/// # Errors
///
/// As for [`clt_interval`].
pub fn generate_tcl_ms(
    rng: &mut RandomStream,
    mean: f64,
    sigma: f64,
    n: usize,
    n_sum: usize,
    seed: Option<u64>,
) -> Result<Sample> {
    let domain = clt_interval(mean, sigma, n_sum)?;
    generate_tcl(rng, domain, n, n_sum, seed)
}
