//! Exponential variates by inverse transform.
//!
//! For the density `λ·e^{−λx}` on `x >= 0` the CDF is `F(x) = 1 − e^{−λx}`
//! and its inverse `F⁻¹(u) = −ln(1 − u)/λ`. Feeding `u ~ U[0, 1)` through
//! `F⁻¹` yields an exponential variate with mean lifetime `τ = 1/λ`.

use crate::rng::RandomStream;
use crate::{Result, Sample, SamplingError};

/// Exponential CDF `1 − e^{−λx}` for `x >= 0`, 0 below.
#[inline]
pub fn exp_cdf(x: f64, lambda: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    -(-lambda * x).exp_m1()
}

/// Inverse exponential CDF `−ln(1 − y)/λ` for `y` in [0, 1).
///
/// # Examples
///
/// ```
/// use mcstat_engine::variates::{exp_cdf, inv_exp};
///
/// let x = inv_exp(0.3, 2.0);
/// assert!((exp_cdf(x, 2.0) - 0.3).abs() < 1e-15);
/// ```
#[inline]
pub fn inv_exp(y: f64, lambda: f64) -> f64 {
    -(-y).ln_1p() / lambda
}

/// Rate `λ = 1/τ`, rejecting lifetimes for which it is undefined.
fn rate(tau: f64) -> Result<f64> {
    if tau == 0.0 {
        return Err(SamplingError::invalid_argument(
            "tau",
            "lifetime must be non-zero",
        ));
    }
    if !tau.is_finite() || tau < 0.0 {
        return Err(SamplingError::invalid_argument(
            "tau",
            format!("lifetime must be finite and positive, got {}", tau),
        ));
    }
    Ok(1.0 / tau)
}

#[inline]
pub(crate) fn draw_exp(rng: &mut RandomStream, lambda: f64) -> f64 {
    inv_exp(rng.uniform01(), lambda)
}

/// One exponential variate with mean lifetime `tau`.
///
/// # Errors
///
/// `SamplingError::InvalidArgument` if `tau` is zero, negative or not finite.
///
/// # Examples
///
/// ```
/// use mcstat_engine::rng::RandomStream;
/// use mcstat_engine::variates::rand_exp;
///
/// let mut rng = RandomStream::from_seed(1);
/// assert!(rand_exp(&mut rng, 2.5).unwrap() >= 0.0);
/// assert!(rand_exp(&mut rng, 0.0).is_err());
/// ```
pub fn rand_exp(rng: &mut RandomStream, tau: f64) -> Result<f64> {
    let lambda = rate(tau)?;
    Ok(draw_exp(rng, lambda))
}

/// `n` exponential variates with mean lifetime `tau`.
///
/// # Errors
///
/// `SamplingError::InvalidArgument` if `tau` is zero, negative or not finite.
pub fn generate_exp(
    rng: &mut RandomStream,
    tau: f64,
    n: usize,
    seed: Option<u64>,
) -> Result<Sample> {
    let lambda = rate(tau)?;
    rng.apply_seed(seed);
    Ok((0..n).map(|_| draw_exp(rng, lambda)).collect())
}
