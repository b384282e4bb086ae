//! Uniform variates on [0, 1) and on an arbitrary interval.

use crate::rng::RandomStream;
use crate::{Interval, Result, Sample};

/// Next value in [0, 1), reseeding first when `seed` is given.
///
/// # Examples
///
/// ```
/// use mcstat_engine::rng::RandomStream;
/// use mcstat_engine::variates::uniform01;
///
/// let mut rng = RandomStream::from_entropy();
/// let a = uniform01(&mut rng, Some(42));
/// let b = uniform01(&mut rng, Some(42));
/// assert_eq!(a, b);
/// ```
#[inline]
pub fn uniform01(rng: &mut RandomStream, seed: Option<u64>) -> f64 {
    rng.apply_seed(seed);
    rng.uniform01()
}

/// Value uniform on `[a, b)`: `a + u·(b − a)`.
///
/// # Errors
///
/// `SamplingError::InvalidArgument` if `a > b`, either bound is not finite,
/// or `b - a` overflows.
#[inline]
pub fn uniform_range(rng: &mut RandomStream, a: f64, b: f64) -> Result<f64> {
    let interval = Interval::new(a, b)?;
    Ok(rng.uniform_in(interval))
}

/// `n` values uniform on [0, 1).
pub fn generate_uniform(rng: &mut RandomStream, n: usize, seed: Option<u64>) -> Sample {
    rng.apply_seed(seed);
    let mut sample = vec![0.0; n];
    rng.fill_uniform(&mut sample);
    sample
}

/// `n` values uniform on `[a, b)`.
///
/// # Errors
///
/// `SamplingError::InvalidArgument` if `a > b`, either bound is not finite,
/// or `b - a` overflows.
///
/// # Examples
///
/// ```
/// use mcstat_engine::rng::RandomStream;
/// use mcstat_engine::variates::generate_range;
///
/// let mut rng = RandomStream::from_seed(1);
/// let sample = generate_range(&mut rng, -1.0, 1.0, 100, None).unwrap();
/// assert!(sample.iter().all(|&x| (-1.0..1.0).contains(&x)));
/// assert!(generate_range(&mut rng, 1.0, -1.0, 100, None).is_err());
/// ```
pub fn generate_range(
    rng: &mut RandomStream,
    a: f64,
    b: f64,
    n: usize,
    seed: Option<u64>,
) -> Result<Sample> {
    let interval = Interval::new(a, b)?;
    rng.apply_seed(seed);
    Ok((0..n).map(|_| rng.uniform_in(interval)).collect())
}
