//! Try-and-accept (rejection) sampling.
//!
//! A candidate `x` is drawn uniformly on the domain and a height `y`
//! uniformly on `[0, y_max)`; `x` is accepted when `y <= f(x)`. Accepted
//! values follow the density proportional to `f` as long as `f <= y_max`
//! everywhere on the domain. The expected number of trials per accepted
//! value is `(x_max − x_min)·y_max / ∫f`.
//!
//! If `y_max` underestimates the true maximum the sample is distorted; if
//! `f` is zero everywhere the loop never accepts. The latter can only be
//! caught with a finite [`IterationBudget`].

use tracing::debug;

use crate::rng::RandomStream;
use crate::{Interval, IterationBudget, Result, Sample, SamplingError};

fn check_y_max(y_max: f64) -> Result<Interval> {
    if !y_max.is_finite() || y_max < 0.0 {
        return Err(SamplingError::invalid_argument(
            "y_max",
            format!("must be finite and non-negative, got {}", y_max),
        ));
    }
    Interval::new(0.0, y_max)
}

/// One value from the density proportional to `f` on `domain`.
///
/// # Errors
///
/// - `SamplingError::InvalidArgument` if `y_max` is negative or not finite
/// - `SamplingError::BudgetExceeded` if `budget` is finite and no candidate
///   was accepted within it
///
/// # Examples
///
/// ```
/// use mcstat_engine::rng::RandomStream;
/// use mcstat_engine::variates::rand_tac;
/// use mcstat_engine::{Interval, IterationBudget};
///
/// let mut rng = RandomStream::from_seed(3);
/// let domain = Interval::new(0.0, 1.0).unwrap();
///
/// // Triangular density 2x on [0, 1]
/// let x = rand_tac(&mut rng, |x| 2.0 * x, domain, 2.0, IterationBudget::unbounded()).unwrap();
/// assert!(domain.contains(x));
/// ```
pub fn rand_tac<F>(
    rng: &mut RandomStream,
    f: F,
    domain: Interval,
    y_max: f64,
    budget: IterationBudget,
) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    let heights = check_y_max(y_max)?;
    draw(rng, &f, domain, heights, budget)
}

fn draw<F>(
    rng: &mut RandomStream,
    f: &F,
    domain: Interval,
    heights: Interval,
    budget: IterationBudget,
) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    let mut trials = 0;
    loop {
        budget.charge(&mut trials).inspect_err(|_| {
            debug!(trials, "try-and-accept budget exhausted");
        })?;
        let x = rng.uniform_in(domain);
        let y = rng.uniform_in(heights);
        if y <= f(x) {
            return Ok(x);
        }
    }
}

/// `n` values from the density proportional to `f` on `domain`.
///
/// The budget applies to each value separately.
///
/// # Errors
///
/// As for [`rand_tac`]. On `BudgetExceeded` the values drawn so far are
/// discarded.
pub fn generate_tac<F>(
    rng: &mut RandomStream,
    f: F,
    domain: Interval,
    y_max: f64,
    n: usize,
    seed: Option<u64>,
    budget: IterationBudget,
) -> Result<Sample>
where
    F: Fn(f64) -> f64,
{
    let heights = check_y_max(y_max)?;
    rng.apply_seed(seed);
    (0..n)
        .map(|_| draw(rng, &f, domain, heights, budget))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn unit() -> Interval {
        Interval::unit()
    }

    #[test]
    fn test_values_inside_domain() {
        let mut rng = RandomStream::from_seed(11);
        let domain = Interval::new(-2.0, 3.0).unwrap();
        let f = |x: f64| (-x * x / 2.0).exp();

        let sample =
            generate_tac(&mut rng, f, domain, 1.0, 5_000, None, IterationBudget::unbounded())
                .unwrap();
        assert_eq!(sample.len(), 5_000);
        assert!(sample.iter().all(|&x| domain.contains(x)));
    }

    #[test]
    fn test_empty_sample() {
        let mut rng = RandomStream::from_seed(11);
        let sample =
            generate_tac(&mut rng, |_| 1.0, unit(), 1.0, 0, Some(3), IterationBudget::limited(0))
                .unwrap();
        assert!(sample.is_empty());
    }

    #[test]
    fn test_triangular_mean() {
        // Density 2x on [0, 1] has mean 2/3.
        let mut rng = RandomStream::from_seed(2024);
        let sample = generate_tac(
            &mut rng,
            |x| 2.0 * x,
            unit(),
            2.0,
            50_000,
            None,
            IterationBudget::unbounded(),
        )
        .unwrap();
        let mean = sample.iter().sum::<f64>() / sample.len() as f64;
        assert_abs_diff_eq!(mean, 2.0 / 3.0, epsilon = 0.01);
    }

    #[test]
    fn test_seed_reproducibility() {
        let mut rng = RandomStream::from_entropy();
        let f = |x: f64| x.sin();
        let domain = Interval::new(0.0, std::f64::consts::PI).unwrap();

        let a = generate_tac(&mut rng, f, domain, 1.0, 100, Some(42), IterationBudget::unbounded())
            .unwrap();
        let b = generate_tac(&mut rng, f, domain, 1.0, 100, Some(42), IterationBudget::unbounded())
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_density_hits_budget() {
        let mut rng = RandomStream::from_seed(1);
        let err = rand_tac(&mut rng, |_| -1.0, unit(), 1.0, IterationBudget::limited(1_000))
            .unwrap_err();
        assert_eq!(err, SamplingError::BudgetExceeded { iterations: 1_000 });
    }

    #[test]
    fn test_budget_large_enough_succeeds() {
        let mut rng = RandomStream::from_seed(1);
        let x = rand_tac(&mut rng, |_| 1.0, unit(), 1.0, IterationBudget::limited(1)).unwrap();
        assert!(unit().contains(x));
    }

    #[test]
    fn test_negative_y_max_rejected() {
        let mut rng = RandomStream::from_seed(1);
        let err = rand_tac(&mut rng, |_| 1.0, unit(), -1.0, IterationBudget::unbounded())
            .unwrap_err();
        assert!(matches!(err, SamplingError::InvalidArgument { name: "y_max", .. }));

        let err = rand_tac(&mut rng, |_| 1.0, unit(), f64::NAN, IterationBudget::unbounded())
            .unwrap_err();
        assert!(matches!(err, SamplingError::InvalidArgument { name: "y_max", .. }));
    }

    #[test]
    fn test_zero_y_max_accepts_non_negative_density() {
        let mut rng = RandomStream::from_seed(4);
        let x = rand_tac(&mut rng, |_| 0.0, unit(), 0.0, IterationBudget::limited(1)).unwrap();
        assert!(unit().contains(x));
    }
}
