//! Poisson variates from exponential waiting times.
//!
//! Interarrival times of a unit-rate Poisson process are exponential with
//! τ = 1. The number of arrivals whose cumulative time stays below `mean`
//! is Poisson distributed with that mean.

use tracing::debug;

use super::exponential::draw_exp;
use crate::rng::RandomStream;
use crate::{IterationBudget, Result, SamplingError};

fn check_mean(mean: f64) -> Result<()> {
    if !mean.is_finite() || mean < 0.0 {
        return Err(SamplingError::invalid_argument(
            "mean",
            format!("must be finite and non-negative, got {}", mean),
        ));
    }
    Ok(())
}

fn draw(rng: &mut RandomStream, mean: f64, budget: IterationBudget) -> Result<u64> {
    let mut draws = 0;
    let mut next_wait = |rng: &mut RandomStream| -> Result<f64> {
        budget.charge(&mut draws).inspect_err(|_| {
            debug!(draws, mean, "poisson budget exhausted");
        })?;
        Ok(draw_exp(rng, 1.0))
    };

    let mut total_time = next_wait(rng)?;
    let mut events = 0_u64;
    while total_time < mean {
        events += 1;
        total_time += next_wait(rng)?;
    }
    Ok(events)
}

/// One Poisson variate with the given mean.
///
/// Each waiting time drawn counts as one iteration against `budget`; the
/// first waiting time is always drawn, so `mean == 0` consumes one value from
/// the stream and returns 0.
///
/// # Errors
///
/// - `SamplingError::InvalidArgument` if `mean` is negative or not finite
/// - `SamplingError::BudgetExceeded` if `budget` is finite and exhausted
///
/// # Examples
///
/// ```
/// use mcstat_engine::rng::RandomStream;
/// use mcstat_engine::variates::rand_poisson;
/// use mcstat_engine::IterationBudget;
///
/// let mut rng = RandomStream::from_seed(1);
/// assert_eq!(rand_poisson(&mut rng, 0.0, IterationBudget::unbounded()).unwrap(), 0);
/// ```
pub fn rand_poisson(rng: &mut RandomStream, mean: f64, budget: IterationBudget) -> Result<u64> {
    check_mean(mean)?;
    draw(rng, mean, budget)
}

/// `n` Poisson variates with the given mean. The budget applies to each
/// value separately.
///
/// # Errors
///
/// As for [`rand_poisson`].
pub fn generate_poisson(
    rng: &mut RandomStream,
    mean: f64,
    n: usize,
    seed: Option<u64>,
    budget: IterationBudget,
) -> Result<Vec<u64>> {
    check_mean(mean)?;
    rng.apply_seed(seed);
    (0..n).map(|_| draw(rng, mean, budget)).collect()
}
