//! Monte-Carlo estimators of definite integrals.
//!
//! # Architecture
//!
//! ```text
//! Integrator (trait)
//! ├── HitOrMiss        -> integral_hom
//! └── CrudeMonteCarlo  -> integral_crude_mc
//! ```
//!
//! Both estimators draw from a caller-owned [`RandomStream`] and return an
//! [`IntegralEstimate`] holding the value and one standard error.
//!
//! # Examples
//!
//! ```rust
//! use mcstat_engine::integration::{CrudeMonteCarlo, HitOrMiss, Integrator};
//! use mcstat_engine::rng::RandomStream;
//! use mcstat_engine::Interval;
//!
//! let mut rng = RandomStream::from_seed(42);
//! let domain = Interval::new(0.0, std::f64::consts::PI).unwrap();
//! let integrators: Vec<Box<dyn Integrator>> = vec![
//!     Box::new(HitOrMiss::new(1.0, 50_000)),
//!     Box::new(CrudeMonteCarlo::new(50_000)),
//! ];
//!
//! for integrator in &integrators {
//!     let estimate = integrator.integrate(&mut rng, &|x: f64| x.sin(), domain).unwrap();
//!     assert!(estimate.is_consistent_with(2.0, 5.0));
//! }
//! ```

mod crude;
mod hit_or_miss;

pub use crude::{integral_crude_mc, CrudeMonteCarlo};
pub use hit_or_miss::{integral_hom, HitOrMiss};

use crate::rng::RandomStream;
use crate::{IntegralEstimate, Interval, Result, SamplingError};

/// A Monte-Carlo estimator of `∫ f` over a domain.
pub trait Integrator {
    /// Short human-readable name of the method.
    fn name(&self) -> &'static str;

    /// Estimate the integral of `f` over `domain`.
    ///
    /// # Errors
    ///
    /// `SamplingError::InvalidArgument` if the estimator is misconfigured.
    fn integrate(
        &self,
        rng: &mut RandomStream,
        f: &dyn Fn(f64) -> f64,
        domain: Interval,
    ) -> Result<IntegralEstimate>;
}

fn check_trials(name: &'static str, n: usize) -> Result<()> {
    if n == 0 {
        return Err(SamplingError::invalid_argument(name, "must be at least 1"));
    }
    Ok(())
}
