//! Bisection root-finding solver.

use super::{SearchConfig, SearchStyle};
use crate::types::SolverError;
use num_traits::Float;

/// Bisection root finder.
///
/// Halves a bracket `[a, b]` with `f(a)·f(b) <= 0`, keeping the half in which
/// the sign change survives, until the bracket is no wider than the
/// configured precision. The midpoint of the final bracket is returned.
///
/// # Example
///
/// ```
/// use mcstat_core::math::solvers::{BisectionSolver, SearchConfig};
///
/// let solver = BisectionSolver::new(SearchConfig::default().with_precision(1e-10));
///
/// // cos(x) = 0 at π/2
/// let root = solver.find_root(|x: f64| x.cos(), 0.0, 3.0).unwrap();
/// assert!((root - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct BisectionSolver<T: Float> {
    config: SearchConfig<T>,
}

impl<T: Float> BisectionSolver<T> {
    /// Create a new bisection solver with the given configuration.
    pub fn new(config: SearchConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    /// Solver configuration.
    pub fn config(&self) -> &SearchConfig<T> {
        &self.config
    }

    /// Find a root of `g` in the bracket spanned by `x_min` and `x_max`.
    ///
    /// The endpoints may be given in either order.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Midpoint of a bracket no wider than the precision
    /// * `Err(SolverError::NoBracket)` - `g(x_min)` and `g(x_max)` have the same sign
    pub fn find_root<F>(&self, g: F, x_min: T, x_max: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let (a, b) = if x_min <= x_max {
            (x_min, x_max)
        } else {
            (x_max, x_min)
        };

        if g(a) * g(b) > T::zero() {
            return Err(SolverError::NoBracket {
                a: a.to_f64().unwrap_or(f64::NAN),
                b: b.to_f64().unwrap_or(f64::NAN),
            });
        }

        let root = match self.config.style {
            SearchStyle::Iterative => self.iterate(&g, a, b),
            SearchStyle::Recursive => self.recurse(&g, a, b),
        };
        Ok(root)
    }

    fn iterate<F>(&self, g: &F, mut a: T, mut b: T) -> T
    where
        F: Fn(T) -> T,
    {
        while let Some((next_a, next_b)) = self.step(g, a, b) {
            a = next_a;
            b = next_b;
        }
        midpoint(a, b)
    }

    fn recurse<F>(&self, g: &F, a: T, b: T) -> T
    where
        F: Fn(T) -> T,
    {
        match self.step(g, a, b) {
            Some((next_a, next_b)) => self.recurse(g, next_a, next_b),
            None => midpoint(a, b),
        }
    }

    /// One halving, or `None` once the bracket is narrow enough or can no
    /// longer shrink in floating point.
    fn step<F>(&self, g: &F, a: T, b: T) -> Option<(T, T)>
    where
        F: Fn(T) -> T,
    {
        if b - a <= self.config.precision {
            return None;
        }
        let mid = midpoint(a, b);
        if mid <= a || mid >= b {
            return None;
        }
        if g(mid) * g(a) > T::zero() {
            Some((mid, b))
        } else {
            Some((a, mid))
        }
    }
}

#[inline]
fn midpoint<T: Float>(a: T, b: T) -> T {
    (a + b) / (T::one() + T::one())
}
