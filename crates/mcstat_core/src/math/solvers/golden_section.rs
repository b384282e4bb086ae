//! Golden-section extremum search.

use super::{SearchConfig, SearchStyle};
use num_traits::Float;

/// Fraction of the bracket at which the upper interior point sits.
pub const GOLDEN_RATIO_FRACTION: f64 = 0.618;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extremum {
    Minimum,
    Maximum,
}

/// Golden-section search for the extremum of a unimodal function.
///
/// Each step evaluates the function at the interior points
/// `x0 + r·(x1 − x0)` and `x0 + (1 − r)·(x1 − x0)` with `r = 0.618` and
/// discards the outer part of the bracket that cannot contain the extremum.
/// The search stops once the bracket is no wider than the precision and
/// returns its midpoint.
///
/// # Example
///
/// ```
/// use mcstat_core::math::solvers::{GoldenSectionSolver, SearchConfig};
///
/// let solver = GoldenSectionSolver::new(SearchConfig::default().with_precision(1e-9));
///
/// // sin(x) peaks at π/2 on [0, π]
/// let x = solver.find_maximum(|x: f64| x.sin(), 0.0, std::f64::consts::PI);
/// assert!((x - std::f64::consts::FRAC_PI_2).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct GoldenSectionSolver<T: Float> {
    config: SearchConfig<T>,
}

impl<T: Float> GoldenSectionSolver<T> {
    /// Create a new solver with the given configuration.
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

    /// Location of the minimum of `g` between `x0` and `x1`.
    pub fn find_minimum<F>(&self, g: F, x0: T, x1: T) -> T
    where
        F: Fn(T) -> T,
    {
        self.search(&g, x0, x1, Extremum::Minimum)
    }

    /// Location of the maximum of `g` between `x0` and `x1`.
    pub fn find_maximum<F>(&self, g: F, x0: T, x1: T) -> T
    where
        F: Fn(T) -> T,
    {
        self.search(&g, x0, x1, Extremum::Maximum)
    }

    fn search<F>(&self, g: &F, x0: T, x1: T, target: Extremum) -> T
    where
        F: Fn(T) -> T,
    {
        match self.config.style {
            SearchStyle::Iterative => {
                let (mut x0, mut x1) = (x0, x1);
                while let Some((a, b)) = self.step(g, x0, x1, target) {
                    x0 = a;
                    x1 = b;
                }
                midpoint(x0, x1)
            }
            SearchStyle::Recursive => self.recurse(g, x0, x1, target),
        }
    }

    fn recurse<F>(&self, g: &F, x0: T, x1: T, target: Extremum) -> T
    where
        F: Fn(T) -> T,
    {
        match self.step(g, x0, x1, target) {
            Some((a, b)) => self.recurse(g, a, b, target),
            None => midpoint(x0, x1),
        }
    }

    /// One contraction, or `None` once the bracket is narrow enough or has
    /// stopped shrinking in floating point.
    fn step<F>(&self, g: &F, x0: T, x1: T, target: Extremum) -> Option<(T, T)>
    where
        F: Fn(T) -> T,
    {
        let width = (x1 - x0).abs();
        if width <= self.config.precision {
            return None;
        }

        let r = T::from(GOLDEN_RATIO_FRACTION).unwrap_or_else(T::zero);
        let x2 = x0 + r * (x1 - x0);
        let x3 = x0 + (T::one() - r) * (x1 - x0);

        let (g2, g3) = (g(x2), g(x3));
        let keep_upper = match target {
            Extremum::Minimum => g3 > g2,
            Extremum::Maximum => g3 < g2,
        };
        let next = if keep_upper { (x3, x1) } else { (x0, x2) };

        if (next.1 - next.0).abs() >= width {
            return None;
        }
        Some(next)
    }
}

#[inline]
fn midpoint<T: Float>(a: T, b: T) -> T {
    (a + b) / (T::one() + T::one())
}
