//! Built-in integrands and densities selectable from the command line.

use clap::ValueEnum;
use mcstat_core::types::Interval;

/// A closed-form function of one variable
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BuiltinFunction {
    /// f(x) = 1
    Constant,
    /// f(x) = x
    Linear,
    /// f(x) = x²
    Quadratic,
    /// f(x) = sin x
    Sine,
    /// f(x) = exp(-x²/2)
    Gaussian,
}

impl BuiltinFunction {
    /// Evaluate the function at `x`.
    pub fn eval(self, x: f64) -> f64 {
        match self {
            Self::Constant => 1.0,
            Self::Linear => x,
            Self::Quadratic => x * x,
            Self::Sine => x.sin(),
            Self::Gaussian => (-0.5 * x * x).exp(),
        }
    }

    /// An upper bound of the function on `domain`, never below zero.
    ///
    /// Tight for every variant except `Sine`, which uses the global bound 1.
    pub fn upper_bound(self, domain: Interval) -> f64 {
        let (a, b) = (domain.min(), domain.max());
        let bound = match self {
            Self::Constant => 1.0,
            Self::Linear => b,
            Self::Quadratic => (a * a).max(b * b),
            Self::Sine => 1.0,
            Self::Gaussian => {
                if domain.contains(0.0) {
                    1.0
                } else {
                    self.eval(a).max(self.eval(b))
                }
            }
        };
        bound.max(0.0)
    }

    /// The exact integral over `domain` where it has an elementary form.
    pub fn exact_integral(self, domain: Interval) -> Option<f64> {
        let (a, b) = (domain.min(), domain.max());
        match self {
            Self::Constant => Some(b - a),
            Self::Linear => Some((b * b - a * a) / 2.0),
            Self::Quadratic => Some((b * b * b - a * a * a) / 3.0),
            Self::Sine => Some(a.cos() - b.cos()),
            Self::Gaussian => None,
        }
    }
}
