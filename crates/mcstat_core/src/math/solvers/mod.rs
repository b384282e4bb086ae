//! Bracketing search algorithms.
//!
//! ## Available Solvers
//!
//! - [`BisectionSolver`]: root of a continuous function given a sign-changing bracket
//! - [`GoldenSectionSolver`]: minimum or maximum of a unimodal function on a bracket
//!
//! ## Configuration
//!
//! Both solvers use [`SearchConfig`]:
//! - `precision`: stop once the bracket is no wider than this (default: 1e-4)
//! - `style`: [`SearchStyle::Iterative`] or [`SearchStyle::Recursive`]
//!
//! The two styles walk the same sequence of brackets and return identical
//! results; the choice only changes how the walk is expressed.
//!
//! ## Examples
//!
//! ```
//! use mcstat_core::math::solvers::{GoldenSectionSolver, SearchConfig, SearchStyle};
//!
//! let config = SearchConfig::new(1e-8, SearchStyle::Recursive);
//! let solver = GoldenSectionSolver::new(config);
//!
//! // (x - 1.5)² has its minimum at 1.5
//! let x = solver.find_minimum(|x: f64| (x - 1.5) * (x - 1.5), 0.0, 4.0);
//! assert!((x - 1.5).abs() < 1e-6);
//! ```

mod bisection;
mod config;
mod golden_section;

pub use bisection::BisectionSolver;
pub use config::{SearchConfig, SearchStyle};
pub use golden_section::{GoldenSectionSolver, GOLDEN_RATIO_FRACTION};
