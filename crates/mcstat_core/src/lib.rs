//! # mcstat_core: Foundation Layer for the mcstat Toolkit
//!
//! ## Layer Role
//!
//! mcstat_core is the bottom layer of the workspace, providing:
//! - Validated value types: `Interval`, `IntegralEstimate`, `IterationBudget` (`types`)
//! - Error types: `SamplingError`, `SolverError`, `SampleIoError` (`types::error`)
//! - Bracketing search: bisection and golden-section (`math::solvers`)
//! - Likelihood helpers for i.i.d. samples (`math::likelihood`)
//! - One-float-per-line sample persistence (`io`)
//!
//! ## Zero Dependency Principle
//!
//! This crate has no dependencies on other mcstat crates, with minimal external
//! dependencies:
//! - num-traits: Generic floating-point bounds for the solvers
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use mcstat_core::math::solvers::{BisectionSolver, SearchConfig};
//! use mcstat_core::types::Interval;
//!
//! let domain = Interval::new(0.0, 2.0).unwrap();
//! assert_eq!(domain.length(), 2.0);
//!
//! let solver = BisectionSolver::new(SearchConfig::default());
//! let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-3);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Interval`, `IntegralEstimate` and `IterationBudget`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod io;
pub mod math;
pub mod types;
