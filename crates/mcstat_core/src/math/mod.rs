//! Numerical helpers.
//!
//! - [`solvers`]: bisection root search and golden-section extremum search
//! - [`likelihood`]: likelihood and log-likelihood of i.i.d. samples

pub mod likelihood;
pub mod solvers;
