//! Value types shared across the workspace.
//!
//! This module provides:
//! - [`Interval`]: validated closed domain `[min, max]`
//! - [`IntegralEstimate`]: Monte-Carlo integral value with its uncertainty
//! - [`IterationBudget`]: optional trial cap for acceptance loops
//! - Error types: [`SamplingError`], [`SolverError`], [`SampleIoError`]

pub mod budget;
pub mod error;
pub mod estimate;
pub mod interval;

pub use budget::IterationBudget;
pub use error::{SampleIoError, SamplingError, SolverError};
pub use estimate::IntegralEstimate;
pub use interval::Interval;

/// An ordered, finite sequence of generated values.
pub type Sample = Vec<f64>;
