//! # Random Number Generation Infrastructure
//!
//! This module provides the uniform source every generator and integrator in
//! the crate draws from.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: reseeding with the same seed replays the same sequence
//! - **Explicit ownership**: no process-wide generator; callers own a
//!   [`RandomStream`] and pass it by `&mut`, so each thread or test keeps its
//!   own state
//! - **Continuity**: draws without a seed advance the current state rather
//!   than resetting it
//!
//! ## Usage Example
//!
//! ```rust
//! use mcstat_engine::rng::RandomStream;
//!
//! let mut rng = RandomStream::from_seed(12345);
//! let u = rng.uniform01();
//! assert!((0.0..1.0).contains(&u));
//!
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_uniform(&mut buffer);
//! ```

mod stream;

pub use stream::RandomStream;

#[cfg(test)]
mod tests;
