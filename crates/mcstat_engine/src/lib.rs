//! # mcstat_engine: Variate Generation and Monte-Carlo Integration
//!
//! ## Engine Layer Role
//!
//! Everything in this crate is built on a single explicitly owned
//! [`rng::RandomStream`]:
//!
//! ```text
//! RandomStream (uniform on [0, 1))
//! ├── variates
//! │   ├── uniform      (uniform01, uniform_range, generate_uniform, generate_range)
//! │   ├── tac          (try-and-accept rejection sampling)
//! │   ├── clt          (central-limit approximation of a Gaussian)
//! │   ├── exponential  (inverse-transform)
//! │   └── poisson      (exponential waiting times)
//! └── integration
//!     ├── hit_or_miss  (geometric estimator)
//!     └── crude        (mean-value estimator)
//! ```
//!
//! ## Seeding
//!
//! Every N-draw generator takes `seed: Option<u64>`. `Some(seed)` reseeds the
//! stream before drawing, so the same seed reproduces the same sample
//! bit-for-bit; `None` continues from the current stream state.
//!
//! ## Usage Example
//!
//! ```rust
//! use mcstat_engine::integration::integral_crude_mc;
//! use mcstat_engine::rng::RandomStream;
//! use mcstat_engine::variates::exponential::generate_exp;
//! use mcstat_engine::Interval;
//!
//! let mut rng = RandomStream::from_seed(42);
//!
//! let lifetimes = generate_exp(&mut rng, 2.0, 1_000, Some(7)).unwrap();
//! assert_eq!(lifetimes.len(), 1_000);
//!
//! let domain = Interval::new(0.0, 2.0).unwrap();
//! let estimate = integral_crude_mc(&mut rng, |x| x, domain, 100_000).unwrap();
//! assert!(estimate.is_consistent_with(2.0, 5.0));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod integration;
pub mod rng;
pub mod variates;

pub use mcstat_core::types::{
    IntegralEstimate, Interval, IterationBudget, Sample, SamplingError,
};

/// Result alias for fallible sampling and integration calls.
pub type Result<T> = std::result::Result<T, SamplingError>;
