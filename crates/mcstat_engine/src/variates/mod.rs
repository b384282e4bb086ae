//! Pseudo-random variate generators.
//!
//! Each generator has a single-draw primitive (`rand_*`) and an N-draw
//! primitive (`generate_*`). The N-draw form reseeds the stream once when
//! given `Some(seed)` and then draws N times; with `None` it continues the
//! stream, so successive calls never repeat each other.
//!
//! | Generator | Method | Module |
//! |-----------|--------|--------|
//! | Uniform on [0,1) / [a,b) | linear map of the stream | [`uniform`] |
//! | Arbitrary bounded density | try-and-accept rejection | [`tac`] |
//! | Approximate Gaussian | mean of uniforms (CLT) | [`clt`] |
//! | Exponential | inverse transform | [`exponential`] |
//! | Poisson | exponential waiting times | [`poisson`] |
//!
//! Every generator validates its arguments before touching the stream, so a
//! rejected call leaves the stream state unchanged.

pub mod clt;
pub mod exponential;
pub mod poisson;
pub mod tac;
pub mod uniform;

pub use clt::{generate_tcl, generate_tcl_ms, rand_tcl, rand_tcl_ms, DEFAULT_N_SUM};
pub use exponential::{exp_cdf, generate_exp, inv_exp, rand_exp};
pub use poisson::{generate_poisson, rand_poisson};
pub use tac::{generate_tac, rand_tac};
pub use uniform::{generate_range, generate_uniform, uniform01, uniform_range};
