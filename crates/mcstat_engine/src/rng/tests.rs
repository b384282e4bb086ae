//! Unit tests for the RNG module.
//!
//! Each test owns its own `RandomStream`; no stream is shared between tests.

use super::*;
use mcstat_core::types::Interval;
use proptest::prelude::*;

/// Same seed produces identical sequences.
#[test]
fn test_seed_reproducibility() {
    let mut rng1 = RandomStream::from_seed(12345);
    let mut rng2 = RandomStream::from_seed(12345);

    for _ in 0..100 {
        assert_eq!(rng1.uniform01().to_bits(), rng2.uniform01().to_bits());
    }
}

/// Different seeds diverge immediately.
#[test]
fn test_different_seeds_differ() {
    let mut rng1 = RandomStream::from_seed(1);
    let mut rng2 = RandomStream::from_seed(2);

    let a: Vec<f64> = (0..10).map(|_| rng1.uniform01()).collect();
    let b: Vec<f64> = (0..10).map(|_| rng2.uniform01()).collect();
    assert_ne!(a, b);
}

/// Reseeding replays the sequence from its start.
#[test]
fn test_reseed_replays() {
    let mut rng = RandomStream::from_seed(7);
    let first: Vec<f64> = (0..5).map(|_| rng.uniform01()).collect();

    rng.reseed(7);
    let replay: Vec<f64> = (0..5).map(|_| rng.uniform01()).collect();
    assert_eq!(first, replay);
}

/// `apply_seed(None)` keeps the stream moving forward.
#[test]
fn test_apply_seed_none_continues() {
    let mut rng = RandomStream::from_seed(7);
    let first = rng.uniform01();

    rng.apply_seed(None);
    let second = rng.uniform01();
    assert_ne!(first, second);
    assert_eq!(rng.seed(), Some(7));

    rng.apply_seed(Some(7));
    assert_eq!(rng.uniform01(), first);
}

/// Uniform values stay in [0, 1).
#[test]
fn test_uniform_range() {
    let mut rng = RandomStream::from_seed(42);

    for _ in 0..10_000 {
        let value = rng.uniform01();
        assert!(value >= 0.0, "Uniform value {} is below 0", value);
        assert!(value < 1.0, "Uniform value {} is >= 1", value);
    }
}

/// Interval draws land inside the interval.
#[test]
fn test_uniform_in_interval() {
    let mut rng = RandomStream::from_seed(42);
    let interval = Interval::new(-3.0, 5.0).unwrap();

    for _ in 0..10_000 {
        let value = rng.uniform_in(interval);
        assert!(value >= -3.0 && value < 5.0);
    }
}

/// A degenerate interval always yields its single point.
#[test]
fn test_uniform_in_degenerate() {
    let mut rng = RandomStream::from_seed(3);
    let point = Interval::new(2.5, 2.5).unwrap();
    for _ in 0..100 {
        assert_eq!(rng.uniform_in(point), 2.5);
    }
}

/// Batch fill matches single draws from an identical stream.
#[test]
fn test_fill_uniform_matches_single_draws() {
    let mut batch_rng = RandomStream::from_seed(99);
    let mut single_rng = RandomStream::from_seed(99);

    let mut buffer = vec![0.0; 64];
    batch_rng.fill_uniform(&mut buffer);

    for &value in &buffer {
        assert_eq!(value, single_rng.uniform01());
    }
}

/// Empty buffer is handled gracefully.
#[test]
fn test_empty_buffer() {
    let mut rng = RandomStream::from_seed(42);
    let mut empty: Vec<f64> = vec![];
    rng.fill_uniform(&mut empty);
}

/// Entropy-seeded streams report no seed.
#[test]
fn test_entropy_stream() {
    let mut rng = RandomStream::from_optional_seed(None);
    assert_eq!(rng.seed(), None);
    let value = rng.uniform01();
    assert!((0.0..1.0).contains(&value));

    assert_eq!(RandomStream::from_optional_seed(Some(5)).seed(), Some(5));
}

/// Sample mean and variance of U[0,1) are close to 1/2 and 1/12.
#[test]
fn test_uniform_moments() {
    let mut rng = RandomStream::from_seed(2024);
    let n = 200_000;
    let mut buffer = vec![0.0; n];
    rng.fill_uniform(&mut buffer);

    let mean = buffer.iter().sum::<f64>() / n as f64;
    let variance = buffer.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;

    assert!((mean - 0.5).abs() < 0.005, "mean {}", mean);
    assert!((variance - 1.0 / 12.0).abs() < 0.002, "variance {}", variance);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// All uniform values must be in [0, 1) for any seed.
    #[test]
    fn prop_uniform_in_range(seed in any::<u64>(), size in 1..5000usize) {
        let mut rng = RandomStream::from_seed(seed);
        let mut buffer = vec![0.0; size];
        rng.fill_uniform(&mut buffer);

        for (i, &v) in buffer.iter().enumerate() {
            prop_assert!(
                (0.0..1.0).contains(&v),
                "Uniform value at index {} is out of range: {} (seed={})",
                i, v, seed
            );
        }
    }

    /// Reseeding with any seed replays the sequence bit-for-bit.
    #[test]
    fn prop_reseed_reproducible(seed in any::<u64>()) {
        let mut rng = RandomStream::from_seed(seed);
        let first: Vec<u64> = (0..16).map(|_| rng.uniform01().to_bits()).collect();
        rng.reseed(seed);
        let again: Vec<u64> = (0..16).map(|_| rng.uniform01().to_bits()).collect();
        prop_assert_eq!(first, again);
    }
}
