//! Seedable uniform random stream.

use mcstat_core::types::Interval;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Explicitly owned pseudo-random stream producing values uniform on [0, 1).
///
/// # Examples
///
/// ```rust
/// use mcstat_engine::rng::RandomStream;
///
/// let mut rng = RandomStream::from_seed(42);
/// let first = rng.uniform01();
///
/// rng.reseed(42);
/// assert_eq!(rng.uniform01(), first);
/// ```
#[derive(Clone, Debug)]
pub struct RandomStream {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// Seed of the most recent (re)initialisation, `None` if drawn from entropy.
    seed: Option<u64>,
}

impl RandomStream {
    /// Creates a stream initialised with the given seed.
    ///
    /// The same seed always produces the same sequence.
    ///
    /// ```rust
    /// use mcstat_engine::rng::RandomStream;
    ///
    /// let mut a = RandomStream::from_seed(12345);
    /// let mut b = RandomStream::from_seed(12345);
    /// assert_eq!(a.uniform01(), b.uniform01());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Creates a stream seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Creates a seeded stream when `seed` is given, an entropy-seeded one
    /// otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Resets the stream state to derive from `seed`.
    #[inline]
    pub fn reseed(&mut self, seed: u64) {
        self.inner = StdRng::seed_from_u64(seed);
        self.seed = Some(seed);
    }

    /// Reseeds when `seed` is `Some`; leaves the state untouched otherwise.
    #[inline]
    pub fn apply_seed(&mut self, seed: Option<u64>) {
        if let Some(seed) = seed {
            self.reseed(seed);
        }
    }

    /// Seed of the most recent (re)initialisation.
    ///
    /// ```rust
    /// use mcstat_engine::rng::RandomStream;
    ///
    /// let rng = RandomStream::from_seed(42);
    /// assert_eq!(rng.seed(), Some(42));
    /// assert_eq!(RandomStream::from_entropy().seed(), None);
    /// ```
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Next value in the half-open interval [0, 1).
    #[inline]
    pub fn uniform01(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Next value uniform on `[interval.min, interval.max)`.
    ///
    /// A degenerate interval always yields its single point.
    #[inline]
    pub fn uniform_in(&mut self, interval: Interval) -> f64 {
        interval.lerp(self.uniform01())
    }

    /// Fills the buffer with values in [0, 1). Empty buffers are a no-op.
    #[inline]
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.inner.gen();
        }
    }
}

impl Default for RandomStream {
    /// Entropy-seeded stream.
    fn default() -> Self {
        Self::from_entropy()
    }
}
