//! Closed real interval used for sampling and integration domains.

use super::error::SamplingError;

/// A validated interval `[min, max]` with finite bounds and `min <= max`.
///
/// Degenerate intervals (`min == max`) are allowed; sampling from one
/// always returns `min`.
///
/// # Examples
///
/// ```
/// use mcstat_core::types::Interval;
///
/// let domain = Interval::new(-1.0, 3.0).unwrap();
/// assert_eq!(domain.length(), 4.0);
/// assert!(domain.contains(0.0));
///
/// assert!(Interval::new(2.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    min: f64,
    max: f64,
}

impl Interval {
    /// Create an interval, rejecting reversed or non-finite bounds.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError::InvalidArgument` if either bound is NaN or
    /// infinite, if `min > max`, or if the width `max - min` overflows.
    pub fn new(min: f64, max: f64) -> Result<Self, SamplingError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(SamplingError::invalid_argument(
                "interval",
                format!("bounds must be finite, got [{}, {}]", min, max),
            ));
        }
        if min > max {
            return Err(SamplingError::invalid_argument(
                "interval",
                format!("min {} exceeds max {}", min, max),
            ));
        }
        if !(max - min).is_finite() {
            return Err(SamplingError::invalid_argument(
                "interval",
                format!("width of [{}, {}] is not finite", min, max),
            ));
        }
        Ok(Self { min, max })
    }

    /// Unit interval `[0, 1]`.
    #[inline]
    pub fn unit() -> Self {
        Self { min: 0.0, max: 1.0 }
    }

    /// Interval symmetric about `centre` with the given half-width.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError::InvalidArgument` if `half_width` is negative
    /// or the resulting bounds are not finite.
    pub fn symmetric(centre: f64, half_width: f64) -> Result<Self, SamplingError> {
        if half_width < 0.0 {
            return Err(SamplingError::invalid_argument(
                "half_width",
                format!("must be non-negative, got {}", half_width),
            ));
        }
        Self::new(centre - half_width, centre + half_width)
    }

    /// Lower bound.
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width `max - min`.
    #[inline]
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Midpoint of the interval.
    #[inline]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.min + self.max)
    }

    /// Whether `x` lies in `[min, max]`.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }

    /// Map a unit value `u` in `[0, 1)` onto the interval: `min + u * (max - min)`.
    ///
    /// The result never exceeds `max`, even where rounding would push it past.
    #[inline]
    pub fn lerp(&self, u: f64) -> f64 {
        (self.min + u * (self.max - self.min)).min(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_new_valid() {
        let i = Interval::new(1.0, 4.0).unwrap();
        assert_eq!(i.min(), 1.0);
        assert_eq!(i.max(), 4.0);
        assert_eq!(i.length(), 3.0);
        assert_eq!(i.midpoint(), 2.5);
    }

    #[test]
    fn test_degenerate_allowed() {
        let i = Interval::new(2.0, 2.0).unwrap();
        assert_eq!(i.length(), 0.0);
        assert_eq!(i.lerp(0.7), 2.0);
    }

    #[test]
    fn test_reversed_rejected() {
        let err = Interval::new(3.0, 1.0).unwrap_err();
        assert!(matches!(
            err,
            SamplingError::InvalidArgument {
                name: "interval",
                ..
            }
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Interval::new(f64::NAN, 1.0).is_err());
        assert!(Interval::new(0.0, f64::INFINITY).is_err());
        assert!(Interval::new(f64::NEG_INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_overflowing_width_rejected() {
        let err = Interval::new(-1e308, 1e308).unwrap_err();
        assert!(matches!(
            err,
            SamplingError::InvalidArgument {
                name: "interval",
                ..
            }
        ));
        assert!(Interval::symmetric(0.0, f64::MAX).is_err());

        let widest = Interval::new(-f64::MAX / 2.0, f64::MAX / 2.0).unwrap();
        assert_eq!(widest.length(), f64::MAX);
    }

    #[test]
    fn test_lerp_wide_interval_stays_inside() {
        let i = Interval::new(-8e307, 8e307).unwrap();
        for u in [0.0, 0.25, 0.5, 0.999_999_999, 1.0 - f64::EPSILON / 2.0] {
            let x = i.lerp(u);
            assert!(x.is_finite());
            assert!(i.contains(x), "{} outside {:?}", x, i);
        }
    }

    #[test]
    fn test_symmetric() {
        let i = Interval::symmetric(5.0, 2.0).unwrap();
        assert_eq!(i.min(), 3.0);
        assert_eq!(i.max(), 7.0);
        assert!(Interval::symmetric(0.0, -1.0).is_err());
    }

    #[test]
    fn test_lerp_endpoints() {
        let i = Interval::new(-2.0, 6.0).unwrap();
        assert_relative_eq!(i.lerp(0.0), -2.0);
        assert_relative_eq!(i.lerp(0.5), 2.0);
        assert_relative_eq!(i.lerp(0.25), 0.0);
    }

    #[test]
    fn test_contains() {
        let i = Interval::unit();
        assert!(i.contains(0.0));
        assert!(i.contains(1.0));
        assert!(!i.contains(1.0 + 1e-12));
        assert!(!i.contains(-1e-12));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_lerp_stays_inside(
            a in -1_000_000i32..1_000_000,
            width in 0i32..1_000_000,
            u in 0.0..1.0f64,
        ) {
            let i = Interval::new(a as f64, a as f64 + width as f64).unwrap();
            prop_assert!(i.contains(i.lerp(u)));
        }

        #[test]
        fn prop_lerp_stays_inside_at_extreme_magnitudes(
            a in -8e307..8e307f64,
            fraction in 0.0..1.0f64,
            u in 0.0..1.0f64,
        ) {
            let i = Interval::new(a, a + fraction * (8e307 - a)).unwrap();
            let x = i.lerp(u);
            prop_assert!(x.is_finite());
            prop_assert!(i.contains(x), "{} outside {:?}", x, i);
        }
    }
}
