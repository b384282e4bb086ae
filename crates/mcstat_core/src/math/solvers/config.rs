//! Search configuration types.

use num_traits::Float;

/// How a bracketing search walks its brackets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SearchStyle {
    /// Loop until the bracket is narrow enough.
    #[default]
    Iterative,
    /// Recurse on the retained sub-bracket.
    Recursive,
}

/// Configuration for bracketing searches.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for the precision (e.g., `f64`)
///
/// # Example
///
/// ```
/// use mcstat_core::math::solvers::{SearchConfig, SearchStyle};
///
/// let config: SearchConfig<f64> = SearchConfig::default();
/// assert!((config.precision - 1e-4).abs() < 1e-15);
/// assert_eq!(config.style, SearchStyle::Iterative);
///
/// let fine = SearchConfig::new(1e-10, SearchStyle::Recursive);
/// assert_eq!(fine.style, SearchStyle::Recursive);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig<T: Float> {
    /// Bracket width at which the search stops.
    pub precision: T,

    /// Iterative or recursive walk.
    pub style: SearchStyle,
}

impl<T: Float> Default for SearchConfig<T> {
    /// Default values:
    /// - `precision`: 1e-4
    /// - `style`: iterative
    fn default() -> Self {
        Self {
            precision: T::from(1e-4).unwrap(),
            style: SearchStyle::Iterative,
        }
    }
}

impl<T: Float> SearchConfig<T> {
    /// Create a new configuration.
    ///
    /// # Panics
    ///
    /// Panics if `precision` is not strictly positive and finite.
    pub fn new(precision: T, style: SearchStyle) -> Self {
        assert!(
            precision > T::zero() && precision.is_finite(),
            "precision must be positive"
        );
        Self { precision, style }
    }

    /// Same configuration with a different precision.
    ///
    /// # Panics
    ///
    /// Panics if `precision` is not strictly positive and finite.
    pub fn with_precision(self, precision: T) -> Self {
        Self::new(precision, self.style)
    }

    /// Same configuration with a different style.
    pub fn with_style(self, style: SearchStyle) -> Self {
        Self { style, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config: SearchConfig<f64> = SearchConfig::default();
        assert!((config.precision - 1e-4).abs() < 1e-15);
        assert_eq!(config.style, SearchStyle::Iterative);
    }

    #[test]
    #[should_panic(expected = "precision must be positive")]
    fn test_zero_precision_panics() {
        let _: SearchConfig<f64> = SearchConfig::new(0.0, SearchStyle::Iterative);
    }

    #[test]
    #[should_panic(expected = "precision must be positive")]
    fn test_nan_precision_panics() {
        let _: SearchConfig<f64> = SearchConfig::new(f64::NAN, SearchStyle::Recursive);
    }

    #[test]
    fn test_builders() {
        let config: SearchConfig<f64> = SearchConfig::default()
            .with_precision(1e-6)
            .with_style(SearchStyle::Recursive);
        assert_eq!(config.precision, 1e-6);
        assert_eq!(config.style, SearchStyle::Recursive);
    }

    #[test]
    fn test_config_with_f32() {
        let config: SearchConfig<f32> = SearchConfig::default();
        assert!(config.precision > 0.0);
    }
}
