//! Iteration budget for open-ended acceptance loops.

use super::error::SamplingError;

/// Optional cap on the number of trials an acceptance loop may perform.
///
/// Rejection sampling and Poisson-by-waiting-times loop until a predicate
/// holds. The default budget is unbounded, which keeps that behaviour; a
/// finite budget turns a non-terminating loop into
/// [`SamplingError::BudgetExceeded`].
///
/// # Examples
///
/// ```
/// use mcstat_core::types::IterationBudget;
///
/// let budget = IterationBudget::limited(3);
/// let mut used = 0;
/// assert!(budget.charge(&mut used).is_ok());
/// assert!(budget.charge(&mut used).is_ok());
/// assert!(budget.charge(&mut used).is_ok());
/// assert!(budget.charge(&mut used).is_err());
///
/// assert!(IterationBudget::unbounded().max_iterations().is_none());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationBudget {
    max_iterations: Option<usize>,
}

impl IterationBudget {
    /// No cap: loops run until their predicate holds.
    #[inline]
    pub const fn unbounded() -> Self {
        Self {
            max_iterations: None,
        }
    }

    /// At most `max_iterations` trials.
    #[inline]
    pub const fn limited(max_iterations: usize) -> Self {
        Self {
            max_iterations: Some(max_iterations),
        }
    }

    /// Build from an optional cap.
    #[inline]
    pub const fn from_option(max_iterations: Option<usize>) -> Self {
        Self { max_iterations }
    }

    /// Configured cap, if any.
    #[inline]
    pub fn max_iterations(&self) -> Option<usize> {
        self.max_iterations
    }

    /// Record one trial against `used`.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError::BudgetExceeded` once `used` has already
    /// reached the cap.
    #[inline]
    pub fn charge(&self, used: &mut usize) -> Result<(), SamplingError> {
        if let Some(max) = self.max_iterations {
            if *used >= max {
                return Err(SamplingError::BudgetExceeded { iterations: *used });
            }
        }
        *used += 1;
        Ok(())
    }
}
