// ============================================================================
// Validation
// Fluent parameter validation that reports every failed condition
// ============================================================================
//
// Conditions are checked eagerly but failures are accumulated instead of
// short-circuiting, so a caller sees every unsatisfied condition at once
// rather than only the first.

use num_traits::Zero;
use std::fmt;

/// A single failed validation condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A named condition evaluated the wrong way
    Condition(String),
    /// An argument had an unacceptable value
    Argument(String),
    /// An argument fell outside its permitted range
    OutOfRange(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Condition(message)
            | ValidationError::Argument(message)
            | ValidationError::OutOfRange(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Error carrying every condition that failed during a validation chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailed {
    failures: Vec<ValidationError>,
}

impl ValidationFailed {
    /// The failed conditions, in the order they were checked.
    pub fn failures(&self) -> &[ValidationError] {
        &self.failures
    }
}

impl fmt::Display for ValidationFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation condition(s) failed", self.failures.len())?;
        for failure in &self.failures {
            write!(f, "; {failure}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailed {}

/// Fluent accumulator of validation failures.
///
/// Start a chain with [`Validation::begin`], add conditions, and finish with
/// [`Validation::check`]. No allocation happens until a condition fails.
///
/// # Example
/// ```
/// use bigdec::validation::Validation;
///
/// let result = Validation::begin()
///     .is_positive(512i64, "block_size")
///     .in_range_inclusive(0i64, 28, 2, "decimal_places")
///     .check();
/// assert!(result.is_ok());
/// ```
#[derive(Debug, Default)]
pub struct Validation {
    failures: Option<Vec<ValidationError>>,
}

impl Validation {
    /// Start an empty validation chain.
    pub fn begin() -> Self {
        Validation { failures: None }
    }

    fn fail(mut self, error: ValidationError) -> Self {
        self.failures.get_or_insert_with(|| Vec::with_capacity(1)).push(error);
        self
    }

    /// Succeeds if no condition in the chain failed.
    pub fn check(self) -> Result<(), ValidationFailed> {
        match self.failures {
            None => Ok(()),
            Some(failures) => Err(ValidationFailed { failures }),
        }
    }

    pub fn is_true(self, value: bool, failure_message: &str) -> Self {
        if value {
            self
        } else {
            self.fail(ValidationError::Condition(failure_message.to_string()))
        }
    }

    pub fn is_false(self, value: bool, failure_message: &str) -> Self {
        if value {
            self.fail(ValidationError::Condition(failure_message.to_string()))
        } else {
            self
        }
    }

    pub fn are_equal<T: PartialEq + fmt::Display>(
        self,
        first: T,
        first_name: &str,
        second: T,
        second_name: &str,
    ) -> Self {
        if first == second {
            self
        } else {
            self.fail(ValidationError::Argument(format!(
                "{first_name} ({first}) is not equal to {second_name} ({second})."
            )))
        }
    }

    pub fn is_positive<T: Zero + PartialOrd + fmt::Display>(self, value: T, name: &str) -> Self {
        if value > T::zero() {
            self
        } else {
            self.fail(ValidationError::OutOfRange(format!(
                "{name} is not positive (actual: {value})."
            )))
        }
    }

    pub fn is_not_negative<T: Zero + PartialOrd + fmt::Display>(self, value: T, name: &str) -> Self {
        if value < T::zero() {
            self.fail(ValidationError::OutOfRange(format!(
                "{name} is negative (actual: {value})."
            )))
        } else {
            self
        }
    }

    pub fn is_not_zero<T: Zero + fmt::Display>(self, value: T, name: &str) -> Self {
        if value.is_zero() {
            self.fail(ValidationError::OutOfRange(format!("{name} is zero.")))
        } else {
            self
        }
    }

    pub fn in_range_inclusive<T: PartialOrd + fmt::Display>(
        self,
        min_inclusive: T,
        max_inclusive: T,
        value: T,
        name: &str,
    ) -> Self {
        if value < min_inclusive || value > max_inclusive {
            self.fail(ValidationError::OutOfRange(format!(
                "{name} is out of range (value: {value}, range: [{min_inclusive}-{max_inclusive}])."
            )))
        } else {
            self
        }
    }

    pub fn in_range_exclusive<T: PartialOrd + fmt::Display>(
        self,
        min_exclusive: T,
        max_exclusive: T,
        value: T,
        name: &str,
    ) -> Self {
        if value <= min_exclusive || value >= max_exclusive {
            self.fail(ValidationError::OutOfRange(format!(
                "{name} is out of range (value: {value}, range: ({min_exclusive}-{max_exclusive}))."
            )))
        } else {
            self
        }
    }

    pub fn is_finite(self, value: f64, name: &str) -> Self {
        if value.is_infinite() {
            self.fail(ValidationError::OutOfRange(format!("{name} is {value}.")))
        } else {
            self
        }
    }

    pub fn is_not_nan(self, value: f64, name: &str) -> Self {
        if value.is_nan() {
            self.fail(ValidationError::Argument(format!("{name} is NaN.")))
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chain_passes() {
        assert!(Validation::begin().check().is_ok());
    }

    #[test]
    fn test_passing_conditions() {
        let result = Validation::begin()
            .is_true(true, "must hold")
            .is_false(false, "must not hold")
            .are_equal(4, "left", 4, "right")
            .is_positive(17i64, "count")
            .is_not_negative(0i64, "offset")
            .is_not_zero(3i64, "divisor")
            .in_range_inclusive(0i64, 28, 28, "decimal_places")
            .in_range_exclusive(0.0, 1.0, 0.5, "fraction")
            .is_finite(1.5, "scale")
            .is_not_nan(1.5, "scale")
            .check();
        assert!(result.is_ok());
    }

    #[test]
    fn test_single_failure() {
        let error = Validation::begin()
            .is_positive(-3i64, "count")
            .check()
            .unwrap_err();
        assert_eq!(
            error.failures(),
            &[ValidationError::OutOfRange(
                "count is not positive (actual: -3).".to_string()
            )]
        );
    }

    #[test]
    fn test_failures_accumulate_in_order() {
        let error = Validation::begin()
            .is_true(false, "first condition")
            .is_positive(10i64, "fine")
            .are_equal(1, "a", 2, "b")
            .in_range_inclusive(0i64, 28, 99, "decimal_places")
            .check()
            .unwrap_err();

        assert_eq!(error.failures().len(), 3);
        assert_eq!(
            error.failures()[0],
            ValidationError::Condition("first condition".to_string())
        );
        assert_eq!(
            error.failures()[1],
            ValidationError::Argument("a (1) is not equal to b (2).".to_string())
        );
        assert_eq!(
            error.failures()[2],
            ValidationError::OutOfRange(
                "decimal_places is out of range (value: 99, range: [0-28]).".to_string()
            )
        );
    }

    #[test]
    fn test_nan_and_infinity_checks() {
        let error = Validation::begin()
            .is_finite(f64::INFINITY, "scale")
            .is_not_nan(f64::NAN, "ratio")
            .check()
            .unwrap_err();
        assert_eq!(error.failures().len(), 2);
    }

    #[test]
    fn test_failed_display() {
        let error = Validation::begin()
            .is_not_zero(0i64, "divisor")
            .check()
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "1 validation condition(s) failed; divisor is zero."
        );
    }
}
