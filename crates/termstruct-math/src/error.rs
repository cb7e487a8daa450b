//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Interpolation point is outside the valid range.
    #[error("Extrapolation not allowed: {x} is outside [{min}, {max}]")]
    ExtrapolationNotAllowed {
        /// The query point.
        x: f64,
        /// Minimum valid value.
        min: f64,
        /// Maximum valid value.
        max: f64,
    },

    /// Insufficient data points for operation.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Creates an extrapolation error for `x` outside `[min, max]`.
    #[must_use]
    pub fn extrapolation_not_allowed(x: f64, min: f64, max: f64) -> Self {
        Self::ExtrapolationNotAllowed { x, min, max }
    }
}

/// Checks that `xs` and `ys` describe a valid interpolation grid.
///
/// The grid needs at least `required` points, matching lengths, finite values
/// and strictly increasing abscissae.
pub(crate) fn validate_grid(xs: &[f64], ys: &[f64], required: usize) -> MathResult<()> {
    if xs.len() < required {
        return Err(MathError::insufficient_data(required, xs.len()));
    }
    if xs.len() != ys.len() {
        return Err(MathError::invalid_input(format!(
            "xs and ys must have same length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    if xs.iter().chain(ys).any(|v| !v.is_finite()) {
        return Err(MathError::invalid_input("grid values must be finite"));
    }
    for i in 1..xs.len() {
        if xs[i] <= xs[i - 1] {
            return Err(MathError::invalid_input(
                "x values must be strictly increasing",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::insufficient_data(2, 1);
        assert!(err.to_string().contains("at least 2"));

        let err = MathError::extrapolation_not_allowed(5.0, 0.0, 3.0);
        assert!(err.to_string().contains("outside"));
    }

    #[test]
    fn test_validate_grid() {
        assert!(validate_grid(&[0.0, 1.0], &[1.0, 2.0], 2).is_ok());
        assert!(validate_grid(&[0.0], &[1.0], 2).is_err());
        assert!(validate_grid(&[0.0, 1.0], &[1.0], 2).is_err());
        assert!(validate_grid(&[1.0, 1.0], &[1.0, 2.0], 2).is_err());
        assert!(validate_grid(&[0.0, f64::NAN], &[1.0, 2.0], 2).is_err());
    }
}
