//! Error types for curve construction and queries.
//!
//! Every failure is raised at the point of violation and propagated to the
//! caller; no operation returns a partially built curve.

use termstruct_math::MathError;
use thiserror::Error;

use crate::instruments::InstrumentType;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// No instruments were supplied to a fit.
    #[error("No instruments provided for bootstrap")]
    EmptyInput,

    /// A Future appears before any shorter-maturity point exists.
    #[error("Future at {maturity:.4}Y needs a preceding curve point")]
    PrecedingPointRequired {
        /// Maturity of the offending future.
        maturity: f64,
    },

    /// The instrument type cannot be bootstrapped.
    #[error("Unsupported instrument for bootstrap: {instrument_type} at {maturity:.4}Y")]
    UnsupportedInstrument {
        /// Type of the rejected instrument.
        instrument_type: InstrumentType,
        /// Maturity of the rejected instrument.
        maturity: f64,
    },

    /// A strict-domain query fell outside the curve's maturity range.
    #[error("Tenor {requested:.4} out of range [{min:.4}, {max:.4}]")]
    InterpolationDomain {
        /// The requested tenor in years.
        requested: f64,
        /// Minimum valid tenor.
        min: f64,
        /// Maximum valid tenor.
        max: f64,
    },

    /// Two instruments share the same maturity.
    #[error("Duplicate maturity {maturity:.4}Y: curve pillars must be strictly increasing")]
    DuplicateMaturity {
        /// The repeated maturity.
        maturity: f64,
    },

    /// Invalid market instrument.
    #[error("Invalid instrument: {reason}")]
    InvalidInstrument {
        /// Description of what's wrong with the instrument.
        reason: String,
    },

    /// Invalid value (NaN, Inf, or domain error).
    #[error("Invalid value: {reason}")]
    InvalidValue {
        /// Description of why value is invalid.
        reason: String,
    },

    /// A query was made before any successful fit.
    #[error("Curve has not been fitted")]
    NotFitted,

    /// Numerical failure from the interpolation layer.
    #[error("Math error: {0}")]
    Math(#[from] MathError),

    /// Configuration could not be read or is inconsistent.
    #[error("Configuration error: {reason}")]
    Config {
        /// Description of the configuration problem.
        reason: String,
    },
}

impl CurveError {
    /// Creates a preceding point required error.
    #[must_use]
    pub fn preceding_point_required(maturity: f64) -> Self {
        Self::PrecedingPointRequired { maturity }
    }

    /// Creates an unsupported instrument error.
    #[must_use]
    pub fn unsupported_instrument(instrument_type: InstrumentType, maturity: f64) -> Self {
        Self::UnsupportedInstrument {
            instrument_type,
            maturity,
        }
    }

    /// Creates an interpolation domain error.
    #[must_use]
    pub fn interpolation_domain(requested: f64, min: f64, max: f64) -> Self {
        Self::InterpolationDomain {
            requested,
            min,
            max,
        }
    }

    /// Creates a duplicate maturity error.
    #[must_use]
    pub fn duplicate_maturity(maturity: f64) -> Self {
        Self::DuplicateMaturity { maturity }
    }

    /// Creates an invalid instrument error.
    #[must_use]
    pub fn invalid_instrument(reason: impl Into<String>) -> Self {
        Self::InvalidInstrument {
            reason: reason.into(),
        }
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CurveError::interpolation_domain(15.0, 0.0, 10.0);
        let msg = format!("{}", err);
        assert!(msg.contains("15.0"));
        assert!(msg.contains("out of range"));
    }

    #[test]
    fn test_unsupported_instrument_display() {
        let err = CurveError::unsupported_instrument(InstrumentType::Bond, 5.0);
        let msg = err.to_string();
        assert!(msg.contains("Bond"));
        assert!(msg.contains("5.0000"));
    }

    #[test]
    fn test_math_error_conversion() {
        let err: CurveError = MathError::insufficient_data(2, 1).into();
        assert!(matches!(err, CurveError::Math(_)));
        assert!(err.to_string().contains("at least 2"));
    }
}
