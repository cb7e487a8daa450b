//! Curve construction configuration.
//!
//! Configuration is plain data: it can be built in code, or read from JSON
//! with [`CurveConfig::from_json_str`] / [`CurveConfig::from_json_file`].
//! Every field has a default, so a partial document such as
//! `{"verbose": true}` is valid.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

// =============================================================================
// PAYMENT ROUNDING
// =============================================================================

/// Rule for turning a swap maturity into a number of annual payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentRounding {
    /// Round to nearest, ties to even (1.5 -> 2, 2.5 -> 2).
    #[default]
    HalfEven,
    /// Round to nearest, ties away from zero (1.5 -> 2, 2.5 -> 3).
    HalfUp,
}

impl PaymentRounding {
    /// Number of annual payment periods for a maturity of `t` years.
    ///
    /// Never returns less than one period.
    #[must_use]
    pub fn periods(self, t: f64) -> usize {
        let rounded = match self {
            Self::HalfUp => t.round(),
            Self::HalfEven => {
                let floor = t.floor();
                let diff = t - floor;
                if diff > 0.5 {
                    floor + 1.0
                } else if diff < 0.5 {
                    floor
                } else if floor % 2.0 == 0.0 {
                    floor
                } else {
                    floor + 1.0
                }
            }
        };

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let periods = rounded.max(1.0) as usize;
        periods
    }
}

// =============================================================================
// DOMAIN POLICY
// =============================================================================

/// Behavior of spline yield queries outside the fitted maturity range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DomainPolicy {
    /// Clamp the query into `[min, max]` and return the boundary yield.
    #[default]
    Clamp,
    /// Reject out-of-range queries with `CurveError::InterpolationDomain`.
    Strict,
}

// =============================================================================
// CURVE CONFIGURATION
// =============================================================================

/// Configuration shared by the curve construction methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    /// Emit progress and summary lines at `info` level.
    pub verbose: bool,

    /// Swap payment count rounding.
    pub payment_rounding: PaymentRounding,

    /// Lorimier smoothing parameter. Stored, not applied to the transform.
    pub lorimier_alpha: f64,

    /// Out-of-range policy for Lorimier yield queries.
    pub lorimier_domain: DomainPolicy,

    /// Absolute tolerance for the bootstrap repricing report.
    pub repricing_tolerance: f64,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            payment_rounding: PaymentRounding::default(),
            lorimier_alpha: 0.1,
            lorimier_domain: DomainPolicy::default(),
            repricing_tolerance: 1e-10,
        }
    }
}

impl CurveConfig {
    /// Sets the verbose flag.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets the payment rounding rule.
    #[must_use]
    pub fn with_payment_rounding(mut self, rounding: PaymentRounding) -> Self {
        self.payment_rounding = rounding;
        self
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(json: &str) -> CurveResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| CurveError::config(format!("invalid curve config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> CurveResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| CurveError::config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json(&self) -> CurveResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CurveError::config(format!("cannot serialize curve config: {e}")))
    }

    /// Checks field ranges.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::Config` for a negative or non-finite alpha, or a
    /// non-positive repricing tolerance.
    pub fn validate(&self) -> CurveResult<()> {
        if !self.lorimier_alpha.is_finite() || self.lorimier_alpha < 0.0 {
            return Err(CurveError::config(format!(
                "lorimier_alpha must be non-negative, got {}",
                self.lorimier_alpha
            )));
        }
        if !self.repricing_tolerance.is_finite() || self.repricing_tolerance <= 0.0 {
            return Err(CurveError::config(format!(
                "repricing_tolerance must be positive, got {}",
                self.repricing_tolerance
            )));
        }
        Ok(())
    }
}
