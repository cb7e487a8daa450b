//! Parametric yield curve models.
//!
//! These models describe the whole zero-rate curve with a handful of
//! parameters instead of interpolating between observed points.

use crate::error::{MathError, MathResult};

/// Nelson-Siegel yield curve model.
///
/// The model parameterizes the zero rate curve as:
/// ```text
/// z(t) = β₀ + β₁ * ((1 - e^(-t/τ)) / (t/τ))
///           + β₂ * ((1 - e^(-t/τ)) / (t/τ) - e^(-t/τ))
/// ```
///
/// Where:
/// - β₀: Long-term level (asymptotic zero rate)
/// - β₁: Short-term component (slope)
/// - β₂: Medium-term component (curvature/hump)
/// - τ: Decay factor (controls where the hump occurs)
///
/// As t → 0 the zero rate tends to β₀ + β₁, which is also the value
/// returned for `t <= 0`.
///
/// # Example
///
/// ```rust
/// use termstruct_math::interpolation::NelsonSiegel;
///
/// let ns = NelsonSiegel::new(0.045, -0.02, 0.01, 2.0).unwrap();
///
/// let short_rate = ns.zero_rate(0.25);
/// let long_rate = ns.zero_rate(30.0);
/// assert!(short_rate < long_rate);
/// assert!((ns.discount_factor(30.0) - (-long_rate * 30.0).exp()).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NelsonSiegel {
    /// Long-term level
    beta0: f64,
    /// Short-term component
    beta1: f64,
    /// Medium-term component
    beta2: f64,
    /// Decay factor
    tau: f64,
}

impl NelsonSiegel {
    /// Creates a new Nelson-Siegel curve.
    ///
    /// # Errors
    ///
    /// Returns an error if tau is not positive or any parameter is not finite.
    pub fn new(beta0: f64, beta1: f64, beta2: f64, tau: f64) -> MathResult<Self> {
        if ![beta0, beta1, beta2, tau].iter().all(|p| p.is_finite()) {
            return Err(MathError::invalid_input(
                "Nelson-Siegel parameters must be finite",
            ));
        }
        if tau <= 0.0 {
            return Err(MathError::invalid_input(format!(
                "tau must be positive, got {tau}"
            )));
        }

        Ok(Self {
            beta0,
            beta1,
            beta2,
            tau,
        })
    }

    /// Returns the continuously compounded discount factor `exp(-z(t) * t)`.
    pub fn discount_factor(&self, t: f64) -> f64 {
        (-self.zero_rate(t) * t).exp()
    }

    /// Continuously compounded zero rate at t.
    pub fn zero_rate(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return self.beta0 + self.beta1;
        }

        let x = t / self.tau;

        self.beta0 + self.beta1 * Self::loading_factor_1(x) + self.beta2 * Self::loading_factor_2(x)
    }

    /// (1 - e^(-x)) / x
    fn loading_factor_1(x: f64) -> f64 {
        if x.abs() < 1e-10 {
            1.0 - x / 2.0 + x * x / 6.0
        } else {
            (1.0 - (-x).exp()) / x
        }
    }

    /// (1 - e^(-x)) / x - e^(-x)
    fn loading_factor_2(x: f64) -> f64 {
        if x.abs() < 1e-10 {
            x / 2.0 - x * x / 3.0
        } else {
            Self::loading_factor_1(x) - (-x).exp()
        }
    }
}
