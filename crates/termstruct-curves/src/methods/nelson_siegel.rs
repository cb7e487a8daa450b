//! Nelson-Siegel curve method.

use termstruct_math::interpolation::NelsonSiegel;
use tracing::info;

use crate::config::CurveConfig;
use crate::curves::DiscountCurve;
use crate::error::{CurveError, CurveResult};
use crate::methods::CurveMethod;

/// Nelson-Siegel method: closed-form yields at the requested maturities,
/// discounted continuously.
///
/// ```text
/// y(T) = β₀ + β₁·(1 - e^(-T/τ))/(T/τ) + β₂·[(1 - e^(-T/τ))/(T/τ) - e^(-T/τ)]
/// P(T) = exp(-y(T)·T)
/// ```
///
/// # Example
///
/// ```rust
/// use termstruct_curves::methods::{CurveMethod, NelsonSiegelMethod};
///
/// let mut ns = NelsonSiegelMethod::new(0.04, 0.0, 0.0, 1.5, vec![1.0, 5.0, 10.0]);
/// ns.fit().unwrap();
///
/// assert!(ns.yields().iter().all(|y| (y - 0.04).abs() < 1e-15));
/// ```
#[derive(Debug, Clone)]
pub struct NelsonSiegelMethod {
    beta0: f64,
    beta1: f64,
    beta2: f64,
    tau: f64,
    maturities: Vec<f64>,
    config: CurveConfig,
    yields: Vec<f64>,
    curve: Option<DiscountCurve>,
}

impl NelsonSiegelMethod {
    /// Creates the method for the given parameters, evaluated at
    /// `maturities` (years, positive and strictly increasing).
    #[must_use]
    pub fn new(beta0: f64, beta1: f64, beta2: f64, tau: f64, maturities: Vec<f64>) -> Self {
        Self {
            beta0,
            beta1,
            beta2,
            tau,
            maturities,
            config: CurveConfig::default(),
            yields: Vec::new(),
            curve: None,
        }
    }

    /// Sets the construction config.
    #[must_use]
    pub fn with_config(mut self, config: CurveConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the verbose flag.
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    /// Returns the parameters as (β₀, β₁, β₂, τ).
    #[must_use]
    pub fn parameters(&self) -> (f64, f64, f64, f64) {
        (self.beta0, self.beta1, self.beta2, self.tau)
    }

    /// Yields from the last successful fit, aligned with its maturities.
    #[must_use]
    pub fn yields(&self) -> &[f64] {
        &self.yields
    }

    /// Replaces the parameters and maturities, then fits.
    ///
    /// # Errors
    ///
    /// See [`CurveMethod::fit`]. On error the previous inputs and curve are
    /// kept.
    pub fn fit_parameters(
        &mut self,
        beta0: f64,
        beta1: f64,
        beta2: f64,
        tau: f64,
        maturities: Vec<f64>,
    ) -> CurveResult<&DiscountCurve> {
        let candidate = Self {
            config: self.config.clone(),
            ..Self::new(beta0, beta1, beta2, tau, maturities)
        };
        let (yields, curve) = candidate.evaluate()?;

        self.beta0 = beta0;
        self.beta1 = beta1;
        self.beta2 = beta2;
        self.tau = tau;
        self.maturities = candidate.maturities;
        self.yields = yields;
        Ok(self.curve.insert(curve))
    }

    fn evaluate(&self) -> CurveResult<(Vec<f64>, DiscountCurve)> {
        let model = NelsonSiegel::new(self.beta0, self.beta1, self.beta2, self.tau)?;

        if let Some(t) = self.maturities.iter().find(|t| !t.is_finite() || **t <= 0.0) {
            return Err(CurveError::invalid_value(format!(
                "Nelson-Siegel maturity must be positive, got {t}"
            )));
        }

        let yields: Vec<f64> = self.maturities.iter().map(|&t| model.zero_rate(t)).collect();
        let discount_factors = self
            .maturities
            .iter()
            .map(|&t| model.discount_factor(t))
            .collect();
        let curve = DiscountCurve::new(self.maturities.clone(), discount_factors)?;

        if self.config.verbose {
            info!(
                "Nelson-Siegel: beta0={}, beta1={}, beta2={}, tau={}",
                self.beta0, self.beta1, self.beta2, self.tau
            );
        }

        Ok((yields, curve))
    }
}

impl CurveMethod for NelsonSiegelMethod {
    fn name(&self) -> &'static str {
        "Nelson-Siegel"
    }

    fn fit(&mut self) -> CurveResult<&DiscountCurve> {
        let (yields, curve) = self.evaluate()?;
        self.yields = yields;
        Ok(self.curve.insert(curve))
    }

    fn curve(&self) -> Option<&DiscountCurve> {
        self.curve.as_ref()
    }
}
