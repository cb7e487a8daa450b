//! Lorimier curve method.
//!
//! Discount factors come straight from the observed yields,
//! `P(T) = exp(-y·T)`. Yields between maturities are read off a natural
//! cubic spline through the recovered `(T, -ln(P)/T)` pairs.
//!
//! The smoothing parameter `alpha` is carried but not yet applied: there is
//! no smoothing-spline solve, so the curve reproduces the input yields
//! exactly whatever its value.

use termstruct_math::interpolation::{CubicSpline, Interpolator};
use tracing::info;

use crate::config::{CurveConfig, DomainPolicy};
use crate::curves::DiscountCurve;
use crate::error::{CurveError, CurveResult};
use crate::methods::CurveMethod;

/// Lorimier method over observed yields.
#[derive(Debug, Clone)]
pub struct LorimierMethod {
    yields: Vec<f64>,
    maturities: Vec<f64>,
    config: CurveConfig,
    curve: Option<DiscountCurve>,
}

impl LorimierMethod {
    /// Creates the method over parallel `yields` (decimal, continuously
    /// compounded) and `maturities` (years, strictly increasing).
    #[must_use]
    pub fn new(yields: Vec<f64>, maturities: Vec<f64>) -> Self {
        Self {
            yields,
            maturities,
            config: CurveConfig::default(),
            curve: None,
        }
    }

    /// Sets the construction config.
    #[must_use]
    pub fn with_config(mut self, config: CurveConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the smoothing parameter.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.config.lorimier_alpha = alpha;
        self
    }

    /// Sets the verbose flag.
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    /// Smoothing parameter.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.config.lorimier_alpha
    }

    /// Replaces the input yields and maturities, then fits.
    ///
    /// # Errors
    ///
    /// See [`CurveMethod::fit`]. On error the previous inputs and curve are
    /// kept.
    pub fn fit_yields(
        &mut self,
        yields: Vec<f64>,
        maturities: Vec<f64>,
    ) -> CurveResult<&DiscountCurve> {
        let curve = self.transform(&yields, &maturities)?;
        self.yields = yields;
        self.maturities = maturities;
        Ok(self.curve.insert(curve))
    }

    fn transform(&self, yields: &[f64], maturities: &[f64]) -> CurveResult<DiscountCurve> {
        if yields.len() != maturities.len() {
            return Err(CurveError::invalid_value(format!(
                "yields and maturities must have same length: {} vs {}",
                yields.len(),
                maturities.len()
            )));
        }
        if let Some(y) = yields.iter().find(|y| !y.is_finite()) {
            return Err(CurveError::invalid_value(format!("yield must be finite, got {y}")));
        }

        let discount_factors = yields
            .iter()
            .zip(maturities)
            .map(|(y, t)| (-y * t).exp())
            .collect();
        let curve = DiscountCurve::new(maturities.to_vec(), discount_factors)?;

        if self.config.verbose {
            info!("Lorimier: alpha={}", self.alpha());
        }

        Ok(curve)
    }

    /// Yield at maturity `t` from a natural cubic spline through the fitted
    /// pillar yields.
    ///
    /// Under [`DomainPolicy::Clamp`] (the default) `t` is clamped into the
    /// fitted maturity range, so queries outside it return the boundary
    /// yield rather than failing.
    ///
    /// # Errors
    ///
    /// - `CurveError::NotFitted` before a successful fit
    /// - `CurveError::InterpolationDomain` for an out-of-range `t` under
    ///   [`DomainPolicy::Strict`]
    /// - `CurveError::InvalidValue` for a non-finite `t`
    pub fn get_yield_at(&self, t: f64) -> CurveResult<f64> {
        let curve = self.curve.as_ref().ok_or(CurveError::NotFitted)?;
        if !t.is_finite() {
            return Err(CurveError::invalid_value(format!(
                "query maturity must be finite, got {t}"
            )));
        }

        let (min, max) = (curve.min_maturity(), curve.max_maturity());
        let t = match self.config.lorimier_domain {
            DomainPolicy::Clamp => t.clamp(min, max),
            DomainPolicy::Strict if (min..=max).contains(&t) => t,
            DomainPolicy::Strict => return Err(CurveError::interpolation_domain(t, min, max)),
        };

        let yields = curve.zero_rates();
        if yields.len() == 1 {
            return Ok(yields[0]);
        }

        let spline = CubicSpline::new(curve.maturities().to_vec(), yields)?;
        Ok(spline.interpolate(t)?)
    }
}

impl CurveMethod for LorimierMethod {
    fn name(&self) -> &'static str {
        "Lorimier"
    }

    fn fit(&mut self) -> CurveResult<&DiscountCurve> {
        let curve = self.transform(&self.yields, &self.maturities)?;
        Ok(self.curve.insert(curve))
    }

    fn curve(&self) -> Option<&DiscountCurve> {
        self.curve.as_ref()
    }
}
