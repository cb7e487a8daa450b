//! Curve construction methods.
//!
//! Every method produces a [`DiscountCurve`] through the [`CurveMethod`]
//! trait:
//!
//! | Method | Input | Construction |
//! |--------|-------|--------------|
//! | [`BootstrapMethod`] | market instruments | sequential bootstrap |
//! | [`PseudoinverseMethod`] | market instruments | delegates to the bootstrap |
//! | [`LorimierMethod`] | yields and maturities | `exp(-y·T)` |
//! | [`NelsonSiegelMethod`] | β₀, β₁, β₂, τ and maturities | closed-form yields |
//!
//! [`TermStructureMethod`] wraps the four for callers that pick a method at
//! runtime.

mod lorimier;
mod nelson_siegel;
mod pseudoinverse;

pub use crate::builder::BootstrapMethod;
pub use lorimier::LorimierMethod;
pub use nelson_siegel::NelsonSiegelMethod;
pub use pseudoinverse::PseudoinverseMethod;

use crate::curves::DiscountCurve;
use crate::error::{CurveError, CurveResult};

/// A term structure construction method.
pub trait CurveMethod {
    /// Short method name for logs and reports.
    fn name(&self) -> &'static str;

    /// Computes the curve from the method's inputs, replacing any previous
    /// curve on success.
    ///
    /// # Errors
    ///
    /// Returns the method's construction error. The previous curve is
    /// unchanged on error.
    fn fit(&mut self) -> CurveResult<&DiscountCurve>;

    /// Curve from the last successful fit.
    fn curve(&self) -> Option<&DiscountCurve>;

    /// Continuously compounded zero rates at the fitted pillars.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::NotFitted` before a successful fit.
    fn zero_rates(&self) -> CurveResult<Vec<f64>> {
        self.curve()
            .map(DiscountCurve::zero_rates)
            .ok_or(CurveError::NotFitted)
    }

    /// Simple forward rate between `t1` and `t2` on the fitted curve.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::NotFitted` before a successful fit, or any error
    /// from [`DiscountCurve::forward_rate`].
    fn forward_rate(&self, t1: f64, t2: f64) -> CurveResult<f64> {
        self.curve()
            .ok_or(CurveError::NotFitted)?
            .forward_rate(t1, t2)
    }
}

impl CurveMethod for BootstrapMethod {
    fn name(&self) -> &'static str {
        "Bootstrap"
    }

    fn fit(&mut self) -> CurveResult<&DiscountCurve> {
        BootstrapMethod::fit(self)
    }

    fn curve(&self) -> Option<&DiscountCurve> {
        BootstrapMethod::curve(self)
    }
}

/// One of the four construction methods, chosen at runtime.
#[derive(Debug, Clone)]
pub enum TermStructureMethod {
    /// Sequential bootstrap.
    Bootstrap(BootstrapMethod),
    /// Pseudoinverse (bootstrap delegate).
    Pseudoinverse(PseudoinverseMethod),
    /// Lorimier yield transform.
    Lorimier(LorimierMethod),
    /// Nelson-Siegel parametric curve.
    NelsonSiegel(NelsonSiegelMethod),
}

impl TermStructureMethod {
    fn inner(&self) -> &dyn CurveMethod {
        match self {
            Self::Bootstrap(m) => m,
            Self::Pseudoinverse(m) => m,
            Self::Lorimier(m) => m,
            Self::NelsonSiegel(m) => m,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn CurveMethod {
        match self {
            Self::Bootstrap(m) => m,
            Self::Pseudoinverse(m) => m,
            Self::Lorimier(m) => m,
            Self::NelsonSiegel(m) => m,
        }
    }
}

impl CurveMethod for TermStructureMethod {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn fit(&mut self) -> CurveResult<&DiscountCurve> {
        self.inner_mut().fit()
    }

    fn curve(&self) -> Option<&DiscountCurve> {
        self.inner().curve()
    }
}

impl From<BootstrapMethod> for TermStructureMethod {
    fn from(method: BootstrapMethod) -> Self {
        Self::Bootstrap(method)
    }
}

impl From<PseudoinverseMethod> for TermStructureMethod {
    fn from(method: PseudoinverseMethod) -> Self {
        Self::Pseudoinverse(method)
    }
}

impl From<LorimierMethod> for TermStructureMethod {
    fn from(method: LorimierMethod) -> Self {
        Self::Lorimier(method)
    }
}

impl From<NelsonSiegelMethod> for TermStructureMethod {
    fn from(method: NelsonSiegelMethod) -> Self {
        Self::NelsonSiegel(method)
    }
}
