//! Repricing validation for the bootstrap.
//!
//! Each input instrument's pricing identity is re-evaluated against the
//! finished curve. The residual is the amount by which the identity fails:
//!
//! ```text
//! LIBOR   P·(1 + T·r) - 1
//! Future  P·(1 + δ·r) - P0
//! Swap    R·Σδᵢ·P(tᵢ) + R·δₙ·P - (1 - P)
//! ```
//!
//! where `P` is the curve's pillar for the instrument and earlier swap
//! coupons are discounted off the spline through the shorter pillars. An
//! exact bootstrap leaves residuals at rounding-error size.

use std::fmt;
use std::time::Duration;

use crate::bootstrap::schedule::{final_accrual, payment_dates, PriorCurve};
use crate::bootstrap::{sorted_by_maturity, SolvedPillars};
use crate::config::CurveConfig;
use crate::curves::DiscountCurve;
use crate::error::{CurveError, CurveResult};
use crate::instruments::{InstrumentType, MarketInstrument};

/// Result of repricing a single instrument against the curve.
#[derive(Debug, Clone, PartialEq)]
pub struct RepricingCheck {
    /// Description of the instrument (e.g. "Swap 2.0000Y 0.5000%")
    pub instrument_id: String,

    /// Type of instrument
    pub instrument_type: InstrumentType,

    /// Pricing identity residual
    pub residual: f64,

    /// Absolute error |residual|
    pub error: f64,

    /// Tolerance applied
    pub tolerance: f64,

    /// Whether this instrument passed validation
    pub passed: bool,
}

impl RepricingCheck {
    /// Creates a new repricing check result.
    #[must_use]
    pub fn new(
        instrument_id: String,
        instrument_type: InstrumentType,
        residual: f64,
        tolerance: f64,
    ) -> Self {
        let error = residual.abs();
        let passed = error <= tolerance;

        Self {
            instrument_id,
            instrument_type,
            residual,
            error,
            tolerance,
            passed,
        }
    }
}

impl fmt::Display for RepricingCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "✓" } else { "✗" };
        write!(
            f,
            "{} {} | Residual: {:.2e} (tol: {:.2e})",
            status, self.instrument_id, self.residual, self.tolerance
        )
    }
}

/// Complete repricing report for a bootstrapped curve.
#[derive(Debug, Clone, PartialEq)]
pub struct RepricingReport {
    checks: Vec<RepricingCheck>,
    max_error: f64,
    rms_error: f64,
}

impl RepricingReport {
    /// Creates a new repricing report from individual checks.
    #[must_use]
    pub fn new(checks: Vec<RepricingCheck>) -> Self {
        let max_error = checks.iter().map(|c| c.error).fold(0.0_f64, f64::max);

        let rms_error = if checks.is_empty() {
            0.0
        } else {
            let sum_sq: f64 = checks.iter().map(|c| c.error * c.error).sum();
            (sum_sq / checks.len() as f64).sqrt()
        };

        Self {
            checks,
            max_error,
            rms_error,
        }
    }

    /// Returns whether all instruments passed repricing validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Returns the individual repricing checks, in maturity order.
    #[must_use]
    pub fn checks(&self) -> &[RepricingCheck] {
        &self.checks
    }

    /// Returns the maximum absolute residual.
    #[must_use]
    pub fn max_error(&self) -> f64 {
        self.max_error
    }

    /// Returns the RMS residual.
    #[must_use]
    pub fn rms_error(&self) -> f64 {
        self.rms_error
    }

    /// Returns the number of instruments that passed.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Returns the number of instruments that failed.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.checks.len() - self.passed_count()
    }

    /// Returns failed instrument IDs for error messages.
    #[must_use]
    pub fn failed_instruments(&self) -> Vec<&str> {
        self.checks
            .iter()
            .filter(|c| !c.passed)
            .map(|c| c.instrument_id.as_str())
            .collect()
    }
}

impl fmt::Display for RepricingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Repricing Report")?;
        writeln!(f, "================")?;
        writeln!(f, "Status: {}", if self.is_valid() { "PASSED" } else { "FAILED" })?;
        writeln!(f, "Instruments: {}/{} passed", self.passed_count(), self.checks.len())?;
        writeln!(f, "Max Error: {:.2e}", self.max_error)?;
        writeln!(f, "RMS Error: {:.2e}", self.rms_error)?;

        if !self.checks.is_empty() {
            writeln!(f)?;
            writeln!(f, "Details:")?;
            for check in &self.checks {
                writeln!(f, "  {check}")?;
            }
        }

        Ok(())
    }
}

/// A bootstrapped curve together with its repricing report.
#[derive(Debug, Clone)]
pub struct BootstrapResult {
    /// The bootstrapped curve.
    pub curve: DiscountCurve,

    /// Repricing validation report.
    pub repricing_report: RepricingReport,

    /// Time taken to build and validate the curve.
    pub build_duration: Duration,
}

impl BootstrapResult {
    /// Returns whether all instruments reprice within tolerance.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.repricing_report.is_valid()
    }

    /// Returns the maximum repricing residual.
    #[must_use]
    pub fn max_error(&self) -> f64 {
        self.repricing_report.max_error()
    }

    /// Consumes the result and returns the curve.
    #[must_use]
    pub fn into_curve(self) -> DiscountCurve {
        self.curve
    }
}

impl fmt::Display for BootstrapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bootstrap Result")?;
        writeln!(f, "Build time: {:?}", self.build_duration)?;
        writeln!(f)?;
        write!(f, "{}", self.repricing_report)
    }
}

/// Pricing identity residual of `instrument` given its pillar `df` and the
/// strictly shorter pillars.
fn residual(
    instrument: &MarketInstrument,
    df: f64,
    prior: &SolvedPillars,
    config: &CurveConfig,
) -> CurveResult<f64> {
    let t = instrument.maturity();
    let rate = instrument.rate();

    match instrument.instrument_type() {
        InstrumentType::Libor => Ok(df * (1.0 + t * rate) - 1.0),
        InstrumentType::Future => {
            let (t0, p0) = prior
                .last()
                .ok_or_else(|| CurveError::preceding_point_required(t))?;
            Ok(df * (1.0 + (t - t0) * rate) - p0)
        }
        InstrumentType::Swap => {
            let dates = payment_dates(t, config.payment_rounding);
            let annuity = PriorCurve::fit(prior.maturities(), prior.discount_factors())?
                .coupon_annuity(&dates)?;
            Ok(rate * annuity + rate * final_accrual(&dates) * df - (1.0 - df))
        }
        InstrumentType::Bond => Err(CurveError::unsupported_instrument(
            instrument.instrument_type(),
            t,
        )),
    }
}

/// Reprices `instruments` against a curve bootstrapped from them.
///
/// # Errors
///
/// Returns `CurveError::InvalidValue` if the curve's pillars do not line up
/// with the instrument maturities, or any error from re-evaluating an
/// instrument.
pub fn reprice(
    instruments: &[MarketInstrument],
    curve: &DiscountCurve,
    config: &CurveConfig,
) -> CurveResult<RepricingReport> {
    if instruments.len() != curve.len() {
        return Err(CurveError::invalid_value(format!(
            "curve has {} pillars for {} instruments",
            curve.len(),
            instruments.len()
        )));
    }

    let mut checks = Vec::with_capacity(instruments.len());
    for (i, (instrument, (t, df))) in sorted_by_maturity(instruments)
        .into_iter()
        .zip(curve.points())
        .enumerate()
    {
        if (instrument.maturity() - t).abs() > f64::EPSILON * t.max(1.0) {
            return Err(CurveError::invalid_value(format!(
                "pillar {t} does not match {instrument}"
            )));
        }

        let prior = SolvedPillars::from_prefix(curve, i);
        let residual = residual(instrument, df, &prior, config)?;
        checks.push(RepricingCheck::new(
            instrument.description(),
            instrument.instrument_type(),
            residual,
            config.repricing_tolerance,
        ));
    }

    Ok(RepricingReport::new(checks))
}
