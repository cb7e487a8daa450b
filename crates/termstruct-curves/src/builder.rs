//! Bootstrap curve builder.
//!
//! Owns the market instruments and, once fitted, the discount curve they
//! imply.
//!
//! # Example
//!
//! ```rust
//! use termstruct_curves::builder::CurveBuilder;
//! use termstruct_curves::instruments::MarketInstrument;
//!
//! let mut builder = CurveBuilder::new()
//!     .with_instrument(MarketInstrument::libor(0.25, 0.15).unwrap())
//!     .with_instrument(MarketInstrument::swap(2.0, 0.50).unwrap());
//!
//! let curve = builder.fit().unwrap();
//! assert_eq!(curve.len(), 2);
//! assert!((curve.discount_factors()[0] - 1.0 / (1.0 + 0.25 * 0.0015)).abs() < 1e-15);
//! ```

use std::time::Instant;

use tracing::debug;

use crate::bootstrap::bootstrap_curve;
use crate::config::CurveConfig;
use crate::curves::DiscountCurve;
use crate::error::{CurveError, CurveResult};
use crate::instruments::MarketInstrument;
use crate::repricing::{reprice, BootstrapResult};

/// Bootstrap builder for discount curves.
///
/// Instruments keep their insertion order; the bootstrap sorts a view of them
/// by maturity on every fit. Each call to [`fit`](Self::fit) recomputes the
/// curve from scratch, and a failed fit leaves the previous curve (or none)
/// in place.
///
/// A builder is single-owner: adding instruments and fitting both take
/// `&mut self`.
#[derive(Debug, Clone, Default)]
pub struct CurveBuilder {
    /// Instruments in insertion order.
    instruments: Vec<MarketInstrument>,
    /// Construction settings.
    config: CurveConfig,
    /// Curve from the last successful fit.
    curve: Option<DiscountCurve>,
}

/// The bootstrap curve method is the builder itself.
pub type BootstrapMethod = CurveBuilder;

impl CurveBuilder {
    /// Creates an empty builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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

    /// Adds an instrument, builder style.
    #[must_use]
    pub fn with_instrument(mut self, instrument: MarketInstrument) -> Self {
        self.instruments.push(instrument);
        self
    }

    /// Appends an instrument.
    pub fn add_instrument(&mut self, instrument: MarketInstrument) -> &mut Self {
        self.instruments.push(instrument);
        self
    }

    /// Appends several instruments, keeping their order.
    pub fn add_instruments<I>(&mut self, instruments: I) -> &mut Self
    where
        I: IntoIterator<Item = MarketInstrument>,
    {
        self.instruments.extend(instruments);
        self
    }

    /// Returns the instruments in insertion order.
    #[must_use]
    pub fn instruments(&self) -> &[MarketInstrument] {
        &self.instruments
    }

    /// Returns the construction config.
    #[must_use]
    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    /// Bootstraps the curve from the current instruments.
    ///
    /// # Errors
    ///
    /// Returns any bootstrap error (see
    /// [`bootstrap_curve`](crate::bootstrap::bootstrap_curve)). The builder's
    /// previous curve is unchanged on error.
    pub fn fit(&mut self) -> CurveResult<&DiscountCurve> {
        let curve = bootstrap_curve(&self.instruments, &self.config)?;
        Ok(self.curve.insert(curve))
    }

    /// Bootstraps the curve and reprices every instrument against it.
    ///
    /// The curve is stored even when some instruments miss the repricing
    /// tolerance; inspect [`BootstrapResult::is_valid`].
    ///
    /// # Errors
    ///
    /// Returns any bootstrap error. The builder's previous curve is unchanged
    /// on error.
    pub fn fit_validated(&mut self) -> CurveResult<BootstrapResult> {
        let start = Instant::now();

        let curve = bootstrap_curve(&self.instruments, &self.config)?;
        let repricing_report = reprice(&self.instruments, &curve, &self.config)?;
        let build_duration = start.elapsed();

        debug!(
            max_error = repricing_report.max_error(),
            passed = repricing_report.passed_count(),
            total = repricing_report.checks().len(),
            "repriced bootstrap instruments"
        );

        self.curve = Some(curve.clone());
        Ok(BootstrapResult {
            curve,
            repricing_report,
            build_duration,
        })
    }

    /// Returns the curve from the last successful fit.
    #[must_use]
    pub fn curve(&self) -> Option<&DiscountCurve> {
        self.curve.as_ref()
    }

    fn fitted(&self) -> CurveResult<&DiscountCurve> {
        self.curve.as_ref().ok_or(CurveError::NotFitted)
    }

    /// Continuously compounded zero rates at the fitted pillars.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::NotFitted` before a successful fit.
    pub fn zero_rates(&self) -> CurveResult<Vec<f64>> {
        Ok(self.fitted()?.zero_rates())
    }

    /// Simple forward rates between consecutive fitted pillars.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::NotFitted` before a successful fit.
    pub fn forward_rates(&self) -> CurveResult<Vec<f64>> {
        Ok(self.fitted()?.forward_rates())
    }

    /// Simple forward rate between `t1` and `t2` on the fitted curve.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::NotFitted` before a successful fit, or any error
    /// from [`DiscountCurve::forward_rate`].
    pub fn forward_rate(&self, t1: f64, t2: f64) -> CurveResult<f64> {
        self.fitted()?.forward_rate(t1, t2)
    }
}
