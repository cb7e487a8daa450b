//! Sequential bootstrap algorithm.
//!
//! Solves one discount factor per instrument, shortest maturity first, each
//! from the pillars already solved.

use tracing::{debug, info};

use crate::bootstrap::schedule::{final_accrual, payment_dates, PriorCurve};
use crate::config::CurveConfig;
use crate::curves::DiscountCurve;
use crate::error::{CurveError, CurveResult};
use crate::instruments::{InstrumentType, MarketInstrument};

/// Pillars solved so far, strictly increasing in maturity.
///
/// Each step sees the accumulator by shared reference and returns a new
/// pillar, so an instrument's own maturity is never visible while it is
/// being solved.
#[derive(Debug, Clone, Default)]
pub(crate) struct SolvedPillars {
    maturities: Vec<f64>,
    discount_factors: Vec<f64>,
}

impl SolvedPillars {
    /// The first `len` pillars of an already built curve.
    pub(crate) fn from_prefix(curve: &DiscountCurve, len: usize) -> Self {
        Self {
            maturities: curve.maturities()[..len].to_vec(),
            discount_factors: curve.discount_factors()[..len].to_vec(),
        }
    }

    pub(crate) fn maturities(&self) -> &[f64] {
        &self.maturities
    }

    pub(crate) fn discount_factors(&self) -> &[f64] {
        &self.discount_factors
    }

    pub(crate) fn last(&self) -> Option<(f64, f64)> {
        self.maturities
            .last()
            .copied()
            .zip(self.discount_factors.last().copied())
    }

    /// Appends a pillar, rejecting maturities that do not extend the curve.
    fn push(mut self, maturity: f64, discount_factor: f64) -> CurveResult<Self> {
        if let Some((last_t, _)) = self.last() {
            if maturity <= last_t {
                return Err(CurveError::duplicate_maturity(maturity));
            }
        }
        if !discount_factor.is_finite() || discount_factor <= 0.0 {
            return Err(CurveError::invalid_value(format!(
                "solved discount factor {discount_factor} at {maturity:.4}Y must be positive"
            )));
        }

        self.maturities.push(maturity);
        self.discount_factors.push(discount_factor);
        Ok(self)
    }

    fn into_curve(self) -> CurveResult<DiscountCurve> {
        DiscountCurve::new(self.maturities, self.discount_factors)
    }
}

/// Returns the instruments in bootstrap order.
///
/// Stable sort by maturity: instruments with equal maturity keep their
/// insertion order.
pub(crate) fn sorted_by_maturity(instruments: &[MarketInstrument]) -> Vec<&MarketInstrument> {
    let mut sorted: Vec<&MarketInstrument> = instruments.iter().collect();
    sorted.sort_by(|a, b| a.maturity().total_cmp(&b.maturity()));
    sorted
}

/// Solves the discount factor implied by `instrument` given the prior pillars.
///
/// * LIBOR: `P = 1 / (1 + T·r)`
/// * Future: `P = P0 / (1 + (T - T0)·r)` with `(T0, P0)` the last pillar
/// * Swap: `P = (1 - R·Σδᵢ·P(tᵢ)) / (1 + R·δₙ)` with earlier coupons
///   discounted off a natural cubic spline through the prior pillars
pub(crate) fn implied_discount_factor(
    instrument: &MarketInstrument,
    prior: &SolvedPillars,
    config: &CurveConfig,
) -> CurveResult<f64> {
    let t = instrument.maturity();
    let rate = instrument.rate();

    match instrument.instrument_type() {
        InstrumentType::Libor => Ok(1.0 / (1.0 + t * rate)),
        InstrumentType::Future => {
            let (t0, p0) = prior
                .last()
                .ok_or_else(|| CurveError::preceding_point_required(t))?;
            Ok(p0 / (1.0 + (t - t0) * rate))
        }
        InstrumentType::Swap => {
            let dates = payment_dates(t, config.payment_rounding);
            let annuity = PriorCurve::fit(prior.maturities(), prior.discount_factors())?
                .coupon_annuity(&dates)?;
            Ok((1.0 - rate * annuity) / (1.0 + rate * final_accrual(&dates)))
        }
        InstrumentType::Bond => Err(CurveError::unsupported_instrument(
            instrument.instrument_type(),
            t,
        )),
    }
}

/// Bootstraps a discount curve from market instruments.
///
/// The input slice is not modified; instruments are processed in maturity
/// order (see [`sorted_by_maturity`]).
///
/// # Errors
///
/// - `CurveError::EmptyInput` if `instruments` is empty
/// - `CurveError::PrecedingPointRequired` if a Future has no shorter pillar
/// - `CurveError::UnsupportedInstrument` for bonds
/// - `CurveError::DuplicateMaturity` if two instruments share a maturity
/// - `CurveError::InvalidValue` if a solved discount factor is not positive
pub fn bootstrap_curve(
    instruments: &[MarketInstrument],
    config: &CurveConfig,
) -> CurveResult<DiscountCurve> {
    if instruments.is_empty() {
        return Err(CurveError::EmptyInput);
    }

    let pillars = sorted_by_maturity(instruments).into_iter().try_fold(
        SolvedPillars::default(),
        |pillars, instrument| {
            let df = implied_discount_factor(instrument, &pillars, config)?;
            debug!(
                instrument = %instrument,
                maturity = instrument.maturity(),
                discount_factor = df,
                "solved pillar"
            );
            pillars.push(instrument.maturity(), df)
        },
    )?;

    let curve = pillars.into_curve()?;

    if config.verbose {
        info!("Bootstrap: {} instruments", instruments.len());
    }

    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn libor(t: f64, q: f64) -> MarketInstrument {
        MarketInstrument::libor(t, q).unwrap()
    }

    #[test]
    fn test_bootstrap_single_libor() {
        let curve = bootstrap_curve(&[libor(0.25, 0.15)], &CurveConfig::default()).unwrap();

        assert_eq!(curve.len(), 1);
        assert_relative_eq!(
            curve.discount_factors()[0],
            1.0 / (1.0 + 0.25 * 0.0015),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_bootstrap_empty_fails() {
        assert_eq!(
            bootstrap_curve(&[], &CurveConfig::default()),
            Err(CurveError::EmptyInput)
        );
    }

    #[test]
    fn test_future_chains_from_previous_pillar() {
        let instruments = vec![
            libor(0.25, 0.20),
            MarketInstrument::future(0.5, 0.30).unwrap(),
            MarketInstrument::future(0.75, 0.35).unwrap(),
        ];
        let curve = bootstrap_curve(&instruments, &CurveConfig::default()).unwrap();
        let dfs = curve.discount_factors();

        let p0 = 1.0 / (1.0 + 0.25 * 0.0020);
        let p1 = p0 / (1.0 + 0.25 * 0.0030);
        let p2 = p1 / (1.0 + 0.25 * 0.0035);
        assert_relative_eq!(dfs[0], p0, epsilon = 1e-15);
        assert_relative_eq!(dfs[1], p1, epsilon = 1e-15);
        assert_relative_eq!(dfs[2], p2, epsilon = 1e-15);
    }

    #[test]
    fn test_leading_future_fails() {
        let instruments = vec![
            libor(1.0, 0.5),
            MarketInstrument::future(0.5, 0.3).unwrap(),
        ];
        assert!(matches!(
            bootstrap_curve(&instruments, &CurveConfig::default()),
            Err(CurveError::PrecedingPointRequired { .. })
        ));
    }

    #[test]
    fn test_bond_unsupported() {
        let instruments = vec![libor(0.5, 0.3), MarketInstrument::bond(5.0, 1.0).unwrap()];
        assert!(matches!(
            bootstrap_curve(&instruments, &CurveConfig::default()),
            Err(CurveError::UnsupportedInstrument {
                instrument_type: InstrumentType::Bond,
                ..
            })
        ));
    }

    #[test]
    fn test_duplicate_maturity_rejected() {
        let instruments = vec![libor(1.0, 0.5), MarketInstrument::swap(1.0, 0.6).unwrap()];
        assert!(matches!(
            bootstrap_curve(&instruments, &CurveConfig::default()),
            Err(CurveError::DuplicateMaturity { .. })
        ));
    }

    #[test]
    fn test_stable_sort_keeps_insertion_order_on_ties() {
        let a = libor(1.0, 0.5).with_label("first");
        let b = libor(0.5, 0.4);
        let c = libor(1.0, 0.6).with_label("second");
        let instruments = [a, b, c];

        let sorted = sorted_by_maturity(&instruments);
        assert_eq!(sorted[0].maturity(), 0.5);
        assert_eq!(sorted[1].label(), Some("first"));
        assert_eq!(sorted[2].label(), Some("second"));
    }

    #[test]
    fn test_single_payment_swap_is_simple_compounding() {
        let instruments = vec![MarketInstrument::swap(1.0, 0.4).unwrap()];
        let curve = bootstrap_curve(&instruments, &CurveConfig::default()).unwrap();
        assert_relative_eq!(
            curve.discount_factors()[0],
            1.0 / (1.0 + 0.004),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_swap_without_prior_pillars_ignores_earlier_coupons() {
        let instruments = vec![MarketInstrument::swap(3.0, 1.0).unwrap()];
        let curve = bootstrap_curve(&instruments, &CurveConfig::default()).unwrap();
        assert_relative_eq!(curve.discount_factors()[0], 1.0 / 1.01, epsilon = 1e-15);
    }

    #[test]
    fn test_swap_prices_off_strictly_prior_pillars() {
        let instruments = vec![
            libor(0.5, 1.0),
            libor(1.0, 1.2),
            MarketInstrument::swap(2.0, 1.5).unwrap(),
            MarketInstrument::swap(3.0, 1.8).unwrap(),
        ];
        let curve = bootstrap_curve(&instruments, &CurveConfig::default()).unwrap();
        let dfs = curve.discount_factors();

        // 2Y: one earlier coupon at 1.0, on the 1Y pillar exactly.
        let r2 = 0.015;
        let p2 = (1.0 - r2 * dfs[1]) / (1.0 + r2);
        assert_relative_eq!(dfs[2], p2, epsilon = 1e-14);

        // 3Y: earlier coupons at 1.0 and 2.0, both pillars.
        let r3 = 0.018;
        let p3 = (1.0 - r3 * (dfs[1] + dfs[2])) / (1.0 + r3);
        assert_relative_eq!(dfs[3], p3, epsilon = 1e-14);
    }

    #[test]
    fn test_swap_coupon_past_last_pillar_uses_spline_extrapolation() {
        let instruments = vec![
            libor(0.25, 1.0),
            libor(0.5, 1.5),
            libor(1.0, 2.5),
            MarketInstrument::swap(3.0, 3.0).unwrap(),
        ];
        let curve = bootstrap_curve(&instruments, &CurveConfig::default()).unwrap();
        let dfs = curve.discount_factors();

        let y0: f64 = 1.0 / (1.0 + 0.25 * 0.01);
        let y1 = 1.0 / (1.0 + 0.5 * 0.015);
        let y2 = 1.0 / (1.0 + 1.0 * 0.025);

        // Natural spline on knots 0.25, 0.5, 1.0: one interior second
        // derivative, zero at both ends.
        let m = 3.0 * ((y2 - y1) / 0.5 - (y1 - y0) / 0.25) / 0.75;

        // The 2Y coupon lies off the last [0.5, 1.0] segment: h = 0.5,
        // a = -2, b = 3, so (a³ - a)·h²/6 = -0.25.
        let p_2y = -2.0 * y1 + 3.0 * y2 - 0.25 * m;
        let linear_2y = y2 + (y2 - y1) / 0.5;
        assert!((p_2y - linear_2y).abs() > 1e-4);

        let rate = 0.03;
        let p3 = (1.0 - rate * (y2 + p_2y)) / (1.0 + rate);
        assert_relative_eq!(dfs[3], p3, epsilon = 1e-14);
    }

    #[test]
    fn test_failed_bootstrap_reports_first_violation() {
        let instruments = vec![
            MarketInstrument::future(0.5, 0.3).unwrap(),
            MarketInstrument::bond(2.0, 1.0).unwrap(),
        ];
        assert!(matches!(
            bootstrap_curve(&instruments, &CurveConfig::default()),
            Err(CurveError::PrecedingPointRequired { .. })
        ));
    }
}
