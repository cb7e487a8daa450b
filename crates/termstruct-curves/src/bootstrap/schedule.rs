//! Swap payment schedules and the partial curve used to price them.

use termstruct_math::interpolation::{CubicSpline, Interpolator};

use crate::config::PaymentRounding;
use crate::error::CurveResult;

/// Annual fixed-leg payment times for a swap maturing at `maturity`.
///
/// `n` periods (from `rounding`) are spread evenly from 1.0 to `maturity`
/// inclusive. A single period pays once, at `maturity`.
pub(crate) fn payment_dates(maturity: f64, rounding: PaymentRounding) -> Vec<f64> {
    let n = rounding.periods(maturity);
    if n == 1 {
        return vec![maturity];
    }

    let step = (maturity - 1.0) / (n - 1) as f64;
    let mut dates: Vec<f64> = (0..n - 1).map(|i| 1.0 + step * i as f64).collect();
    dates.push(maturity);
    dates
}

/// Accrual of the final period: the gap between the last two payment dates,
/// or the full maturity for a single payment.
pub(crate) fn final_accrual(dates: &[f64]) -> f64 {
    match dates {
        [.., prev, last] => last - prev,
        [only] => *only,
        [] => 0.0,
    }
}

/// Discount function over pillars solved strictly before the instrument
/// being priced.
pub(crate) enum PriorCurve {
    /// No pillars yet: earlier coupons carry no value.
    Empty,
    /// Natural cubic spline with extrapolation through the prior pillars.
    ///
    /// A single prior pillar is anchored at (0, 1), which makes the two-knot
    /// spline the straight line from today's unit discount factor.
    Spline(CubicSpline),
}

impl PriorCurve {
    /// Fits the discount function through `(maturities, discount_factors)`.
    pub(crate) fn fit(maturities: &[f64], discount_factors: &[f64]) -> CurveResult<Self> {
        let spline = match maturities.len() {
            0 => return Ok(Self::Empty),
            1 => CubicSpline::new(vec![0.0, maturities[0]], vec![1.0, discount_factors[0]])?,
            _ => CubicSpline::new(maturities.to_vec(), discount_factors.to_vec())?,
        };
        Ok(Self::Spline(spline.with_extrapolation()))
    }

    /// Present value of the fixed-leg coupons before the final payment, per
    /// unit rate: `Σ δᵢ·P(tᵢ)` over all dates but the last.
    ///
    /// The first accrual runs from time 0.
    pub(crate) fn coupon_annuity(&self, dates: &[f64]) -> CurveResult<f64> {
        let spline = match self {
            Self::Empty => return Ok(0.0),
            Self::Spline(spline) => spline,
        };
        if dates.len() < 2 {
            return Ok(0.0);
        }

        let mut annuity = 0.0;
        let mut prev = 0.0;
        for &t in &dates[..dates.len() - 1] {
            annuity += (t - prev) * spline.interpolate(t)?;
            prev = t;
        }
        Ok(annuity)
    }
}
