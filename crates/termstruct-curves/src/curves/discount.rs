//! Discount factor curve.

use serde::Serialize;
use termstruct_math::interpolation::{Interpolator, LinearInterpolator};

use crate::error::{CurveError, CurveResult};

/// A discount factor curve.
///
/// Pillar maturities (in years) aligned with the discount factors solved or
/// computed for them. Maturities are strictly increasing and every discount
/// factor is positive and finite. A curve is immutable once built; methods
/// replace it wholesale when they refit.
///
/// # Example
///
/// ```rust
/// use termstruct_curves::DiscountCurve;
///
/// let curve = DiscountCurve::new(vec![1.0, 2.0], vec![0.99, 0.97]).unwrap();
///
/// let zero_rates = curve.zero_rates();
/// assert!((zero_rates[0] - (-(0.99_f64).ln())).abs() < 1e-15);
///
/// let fwd = curve.forward_rate(1.0, 2.0).unwrap();
/// assert!((fwd - (0.99 / 0.97 - 1.0)).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscountCurve {
    maturities: Vec<f64>,
    discount_factors: Vec<f64>,
}

impl DiscountCurve {
    /// Creates a curve from aligned pillar arrays.
    ///
    /// # Errors
    ///
    /// Returns an error if the arrays are empty or of different lengths, if
    /// maturities are not positive and strictly increasing, or if any
    /// discount factor is non-positive or non-finite.
    pub fn new(maturities: Vec<f64>, discount_factors: Vec<f64>) -> CurveResult<Self> {
        if maturities.is_empty() {
            return Err(CurveError::EmptyInput);
        }
        if maturities.len() != discount_factors.len() {
            return Err(CurveError::invalid_value(format!(
                "maturities and discount factors must have same length: {} vs {}",
                maturities.len(),
                discount_factors.len()
            )));
        }

        for (i, &t) in maturities.iter().enumerate() {
            if !t.is_finite() || t <= 0.0 {
                return Err(CurveError::invalid_value(format!(
                    "maturity must be positive, got {t}"
                )));
            }
            if i > 0 && t <= maturities[i - 1] {
                return Err(CurveError::duplicate_maturity(t));
            }
        }

        if let Some(&df) = discount_factors
            .iter()
            .find(|df| !df.is_finite() || **df <= 0.0)
        {
            return Err(CurveError::invalid_value(format!(
                "discount factor must be positive, got {df}"
            )));
        }

        Ok(Self {
            maturities,
            discount_factors,
        })
    }

    /// Returns the pillar maturities.
    #[must_use]
    pub fn maturities(&self) -> &[f64] {
        &self.maturities
    }

    /// Returns the pillar discount factors.
    #[must_use]
    pub fn discount_factors(&self) -> &[f64] {
        &self.discount_factors
    }

    /// Returns the number of pillars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.maturities.len()
    }

    /// Always false: a curve has at least one pillar.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.maturities.is_empty()
    }

    /// Iterates over `(maturity, discount_factor)` pillars.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.maturities
            .iter()
            .copied()
            .zip(self.discount_factors.iter().copied())
    }

    /// Shortest pillar maturity.
    #[must_use]
    pub fn min_maturity(&self) -> f64 {
        self.maturities[0]
    }

    /// Longest pillar maturity.
    #[must_use]
    pub fn max_maturity(&self) -> f64 {
        self.maturities[self.maturities.len() - 1]
    }

    /// Continuously compounded zero rate at each pillar: `-ln(P) / T`.
    #[must_use]
    pub fn zero_rates(&self) -> Vec<f64> {
        self.points().map(|(t, df)| -df.ln() / t).collect()
    }

    /// Discount factor at `t`, linear in discount factors between pillars.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InterpolationDomain` outside the pillar range.
    pub fn discount_factor(&self, t: f64) -> CurveResult<f64> {
        let (min, max) = (self.min_maturity(), self.max_maturity());
        if !(min..=max).contains(&t) {
            return Err(CurveError::interpolation_domain(t, min, max));
        }
        if self.len() == 1 {
            return Ok(self.discount_factors[0]);
        }

        let interp =
            LinearInterpolator::new(self.maturities.clone(), self.discount_factors.clone())?;
        Ok(interp.interpolate(t)?)
    }

    /// Continuously compounded zero rate at `t`.
    pub fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        Ok(-self.discount_factor(t)?.ln() / t)
    }

    /// Simple forward rate between `t1` and `t2`: `(P1/P2 - 1) / (t2 - t1)`.
    ///
    /// Discount factors between pillars are linearly interpolated.
    ///
    /// # Errors
    ///
    /// Returns an error unless `t1 < t2` and both lie inside the pillar range.
    pub fn forward_rate(&self, t1: f64, t2: f64) -> CurveResult<f64> {
        if t1.partial_cmp(&t2) != Some(std::cmp::Ordering::Less) {
            return Err(CurveError::invalid_value(format!(
                "forward period needs t1 < t2, got [{t1}, {t2}]"
            )));
        }

        let p1 = self.discount_factor(t1)?;
        let p2 = self.discount_factor(t2)?;

        Ok((p1 / p2 - 1.0) / (t2 - t1))
    }

    /// Simple forward rates between consecutive pillars.
    ///
    /// Returns one rate per adjacent pillar pair, so a single-pillar curve
    /// yields an empty vector.
    #[must_use]
    pub fn forward_rates(&self) -> Vec<f64> {
        self.maturities
            .windows(2)
            .zip(self.discount_factors.windows(2))
            .map(|(t, p)| (p[0] / p[1] - 1.0) / (t[1] - t[0]))
            .collect()
    }
}
