//! Interpolation methods for term structure construction.
//!
//! # Available Methods
//!
//! - [`CubicSpline`]: Natural cubic spline (zero second derivative at both ends)
//! - [`LinearInterpolator`]: Piecewise linear interpolation
//! - [`NelsonSiegel`]: Nelson-Siegel parametric yield function
//!
//! Point interpolators reject queries outside the knot range unless
//! extrapolation was enabled at construction. The Nelson-Siegel model is
//! defined for every maturity and is evaluated directly.

mod cubic_spline;
mod linear;
mod parametric;

pub use cubic_spline::CubicSpline;
pub use linear::LinearInterpolator;
pub use parametric::NelsonSiegel;

use crate::error::MathResult;

/// Trait for interpolation methods.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns true if extrapolation is allowed.
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

/// Finds the index i such that xs[i] <= x < xs[i+1], pinned to the
/// first and last segment outside the knot range.
pub(crate) fn find_segment(xs: &[f64], x: f64) -> usize {
    let last = xs.len() - 2;
    match xs.binary_search_by(|knot| knot.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal)) {
        Ok(i) => i.min(last),
        Err(i) => i.saturating_sub(1).min(last),
    }
}
