//! Linear interpolation.

use crate::error::{validate_grid, MathError, MathResult};
use crate::interpolation::{find_segment, Interpolator};

/// Linear interpolation between data points.
///
/// Used to read discount factors between curve pillars when computing
/// forward rates.
///
/// # Example
///
/// ```rust
/// use termstruct_math::interpolation::{LinearInterpolator, Interpolator};
///
/// let xs = vec![0.0, 1.0, 2.0, 3.0];
/// let ys = vec![0.0, 1.0, 4.0, 9.0];
///
/// let interp = LinearInterpolator::new(xs, ys).unwrap();
/// let y = interp.interpolate(1.5).unwrap();
/// assert!((y - 2.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    allow_extrapolation: bool,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, if lengths differ,
    /// or if `xs` is not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_grid(&xs, &ys, 2)?;

        Ok(Self {
            xs,
            ys,
            allow_extrapolation: false,
        })
    }

    /// Enables extrapolation beyond the data range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    fn segment(&self, x: f64) -> MathResult<(f64, f64, f64, f64)> {
        if !self.allow_extrapolation && !self.in_range(x) {
            return Err(MathError::extrapolation_not_allowed(
                x,
                self.min_x(),
                self.max_x(),
            ));
        }

        let i = find_segment(&self.xs, x);
        Ok((self.xs[i], self.xs[i + 1], self.ys[i], self.ys[i + 1]))
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        let (x0, x1, y0, y1) = self.segment(x)?;
        let t = (x - x0) / (x1 - x0);
        Ok(y0 + t * (y1 - y0))
    }

    fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}
