//! # Termstruct Math
//!
//! Numerical building blocks for the Termstruct curve library.
//!
//! This crate provides:
//!
//! - **Interpolation**: Natural cubic spline and linear interpolation with an
//!   explicit extrapolation toggle
//! - **Parametric Models**: The Nelson-Siegel yield function
//!
//! All routines operate on `f64` and fail through [`MathError`] rather than
//! panicking on bad input.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod interpolation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{CubicSpline, Interpolator, LinearInterpolator, NelsonSiegel};
}

pub use error::{MathError, MathResult};
