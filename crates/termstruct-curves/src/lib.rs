//! # Termstruct Curves
//!
//! Discount curve construction from market quotes.
//!
//! This crate provides:
//!
//! - **Instruments**: LIBOR deposits, futures and par swaps quoted in percent
//! - **Bootstrap**: Sequential construction of discount factors, pricing
//!   earlier swap coupons off a natural cubic spline
//! - **Curve Methods**: Bootstrap, Pseudoinverse, Lorimier and Nelson-Siegel
//!   behind the [`CurveMethod`] trait
//! - **Queries**: Zero rates, discount factors and forward rates
//! - **Repricing**: Validation of a bootstrapped curve against its inputs
//!
//! ## Quick Start
//!
//! ```rust
//! use termstruct_curves::prelude::*;
//!
//! let mut builder = CurveBuilder::new();
//! builder
//!     .add_instrument(MarketInstrument::libor(0.25, 0.15).unwrap())
//!     .add_instrument(MarketInstrument::future(0.5, 0.20).unwrap())
//!     .add_instrument(MarketInstrument::swap(2.0, 0.50).unwrap());
//!
//! let result = builder.fit_validated().unwrap();
//! assert!(result.is_valid());
//!
//! let zero_rates = builder.zero_rates().unwrap();
//! assert_eq!(zero_rates.len(), 3);
//! ```
//!
//! A builder, like every method, is meant for single-owner use: adding
//! instruments and fitting both need `&mut self`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]

pub mod bootstrap;
pub mod builder;
pub mod config;
pub mod curves;
pub mod error;
pub mod instruments;
pub mod methods;
pub mod repricing;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bootstrap::bootstrap_curve;
    pub use crate::builder::{BootstrapMethod, CurveBuilder};
    pub use crate::config::{CurveConfig, DomainPolicy, PaymentRounding};
    pub use crate::curves::DiscountCurve;
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::instruments::{InstrumentType, MarketInstrument};
    pub use crate::methods::{
        CurveMethod, LorimierMethod, NelsonSiegelMethod, PseudoinverseMethod, TermStructureMethod,
    };
    pub use crate::repricing::{BootstrapResult, RepricingCheck, RepricingReport};
}

pub use builder::CurveBuilder;
pub use config::CurveConfig;
pub use curves::DiscountCurve;
pub use error::{CurveError, CurveResult};
pub use instruments::{InstrumentType, MarketInstrument};
pub use methods::CurveMethod;
