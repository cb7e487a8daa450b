//! Curve bootstrap algorithm.
//!
//! The bootstrap is a forward substitution: instruments are sorted by
//! maturity and each one contributes the discount factor that reprices it,
//! given the discount factors already solved for shorter maturities.
//!
//! | Instrument | Discount factor |
//! |------------|-----------------|
//! | LIBOR  | `P = 1 / (1 + T·r)` |
//! | Future | `P = P0 / (1 + (T - T0)·r)` |
//! | Swap   | `P = (1 - R·Σδᵢ·P(tᵢ)) / (1 + R·δₙ)` |
//!
//! Swap coupons before the final payment are discounted off a natural cubic
//! spline through the strictly shorter pillars, extrapolated where needed.
//!
//! # Example
//!
//! ```rust
//! use termstruct_curves::bootstrap::bootstrap_curve;
//! use termstruct_curves::config::CurveConfig;
//! use termstruct_curves::instruments::MarketInstrument;
//!
//! let instruments = vec![
//!     MarketInstrument::libor(0.25, 0.15).unwrap(),
//!     MarketInstrument::swap(2.0, 0.50).unwrap(),
//! ];
//!
//! let curve = bootstrap_curve(&instruments, &CurveConfig::default()).unwrap();
//! assert_eq!(curve.maturities(), &[0.25, 2.0]);
//! ```

pub(crate) mod schedule;
mod sequential;

pub use sequential::bootstrap_curve;
pub(crate) use sequential::{sorted_by_maturity, SolvedPillars};
