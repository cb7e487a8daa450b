//! Market instruments quoted for curve construction.
//!
//! An instrument is an immutable record of what was observed in the market:
//! its type, its maturity in years and its quote in percentage points. Quotes
//! are stored as quoted (0.15 means 0.15%) and converted with
//! [`MarketInstrument::rate`] when the bootstrap consumes them.
//!
//! ```rust
//! use termstruct_curves::instruments::{InstrumentType, MarketInstrument};
//!
//! let libor_3m = MarketInstrument::libor(0.25, 0.15).unwrap();
//! assert_eq!(libor_3m.instrument_type(), InstrumentType::Libor);
//! assert!((libor_3m.rate() - 0.0015).abs() < 1e-15);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// Longest accepted maturity in years. Swap schedules hold one payment per
/// year, so this also bounds their length.
pub const MAX_MATURITY: f64 = 100.0;

/// Instrument type for categorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InstrumentType {
    /// Money market (LIBOR) deposit, simple compounding from today.
    Libor,
    /// Rate future covering the period since the previous pillar.
    Future,
    /// Par interest rate swap with annual fixed payments.
    Swap,
    /// Government bond. Recognized but not bootstrappable.
    Bond,
}

impl fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Libor => write!(f, "LIBOR"),
            Self::Future => write!(f, "Future"),
            Self::Swap => write!(f, "Swap"),
            Self::Bond => write!(f, "Bond"),
        }
    }
}

/// A quoted market instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawInstrument")]
pub struct MarketInstrument {
    instrument_type: InstrumentType,
    maturity: f64,
    quote: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl MarketInstrument {
    /// Creates a new instrument.
    ///
    /// # Arguments
    ///
    /// * `instrument_type` - Kind of instrument
    /// * `maturity` - Maturity in years, in `(0, MAX_MATURITY]`
    /// * `quote` - Quote in percentage points (0.15 means 0.15%)
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidInstrument` for a non-positive, non-finite
    /// or longer than [`MAX_MATURITY`] maturity, or a non-finite quote.
    pub fn new(instrument_type: InstrumentType, maturity: f64, quote: f64) -> CurveResult<Self> {
        if !maturity.is_finite() || maturity <= 0.0 {
            return Err(CurveError::invalid_instrument(format!(
                "{instrument_type} maturity must be positive, got {maturity}"
            )));
        }
        if maturity > MAX_MATURITY {
            return Err(CurveError::invalid_instrument(format!(
                "{instrument_type} maturity {maturity} exceeds {MAX_MATURITY} years"
            )));
        }
        if !quote.is_finite() {
            return Err(CurveError::invalid_instrument(format!(
                "{instrument_type} quote must be finite, got {quote}"
            )));
        }

        Ok(Self {
            instrument_type,
            maturity,
            quote,
            label: None,
        })
    }

    /// Creates a LIBOR deposit.
    pub fn libor(maturity: f64, quote: f64) -> CurveResult<Self> {
        Self::new(InstrumentType::Libor, maturity, quote)
    }

    /// Creates a rate future.
    pub fn future(maturity: f64, quote: f64) -> CurveResult<Self> {
        Self::new(InstrumentType::Future, maturity, quote)
    }

    /// Creates a par swap.
    pub fn swap(maturity: f64, quote: f64) -> CurveResult<Self> {
        Self::new(InstrumentType::Swap, maturity, quote)
    }

    /// Creates a bond.
    pub fn bond(maturity: f64, quote: f64) -> CurveResult<Self> {
        Self::new(InstrumentType::Bond, maturity, quote)
    }

    /// Attaches a display label (e.g. "3M", "EDZ5").
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the instrument type.
    #[must_use]
    pub fn instrument_type(&self) -> InstrumentType {
        self.instrument_type
    }

    /// Returns the maturity in years.
    #[must_use]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Returns the quote in percentage points.
    #[must_use]
    pub fn quote(&self) -> f64 {
        self.quote
    }

    /// Returns the quote as a decimal rate (`quote / 100`).
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.quote / 100.0
    }

    /// Returns the label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Human-readable identifier used in reports and logs.
    #[must_use]
    pub fn description(&self) -> String {
        match &self.label {
            Some(label) => format!("{} {} {:.4}%", self.instrument_type, label, self.quote),
            None => format!(
                "{} {:.4}Y {:.4}%",
                self.instrument_type, self.maturity, self.quote
            ),
        }
    }
}

impl fmt::Display for MarketInstrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Unvalidated wire form; deserialization goes through [`MarketInstrument::new`].
#[derive(Deserialize)]
struct RawInstrument {
    instrument_type: InstrumentType,
    maturity: f64,
    quote: f64,
    #[serde(default)]
    label: Option<String>,
}

impl TryFrom<RawInstrument> for MarketInstrument {
    type Error = CurveError;

    fn try_from(raw: RawInstrument) -> CurveResult<Self> {
        let inst = Self::new(raw.instrument_type, raw.maturity, raw.quote)?;
        Ok(match raw.label {
            Some(label) => inst.with_label(label),
            None => inst,
        })
    }
}
