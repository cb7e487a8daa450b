//! Pseudoinverse curve method.
//!
//! The cash-flow-matrix pseudoinverse solve is not implemented: the method
//! adopts a bootstrapped curve over the same instruments, either one the
//! caller already has or a fresh bootstrap run internally.

use tracing::info;

use crate::builder::CurveBuilder;
use crate::config::CurveConfig;
use crate::curves::DiscountCurve;
use crate::error::CurveResult;
use crate::instruments::MarketInstrument;
use crate::methods::CurveMethod;

/// Pseudoinverse method, delegating to the bootstrap.
#[derive(Debug, Clone, Default)]
pub struct PseudoinverseMethod {
    instruments: Vec<MarketInstrument>,
    config: CurveConfig,
    curve: Option<DiscountCurve>,
}

impl PseudoinverseMethod {
    /// Creates the method over `instruments`.
    #[must_use]
    pub fn new(instruments: Vec<MarketInstrument>) -> Self {
        Self {
            instruments,
            ..Self::default()
        }
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

    /// Appends an instrument.
    pub fn add_instrument(&mut self, instrument: MarketInstrument) -> &mut Self {
        self.instruments.push(instrument);
        self
    }

    /// Returns the instruments in insertion order.
    #[must_use]
    pub fn instruments(&self) -> &[MarketInstrument] {
        &self.instruments
    }

    /// Adopts `bootstrapped` verbatim, or bootstraps the instruments when
    /// `None`.
    ///
    /// The internal bootstrap runs quietly regardless of the verbose flag.
    ///
    /// # Errors
    ///
    /// Returns any bootstrap error. The previous curve is unchanged on error.
    pub fn fit_with(&mut self, bootstrapped: Option<&DiscountCurve>) -> CurveResult<&DiscountCurve> {
        let curve = match bootstrapped {
            Some(curve) => curve.clone(),
            None => {
                let mut bootstrap = CurveBuilder::new()
                    .with_config(self.config.clone())
                    .verbose(false);
                bootstrap.add_instruments(self.instruments.iter().cloned());
                bootstrap.fit()?.clone()
            }
        };

        if self.config.verbose {
            info!("Pseudoinverse: {} dates", curve.len());
        }

        Ok(self.curve.insert(curve))
    }
}

impl CurveMethod for PseudoinverseMethod {
    fn name(&self) -> &'static str {
        "Pseudoinverse"
    }

    fn fit(&mut self) -> CurveResult<&DiscountCurve> {
        self.fit_with(None)
    }

    fn curve(&self) -> Option<&DiscountCurve> {
        self.curve.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CurveError;

    fn instruments() -> Vec<MarketInstrument> {
        vec![
            MarketInstrument::libor(0.5, 0.2).unwrap(),
            MarketInstrument::future(1.0, 0.3).unwrap(),
            MarketInstrument::swap(3.0, 0.8).unwrap(),
        ]
    }

    #[test]
    fn test_fit_matches_bootstrap() {
        let mut bootstrap = CurveBuilder::new();
        bootstrap.add_instruments(instruments());
        let expected = bootstrap.fit().unwrap().clone();

        let mut pseudo = PseudoinverseMethod::new(instruments());
        assert_eq!(pseudo.fit().unwrap(), &expected);
    }

    #[test]
    fn test_adopts_given_curve() {
        let given = DiscountCurve::new(vec![1.0, 2.0], vec![0.99, 0.97]).unwrap();

        // The instruments are not consulted when a curve is supplied.
        let mut pseudo = PseudoinverseMethod::default();
        assert_eq!(pseudo.fit_with(Some(&given)).unwrap(), &given);
        assert_eq!(pseudo.curve(), Some(&given));
    }

    #[test]
    fn test_errors_propagate() {
        let mut pseudo = PseudoinverseMethod::default();
        assert_eq!(pseudo.fit().unwrap_err(), CurveError::EmptyInput);

        pseudo.add_instrument(MarketInstrument::future(0.5, 0.1).unwrap());
        assert!(matches!(
            pseudo.fit(),
            Err(CurveError::PrecedingPointRequired { .. })
        ));
        assert!(pseudo.curve().is_none());
    }
}
