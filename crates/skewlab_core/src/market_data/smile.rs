//! Fitted volatility smile for a single expiration.

use crate::math::Polynomial;
use chrono::NaiveDate;

/// A degree-3 strike→vol polynomial fitted to one expiration row.
///
/// Owned by the caller and rebuilt per request; the surface keeps no fit
/// cache. Evaluation outside the fitted strike range extrapolates the
/// polynomial, which callers should treat with the usual suspicion.
#[derive(Debug, Clone)]
pub struct FittedSmile {
    expiration: NaiveDate,
    poly: Polynomial,
    strike_min: f64,
    strike_max: f64,
}

impl FittedSmile {
    /// Wraps a fitted polynomial with its expiration and strike range.
    pub(crate) fn new(
        expiration: NaiveDate,
        poly: Polynomial,
        strike_min: f64,
        strike_max: f64,
    ) -> Self {
        Self {
            expiration,
            poly,
            strike_min,
            strike_max,
        }
    }

    /// The expiration this smile was fitted for.
    #[inline]
    pub fn expiration(&self) -> NaiveDate {
        self.expiration
    }

    /// Lowest and highest strike that entered the fit.
    #[inline]
    pub fn strike_range(&self) -> (f64, f64) {
        (self.strike_min, self.strike_max)
    }

    /// Whether `strike` lies inside the fitted range.
    #[inline]
    pub fn covers(&self, strike: f64) -> bool {
        strike >= self.strike_min && strike <= self.strike_max
    }

    /// Evaluates the fitted implied volatility (decimal) at `strike`.
    #[inline]
    pub fn volatility(&self, strike: f64) -> f64 {
        self.poly.value(strike)
    }
}
