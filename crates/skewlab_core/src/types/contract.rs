//! Option contract description.
//!
//! [`OptionSpec`] is the immutable value type every pricer in the workspace
//! consumes: one spec per pricing request, discarded after use. Validation
//! happens at construction so the numerical code downstream can assume
//! well-formed inputs.

use super::error::SpecError;

/// Side of an option contract.
///
/// # Examples
/// ```
/// use skewlab_core::types::OptionKind;
///
/// assert!(OptionKind::Call.is_call());
/// assert_eq!(OptionKind::Call.intrinsic(110.0, 100.0), 10.0);
/// assert_eq!(OptionKind::Put.intrinsic(110.0, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionKind {
    /// Right to buy the underlying at the strike.
    Call,
    /// Right to sell the underlying at the strike.
    Put,
}

impl OptionKind {
    /// Returns `true` for calls.
    #[inline]
    pub fn is_call(self) -> bool {
        matches!(self, OptionKind::Call)
    }

    /// Exercise value at a given underlying price.
    ///
    /// `max(S − K, 0)` for calls, `max(K − S, 0)` for puts.
    #[inline]
    pub fn intrinsic(self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => (spot - strike).max(0.0),
            OptionKind::Put => (strike - spot).max(0.0),
        }
    }

    /// Parses the single-letter instrument suffix used by exchange
    /// instrument names (`"C"`/`"c"` for call, `"P"`/`"p"` for put).
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "C" | "c" => Some(OptionKind::Call),
            "P" | "p" => Some(OptionKind::Put),
            _ => None,
        }
    }
}

/// A fully specified European option pricing request.
///
/// Immutable once built. All time quantities are year fractions; see
/// [`time`](crate::types::time) for the millisecond boundary conversion.
///
/// # Examples
/// ```
/// use skewlab_core::types::{OptionKind, OptionSpec};
///
/// let spec = OptionSpec::builder()
///     .spot(100.0)
///     .strike(100.0)
///     .expiry(1.0)
///     .volatility(0.2)
///     .rate(0.05)
///     .kind(OptionKind::Call)
///     .build()
///     .unwrap();
///
/// assert_eq!(spec.dividend_yield(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionSpec {
    spot: f64,
    strike: f64,
    expiry: f64,
    volatility: f64,
    rate: f64,
    dividend_yield: f64,
    kind: OptionKind,
}

impl OptionSpec {
    /// Creates a builder with the dividend yield defaulted to zero.
    #[inline]
    pub fn builder() -> OptionSpecBuilder {
        OptionSpecBuilder::default()
    }

    /// Current underlying price (S).
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Strike price (K).
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Time to expiry in years (t).
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Annualised volatility (σ).
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Annualised risk-free rate (r). May be negative.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Constant continuous dividend yield (q). Zero unless set.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Call or put.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Returns a copy of this spec with a different volatility.
    ///
    /// Used by the implied-volatility solver, which re-prices the same
    /// contract at successive volatility iterates.
    ///
    /// # Errors
    /// `SpecError::InvalidVolatility` if `volatility` is negative.
    pub fn with_volatility(&self, volatility: f64) -> Result<Self, SpecError> {
        if !volatility.is_finite() || volatility < 0.0 {
            return Err(SpecError::InvalidVolatility { volatility });
        }
        Ok(Self {
            volatility,
            ..*self
        })
    }

    /// Exercise value of this contract at its own spot.
    #[inline]
    pub fn intrinsic(&self) -> f64 {
        self.kind.intrinsic(self.spot, self.strike)
    }
}

/// Builder for [`OptionSpec`] with validation at build time.
///
/// # Examples
/// ```
/// use skewlab_core::types::{OptionKind, OptionSpec};
///
/// // Negative spot is rejected
/// let result = OptionSpec::builder()
///     .spot(-100.0)
///     .strike(100.0)
///     .expiry(1.0)
///     .volatility(0.2)
///     .rate(0.05)
///     .kind(OptionKind::Call)
///     .build();
/// assert!(result.is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct OptionSpecBuilder {
    spot: Option<f64>,
    strike: Option<f64>,
    expiry: Option<f64>,
    volatility: Option<f64>,
    rate: Option<f64>,
    dividend_yield: Option<f64>,
    kind: Option<OptionKind>,
}

impl OptionSpecBuilder {
    /// Sets the spot price (must be > 0).
    #[inline]
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets the strike price (must be > 0).
    #[inline]
    pub fn strike(mut self, strike: f64) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Sets the time to expiry in years (must be >= 0).
    #[inline]
    pub fn expiry(mut self, expiry: f64) -> Self {
        self.expiry = Some(expiry);
        self
    }

    /// Sets the annualised volatility (must be >= 0).
    #[inline]
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Sets the annualised risk-free rate.
    #[inline]
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Sets the continuous dividend yield (must be >= 0; defaults to 0).
    #[inline]
    pub fn dividend_yield(mut self, dividend_yield: f64) -> Self {
        self.dividend_yield = Some(dividend_yield);
        self
    }

    /// Sets the contract side.
    #[inline]
    pub fn kind(mut self, kind: OptionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Validates and builds the spec.
    ///
    /// # Errors
    /// - `SpecError::MissingField` when a required field was never set
    /// - `SpecError::InvalidSpot` when spot <= 0 or non-finite
    /// - `SpecError::InvalidStrike` when strike <= 0 or non-finite
    /// - `SpecError::InvalidExpiry` when expiry < 0 or non-finite
    /// - `SpecError::InvalidVolatility` when volatility < 0 or non-finite
    /// - `SpecError::InvalidDividendYield` when yield < 0 or non-finite
    pub fn build(self) -> Result<OptionSpec, SpecError> {
        let spot = self.spot.ok_or(SpecError::MissingField { name: "spot" })?;
        let strike = self
            .strike
            .ok_or(SpecError::MissingField { name: "strike" })?;
        let expiry = self
            .expiry
            .ok_or(SpecError::MissingField { name: "expiry" })?;
        let volatility = self
            .volatility
            .ok_or(SpecError::MissingField { name: "volatility" })?;
        let rate = self.rate.ok_or(SpecError::MissingField { name: "rate" })?;
        let kind = self.kind.ok_or(SpecError::MissingField { name: "kind" })?;
        let dividend_yield = self.dividend_yield.unwrap_or(0.0);

        if !spot.is_finite() || spot <= 0.0 {
            return Err(SpecError::InvalidSpot { spot });
        }
        if !strike.is_finite() || strike <= 0.0 {
            return Err(SpecError::InvalidStrike { strike });
        }
        if !expiry.is_finite() || expiry < 0.0 {
            return Err(SpecError::InvalidExpiry { expiry });
        }
        if !volatility.is_finite() || volatility < 0.0 {
            return Err(SpecError::InvalidVolatility { volatility });
        }
        if !dividend_yield.is_finite() || dividend_yield < 0.0 {
            return Err(SpecError::InvalidDividendYield { dividend_yield });
        }
        if !rate.is_finite() {
            return Err(SpecError::MissingField { name: "rate" });
        }

        Ok(OptionSpec {
            spot,
            strike,
            expiry,
            volatility,
            rate,
            dividend_yield,
            kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atm_call() -> OptionSpec {
        OptionSpec::builder()
            .spot(100.0)
            .strike(100.0)
            .expiry(1.0)
            .volatility(0.2)
            .rate(0.05)
            .kind(OptionKind::Call)
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_valid() {
        let spec = atm_call();
        assert_eq!(spec.spot(), 100.0);
        assert_eq!(spec.strike(), 100.0);
        assert_eq!(spec.expiry(), 1.0);
        assert_eq!(spec.volatility(), 0.2);
        assert_eq!(spec.rate(), 0.05);
        assert_eq!(spec.dividend_yield(), 0.0);
        assert!(spec.kind().is_call());
    }

    #[test]
    fn test_build_missing_field() {
        let result = OptionSpec::builder().spot(100.0).build();
        assert!(matches!(
            result,
            Err(SpecError::MissingField { name: "strike" })
        ));
    }

    #[test]
    fn test_build_invalid_spot() {
        let result = OptionSpec::builder()
            .spot(0.0)
            .strike(100.0)
            .expiry(1.0)
            .volatility(0.2)
            .rate(0.05)
            .kind(OptionKind::Call)
            .build();
        assert!(matches!(result, Err(SpecError::InvalidSpot { .. })));
    }

    #[test]
    fn test_build_negative_rate_allowed() {
        let spec = OptionSpec::builder()
            .spot(100.0)
            .strike(100.0)
            .expiry(1.0)
            .volatility(0.2)
            .rate(-0.01)
            .kind(OptionKind::Put)
            .build();
        assert!(spec.is_ok());
    }

    #[test]
    fn test_build_zero_expiry_allowed() {
        let spec = OptionSpec::builder()
            .spot(100.0)
            .strike(100.0)
            .expiry(0.0)
            .volatility(0.2)
            .rate(0.05)
            .kind(OptionKind::Call)
            .build();
        assert!(spec.is_ok());
    }

    #[test]
    fn test_build_negative_volatility_rejected() {
        let result = OptionSpec::builder()
            .spot(100.0)
            .strike(100.0)
            .expiry(1.0)
            .volatility(-0.2)
            .rate(0.05)
            .kind(OptionKind::Call)
            .build();
        assert!(matches!(result, Err(SpecError::InvalidVolatility { .. })));
    }

    #[test]
    fn test_with_volatility() {
        let spec = atm_call();
        let bumped = spec.with_volatility(0.3).unwrap();
        assert_eq!(bumped.volatility(), 0.3);
        assert_eq!(bumped.spot(), spec.spot());

        assert!(spec.with_volatility(-0.1).is_err());
        assert!(spec.with_volatility(f64::NAN).is_err());
    }

    #[test]
    fn test_intrinsic() {
        assert_eq!(OptionKind::Call.intrinsic(120.0, 100.0), 20.0);
        assert_eq!(OptionKind::Call.intrinsic(80.0, 100.0), 0.0);
        assert_eq!(OptionKind::Put.intrinsic(80.0, 100.0), 20.0);
        assert_eq!(OptionKind::Put.intrinsic(120.0, 100.0), 0.0);
    }

    #[test]
    fn test_from_flag() {
        assert_eq!(OptionKind::from_flag("C"), Some(OptionKind::Call));
        assert_eq!(OptionKind::from_flag("p"), Some(OptionKind::Put));
        assert_eq!(OptionKind::from_flag("x"), None);
    }
}
