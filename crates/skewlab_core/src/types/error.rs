//! Error types for contract construction.

use thiserror::Error;

/// Validation errors raised when constructing an [`OptionSpec`](crate::types::OptionSpec).
///
/// Each variant carries the offending value so callers can report exactly
/// what was rejected.
///
/// # Examples
/// ```
/// use skewlab_core::types::SpecError;
///
/// let err = SpecError::InvalidSpot { spot: -1.0 };
/// assert!(err.to_string().contains("spot"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SpecError {
    /// Spot price must be strictly positive.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The rejected spot value.
        spot: f64,
    },

    /// Strike price must be strictly positive.
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The rejected strike value.
        strike: f64,
    },

    /// Time to expiry must be non-negative.
    #[error("Invalid expiry: t = {expiry}")]
    InvalidExpiry {
        /// The rejected expiry value in years.
        expiry: f64,
    },

    /// Volatility must be non-negative.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The rejected volatility value.
        volatility: f64,
    },

    /// Dividend yield must be non-negative.
    #[error("Invalid dividend yield: q = {dividend_yield}")]
    InvalidDividendYield {
        /// The rejected dividend yield value.
        dividend_yield: f64,
    },

    /// A required builder field was never set.
    #[error("Missing required field '{name}'")]
    MissingField {
        /// Name of the unset field.
        name: &'static str,
    },
}
