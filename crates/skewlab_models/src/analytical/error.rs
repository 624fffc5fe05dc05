//! Error types for analytical pricing operations.

use thiserror::Error;

/// Analytical pricing errors.
///
/// # Examples
/// ```
/// use skewlab_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::DegenerateInput { name: "volatility", value: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// An input outside the domain of the closed form (vol ≤ 0, expiry ≤ 0).
    #[error("Degenerate input: {name} = {value}")]
    DegenerateInput {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {message}")]
    NumericalInstability {
        /// Description of the numerical issue.
        message: String,
    },
}
