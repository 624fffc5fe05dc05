//! Error types for market data operations.

use crate::math::FitError;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by volatility surface construction and smile fitting.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SurfaceError {
    /// A smile row has too few distinct strikes for the polynomial degree.
    #[error("Insufficient points for smile fit: got {got}, need {need}")]
    InsufficientPoints {
        /// Distinct strikes with a quoted volatility on the row.
        got: usize,
        /// Minimum required for the fit.
        need: usize,
    },

    /// The fit produced non-finite output or the system was singular.
    #[error("Ill-conditioned smile fit: {0}")]
    IllConditioned(String),

    /// The requested expiration has no row on the surface.
    #[error("Unknown expiration: {expiration}")]
    UnknownExpiration {
        /// The expiration that was requested.
        expiration: NaiveDate,
    },

    /// The surface row exists but every cell is empty.
    #[error("No quoted points for expiration {expiration}")]
    NoPoints {
        /// The affected expiration.
        expiration: NaiveDate,
    },
}

impl From<FitError> for SurfaceError {
    fn from(err: FitError) -> Self {
        match err {
            FitError::InsufficientPoints { got, need } => {
                SurfaceError::InsufficientPoints { got, need }
            }
            FitError::MismatchedLengths { xs, ys } => SurfaceError::IllConditioned(format!(
                "mismatched fit inputs: {} abscissae vs {} ordinates",
                xs, ys
            )),
            FitError::IllConditioned(msg) => SurfaceError::IllConditioned(msg),
        }
    }
}
