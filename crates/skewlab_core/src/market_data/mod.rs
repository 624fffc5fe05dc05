//! Market data structures for the options analytics kernel.
//!
//! # Components
//!
//! - [`quote`]: chain-snapshot quote records ([`OptionQuote`], [`QuoteSide`])
//! - [`surface`]: the sparse implied-vol surface ([`VolSurface`])
//! - [`smile`]: per-expiration fitted smiles ([`FittedSmile`])
//! - [`error`]: surface error types ([`SurfaceError`])
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use skewlab_core::market_data::{VolSurface, VolSurfacePoint};
//!
//! let expiration = NaiveDate::from_ymd_opt(2021, 6, 25).unwrap();
//! let points: Vec<VolSurfacePoint> = [
//!     (30_000.0, 0.95),
//!     (35_000.0, 0.84),
//!     (40_000.0, 0.78),
//!     (45_000.0, 0.80),
//!     (50_000.0, 0.88),
//! ]
//! .iter()
//! .map(|&(strike, implied_vol)| VolSurfacePoint { expiration, strike, implied_vol })
//! .collect();
//!
//! let surface = VolSurface::from_points(&points);
//! let smile = surface.fit_smile(expiration).unwrap();
//! assert!((smile.volatility(42_500.0) - 0.78).abs() < 0.05);
//! ```

pub mod error;
pub mod quote;
pub mod smile;
pub mod surface;

// Re-export commonly used types
pub use error::SurfaceError;
pub use quote::{OptionQuote, QuoteSide};
pub use smile::FittedSmile;
pub use surface::{VolSurface, VolSurfacePoint};
