//! # skewlab_core: Foundation of the skewlab options analytics kernel
//!
//! Bottom layer of the workspace, providing:
//! - Contract and result types: `OptionSpec`, `OptionKind`, `PricingResult`,
//!   `ImpliedVolResult` (`types`)
//! - Millisecond-to-year-fraction time conversion on a fixed 365.2425-day
//!   year (`types::time`)
//! - Standard normal distribution functions (`math::distributions`)
//! - Degree-3 polynomial least-squares fitting (`math::polyfit`)
//! - Root-finder configuration (`math::solver`)
//! - Volatility surface grid and fitted smile (`market_data`)
//!
//! ## Zero Dependency Principle
//!
//! This layer has no dependencies on other skewlab_* crates, with minimal
//! external dependencies:
//! - num-traits: traits for generic numerical computation
//! - chrono: date arithmetic for expiration handling
//! - thiserror: structured error types
//! - serde: serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use skewlab_core::types::{OptionKind, OptionSpec};
//! use skewlab_core::types::time::year_fraction;
//! use skewlab_core::math::distributions::norm_cdf;
//!
//! let spec = OptionSpec::builder()
//!     .spot(100.0)
//!     .strike(105.0)
//!     .expiry(0.5)
//!     .volatility(0.25)
//!     .rate(0.03)
//!     .kind(OptionKind::Call)
//!     .build()
//!     .unwrap();
//! assert_eq!(spec.strike(), 105.0);
//!
//! // One hour expressed as a year fraction
//! let t = year_fraction(3_600_000);
//! assert!(t > 0.0 && t < 1e-3);
//!
//! let p = norm_cdf(0.0_f64);
//! assert!((p - 0.5).abs() < 1e-7);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod types;
