//! Closed-form pricing and inversion for European options.
//!
//! This module provides:
//! - Black-Scholes-Merton prices and vega ([`BlackScholes`])
//! - Newton-Raphson implied-volatility inversion ([`ImpliedVolSolver`])
//! - Structured degenerate-input errors ([`AnalyticalError`])
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`** for the formula layer; the contract-driven
//!   entry points are `f64`
//! - **Numerical stability**: erfc-based normal CDF throughout
//! - **Failure as data**: non-convergence is an [`ImpliedVolResult`] state
//!
//! [`ImpliedVolResult`]: skewlab_core::types::ImpliedVolResult

pub mod black_scholes;
pub mod error;
pub mod implied_vol;

// Re-export main types at module level
pub use black_scholes::BlackScholes;
pub use error::AnalyticalError;
pub use implied_vol::ImpliedVolSolver;
