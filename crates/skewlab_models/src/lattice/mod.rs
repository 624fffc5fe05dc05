//! Lattice pricing for European options.
//!
//! This module provides:
//! - A recombining Cox-Ross-Rubinstein tree ([`BinomialTree`])
//! - Lattice-specific error types ([`LatticeError`])

pub mod binomial;
pub mod error;

// Re-export main types at module level
pub use binomial::{BinomialTree, PRICE_DECIMALS};
pub use error::LatticeError;
