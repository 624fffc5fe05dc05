//! # Skewlab Models (L2: Pricing Models)
//!
//! Closed-form, lattice, and quote-chain analytics.
//!
//! This crate provides:
//! - Black-Scholes-Merton pricing with vega (`analytical`)
//! - Newton-Raphson implied-volatility inversion (`analytical`)
//! - A recombining binomial tree for European options (`lattice`)
//! - Chain-to-surface mapping and smile repricing (`chain`)
//!
//! ## Design Principles
//!
//! - **Failure as data**: non-convergence of the vol solver is a result
//!   state, not an error
//! - **Typed degenerate inputs**: vol ≤ 0 or expiry ≤ 0 is rejected up
//!   front with a structured error, never a NaN leak
//! - **Builder pattern** for contract construction with validation

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod chain;
pub mod lattice;
