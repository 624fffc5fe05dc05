//! # Skewlab Pricing (L3: Simulation Engine)
//!
//! Monte Carlo simulation of terminal option payoffs.
//!
//! This crate provides:
//! - Seeded, reproducible random shock generation (`rng`)
//! - Discrete geometric-Brownian path evolution on a millisecond
//!   schedule (`mc`)
//! - Parallel path evaluation with per-path RNG derivation
//! - Payoff summary statistics with a closed-form reference price
//!
//! ## Design Principles
//!
//! - **Reproducibility first**: a run is fully determined by its seed
//! - **Parallel by default**: paths are embarrassingly parallel and
//!   evaluated through `rayon`
//! - **Builder pattern** for simulation configuration with validation

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;
