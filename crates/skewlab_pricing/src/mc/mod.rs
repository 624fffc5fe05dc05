//! Monte Carlo simulation of terminal option payoffs.
//!
//! This module provides:
//! - Validated run configuration ([`SimulationConfig`])
//! - Schedule building and path evolution ([`paths`])
//! - The parallel engine ([`Simulator`]) and its output ([`SimulationRun`])
//! - Payoff statistics ([`PayoffSummary`])

pub mod config;
pub mod error;
pub mod paths;
pub mod simulator;
pub mod summary;

// Re-export main types at module level
pub use config::{SimulationConfig, SimulationConfigBuilder, DEFAULT_TIME_STEP_MS};
pub use error::{SimulationError, MAX_SIMS};
pub use simulator::{SimulationRun, Simulator};
pub use summary::PayoffSummary;
