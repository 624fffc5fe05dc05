//! Error types for the Monte Carlo simulation engine.

use thiserror::Error;

/// Maximum number of simulation paths allowed.
pub const MAX_SIMS: usize = 10_000_000;

/// Errors raised by simulation configuration and runs.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimulationError {
    /// Simulation count outside [1, 10_000_000].
    #[error("Invalid simulation count {sims}: must be in range [1, {MAX_SIMS}]")]
    InvalidSimCount {
        /// The rejected count.
        sims: usize,
    },

    /// Non-positive step length.
    #[error("Invalid time step: {time_step_ms} ms")]
    InvalidTimeStep {
        /// The rejected step length in milliseconds.
        time_step_ms: i64,
    },

    /// The expiration does not leave room for a single step after the
    /// valuation instant.
    #[error("Expiration {expiration_ms} is not ahead of valuation {valuation_ms}")]
    ExpiryNotAhead {
        /// Expiration in milliseconds since the epoch.
        expiration_ms: i64,
        /// Valuation instant in milliseconds since the epoch.
        valuation_ms: i64,
    },

    /// A market parameter outside the model's domain (spot ≤ 0, vol ≤ 0).
    #[error("Degenerate input: {name} = {value}")]
    DegenerateInput {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A required configuration field was never set.
    #[error("Missing required field: {name}")]
    MissingField {
        /// Name of the unset field.
        name: &'static str,
    },
}
