//! Error types for lattice pricing.

use thiserror::Error;

/// Errors raised by binomial-tree construction and induction.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LatticeError {
    /// The tree needs at least one step.
    #[error("Invalid step count: {steps}")]
    InvalidStepCount {
        /// The rejected step count.
        steps: usize,
    },

    /// An input outside the domain of the lattice (vol ≤ 0, expiry ≤ 0).
    #[error("Degenerate input: {name} = {value}")]
    DegenerateInput {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Adjacent levels lost their recombining shape during induction.
    #[error("Recombination failure at level {level}: {got} nodes, expected {expected}")]
    Recombination {
        /// Level index counted from the root.
        level: usize,
        /// Node count actually present.
        got: usize,
        /// Node count the induction step requires.
        expected: usize,
    },
}
