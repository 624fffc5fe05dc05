//! CLI error type and result alias.

use thiserror::Error;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A referenced input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// A command-line argument failed validation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Filesystem I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON input.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed configuration file.
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    /// Invalid contract description.
    #[error(transparent)]
    Spec(#[from] skewlab_core::types::SpecError),

    /// Closed-form pricing failure.
    #[error(transparent)]
    Analytical(#[from] skewlab_models::analytical::AnalyticalError),

    /// Lattice pricing failure.
    #[error(transparent)]
    Lattice(#[from] skewlab_models::lattice::LatticeError),

    /// Simulation failure.
    #[error(transparent)]
    Simulation(#[from] skewlab_pricing::mc::SimulationError),

    /// Surface construction or smile-fit failure.
    #[error(transparent)]
    Surface(#[from] skewlab_core::market_data::SurfaceError),
}
