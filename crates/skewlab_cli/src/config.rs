//! CLI configuration loaded from `skewlab.toml`.
//!
//! A missing file falls back to defaults; a malformed file is an error.
//! Command-line flags take precedence over the file.

use serde::Deserialize;

use crate::error::Result;

/// Top-level CLI configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct CliConfig {
    /// Market-wide defaults.
    pub market: MarketConfig,
    /// Newton solver defaults.
    pub solver: SolverSection,
    /// Simulation defaults.
    pub simulation: SimulationSection,
}

/// Market-wide defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Flat risk-free rate applied when no flag overrides it.
    pub rate: f64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self { rate: 0.0 }
    }
}

/// Newton solver defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SolverSection {
    /// Relative-step convergence tolerance.
    pub tolerance: f64,
    /// Iteration cap.
    pub max_iterations: usize,
}

impl Default for SolverSection {
    fn default() -> Self {
        Self {
            tolerance: 1e-3,
            max_iterations: 1000,
        }
    }
}

/// Simulation defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationSection {
    /// Number of paths.
    pub sims: usize,
    /// Step length in milliseconds.
    pub time_step_ms: i64,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            sims: 10_000,
            time_step_ms: 3_600_000,
        }
    }
}

impl CliConfig {
    /// Loads configuration from `path`, defaulting when the file is absent.
    pub fn load(path: &str) -> Result<Self> {
        if !std::path::Path::new(path).exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.market.rate, 0.0);
        assert_eq!(config.solver.tolerance, 1e-3);
        assert_eq!(config.solver.max_iterations, 1000);
        assert_eq!(config.simulation.sims, 10_000);
        assert_eq!(config.simulation.time_step_ms, 3_600_000);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: CliConfig = toml::from_str(
            r#"
            [market]
            rate = 0.01

            [solver]
            tolerance = 1e-6
            "#,
        )
        .unwrap();
        assert_eq!(config.market.rate, 0.01);
        assert_eq!(config.solver.tolerance, 1e-6);
        assert_eq!(config.solver.max_iterations, 1000);
        assert_eq!(config.simulation.sims, 10_000);
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = CliConfig::load("definitely-not-here.toml").unwrap();
        assert_eq!(config.simulation.time_step_ms, 3_600_000);
    }
}
