//! Parallel Monte Carlo simulation of terminal payoffs.

use rayon::prelude::*;

use super::config::SimulationConfig;
use super::error::SimulationError;
use super::paths::{evolve_path, schedule, step_count};
use super::summary::PayoffSummary;
use crate::rng::SimRng;
use skewlab_core::types::time::{now_millis, year_fraction_between};
use skewlab_core::types::OptionKind;
use skewlab_models::analytical::BlackScholes;

/// The full output of one simulation run.
///
/// Holds every simulated path so callers can plot or audit the evolution,
/// alongside the payoff sample and its summary. The closed-form price on
/// the same inputs rides along as a reference.
#[derive(Debug, Clone)]
pub struct SimulationRun {
    /// Seed the run was generated from.
    pub seed: u64,
    /// Valuation instant actually used, in milliseconds since the epoch.
    pub valuation_ms: i64,
    /// Number of time steps per path.
    pub steps: usize,
    /// Step instants, valuation through expiration inclusive.
    pub timestamps: Vec<i64>,
    /// Simulated price paths, one per simulation, `steps + 1` points each.
    pub paths: Vec<Vec<f64>>,
    /// Strictly positive terminal payoffs.
    pub payoffs: Vec<f64>,
    /// Summary statistics over the kept payoffs.
    pub summary: PayoffSummary,
    /// Black-Scholes price of the same contract, for comparison.
    pub reference_price: f64,
}

/// Monte Carlo engine for one configured contract.
///
/// # Examples
///
/// ```rust
/// use skewlab_core::types::OptionKind;
/// use skewlab_pricing::mc::{SimulationConfig, Simulator};
///
/// let config = SimulationConfig::builder()
///     .spot(100.0)
///     .strike(100.0)
///     .volatility(0.2)
///     .rate(0.05)
///     .kind(OptionKind::Call)
///     .expiration_ms(31_556_952_000)
///     .valuation_time_ms(0)
///     .sims(1_000)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let run = Simulator::new(config).run().unwrap();
/// assert_eq!(run.paths.len(), 1_000);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Wraps a validated configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs the simulation.
    ///
    /// Paths are evaluated in parallel; each path derives its own RNG from
    /// the base seed and its index, so the run is reproducible regardless
    /// of thread scheduling.
    ///
    /// # Errors
    /// `SimulationError::ExpiryNotAhead` when no whole time step fits
    /// between the valuation instant and the expiration.
    pub fn run(&self) -> Result<SimulationRun, SimulationError> {
        let config = &self.config;
        let valuation_ms = config.valuation_time_ms().unwrap_or_else(now_millis);

        let steps = step_count(valuation_ms, config.expiration_ms(), config.time_step_ms());
        if steps == 0 {
            return Err(SimulationError::ExpiryNotAhead {
                expiration_ms: config.expiration_ms(),
                valuation_ms,
            });
        }

        let expiry_years = year_fraction_between(valuation_ms, config.expiration_ms());
        // The schedule stretches over the whole interval, so the per-step
        // increment comes from the span rather than the nominal step length
        let dt_years = expiry_years / steps as f64;

        let seed = config.seed().unwrap_or_else(rand::random);

        let spot = config.spot();
        let rate = config.rate();
        let volatility = config.volatility();

        let paths: Vec<Vec<f64>> = (0..config.sims())
            .into_par_iter()
            .map(|index| {
                let mut rng = SimRng::for_path(seed, index);
                evolve_path(&mut rng, spot, rate, volatility, dt_years, steps)
            })
            .collect();

        // TODO: puts still settle on the call payoff max(S-K, 0); switch to
        // max(K-S, 0) once downstream consumers of the summary table are
        // reconciled with the corrected convention
        let strike = config.strike();
        let payoffs: Vec<f64> = paths
            .iter()
            .map(|path| path[path.len() - 1] - strike)
            .filter(|&p| p > 0.0)
            .collect();

        let summary = PayoffSummary::from_payoffs(&payoffs, config.sims());

        let reference_price = {
            let bs = BlackScholes::new(spot, rate, volatility).map_err(|_| {
                SimulationError::DegenerateInput {
                    name: "volatility",
                    value: volatility,
                }
            })?;
            match config.kind() {
                OptionKind::Call => bs.price_call(strike, expiry_years),
                OptionKind::Put => bs.price_put(strike, expiry_years),
            }
        };

        Ok(SimulationRun {
            seed,
            valuation_ms,
            steps,
            timestamps: schedule(valuation_ms, config.expiration_ms(), steps),
            paths,
            payoffs,
            summary,
            reference_price,
        })
    }
}
