//! Monte Carlo simulation configuration.

use super::error::{SimulationError, MAX_SIMS};
use skewlab_core::types::OptionKind;

/// Default step length: one hour in milliseconds.
pub const DEFAULT_TIME_STEP_MS: i64 = 3_600_000;

/// Monte Carlo simulation configuration.
///
/// Immutable once built; use [`SimulationConfig::builder`] to construct
/// instances. Timestamps are milliseconds since the Unix epoch; the engine
/// converts to year fractions internally.
///
/// # Examples
///
/// ```rust
/// use skewlab_core::types::OptionKind;
/// use skewlab_pricing::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .spot(40_000.0)
///     .strike(42_000.0)
///     .volatility(0.8)
///     .rate(0.01)
///     .kind(OptionKind::Call)
///     .expiration_ms(1_624_608_000_000)
///     .sims(10_000)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.sims(), 10_000);
/// ```
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    kind: OptionKind,
    expiration_ms: i64,
    sims: usize,
    time_step_ms: i64,
    seed: Option<u64>,
    valuation_time_ms: Option<i64>,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Spot price at valuation.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Call or put.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Expiration in milliseconds since the epoch.
    #[inline]
    pub fn expiration_ms(&self) -> i64 {
        self.expiration_ms
    }

    /// Number of simulation paths.
    #[inline]
    pub fn sims(&self) -> usize {
        self.sims
    }

    /// Step length in milliseconds.
    #[inline]
    pub fn time_step_ms(&self) -> i64 {
        self.time_step_ms
    }

    /// Optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Optional valuation instant; the engine falls back to the wall clock.
    #[inline]
    pub fn valuation_time_ms(&self) -> Option<i64> {
        self.valuation_time_ms
    }
}

/// Builder for [`SimulationConfig`].
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    spot: Option<f64>,
    strike: Option<f64>,
    rate: f64,
    volatility: Option<f64>,
    kind: Option<OptionKind>,
    expiration_ms: Option<i64>,
    sims: Option<usize>,
    time_step_ms: Option<i64>,
    seed: Option<u64>,
    valuation_time_ms: Option<i64>,
}

impl SimulationConfigBuilder {
    /// Sets the spot price.
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets the strike price.
    pub fn strike(mut self, strike: f64) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Sets the risk-free rate (defaults to zero).
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    /// Sets the volatility.
    ///
    /// Must be strictly positive: the closed-form reference price attached
    /// to every run is undefined at σ = 0. The deterministic drift-only
    /// limit is reachable with an arbitrarily small positive volatility.
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Sets the option kind.
    pub fn kind(mut self, kind: OptionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the expiration instant in milliseconds since the epoch.
    pub fn expiration_ms(mut self, expiration_ms: i64) -> Self {
        self.expiration_ms = Some(expiration_ms);
        self
    }

    /// Sets the number of simulation paths.
    pub fn sims(mut self, sims: usize) -> Self {
        self.sims = Some(sims);
        self
    }

    /// Sets the step length in milliseconds (defaults to one hour).
    pub fn time_step_ms(mut self, time_step_ms: i64) -> Self {
        self.time_step_ms = Some(time_step_ms);
        self
    }

    /// Sets the RNG seed. Unseeded runs draw a seed from entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Pins the valuation instant instead of reading the wall clock.
    pub fn valuation_time_ms(mut self, valuation_time_ms: i64) -> Self {
        self.valuation_time_ms = Some(valuation_time_ms);
        self
    }

    /// Validates and builds the configuration.
    ///
    /// # Errors
    /// - `SimulationError::MissingField` for an unset required field
    /// - `SimulationError::DegenerateInput` for spot, strike, or vol ≤ 0
    /// - `SimulationError::InvalidSimCount` outside [1, 10_000_000]
    /// - `SimulationError::InvalidTimeStep` for a non-positive step
    pub fn build(self) -> Result<SimulationConfig, SimulationError> {
        let spot = self
            .spot
            .ok_or(SimulationError::MissingField { name: "spot" })?;
        let strike = self
            .strike
            .ok_or(SimulationError::MissingField { name: "strike" })?;
        let volatility = self
            .volatility
            .ok_or(SimulationError::MissingField { name: "volatility" })?;
        let kind = self
            .kind
            .ok_or(SimulationError::MissingField { name: "kind" })?;
        let expiration_ms = self.expiration_ms.ok_or(SimulationError::MissingField {
            name: "expiration_ms",
        })?;
        let sims = self
            .sims
            .ok_or(SimulationError::MissingField { name: "sims" })?;
        let time_step_ms = self.time_step_ms.unwrap_or(DEFAULT_TIME_STEP_MS);

        if spot <= 0.0 {
            return Err(SimulationError::DegenerateInput {
                name: "spot",
                value: spot,
            });
        }
        if strike <= 0.0 {
            return Err(SimulationError::DegenerateInput {
                name: "strike",
                value: strike,
            });
        }
        if volatility <= 0.0 {
            return Err(SimulationError::DegenerateInput {
                name: "volatility",
                value: volatility,
            });
        }
        if sims == 0 || sims > MAX_SIMS {
            return Err(SimulationError::InvalidSimCount { sims });
        }
        if time_step_ms < 1 {
            return Err(SimulationError::InvalidTimeStep { time_step_ms });
        }

        Ok(SimulationConfig {
            spot,
            strike,
            rate: self.rate,
            volatility,
            kind,
            expiration_ms,
            sims,
            time_step_ms,
            seed: self.seed,
            valuation_time_ms: self.valuation_time_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_builder() -> SimulationConfigBuilder {
        SimulationConfig::builder()
            .spot(100.0)
            .strike(100.0)
            .volatility(0.2)
            .rate(0.05)
            .kind(OptionKind::Call)
            .expiration_ms(1_624_608_000_000)
            .sims(1_000)
    }

    #[test]
    fn test_build_with_defaults() {
        let config = base_builder().build().unwrap();
        assert_eq!(config.time_step_ms(), DEFAULT_TIME_STEP_MS);
        assert_eq!(config.seed(), None);
        assert_eq!(config.valuation_time_ms(), None);
    }

    #[test]
    fn test_missing_required_field() {
        let result = SimulationConfig::builder().spot(100.0).build();
        assert!(matches!(
            result,
            Err(SimulationError::MissingField { name: "strike" })
        ));
    }

    #[test]
    fn test_degenerate_inputs_rejected() {
        let result = base_builder().spot(-1.0).build();
        assert!(matches!(
            result,
            Err(SimulationError::DegenerateInput { name: "spot", .. })
        ));

        let result = base_builder().volatility(0.0).build();
        assert!(matches!(
            result,
            Err(SimulationError::DegenerateInput { name: "volatility", .. })
        ));
    }

    #[test]
    fn test_tiny_positive_volatility_accepted() {
        // σ = 0 itself is out of the domain; the drift-only limit is
        // approached from above
        let config = base_builder().volatility(1e-12).build().unwrap();
        assert_eq!(config.volatility(), 1e-12);
    }

    #[test]
    fn test_sim_count_bounds() {
        let result = base_builder().sims(0).build();
        assert_eq!(
            result.unwrap_err(),
            SimulationError::InvalidSimCount { sims: 0 }
        );

        let result = base_builder().sims(MAX_SIMS + 1).build();
        assert!(matches!(
            result,
            Err(SimulationError::InvalidSimCount { .. })
        ));
    }

    #[test]
    fn test_non_positive_time_step_rejected() {
        let result = base_builder().time_step_ms(0).build();
        assert_eq!(
            result.unwrap_err(),
            SimulationError::InvalidTimeStep { time_step_ms: 0 }
        );
    }

    #[test]
    fn test_explicit_settings_kept() {
        let config = base_builder()
            .time_step_ms(60_000)
            .seed(7)
            .valuation_time_ms(1_616_718_762_000)
            .build()
            .unwrap();
        assert_eq!(config.time_step_ms(), 60_000);
        assert_eq!(config.seed(), Some(7));
        assert_eq!(config.valuation_time_ms(), Some(1_616_718_762_000));
    }
}
