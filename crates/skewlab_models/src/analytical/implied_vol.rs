//! Newton-Raphson implied-volatility inversion.
//!
//! Inverts the Black-Scholes formula for the volatility that reproduces an
//! observed market price. Newton's update uses the analytical vega as the
//! derivative:
//!
//! v ← v - (BS(v) - market) / vega(v)
//!
//! Convergence is decided on the relative step `|Δv / v|`, so the same
//! tolerance behaves sensibly across vol regimes. A solve that fails to
//! converge is reported as data, not as an error: callers mapping whole
//! quote chains skip the failures and keep going.

use super::black_scholes::BlackScholes;
use skewlab_core::math::SolverConfig;
use skewlab_core::types::{ImpliedVolResult, OptionKind};

/// Initial volatility guess for all solves.
const INITIAL_GUESS: f64 = 0.5;

/// Vega floor below which the Newton step is considered undefined.
const VEGA_FLOOR: f64 = 1e-12;

/// Implied-volatility solver over the Black-Scholes closed form.
///
/// # Examples
/// ```
/// use skewlab_core::types::OptionKind;
/// use skewlab_models::analytical::{BlackScholes, ImpliedVolSolver};
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let market = bs.price_call(100.0, 1.0);
///
/// let solver = ImpliedVolSolver::default();
/// let result = solver.solve(market, 100.0, 100.0, 1.0, 0.05, OptionKind::Call);
/// assert!(result.converged);
/// assert!((result.volatility.unwrap() - 0.2).abs() < 5e-3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImpliedVolSolver {
    config: SolverConfig,
}

impl ImpliedVolSolver {
    /// Creates a solver with explicit configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Returns the solver configuration.
    #[inline]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves for the volatility reproducing `market_price`.
    ///
    /// Degenerate inputs (spot <= 0, expiry <= 0, market price <= 0) and
    /// diverging iterations all land in a non-converged result; the method
    /// never panics and never returns NaN.
    pub fn solve(
        &self,
        market_price: f64,
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        kind: OptionKind,
    ) -> ImpliedVolResult {
        if spot <= 0.0 || strike <= 0.0 || expiry <= 0.0 || market_price <= 0.0 {
            return ImpliedVolResult::failed(0);
        }

        let mut vol = INITIAL_GUESS;

        for iteration in 1..=self.config.max_iterations {
            let bs = match BlackScholes::new(spot, rate, vol) {
                Ok(bs) => bs,
                Err(_) => return ImpliedVolResult::failed(iteration),
            };

            let model_price = match kind {
                OptionKind::Call => bs.price_call(strike, expiry),
                OptionKind::Put => bs.price_put(strike, expiry),
            };
            let vega = bs.vega(strike, expiry);

            // A flat price surface gives Newton nothing to work with
            if vega.abs() < VEGA_FLOOR {
                return ImpliedVolResult::failed(iteration);
            }

            let next = vol - (model_price - market_price) / vega;

            // Divergence short-circuits: a step below zero or off the reals
            // will not find its way back
            if !next.is_finite() || next <= 0.0 {
                return ImpliedVolResult::failed(iteration);
            }

            if ((next - vol) / vol).abs() < self.config.tolerance {
                return ImpliedVolResult::converged(next, iteration);
            }

            vol = next;
        }

        ImpliedVolResult::failed(self.config.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn market_price(spot: f64, strike: f64, expiry: f64, rate: f64, vol: f64, kind: OptionKind) -> f64 {
        let bs = BlackScholes::new(spot, rate, vol).unwrap();
        match kind {
            OptionKind::Call => bs.price_call(strike, expiry),
            OptionKind::Put => bs.price_put(strike, expiry),
        }
    }

    #[test]
    fn test_round_trip_atm_call() {
        let price = market_price(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call);
        let result =
            ImpliedVolSolver::default().solve(price, 100.0, 100.0, 1.0, 0.05, OptionKind::Call);

        assert!(result.converged);
        assert!(result.iterations > 0);
        assert!((result.volatility.unwrap() - 0.2).abs() < 5e-3);
    }

    #[test]
    fn test_round_trip_otm_put() {
        let price = market_price(100.0, 85.0, 0.5, 0.03, 0.35, OptionKind::Put);
        let result =
            ImpliedVolSolver::default().solve(price, 100.0, 85.0, 0.5, 0.03, OptionKind::Put);

        assert!(result.converged);
        assert!((result.volatility.unwrap() - 0.35).abs() < 5e-3);
    }

    #[test]
    fn test_high_vol_regime() {
        // Crypto-style vols well above the initial guess
        let price = market_price(40_000.0, 45_000.0, 0.25, 0.01, 0.9, OptionKind::Call);
        let result = ImpliedVolSolver::default().solve(
            price,
            40_000.0,
            45_000.0,
            0.25,
            0.01,
            OptionKind::Call,
        );

        assert!(result.converged);
        assert!((result.volatility.unwrap() - 0.9).abs() < 1e-2);
    }

    #[test]
    fn test_zero_market_price_fails_cleanly() {
        let result =
            ImpliedVolSolver::default().solve(0.0, 100.0, 100.0, 1.0, 0.05, OptionKind::Call);
        assert!(!result.converged);
        assert_eq!(result.volatility, None);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_price_above_spot_fails_cleanly() {
        // A call can never be worth more than the spot; the iteration must
        // give up rather than loop or leak NaN
        let result =
            ImpliedVolSolver::default().solve(250.0, 100.0, 100.0, 1.0, 0.05, OptionKind::Call);
        assert!(!result.converged);
        assert_eq!(result.volatility, None);
    }

    #[test]
    fn test_degenerate_expiry_fails_cleanly() {
        let result =
            ImpliedVolSolver::default().solve(5.0, 100.0, 100.0, 0.0, 0.05, OptionKind::Call);
        assert!(!result.converged);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_tighter_tolerance_refines_result() {
        let price = market_price(100.0, 110.0, 1.0, 0.05, 0.25, OptionKind::Call);

        let coarse = ImpliedVolSolver::new(SolverConfig::new(1e-2, 1000))
            .solve(price, 100.0, 110.0, 1.0, 0.05, OptionKind::Call);
        let fine = ImpliedVolSolver::new(SolverConfig::new(1e-9, 1000))
            .solve(price, 100.0, 110.0, 1.0, 0.05, OptionKind::Call);

        assert!(coarse.converged && fine.converged);
        let coarse_err = (coarse.volatility.unwrap() - 0.25).abs();
        let fine_err = (fine.volatility.unwrap() - 0.25).abs();
        assert!(fine_err <= coarse_err);
        assert!(fine_err < 1e-8);
    }

    #[test]
    fn test_iteration_cap_respected() {
        // One iteration is rarely enough from the 0.5 starting point
        let price = market_price(100.0, 100.0, 1.0, 0.05, 0.15, OptionKind::Call);
        let result = ImpliedVolSolver::new(SolverConfig::new(1e-12, 1))
            .solve(price, 100.0, 100.0, 1.0, 0.05, OptionKind::Call);

        assert!(!result.converged);
        assert_eq!(result.iterations, 1);
    }

    proptest! {
        #[test]
        fn prop_round_trip_recovers_vol(
            spot in 50.0_f64..200.0,
            moneyness in 0.8_f64..1.2,
            expiry in 0.1_f64..2.0,
            vol in 0.1_f64..1.2,
        ) {
            let strike = spot * moneyness;
            let price = market_price(spot, strike, expiry, 0.03, vol, OptionKind::Call);
            let result = ImpliedVolSolver::new(SolverConfig::new(1e-8, 1000))
                .solve(price, spot, strike, expiry, 0.03, OptionKind::Call);

            prop_assert!(result.converged);
            prop_assert!((result.volatility.unwrap() - vol).abs() < 1e-6);
        }
    }
}
