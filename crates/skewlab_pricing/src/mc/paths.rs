//! Time schedule and discrete path evolution.
//!
//! Paths follow a discretised geometric Brownian motion driven by uniform
//! shocks on [-1, 1]:
//!
//! S_k = S_(k-1) · exp((r - σ²/2)·Δt + σ·ε_k·√Δt)
//!
//! The uniform driver is deliberate: it reproduces the historical shock
//! model of this engine and keeps draws cheap, at the cost of thinner
//! tails than a Gaussian driver would give.

use crate::rng::SimRng;

/// Number of whole steps of `time_step_ms` that fit before expiration.
#[inline]
pub fn step_count(valuation_ms: i64, expiration_ms: i64, time_step_ms: i64) -> usize {
    if expiration_ms <= valuation_ms || time_step_ms < 1 {
        return 0;
    }
    ((expiration_ms - valuation_ms) / time_step_ms) as usize
}

/// Evenly spaced instants from valuation to expiration, inclusive.
///
/// Returns `steps + 1` timestamps. The spacing absorbs any remainder the
/// whole-step truncation left over, so the last instant is always the
/// expiration itself.
pub fn schedule(valuation_ms: i64, expiration_ms: i64, steps: usize) -> Vec<i64> {
    if steps == 0 {
        return vec![valuation_ms];
    }
    let span = expiration_ms - valuation_ms;
    (0..=steps)
        .map(|k| valuation_ms + (span * k as i64) / steps as i64)
        .collect()
}

/// Evolves one path of `steps` increments from `spot`.
///
/// Returns `steps + 1` prices with the spot at index 0.
pub fn evolve_path(
    rng: &mut SimRng,
    spot: f64,
    rate: f64,
    volatility: f64,
    dt_years: f64,
    steps: usize,
) -> Vec<f64> {
    let drift = (rate - 0.5 * volatility * volatility) * dt_years;
    let diffusion = volatility * dt_years.sqrt();

    let mut path = Vec::with_capacity(steps + 1);
    let mut price = spot;
    path.push(price);
    for _ in 0..steps {
        price *= (drift + diffusion * rng.shock()).exp();
        path.push(price);
    }
    path
}
