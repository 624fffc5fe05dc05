//! Chain command implementation
//!
//! Inverts a quote-chain snapshot into per-contract implied volatilities.

use tracing::info;

use skewlab_core::math::SolverConfig;
use skewlab_core::types::time::now_millis;
use skewlab_models::analytical::ImpliedVolSolver;
use skewlab_models::chain::implied_vol_points;

use crate::{CliConfig, Result};

/// Run the chain command
pub fn run(
    config: &CliConfig,
    quotes_path: &str,
    side: &str,
    rate: Option<f64>,
    valuation_ms: Option<i64>,
) -> Result<()> {
    let side = super::parse_side(side)?;
    let rate = rate.unwrap_or(config.market.rate);
    let now_ms = valuation_ms.unwrap_or_else(now_millis);

    info!("Loading quote snapshot from {}", quotes_path);
    let quotes = super::load_quotes(quotes_path)?;
    info!("  {} quotes loaded", quotes.len());

    let solver = ImpliedVolSolver::new(SolverConfig::new(
        config.solver.tolerance,
        config.solver.max_iterations,
    ));
    let points = implied_vol_points(&quotes, side, rate, now_ms, &solver);

    info!("  {} contracts inverted", points.len());

    println!("\n┌────────────┬────────────┬─────────────┐");
    println!("│ Expiration │ Strike     │ Implied vol │");
    println!("├────────────┼────────────┼─────────────┤");
    for point in &points {
        println!(
            "│ {} │ {:>10.2} │ {:>11.6} │",
            point.expiration, point.strike, point.implied_vol
        );
    }
    if points.is_empty() {
        println!("│ (no data)  │            │             │");
    }
    println!("└────────────┴────────────┴─────────────┘");

    Ok(())
}
