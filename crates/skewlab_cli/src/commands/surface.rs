//! Surface command implementation
//!
//! Builds the implied-vol surface from a quote snapshot, optionally fits
//! the smile at one expiration, and can re-price an ad-hoc strike through
//! the fitted curve.

use chrono::NaiveDate;
use tracing::info;

use skewlab_core::math::SolverConfig;
use skewlab_core::types::time::{date_of_millis, now_millis, year_fraction_between};
use skewlab_models::analytical::ImpliedVolSolver;
use skewlab_models::chain::{build_surface, price_from_smile};

use crate::{CliConfig, CliError, Result};

/// Run the surface command
pub fn run(
    config: &CliConfig,
    quotes_path: &str,
    side: &str,
    rate: Option<f64>,
    valuation_ms: Option<i64>,
    expiration: Option<&str>,
    strike: Option<f64>,
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
    let surface = build_surface(&quotes, side, rate, now_ms, &solver);

    if surface.is_empty() {
        println!("\n(empty surface: no quote produced a converged implied vol)");
        return Ok(());
    }

    print_grid(&surface);

    let Some(expiration) = expiration else {
        return Ok(());
    };
    let expiration = NaiveDate::parse_from_str(expiration, "%Y-%m-%d").map_err(|_| {
        CliError::InvalidArgument(format!(
            "invalid expiration '{}', expected YYYY-MM-DD",
            expiration
        ))
    })?;

    let smile = surface.fit_smile(expiration)?;
    let (lo, hi) = smile.strike_range();
    println!("\nFitted smile for {}:", expiration);
    println!("  strike range [{:.2}, {:.2}]", lo, hi);
    println!("  vol at range ends {:.6} / {:.6}", smile.volatility(lo), smile.volatility(hi));

    let Some(strike) = strike else {
        return Ok(());
    };

    // The ad-hoc contract settles on the same date as the fitted row, so
    // its expiry and spot come from the quotes of that expiration.
    let row_quote = quotes
        .iter()
        .find(|q| date_of_millis(q.expiration_ms) == Some(expiration))
        .ok_or_else(|| {
            CliError::InvalidArgument(format!("no quote expires on {}", expiration))
        })?;
    let expiry = year_fraction_between(now_ms, row_quote.expiration_ms);
    let spot = row_quote.underlying_index;

    for kind in [
        skewlab_core::types::OptionKind::Call,
        skewlab_core::types::OptionKind::Put,
    ] {
        let result = price_from_smile(&smile, spot, strike, expiry, rate, kind)?;
        println!(
            "  {:?} {:.2}: price {:.8}, vega {:.8}, vol {:.6}",
            kind,
            strike,
            result.price,
            result.vega.unwrap_or(f64::NAN),
            smile.volatility(strike)
        );
        if !smile.covers(strike) {
            info!("Strike {} is outside the fitted range, extrapolating", strike);
        }
    }

    Ok(())
}

/// Prints the sparse expiration-by-strike grid.
fn print_grid(surface: &skewlab_core::market_data::VolSurface) {
    print!("\n{:>12}", "");
    for strike in surface.strikes() {
        print!(" {:>10.2}", strike);
    }
    println!();
    for expiration in surface.expirations() {
        print!("{:>12}", expiration.to_string());
        for strike in surface.strikes() {
            match surface.volatility(*expiration, *strike) {
                Some(vol) => print!(" {:>10.6}", vol),
                None => print!(" {:>10}", "-"),
            }
        }
        println!();
    }
}