//! Price command implementation
//!
//! Prices a single European option with the analytical closed form.

use tracing::info;

use skewlab_core::types::OptionSpec;
use skewlab_models::analytical::BlackScholes;

use crate::{CliConfig, Result};

/// Run the price command
#[allow(clippy::too_many_arguments)]
pub fn run(
    config: &CliConfig,
    spot: f64,
    strike: f64,
    expiry: f64,
    volatility: f64,
    rate: Option<f64>,
    kind: &str,
) -> Result<()> {
    let kind = super::parse_kind(kind)?;
    let rate = rate.unwrap_or(config.market.rate);

    info!("Pricing {:?} {}@{}", kind, strike, spot);
    info!("  Expiry: {} years", expiry);
    info!("  Volatility: {}", volatility);
    info!("  Rate: {}", rate);

    let spec = OptionSpec::builder()
        .spot(spot)
        .strike(strike)
        .expiry(expiry)
        .volatility(volatility)
        .rate(rate)
        .kind(kind)
        .build()?;

    let result = BlackScholes::price(&spec)?;

    println!("\n┌──────────────┬──────────────────┐");
    println!("│ Price        │ {:>16.8} │", result.price);
    println!(
        "│ Vega         │ {:>16.8} │",
        result.vega.unwrap_or(f64::NAN)
    );
    println!("└──────────────┴──────────────────┘");

    Ok(())
}
