//! Simulate command implementation
//!
//! Runs the Monte Carlo payoff simulation and prints the payoff summary
//! next to the closed-form reference price.

use tracing::info;

use skewlab_pricing::mc::{SimulationConfig, Simulator};

use crate::{CliConfig, Result};

/// Run the simulate command
#[allow(clippy::too_many_arguments)]
pub fn run(
    config: &CliConfig,
    spot: f64,
    strike: f64,
    volatility: f64,
    rate: Option<f64>,
    kind: &str,
    expiration_ms: i64,
    sims: Option<usize>,
    time_step_ms: Option<i64>,
    seed: Option<u64>,
    valuation_ms: Option<i64>,
) -> Result<()> {
    let kind = super::parse_kind(kind)?;
    let rate = rate.unwrap_or(config.market.rate);
    let sims = sims.unwrap_or(config.simulation.sims);
    let time_step_ms = time_step_ms.unwrap_or(config.simulation.time_step_ms);

    info!("Simulating {} paths for {:?} {}@{}", sims, kind, strike, spot);
    info!("  Expiration: {} ms", expiration_ms);
    info!("  Step: {} ms", time_step_ms);

    let mut builder = SimulationConfig::builder()
        .spot(spot)
        .strike(strike)
        .rate(rate)
        .volatility(volatility)
        .kind(kind)
        .expiration_ms(expiration_ms)
        .sims(sims)
        .time_step_ms(time_step_ms);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    if let Some(valuation_ms) = valuation_ms {
        builder = builder.valuation_time_ms(valuation_ms);
    }

    let simulator = Simulator::new(builder.build()?);
    let run = simulator.run()?;

    println!("\n┌──────────────────┬──────────────────┐");
    println!("│ Seed             │ {:>16} │", run.seed);
    println!("│ Steps per path   │ {:>16} │", run.steps);
    println!("│ Simulated paths  │ {:>16} │", run.summary.sims);
    println!("│ Positive payoffs │ {:>16} │", run.summary.count);
    println!("│ Mean payoff      │ {:>16.8} │", run.summary.mean);
    println!("│ Std deviation    │ {:>16.8} │", run.summary.std_dev);
    println!("│ Std error        │ {:>16.8} │", run.summary.std_error);
    println!(
        "│ 95% range        │ {:>7.4},{:>8.4} │",
        run.summary.range.0, run.summary.range.1
    );
    println!("│ Reference price  │ {:>16.8} │", run.reference_price);
    println!("└──────────────────┴──────────────────┘");

    Ok(())
}
