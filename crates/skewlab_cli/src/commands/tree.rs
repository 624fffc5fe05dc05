//! Tree command implementation
//!
//! Prices a European option through the recombining binomial lattice and
//! optionally prints the underlying-price lattice level by level.

use tracing::info;

use skewlab_models::lattice::BinomialTree;

use crate::{CliConfig, Result};

/// Run the tree command
#[allow(clippy::too_many_arguments)]
pub fn run(
    config: &CliConfig,
    spot: f64,
    strike: f64,
    expiry: f64,
    volatility: f64,
    rate: Option<f64>,
    kind: &str,
    steps: usize,
    show_lattice: bool,
) -> Result<()> {
    let kind = super::parse_kind(kind)?;
    let rate = rate.unwrap_or(config.market.rate);

    info!("Building {}-step lattice for {:?} {}@{}", steps, kind, strike, spot);

    let tree = BinomialTree::new(spot, strike, expiry, rate, volatility, kind, steps)?;
    let price = tree.price()?;

    if show_lattice {
        let lattice = tree.display_lattice();
        println!("\nUnderlying lattice ({} levels):", lattice.len());
        for (level, prices) in lattice.iter().enumerate() {
            let rendered: Vec<String> = prices.iter().map(|p| format!("{:.2}", p)).collect();
            println!("  t{:<4} [{}]", level, rendered.join(", "));
        }
    }

    println!("\n┌──────────────┬──────────────────┐");
    println!("│ Steps        │ {:>16} │", steps);
    println!("│ Price        │ {:>16.8} │", price);
    println!("└──────────────┴──────────────────┘");

    Ok(())
}
