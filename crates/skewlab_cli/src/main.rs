//! Skewlab CLI - Command Line Operations for Options Analytics
//!
//! This is the operational entry point for the skewlab analytics kernel.
//!
//! # Commands
//!
//! - `skewlab price` - Price a European option with the closed form
//! - `skewlab tree` - Price through the recombining binomial lattice
//! - `skewlab simulate` - Run the Monte Carlo payoff simulation
//! - `skewlab chain` - Invert a quote-chain snapshot into implied vols
//! - `skewlab surface` - Build the vol surface and fit per-expiry smiles

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use config::CliConfig;
pub use error::{CliError, Result};

/// Skewlab Options Analytics CLI
#[derive(Parser)]
#[command(name = "skewlab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "skewlab.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European option with the Black-Scholes closed form
    Price {
        /// Spot price
        #[arg(long)]
        spot: f64,

        /// Strike price
        #[arg(long)]
        strike: f64,

        /// Time to expiry in years
        #[arg(long)]
        expiry: f64,

        /// Volatility (decimal, e.g. 0.2)
        #[arg(long)]
        volatility: f64,

        /// Risk-free rate; defaults to the configured market rate
        #[arg(long)]
        rate: Option<f64>,

        /// Option kind (call or put)
        #[arg(long, default_value = "call")]
        kind: String,
    },

    /// Price through the recombining binomial lattice
    Tree {
        /// Spot price
        #[arg(long)]
        spot: f64,

        /// Strike price
        #[arg(long)]
        strike: f64,

        /// Time to expiry in years
        #[arg(long)]
        expiry: f64,

        /// Volatility (decimal)
        #[arg(long)]
        volatility: f64,

        /// Risk-free rate; defaults to the configured market rate
        #[arg(long)]
        rate: Option<f64>,

        /// Option kind (call or put)
        #[arg(long, default_value = "call")]
        kind: String,

        /// Number of lattice steps
        #[arg(long, default_value = "500")]
        steps: usize,

        /// Print the underlying-price lattice level by level
        #[arg(long)]
        show_lattice: bool,
    },

    /// Run the Monte Carlo payoff simulation
    Simulate {
        /// Spot price
        #[arg(long)]
        spot: f64,

        /// Strike price
        #[arg(long)]
        strike: f64,

        /// Volatility (decimal)
        #[arg(long)]
        volatility: f64,

        /// Risk-free rate; defaults to the configured market rate
        #[arg(long)]
        rate: Option<f64>,

        /// Option kind (call or put)
        #[arg(long, default_value = "call")]
        kind: String,

        /// Expiration in milliseconds since the Unix epoch
        #[arg(long)]
        expiration_ms: i64,

        /// Number of simulated paths; defaults to the configured count
        #[arg(long)]
        sims: Option<usize>,

        /// Step length in milliseconds; defaults to the configured step
        #[arg(long)]
        time_step_ms: Option<i64>,

        /// RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Valuation instant in milliseconds; defaults to the wall clock
        #[arg(long)]
        valuation_ms: Option<i64>,
    },

    /// Invert a quote-chain snapshot into implied-vol points
    Chain {
        /// Path to a JSON quote snapshot
        #[arg(short, long)]
        quotes: String,

        /// Quoted side to invert (bid, ask, mid)
        #[arg(long, default_value = "mid")]
        side: String,

        /// Risk-free rate; defaults to the configured market rate
        #[arg(long)]
        rate: Option<f64>,

        /// Valuation instant in milliseconds; defaults to the wall clock
        #[arg(long)]
        valuation_ms: Option<i64>,
    },

    /// Build the vol surface and fit a per-expiry smile
    Surface {
        /// Path to a JSON quote snapshot
        #[arg(short, long)]
        quotes: String,

        /// Quoted side to invert (bid, ask, mid)
        #[arg(long, default_value = "mid")]
        side: String,

        /// Risk-free rate; defaults to the configured market rate
        #[arg(long)]
        rate: Option<f64>,

        /// Valuation instant in milliseconds; defaults to the wall clock
        #[arg(long)]
        valuation_ms: Option<i64>,

        /// Expiration to fit (YYYY-MM-DD); omit to list the grid only
        #[arg(long)]
        expiration: Option<String>,

        /// Ad-hoc strike to reprice through the fitted smile
        #[arg(long)]
        strike: Option<f64>,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config = CliConfig::load(&cli.config)?;

    match cli.command {
        Commands::Price {
            spot,
            strike,
            expiry,
            volatility,
            rate,
            kind,
        } => commands::price::run(&config, spot, strike, expiry, volatility, rate, &kind),
        Commands::Tree {
            spot,
            strike,
            expiry,
            volatility,
            rate,
            kind,
            steps,
            show_lattice,
        } => commands::tree::run(
            &config,
            spot,
            strike,
            expiry,
            volatility,
            rate,
            &kind,
            steps,
            show_lattice,
        ),
        Commands::Simulate {
            spot,
            strike,
            volatility,
            rate,
            kind,
            expiration_ms,
            sims,
            time_step_ms,
            seed,
            valuation_ms,
        } => commands::simulate::run(
            &config,
            spot,
            strike,
            volatility,
            rate,
            &kind,
            expiration_ms,
            sims,
            time_step_ms,
            seed,
            valuation_ms,
        ),
        Commands::Chain {
            quotes,
            side,
            rate,
            valuation_ms,
        } => commands::chain::run(&config, &quotes, &side, rate, valuation_ms),
        Commands::Surface {
            quotes,
            side,
            rate,
            valuation_ms,
            expiration,
            strike,
        } => commands::surface::run(
            &config,
            &quotes,
            &side,
            rate,
            valuation_ms,
            expiration.as_deref(),
            strike,
        ),
    }
}
