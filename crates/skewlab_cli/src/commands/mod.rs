//! CLI command implementations.
//!
//! Each submodule exposes a single `run` function invoked from the
//! dispatcher in `main`. Shared argument parsing and quote loading
//! helpers live here.

pub mod chain;
pub mod price;
pub mod simulate;
pub mod surface;
pub mod tree;

use std::path::Path;

use skewlab_core::market_data::{OptionQuote, QuoteSide};
use skewlab_core::types::OptionKind;

use crate::error::{CliError, Result};

/// Parse an option kind from its command line spelling.
pub fn parse_kind(raw: &str) -> Result<OptionKind> {
    match raw.to_ascii_lowercase().as_str() {
        "call" | "c" => Ok(OptionKind::Call),
        "put" | "p" => Ok(OptionKind::Put),
        other => Err(CliError::InvalidArgument(format!(
            "unknown option kind '{}', expected call or put",
            other
        ))),
    }
}

/// Parse a quoted side from its command line spelling.
pub fn parse_side(raw: &str) -> Result<QuoteSide> {
    match raw.to_ascii_lowercase().as_str() {
        "bid" => Ok(QuoteSide::Bid),
        "ask" => Ok(QuoteSide::Ask),
        "mid" => Ok(QuoteSide::Mid),
        other => Err(CliError::InvalidArgument(format!(
            "unknown quote side '{}', expected bid, ask or mid",
            other
        ))),
    }
}

/// Load a JSON quote snapshot from disk.
pub fn load_quotes(path: &str) -> Result<Vec<OptionQuote>> {
    if !Path::new(path).exists() {
        return Err(CliError::FileNotFound(path.to_string()));
    }
    let raw = std::fs::read_to_string(path)?;
    let quotes: Vec<OptionQuote> = serde_json::from_str(&raw)?;
    Ok(quotes)
}
