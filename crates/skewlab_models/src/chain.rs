//! Quote-chain mapping: venue quotes to implied-vol surface points.
//!
//! A chain snapshot arrives as venue quotes with premiums in units of the
//! underlying. The mapping converts each premium to currency, inverts it
//! through the Newton solver, and keeps the solves that converge. Quotes
//! with a missing side, an expiration in the past, or a non-convergent
//! solve are skipped silently: holes in the surface are legitimate.

use crate::analytical::error::AnalyticalError;
use crate::analytical::{BlackScholes, ImpliedVolSolver};
use skewlab_core::market_data::{FittedSmile, OptionQuote, QuoteSide, VolSurface, VolSurfacePoint};
use skewlab_core::types::time::{date_of_millis, year_fraction_between};
use skewlab_core::types::{OptionKind, PricingResult};

/// Inverts every quote of a chain snapshot into surface points.
///
/// `now_ms` is the valuation instant; `side` selects which quoted premium
/// to invert; `rate` is the flat risk-free rate. Records that cannot be
/// inverted are dropped.
///
/// # Examples
/// ```
/// use skewlab_core::market_data::QuoteSide;
/// use skewlab_models::analytical::ImpliedVolSolver;
/// use skewlab_models::chain::implied_vol_points;
///
/// let solver = ImpliedVolSolver::default();
/// let points = implied_vol_points(&[], QuoteSide::Mid, 0.01, 0, &solver);
/// assert!(points.is_empty());
/// ```
pub fn implied_vol_points(
    quotes: &[OptionQuote],
    side: QuoteSide,
    rate: f64,
    now_ms: i64,
    solver: &ImpliedVolSolver,
) -> Vec<VolSurfacePoint> {
    quotes
        .iter()
        .filter_map(|quote| {
            let market_price = quote.currency_price(side)?;
            let expiry = year_fraction_between(now_ms, quote.expiration_ms);
            if expiry <= 0.0 {
                return None;
            }

            let result = solver.solve(
                market_price,
                quote.underlying_index,
                quote.strike,
                expiry,
                rate,
                quote.kind,
            );
            let implied_vol = result.volatility?;
            let expiration = date_of_millis(quote.expiration_ms)?;

            Some(VolSurfacePoint {
                expiration,
                strike: quote.strike,
                implied_vol,
            })
        })
        .collect()
}

/// Builds a surface straight from a chain snapshot.
pub fn build_surface(
    quotes: &[OptionQuote],
    side: QuoteSide,
    rate: f64,
    now_ms: i64,
    solver: &ImpliedVolSolver,
) -> VolSurface {
    VolSurface::from_points(&implied_vol_points(quotes, side, rate, now_ms, solver))
}

/// Re-prices an ad-hoc contract through a fitted smile.
///
/// The smile supplies the volatility at `strike`; the closed form turns it
/// back into a price and vega.
///
/// # Errors
/// - `AnalyticalError::DegenerateInput` when the smile evaluates to a
///   non-positive volatility at `strike` (possible far outside the fitted
///   range) or when `expiry` is not ahead
pub fn price_from_smile(
    smile: &FittedSmile,
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    kind: OptionKind,
) -> Result<PricingResult, AnalyticalError> {
    if expiry <= 0.0 {
        return Err(AnalyticalError::DegenerateInput {
            name: "expiry",
            value: expiry,
        });
    }

    let vol = smile.volatility(strike);
    if !vol.is_finite() || vol <= 0.0 {
        return Err(AnalyticalError::DegenerateInput {
            name: "volatility",
            value: vol,
        });
    }

    let bs = BlackScholes::new(spot, rate, vol)?;
    let price = match kind {
        OptionKind::Call => bs.price_call(strike, expiry),
        OptionKind::Put => bs.price_put(strike, expiry),
    };

    Ok(PricingResult {
        price,
        vega: Some(bs.vega(strike, expiry)),
    })
}
