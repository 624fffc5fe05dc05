//! Option quote records as delivered by an external data provider.

use crate::types::OptionKind;

/// Which quoted price of an [`OptionQuote`] to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum QuoteSide {
    /// Best bid.
    Bid,
    /// Best ask.
    Ask,
    /// Bid/ask midpoint.
    Mid,
}

/// A single option quote from a chain snapshot.
///
/// Crypto venues quote option premiums in units of the underlying coin; the
/// `underlying_index` field carries the index level of the snapshot so that
/// premiums can be converted into currency terms with [`currency_price`].
/// Quoted sides may be absent when one half of the book is empty.
///
/// [`currency_price`]: OptionQuote::currency_price
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionQuote {
    /// Venue instrument name, e.g. `BTC-25JUN21-40000-C`.
    pub instrument: String,
    /// Strike price in currency.
    pub strike: f64,
    /// Expiration as milliseconds since the Unix epoch.
    pub expiration_ms: i64,
    /// Call or put.
    pub kind: OptionKind,
    /// Best bid premium in units of the underlying, if quoted.
    pub bid: Option<f64>,
    /// Best ask premium in units of the underlying, if quoted.
    pub ask: Option<f64>,
    /// Bid/ask midpoint premium in units of the underlying, if quoted.
    pub mid: Option<f64>,
    /// Underlying index level at snapshot time.
    pub underlying_index: f64,
    /// Open interest for the instrument.
    pub open_interest: f64,
}

impl OptionQuote {
    /// Returns the requested quoted side in units of the underlying.
    #[inline]
    pub fn side(&self, side: QuoteSide) -> Option<f64> {
        match side {
            QuoteSide::Bid => self.bid,
            QuoteSide::Ask => self.ask,
            QuoteSide::Mid => self.mid,
        }
    }

    /// Returns the requested quoted side converted to currency terms.
    ///
    /// Venue premiums are quoted in the underlying; multiplying by the
    /// snapshot index gives the price in currency, the form the pricing
    /// formulas work in.
    #[inline]
    pub fn currency_price(&self, side: QuoteSide) -> Option<f64> {
        self.side(side).map(|p| p * self.underlying_index)
    }
}
