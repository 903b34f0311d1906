//! `MarketDataSource` — the seam between fetching and deriving.
//!
//! The market-cap deriver and the multi-coin aggregator only need three
//! feeds. `NomicsClient` implements them over HTTP; anything else that can
//! produce the same wire data (fixtures, a recorded session) can stand in.

use crate::domain::candle::Candle;
use crate::domain::market_cap::wire::{SparklineEntry, SupplyEntry};
use crate::error::SdkResult;
use crate::shared::{Currency, DateRange};

/// Provider of the raw feeds the derived computations consume.
pub trait MarketDataSource {
    /// Price samples for every currency over `range`.
    fn sparkline(&self, range: &DateRange) -> SdkResult<Vec<SparklineEntry>>;

    /// Supply figures for every currency over `range`.
    fn supplies(&self, range: &DateRange) -> SdkResult<Vec<SupplyEntry>>;

    /// Daily candles for one currency over `range`. Empty when the API has none.
    fn daily_candles(&self, currency: &Currency, range: &DateRange) -> SdkResult<Vec<Candle>>;
}
