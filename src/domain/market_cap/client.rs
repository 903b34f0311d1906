//! Market-cap sub-client — per-coin snapshots and history, overall history.

use chrono::NaiveDate;

use crate::client::NomicsClient;
use crate::domain::decode;
use crate::domain::market_cap::wire::MarketCapHistoryResponse;
use crate::domain::market_cap::{self, MarketCapPoint, MarketCapRow, OverallMarketCapPoint};
use crate::error::SdkResult;
use crate::shared::{Currency, DateRange};

/// Sub-client for market-cap operations.
pub struct MarketCaps<'a> {
    pub(crate) client: &'a NomicsClient,
}

impl<'a> MarketCaps<'a> {
    /// Market-cap ranking at `date` 00:00 UTC, optionally narrowed to one coin.
    pub fn snapshot(
        &self,
        date: NaiveDate,
        coin: Option<&Currency>,
    ) -> SdkResult<Vec<MarketCapRow>> {
        market_cap::snapshot(self.client, date, coin)
    }

    /// Daily market cap of `coin` for every date in `[start, end]`.
    pub fn history(
        &self,
        coin: &Currency,
        start: NaiveDate,
        end: NaiveDate,
    ) -> SdkResult<Vec<MarketCapPoint>> {
        let range = DateRange::new(start, end)?;
        market_cap::history(self.client, coin, &range)
    }

    /// Total market cap across all currencies over `range`.
    pub fn overall(&self, range: &DateRange) -> SdkResult<Vec<OverallMarketCapPoint>> {
        let raw = self.client.http.get_market_cap_history(range)?;
        let wire: Vec<MarketCapHistoryResponse> = decode("market-cap/history", raw)?;
        Ok(wire.into_iter().map(Into::into).collect())
    }
}
