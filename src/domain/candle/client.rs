//! Candles sub-client — OHLCV history per currency.

use crate::client::NomicsClient;
use crate::domain::candle::wire::CandleResponse;
use crate::domain::candle::Candle;
use crate::domain::decode;
use crate::error::{SdkError, SdkResult};
use crate::shared::{Currency, DateRange, Interval};

/// Sub-client for candle operations.
pub struct Candles<'a> {
    pub(crate) client: &'a NomicsClient,
}

impl<'a> Candles<'a> {
    /// Candles at the given interval over `range`, in response order.
    pub fn get(
        &self,
        currency: &Currency,
        interval: Interval,
        range: &DateRange,
    ) -> SdkResult<Vec<Candle>> {
        let raw = self.client.http.get_candles(currency, interval, range)?;
        let wire: Vec<CandleResponse> = decode("candles", raw)?;
        wire.into_iter()
            .map(|c| {
                Candle::try_from(c).map_err(|e| SdkError::malformed("candles", e))
            })
            .collect()
    }

    /// Daily (`1d`) candles over `range`.
    pub fn daily(&self, currency: &Currency, range: &DateRange) -> SdkResult<Vec<Candle>> {
        self.get(currency, Interval::Day1, range)
    }

    /// Raw JSON body of `GET candles` with the daily interval.
    pub fn daily_raw(&self, currency: &Currency, range: &DateRange) -> SdkResult<serde_json::Value> {
        self.client.http.get_candles(currency, Interval::Day1, range)
    }
}
