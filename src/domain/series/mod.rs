//! Multi-coin price series — daily opens, simple and cumulative returns,
//! aligned on timestamp and forward-filled.

#[cfg(feature = "http")]
pub mod client;
pub mod returns;
pub mod state;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

use crate::domain::candle::Candle;
use crate::error::{SdkError, SdkResult};
use crate::shared::{Currency, DateRange};
use crate::source::MarketDataSource;

pub use state::{AlignedSeries, CoinFrame, Column};

/// Restricts which per-coin columns end up in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnFilter {
    /// Keep only the return columns (drop the open price).
    Returns,
    /// Keep only the open price (drop both return columns).
    Prices,
}

impl FromStr for ColumnFilter {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "returns" => Ok(ColumnFilter::Returns),
            "prices" => Ok(ColumnFilter::Prices),
            other => Err(SdkError::InvalidParameter(format!(
                "unknown column filter '{}', expected 'returns' or 'prices'",
                other
            ))),
        }
    }
}

pub fn open_column(currency: &Currency) -> String {
    currency.column("open")
}

pub fn returns_column(currency: &Currency) -> String {
    currency.column("returns")
}

pub fn cumulative_returns_column(currency: &Currency) -> String {
    currency.column("cumulative_returns")
}

/// Build one coin's frame from its candles. `None` when there are no candles.
///
/// Candles are ordered by timestamp; a repeated timestamp keeps its first candle.
pub fn coin_frame(
    currency: &Currency,
    mut candles: Vec<Candle>,
    filter: Option<ColumnFilter>,
) -> Option<CoinFrame> {
    if candles.is_empty() {
        return None;
    }
    candles.sort_by_key(|c| c.timestamp);
    candles.dedup_by_key(|c| c.timestamp);

    let opens: Vec<Decimal> = candles.iter().map(|c| c.open).collect();
    let simple = returns::simple_returns(&opens);
    let cumulative = returns::cumulative_returns(&simple);

    let mut columns = Vec::with_capacity(3);
    if filter != Some(ColumnFilter::Returns) {
        columns.push(Column::new(
            open_column(currency),
            opens.into_iter().map(Some).collect(),
        ));
    }
    if filter != Some(ColumnFilter::Prices) {
        columns.push(Column::new(returns_column(currency), simple));
        columns.push(Column::new(cumulative_returns_column(currency), cumulative));
    }

    Some(CoinFrame {
        currency: currency.clone(),
        timestamps: candles.iter().map(|c| c.timestamp).collect(),
        columns,
    })
}

/// Daily open prices and returns for `coins` over `range`, as one table.
///
/// Coins are fetched one at a time in list order. A coin with no candles is
/// skipped with a warning and listed in [`AlignedSeries::skipped`]; any other
/// failure aborts the call. A coin repeated in the list is fetched once.
pub fn aggregate<S: MarketDataSource>(
    source: &S,
    coins: &[Currency],
    range: &DateRange,
    filter: Option<ColumnFilter>,
) -> SdkResult<AlignedSeries> {
    if coins.is_empty() {
        return Err(SdkError::InvalidParameter("coin list is empty".to_string()));
    }

    let mut series = AlignedSeries::new();
    let mut seen = HashSet::new();

    for coin in coins {
        if !seen.insert(coin) {
            tracing::debug!(currency = %coin, "duplicate coin ignored");
            continue;
        }

        tracing::debug!(currency = %coin, start = %range.start(), end = %range.end(), "fetching daily candles");
        let candles = source.daily_candles(coin, range)?;

        match coin_frame(coin, candles, filter) {
            Some(frame) => series.left_join(frame),
            None => {
                tracing::warn!(
                    currency = %coin,
                    start = %range.start(),
                    end = %range.end(),
                    "no candle data in range, coin skipped"
                );
                series.record_skipped(coin.clone());
            }
        }
    }

    series.forward_fill();
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn candle(day: u32, open: i64) -> Candle {
        let price = Decimal::from(open);
        Candle {
            timestamp: Utc.with_ymd_and_hms(2019, 1, day, 0, 0, 0).unwrap(),
            open: price,
            high: price,
            low: price,
            close: price,
            volume: None,
        }
    }

    #[test]
    fn test_column_filter_from_str() {
        assert_eq!("returns".parse::<ColumnFilter>().unwrap(), ColumnFilter::Returns);
        assert_eq!("prices".parse::<ColumnFilter>().unwrap(), ColumnFilter::Prices);
        assert!(matches!(
            "volume".parse::<ColumnFilter>(),
            Err(SdkError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_coin_frame_all_columns() {
        let btc = Currency::from("BTC");
        let frame = coin_frame(&btc, vec![candle(1, 100), candle(2, 110)], None).unwrap();
        let names: Vec<_> = frame.columns.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["BTC_open", "BTC_returns", "BTC_cumulative_returns"]);
    }

    #[test]
    fn test_coin_frame_returns_filter_drops_open() {
        let btc = Currency::from("BTC");
        let frame =
            coin_frame(&btc, vec![candle(1, 100)], Some(ColumnFilter::Returns)).unwrap();
        let names: Vec<_> = frame.columns.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["BTC_returns", "BTC_cumulative_returns"]);
    }

    #[test]
    fn test_coin_frame_prices_filter_drops_both_returns() {
        let btc = Currency::from("BTC");
        let frame = coin_frame(&btc, vec![candle(1, 100)], Some(ColumnFilter::Prices)).unwrap();
        let names: Vec<_> = frame.columns.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["BTC_open"]);
    }

    #[test]
    fn test_coin_frame_sorts_and_dedups() {
        let btc = Currency::from("BTC");
        let frame = coin_frame(
            &btc,
            vec![candle(3, 30), candle(1, 10), candle(3, 99), candle(2, 20)],
            Some(ColumnFilter::Prices),
        )
        .unwrap();
        assert_eq!(frame.timestamps.len(), 3);
        assert!(frame.timestamps.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(frame.columns[0].values()[2], Some(Decimal::from(30)));
    }

    #[test]
    fn test_coin_frame_empty() {
        assert!(coin_frame(&Currency::from("BTC"), vec![], None).is_none());
    }
}
