//! Market-cap domain — the API has no market-cap-per-coin endpoint, so it is
//! derived here as price × available supply.
//!
//! - [`derive_market_caps`] joins one sparkline snapshot with one supply snapshot.
//! - [`snapshot`] fetches both feeds for a single day and derives the table.
//! - [`history`] repeats [`snapshot`] once per day for one coin.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{SdkError, SdkResult};
use crate::shared::{Currency, DateRange};
use crate::source::MarketDataSource;

use self::wire::{SparklineEntry, SupplyEntry};

/// Representative price of a currency at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSample {
    pub currency: Currency,
    pub price: Decimal,
}

/// A joined price/supply row. `market_cap` is always `price * available_supply`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketCapRow {
    pub currency: Currency,
    pub price: Decimal,
    pub available_supply: Decimal,
    pub market_cap: Decimal,
}

/// One day of a single coin's market-cap history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketCapPoint {
    pub date: NaiveDate,
    pub market_cap: Decimal,
}

/// Total market cap across all currencies, as reported by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallMarketCapPoint {
    pub timestamp: DateTime<Utc>,
    pub market_cap: Decimal,
}

impl MarketCapRow {
    fn new(currency: Currency, price: Decimal, available_supply: Decimal) -> SdkResult<Self> {
        let market_cap = price.checked_mul(available_supply).ok_or_else(|| {
            SdkError::malformed(
                "market cap",
                format!("{} overflowed ({} * {})", currency, price, available_supply),
            )
        })?;
        Ok(Self {
            currency,
            price,
            available_supply,
            market_cap,
        })
    }
}

/// Join a sparkline snapshot with a supply snapshot by currency.
///
/// Rows whose currency has no supply entry, or whose `close_available` is
/// null, are dropped. The result is sorted by market cap, largest first;
/// ties are broken by currency so the order is deterministic.
pub fn derive_market_caps(
    sparkline: Vec<SparklineEntry>,
    supplies: Vec<SupplyEntry>,
) -> SdkResult<Vec<MarketCapRow>> {
    let mut supply_by_currency: HashMap<Currency, Option<Decimal>> = HashMap::new();
    for entry in supplies {
        supply_by_currency
            .entry(entry.currency)
            .or_insert(entry.close_available);
    }

    let mut rows = Vec::with_capacity(sparkline.len());
    for entry in sparkline {
        let sample = PriceSample::try_from(entry)?;
        match supply_by_currency.get(&sample.currency) {
            Some(Some(supply)) => {
                rows.push(MarketCapRow::new(sample.currency, sample.price, *supply)?)
            }
            _ => tracing::trace!(currency = %sample.currency, "no supply, row dropped"),
        }
    }

    rows.sort_by(|a, b| {
        b.market_cap
            .cmp(&a.market_cap)
            .then_with(|| a.currency.cmp(&b.currency))
    });
    Ok(rows)
}

/// Keep only the row for `coin`; empty when the coin is absent.
pub fn filter_coin(rows: Vec<MarketCapRow>, coin: &Currency) -> Vec<MarketCapRow> {
    rows.into_iter().filter(|r| &r.currency == coin).collect()
}

/// Market-cap table for every currency (or just `coin`) at `date` 00:00 UTC.
pub fn snapshot<S: MarketDataSource>(
    source: &S,
    date: NaiveDate,
    coin: Option<&Currency>,
) -> SdkResult<Vec<MarketCapRow>> {
    let range = DateRange::day(date);
    let prices = source.sparkline(&range)?;
    let supplies = source.supplies(&range)?;
    let rows = derive_market_caps(prices, supplies)?;

    Ok(match coin {
        Some(c) => filter_coin(rows, c),
        None => rows,
    })
}

/// Daily market cap of `coin` for every date in `range`, ascending.
///
/// Issues one sparkline + supply request pair per day. A day on which the
/// coin has no derivable row aborts the whole call with
/// [`SdkError::MissingData`].
pub fn history<S: MarketDataSource>(
    source: &S,
    coin: &Currency,
    range: &DateRange,
) -> SdkResult<Vec<MarketCapPoint>> {
    let mut points = Vec::new();
    for date in range.days() {
        tracing::debug!(currency = %coin, %date, "market cap history step");
        let row = snapshot(source, date, Some(coin))?
            .into_iter()
            .next()
            .ok_or_else(|| SdkError::MissingData {
                currency: coin.clone(),
                date,
            })?;
        points.push(MarketCapPoint {
            date,
            market_cap: row.market_cap,
        });
    }
    Ok(points)
}
