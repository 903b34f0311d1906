//! Wire types for sparkline, supply and market-cap history responses (REST).

use crate::shared::serde_util::decimal_lenient;
use crate::shared::Currency;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One currency's entry from `GET currencies/sparkline`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SparklineEntry {
    pub currency: Currency,
    #[serde(default)]
    pub timestamps: Vec<String>,
    /// Price samples, oldest first. Only the first is used for snapshots.
    #[serde(default, with = "decimal_lenient::vec")]
    pub prices: Vec<Decimal>,
}

/// One currency's entry from `GET supplies/interval`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupplyEntry {
    pub currency: Currency,
    #[serde(default, with = "decimal_lenient::option")]
    pub open_available: Option<Decimal>,
    #[serde(default, with = "decimal_lenient::option")]
    pub close_available: Option<Decimal>,
    #[serde(default, with = "decimal_lenient::option")]
    pub open_max: Option<Decimal>,
    #[serde(default, with = "decimal_lenient::option")]
    pub close_max: Option<Decimal>,
}

/// One point from `GET market-cap/history`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketCapHistoryResponse {
    pub timestamp: DateTime<Utc>,
    #[serde(with = "decimal_lenient")]
    pub market_cap: Decimal,
}
