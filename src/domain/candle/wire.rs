//! Wire types for candle responses (REST).

use crate::shared::serde_util::decimal_lenient;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw candle from `GET candles`. Numeric fields arrive as strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandleResponse {
    pub timestamp: DateTime<Utc>,
    #[serde(default, with = "decimal_lenient::option")]
    pub open: Option<Decimal>,
    #[serde(default, with = "decimal_lenient::option")]
    pub high: Option<Decimal>,
    #[serde(default, with = "decimal_lenient::option")]
    pub low: Option<Decimal>,
    #[serde(default, with = "decimal_lenient::option")]
    pub close: Option<Decimal>,
    #[serde(default, with = "decimal_lenient::option")]
    pub volume: Option<Decimal>,
}
