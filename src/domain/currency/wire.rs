//! Wire types for currency-level responses (REST).

use crate::shared::serde_util::decimal_lenient;
use crate::shared::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw entry from `GET currencies`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrencyResponse {
    pub id: Currency,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Raw entry from `GET prices`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceResponse {
    pub currency: Currency,
    #[serde(with = "decimal_lenient")]
    pub price: Decimal,
}

/// Raw entry from `GET dashboard`. The endpoint uses camelCase keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub currency: Currency,
    #[serde(default, with = "decimal_lenient::option")]
    pub close: Option<Decimal>,
    #[serde(default, with = "decimal_lenient::option")]
    pub day_open: Option<Decimal>,
    #[serde(default, with = "decimal_lenient::option")]
    pub day_volume: Option<Decimal>,
    #[serde(default, with = "decimal_lenient::option")]
    pub week_open: Option<Decimal>,
    #[serde(default, with = "decimal_lenient::option")]
    pub month_open: Option<Decimal>,
    #[serde(default, with = "decimal_lenient::option")]
    pub year_open: Option<Decimal>,
    #[serde(default, with = "decimal_lenient::option")]
    pub high: Option<Decimal>,
    #[serde(default, with = "decimal_lenient::option")]
    pub available_supply: Option<Decimal>,
    #[serde(default, with = "decimal_lenient::option")]
    pub max_supply: Option<Decimal>,
}
