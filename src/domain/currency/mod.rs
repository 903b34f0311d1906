//! Currency domain — tracked currencies, current prices, dashboard overview.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::shared::Currency;

/// A tracked currency. Fields beyond `id` vary by plan and are kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyInfo {
    pub id: Currency,
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Latest price of one currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentPrice {
    pub currency: Currency,
    pub price: Decimal,
}

/// One row of the dashboard overview.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardEntry {
    pub currency: Currency,
    pub close: Option<Decimal>,
    pub day_open: Option<Decimal>,
    pub day_volume: Option<Decimal>,
    pub week_open: Option<Decimal>,
    pub month_open: Option<Decimal>,
    pub year_open: Option<Decimal>,
    pub high: Option<Decimal>,
    pub available_supply: Option<Decimal>,
    pub max_supply: Option<Decimal>,
}

impl DashboardEntry {
    /// Change since the day open, as a fraction (`0.05` = +5%).
    pub fn day_change(&self) -> Option<Decimal> {
        match (self.close, self.day_open) {
            (Some(close), Some(open)) if !open.is_zero() => Some(close / open - Decimal::ONE),
            _ => None,
        }
    }

    /// `close * available_supply`, when both are reported.
    pub fn market_cap(&self) -> Option<Decimal> {
        self.close?.checked_mul(self.available_supply?)
    }
}
