//! Conversion: currency wire types → domain types.

use super::wire::{CurrencyResponse, DashboardResponse, PriceResponse};
use super::{CurrencyInfo, CurrentPrice, DashboardEntry};

impl From<CurrencyResponse> for CurrencyInfo {
    fn from(source: CurrencyResponse) -> Self {
        Self {
            id: source.id,
            extra: source.extra,
        }
    }
}

impl From<PriceResponse> for CurrentPrice {
    fn from(source: PriceResponse) -> Self {
        Self {
            currency: source.currency,
            price: source.price,
        }
    }
}

impl From<DashboardResponse> for DashboardEntry {
    fn from(source: DashboardResponse) -> Self {
        Self {
            currency: source.currency,
            close: source.close,
            day_open: source.day_open,
            day_volume: source.day_volume,
            week_open: source.week_open,
            month_open: source.month_open,
            year_open: source.year_open,
            high: source.high,
            available_supply: source.available_supply,
            max_supply: source.max_supply,
        }
    }
}
