//! Currencies sub-client — list, current prices, dashboard.

use crate::client::NomicsClient;
use crate::domain::currency::wire::{CurrencyResponse, DashboardResponse, PriceResponse};
use crate::domain::currency::{CurrencyInfo, CurrentPrice, DashboardEntry};
use crate::domain::decode;
use crate::error::SdkResult;

/// Sub-client for currency-level operations.
pub struct Currencies<'a> {
    pub(crate) client: &'a NomicsClient,
}

impl<'a> Currencies<'a> {
    pub fn list(&self) -> SdkResult<Vec<CurrencyInfo>> {
        let raw = self.client.http.get_currencies()?;
        let wire: Vec<CurrencyResponse> = decode("currencies", raw)?;
        Ok(wire.into_iter().map(Into::into).collect())
    }

    pub fn prices(&self) -> SdkResult<Vec<CurrentPrice>> {
        let raw = self.client.http.get_current_prices()?;
        let wire: Vec<PriceResponse> = decode("prices", raw)?;
        Ok(wire.into_iter().map(Into::into).collect())
    }

    pub fn dashboard(&self) -> SdkResult<Vec<DashboardEntry>> {
        let raw = self.client.http.get_dashboard()?;
        let wire: Vec<DashboardResponse> = decode("dashboard", raw)?;
        Ok(wire.into_iter().map(Into::into).collect())
    }
}
