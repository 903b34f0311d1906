//! High-level client — `NomicsClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the accessor methods, and the
//! [`MarketDataSource`] implementation the derived computations run on.

use crate::config::ClientConfig;
use crate::domain::candle::client::Candles;
use crate::domain::candle::Candle;
use crate::domain::currency::client::Currencies;
use crate::domain::decode;
use crate::domain::market_cap::client::MarketCaps;
use crate::domain::market_cap::wire::{SparklineEntry, SupplyEntry};
use crate::domain::series::client::Series;
use crate::error::{SdkError, SdkResult};
use crate::http::NomicsHttp;
use crate::shared::{Currency, DateRange};
use crate::source::MarketDataSource;

// Re-export sub-client types for convenience.
pub use crate::domain::candle::client::Candles as CandlesClient;
pub use crate::domain::currency::client::Currencies as CurrenciesClient;
pub use crate::domain::market_cap::client::MarketCaps as MarketCapsClient;
pub use crate::domain::series::client::Series as SeriesClient;

/// The primary entry point for the Nomics SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.market_caps()`, `client.series()`, etc. Every call is a
/// blocking round-trip; multi-day and multi-coin operations issue their
/// requests one after another.
#[derive(Debug, Clone)]
pub struct NomicsClient {
    pub(crate) http: NomicsHttp,
}

impl NomicsClient {
    pub fn builder() -> NomicsClientBuilder {
        NomicsClientBuilder::default()
    }

    /// Client with the given key and the default base URL.
    pub fn new(api_key: impl Into<String>) -> SdkResult<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Client configured from `NOMICS_API_KEY` / `NOMICS_API_URL`.
    pub fn from_env() -> SdkResult<Self> {
        Self::builder().config(ClientConfig::from_env()).build()
    }

    /// Low-level access: one GET per call, raw JSON bodies.
    pub fn http(&self) -> &NomicsHttp {
        &self.http
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn currencies(&self) -> Currencies<'_> {
        Currencies { client: self }
    }

    pub fn candles(&self) -> Candles<'_> {
        Candles { client: self }
    }

    pub fn market_caps(&self) -> MarketCaps<'_> {
        MarketCaps { client: self }
    }

    pub fn series(&self) -> Series<'_> {
        Series { client: self }
    }
}

impl MarketDataSource for NomicsClient {
    fn sparkline(&self, range: &DateRange) -> SdkResult<Vec<SparklineEntry>> {
        decode("currencies/sparkline", self.http.get_sparkline(range)?)
    }

    fn supplies(&self, range: &DateRange) -> SdkResult<Vec<SupplyEntry>> {
        decode("supplies/interval", self.http.get_supplies(range)?)
    }

    fn daily_candles(&self, currency: &Currency, range: &DateRange) -> SdkResult<Vec<Candle>> {
        self.candles().daily(currency, range)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default)]
pub struct NomicsClientBuilder {
    config: ClientConfig,
}

impl NomicsClientBuilder {
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.config.base_url = url.to_string();
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> SdkResult<NomicsClient> {
        if self.config.base_url.trim().is_empty() {
            return Err(SdkError::InvalidParameter("base URL is empty".to_string()));
        }
        Ok(NomicsClient {
            http: NomicsHttp::new(&self.config)?,
        })
    }
}
