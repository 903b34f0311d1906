//! # Nomics SDK
//!
//! A Rust client for the Nomics cryptocurrency market-data REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, derived computations
//! 2. **HTTP API** — `NomicsHttp`, one blocking GET per endpoint, raw JSON out
//! 3. **High-Level Client** — `NomicsClient` with nested sub-clients
//!
//! The API has no per-coin market-cap endpoint. `market_caps()` joins the
//! sparkline (price) and supply feeds client-side; `series()` merges
//! per-coin daily candles into one forward-filled table of opens and returns.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nomics_sdk::prelude::*;
//!
//! let client = NomicsClient::new("YOUR_KEY")?;
//!
//! let day = chrono::NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
//! let ranking = client.market_caps().snapshot(day, None)?;
//!
//! let coins = [Currency::from("BTC"), Currency::from("ETH")];
//! let table = client.series().prices(&coins, start, end, Some(ColumnFilter::Returns))?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, derivations.
pub mod domain;

/// The data feeds derived computations consume.
pub mod source;

/// Unified SDK error types.
pub mod error;

/// Client configuration.
pub mod config;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Blocking HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `NomicsClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Currency, DateRange, Interval};

    // Domain types
    pub use crate::domain::candle::Candle;
    pub use crate::domain::currency::{CurrencyInfo, CurrentPrice, DashboardEntry};
    pub use crate::domain::market_cap::{
        MarketCapPoint, MarketCapRow, OverallMarketCapPoint, PriceSample,
    };
    pub use crate::domain::series::{AlignedSeries, ColumnFilter, Column};

    // Data source seam
    pub use crate::source::MarketDataSource;

    // Errors
    pub use crate::error::{AuthError, HttpError, SdkError, SdkResult};

    // Config + network
    pub use crate::config::ClientConfig;
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        CandlesClient, CurrenciesClient, MarketCapsClient, NomicsClient, NomicsClientBuilder,
        SeriesClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::NomicsHttp;
}
