//! Candle domain — daily OHLCV aggregates for one currency.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One interval's open/high/low/close/volume aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Option<Decimal>,
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum CandleValidationError {
    MissingField(DateTime<Utc>, &'static str),
}

impl fmt::Display for CandleValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandleValidationError::MissingField(ts, field) => {
                write!(f, "Candle at {} is missing '{}'", ts.to_rfc3339(), field)
            }
        }
    }
}

impl std::error::Error for CandleValidationError {}
