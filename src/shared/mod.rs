//! Currency symbols, candle intervals and inclusive date ranges, plus the
//! `YYYY-MM-DDT00:00:00Z` formatting every date-ranged endpoint expects.

pub mod serde_util;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::SdkError;

// ─── Currency ────────────────────────────────────────────────────────────────

/// Ticker symbol exactly as the API spells it (`"BTC"`, `"ETH"`).
///
/// Compared verbatim: it is the join key between the price, supply and candle
/// feeds, and the prefix of every per-coin column in an aligned series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `{symbol}_{suffix}`, e.g. `BTC_open`.
    pub fn column(&self, suffix: &str) -> String {
        format!("{}_{}", self.0, suffix)
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Currency {
    fn from(symbol: &str) -> Self {
        Self(symbol.to_owned())
    }
}

impl From<String> for Currency {
    fn from(symbol: String) -> Self {
        Self(symbol)
    }
}

impl PartialEq<str> for Currency {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Currency {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// ─── Interval ────────────────────────────────────────────────────────────────

/// Candle interval accepted by the `candles` endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "1m")]
    Minute1,
    #[serde(rename = "5m")]
    Minute5,
    #[serde(rename = "30m")]
    Minute30,
    #[serde(rename = "1h")]
    Hour1,
    #[serde(rename = "4h")]
    Hour4,
    #[default]
    #[serde(rename = "1d")]
    Day1,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minute1 => "1m",
            Self::Minute5 => "5m",
            Self::Minute30 => "30m",
            Self::Hour1 => "1h",
            Self::Hour4 => "4h",
            Self::Day1 => "1d",
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── DateRange ───────────────────────────────────────────────────────────────

/// Inclusive calendar-date range. Each bound is sent as midnight UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, SdkError> {
        if start > end {
            return Err(SdkError::InvalidParameter(format!(
                "start date {} is after end date {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// Single-day range: end defaults to start.
    pub fn day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// `start` as the API's ISO-8601 midnight timestamp.
    pub fn start_param(&self) -> String {
        iso_midnight(self.start)
    }

    /// `end` as the API's ISO-8601 midnight timestamp.
    pub fn end_param(&self) -> String {
        iso_midnight(self.end)
    }

    /// Every calendar date in the range, ascending.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        std::iter::successors(Some(self.start), move |d| {
            d.checked_add_days(Days::new(1)).filter(|next| *next <= end)
        })
    }
}

/// Format a date as `YYYY-MM-DDT00:00:00Z`.
pub fn iso_midnight(date: NaiveDate) -> String {
    format!("{}T00:00:00Z", date.format("%Y-%m-%d"))
}

/// Parse a `YYYY-MM-DD` string.
pub fn parse_date(s: &str) -> Result<NaiveDate, SdkError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| SdkError::InvalidParameter(format!("invalid date '{}': {}", s, e)))
}
