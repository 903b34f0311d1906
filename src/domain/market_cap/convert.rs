//! Conversion: sparkline entries → representative prices, history points.

use super::wire::{MarketCapHistoryResponse, SparklineEntry};
use super::{OverallMarketCapPoint, PriceSample};
use crate::error::SdkError;

impl TryFrom<SparklineEntry> for PriceSample {
    type Error = SdkError;

    /// Takes the first price sample; an entry with none is malformed.
    fn try_from(source: SparklineEntry) -> Result<Self, Self::Error> {
        let price = source.prices.first().copied().ok_or_else(|| {
            SdkError::malformed(
                "currencies/sparkline",
                format!("no price sample for {}", source.currency),
            )
        })?;
        Ok(PriceSample {
            currency: source.currency,
            price,
        })
    }
}

impl From<MarketCapHistoryResponse> for OverallMarketCapPoint {
    fn from(source: MarketCapHistoryResponse) -> Self {
        Self {
            timestamp: source.timestamp,
            market_cap: source.market_cap,
        }
    }
}
