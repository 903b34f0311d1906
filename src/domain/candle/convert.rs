//! Conversion: CandleResponse → Candle (TryFrom + validation).

use super::wire::CandleResponse;
use super::{Candle, CandleValidationError};
use rust_decimal::Decimal;

impl TryFrom<CandleResponse> for Candle {
    type Error = CandleValidationError;

    fn try_from(source: CandleResponse) -> Result<Self, Self::Error> {
        let ts = source.timestamp;
        let require = |value: Option<Decimal>, field: &'static str| {
            value.ok_or(CandleValidationError::MissingField(ts, field))
        };

        Ok(Candle {
            timestamp: ts,
            open: require(source.open, "open")?,
            high: require(source.high, "high")?,
            low: require(source.low, "low")?,
            close: require(source.close, "close")?,
            volume: source.volume,
        })
    }
}
