//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types and the pure logic over them
//! - `wire.rs` — Raw serde structs matching API responses
//! - `convert.rs` — `TryFrom`/`From` conversions with validation
//! - `state.rs` — Tabular containers with join/fill methods (series only)
//! - `client.rs` — Sub-client with HTTP methods

pub mod candle;
pub mod currency;
pub mod market_cap;
pub mod series;

use serde::de::DeserializeOwned;

use crate::error::{SdkError, SdkResult};

/// Decode a raw JSON body into a wire type. Missing or ill-typed fields
/// become [`SdkError::MalformedResponse`].
pub(crate) fn decode<T: DeserializeOwned>(
    endpoint: &str,
    value: serde_json::Value,
) -> SdkResult<T> {
    serde_json::from_value(value).map_err(|e| SdkError::malformed(endpoint, e))
}
