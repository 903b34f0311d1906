//! Network URL constants for the Nomics SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.nomics.com/v1/";
