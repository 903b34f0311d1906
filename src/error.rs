//! Unified SDK error types.

use chrono::NaiveDate;
use thiserror::Error;

use crate::shared::Currency;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// A field or element the response contract promises was absent or ill-typed.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The queried currency had no derivable row for a day.
    #[error("No market data for {currency} on {date}")]
    MissingData { currency: Currency, date: NaiveDate },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Any non-200 response. `url` never contains the access key.
    #[error("Status {status}: {body}\nRequest: {url}")]
    Status { status: u16, body: String, url: String },
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("API key is empty")]
    MissingKey,
}

/// Result alias used across the SDK.
pub type SdkResult<T> = Result<T, SdkError>;

impl SdkError {
    pub(crate) fn malformed(context: impl std::fmt::Display, detail: impl std::fmt::Display) -> Self {
        SdkError::MalformedResponse(format!("{context}: {detail}"))
    }
}
