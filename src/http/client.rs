//! Low-level HTTP client — `NomicsHttp`.
//!
//! One method per API endpoint. Each returns the raw decoded JSON body;
//! decoding into wire types happens in the domain sub-clients.

use crate::config::ClientConfig;
use crate::error::{AuthError, HttpError, SdkError, SdkResult};
use crate::shared::{Currency, DateRange, Interval};

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Serialize;

const NO_PARAMS: &[(&str, &str)] = &[];

/// Query for the date-ranged endpoints.
#[derive(Debug, Serialize)]
struct RangeQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    interval: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<&'a str>,
    start: String,
    end: String,
}

impl<'a> RangeQuery<'a> {
    fn new(range: &DateRange) -> Self {
        Self {
            interval: None,
            currency: None,
            start: range.start_param(),
            end: range.end_param(),
        }
    }
}

/// Low-level HTTP client for the Nomics REST API.
#[derive(Clone)]
pub struct NomicsHttp {
    base_url: String,
    /// Access key. NEVER logged or put into error messages.
    api_key: Option<String>,
    client: Client,
}

impl std::fmt::Debug for NomicsHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NomicsHttp")
            .field("base_url", &self.base_url)
            .field("has_key", &self.api_key.is_some())
            .finish()
    }
}

impl NomicsHttp {
    pub fn new(config: &ClientConfig) -> SdkResult<Self> {
        let client = Client::builder().build().map_err(HttpError::from)?;

        Ok(Self {
            base_url: config.normalized_base_url(),
            api_key: config.api_key.clone(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    // ── Currencies ───────────────────────────────────────────────────────

    /// `GET currencies` — every tracked currency.
    pub fn get_currencies(&self) -> SdkResult<serde_json::Value> {
        self.request("currencies", NO_PARAMS)
    }

    /// `GET prices` — current price for every currency.
    pub fn get_current_prices(&self) -> SdkResult<serde_json::Value> {
        self.request("prices", NO_PARAMS)
    }

    /// `GET dashboard` — general overview of every currency.
    pub fn get_dashboard(&self) -> SdkResult<serde_json::Value> {
        self.request("dashboard", NO_PARAMS)
    }

    // ── Market cap ───────────────────────────────────────────────────────

    /// `GET market-cap/history` — total market cap across all currencies.
    pub fn get_market_cap_history(&self, range: &DateRange) -> SdkResult<serde_json::Value> {
        self.request("market-cap/history", &RangeQuery::new(range))
    }

    /// `GET currencies/sparkline` — price samples for every currency.
    pub fn get_sparkline(&self, range: &DateRange) -> SdkResult<serde_json::Value> {
        self.request("currencies/sparkline", &RangeQuery::new(range))
    }

    /// `GET supplies/interval` — supply figures for every currency.
    ///
    /// The API only has supply data from January 2018 onwards.
    pub fn get_supplies(&self, range: &DateRange) -> SdkResult<serde_json::Value> {
        self.request("supplies/interval", &RangeQuery::new(range))
    }

    // ── Candles ──────────────────────────────────────────────────────────

    /// `GET candles` — OHLCV history for one currency.
    pub fn get_candles(
        &self,
        currency: &Currency,
        interval: Interval,
        range: &DateRange,
    ) -> SdkResult<serde_json::Value> {
        let query = RangeQuery {
            interval: Some(interval.as_str()),
            currency: Some(currency.as_str()),
            ..RangeQuery::new(range)
        };
        self.request("candles", &query)
    }

    // ── Core request ─────────────────────────────────────────────────────

    /// Issue `GET {base_url}{action}?key={key}&{query}` and decode the JSON body.
    ///
    /// Fails with [`AuthError::MissingKey`] before any network I/O when no key
    /// is configured, and with [`HttpError::Status`] on any non-200 response.
    pub fn request<Q: Serialize + ?Sized>(
        &self,
        action: &str,
        query: &Q,
    ) -> SdkResult<serde_json::Value> {
        let key = self.api_key.as_deref().ok_or(AuthError::MissingKey)?;
        let params = encode_query(query)?;
        let url = build_url(&self.base_url, action, key, &params)?;
        let redacted = build_redacted_url(&self.base_url, action, &params);

        tracing::debug!(url = %redacted, "GET");

        let resp = self.client.get(&url).send().map_err(HttpError::from)?;
        let status = resp.status();

        if status != StatusCode::OK {
            let body = resp.text().unwrap_or_default();
            tracing::debug!(status = status.as_u16(), url = %redacted, "request failed");
            return Err(HttpError::Status {
                status: status.as_u16(),
                body,
                url: redacted,
            }
            .into());
        }

        let text = resp.text().map_err(HttpError::from)?;
        serde_json::from_str(&text).map_err(|e| SdkError::malformed(&redacted, e))
    }
}

fn encode_query<Q: Serialize + ?Sized>(query: &Q) -> SdkResult<String> {
    serde_urlencoded::to_string(query)
        .map_err(|e| SdkError::InvalidParameter(format!("unencodable query: {}", e)))
}

fn build_url(base_url: &str, action: &str, key: &str, params: &str) -> SdkResult<String> {
    let key_param = serde_urlencoded::to_string([("key", key)].as_slice())
        .map_err(|e| SdkError::InvalidParameter(format!("unencodable key: {}", e)))?;
    Ok(join_url(base_url, action, &key_param, params))
}

fn build_redacted_url(base_url: &str, action: &str, params: &str) -> String {
    join_url(base_url, action, "key=***", params)
}

fn join_url(base_url: &str, action: &str, key_param: &str, params: &str) -> String {
    if params.is_empty() {
        format!("{}{}?{}", base_url, action, key_param)
    } else {
        format!("{}{}?{}&{}", base_url, action, key_param, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::JoinHandle;

    fn range(a: (i32, u32, u32), b: (i32, u32, u32)) -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(a.0, a.1, a.2).unwrap(),
            NaiveDate::from_ymd_opt(b.0, b.1, b.2).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_range_query_percent_encodes_colons() {
        let q = RangeQuery::new(&range((2019, 1, 1), (2019, 1, 3)));
        let encoded = encode_query(&q).unwrap();
        assert_eq!(
            encoded,
            "start=2019-01-01T00%3A00%3A00Z&end=2019-01-03T00%3A00%3A00Z"
        );
    }

    #[test]
    fn test_candles_query_order() {
        let q = RangeQuery {
            interval: Some(Interval::Day1.as_str()),
            currency: Some("BTC"),
            ..RangeQuery::new(&range((2019, 3, 29), (2019, 3, 29)))
        };
        let url = build_url("https://api.nomics.com/v1/", "candles", "k", &encode_query(&q).unwrap())
            .unwrap();
        assert_eq!(
            url,
            "https://api.nomics.com/v1/candles?key=k&interval=1d&currency=BTC\
             &start=2019-03-29T00%3A00%3A00Z&end=2019-03-29T00%3A00%3A00Z"
        );
    }

    #[test]
    fn test_url_without_params() {
        let url = build_url("https://api.nomics.com/v1/", "prices", "k", "").unwrap();
        assert_eq!(url, "https://api.nomics.com/v1/prices?key=k");
        assert_eq!(encode_query(NO_PARAMS).unwrap(), "");
    }

    #[test]
    fn test_key_is_encoded() {
        let url = build_url("http://h/", "prices", "a&b", "").unwrap();
        assert_eq!(url, "http://h/prices?key=a%26b");
    }

    #[test]
    fn test_redacted_url_hides_key() {
        let url = build_redacted_url("http://h/", "currencies/sparkline", "start=x");
        assert_eq!(url, "http://h/currencies/sparkline?key=***&start=x");
    }

    #[test]
    fn test_missing_key_fails_before_io() {
        // Port 9 (discard) would fail the transport; the auth check must win.
        let config = ClientConfig {
            base_url: "http://127.0.0.1:9/".to_string(),
            ..Default::default()
        };
        let http = NomicsHttp::new(&config).unwrap();
        let err = http.get_current_prices().unwrap_err();
        assert!(matches!(err, SdkError::Auth(AuthError::MissingKey)));
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let config = ClientConfig {
            api_key: Some("topsecret".to_string()),
            ..Default::default()
        };
        let http = NomicsHttp::new(&config).unwrap();
        assert!(http.has_api_key());
        assert!(!format!("{:?}", http).contains("topsecret"));
    }

    // ── Request round-trips against a local one-shot server ──────────────

    const KEY: &str = "s3cret";

    /// Accept one connection, answer with `status` and `body`, and hand back
    /// the request line that was received.
    fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}/v1/", listener.local_addr().unwrap());
        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&head)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });
        (base_url, handle)
    }

    fn keyed_http(base_url: &str) -> NomicsHttp {
        NomicsHttp::new(&ClientConfig {
            api_key: Some(KEY.to_string()),
            base_url: base_url.to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_ok_body_is_decoded() {
        let (base_url, server) = serve_once("200 OK", r#"[{"currency":"BTC","price":"3693.41"}]"#);
        let value = keyed_http(&base_url).get_current_prices().unwrap();
        assert_eq!(value, serde_json::json!([{"currency": "BTC", "price": "3693.41"}]));
        assert_eq!(server.join().unwrap(), "GET /v1/prices?key=s3cret HTTP/1.1");
    }

    #[test]
    fn test_candles_request_line() {
        let (base_url, server) = serve_once("200 OK", "[]");
        keyed_http(&base_url)
            .get_candles(
                &Currency::from("BTC"),
                Interval::Day1,
                &range((2019, 1, 1), (2019, 1, 2)),
            )
            .unwrap();
        assert_eq!(
            server.join().unwrap(),
            "GET /v1/candles?key=s3cret&interval=1d&currency=BTC\
             &start=2019-01-01T00%3A00%3A00Z&end=2019-01-02T00%3A00%3A00Z HTTP/1.1"
        );
    }

    #[test]
    fn test_not_found_is_status_error_with_redacted_url() {
        let (base_url, server) = serve_once("404 Not Found", "nope!");
        let err = keyed_http(&base_url).get_current_prices().unwrap_err();
        server.join().unwrap();

        assert!(!err.to_string().contains(KEY));
        match err {
            SdkError::Http(HttpError::Status { status, body, url }) => {
                assert_eq!(status, 404);
                assert_eq!(body, "nope!");
                assert_eq!(url, format!("{}prices?key=***", base_url));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_200_success_status_is_still_an_error() {
        let (base_url, server) = serve_once("201 Created", "[]");
        let err = keyed_http(&base_url).get_currencies().unwrap_err();
        server.join().unwrap();
        assert!(matches!(
            err,
            SdkError::Http(HttpError::Status { status: 201, .. })
        ));
    }

    #[test]
    fn test_undecodable_ok_body_is_malformed() {
        let (base_url, server) = serve_once("200 OK", "<html>maintenance</html>");
        let err = keyed_http(&base_url).get_dashboard().unwrap_err();
        server.join().unwrap();
        match err {
            SdkError::MalformedResponse(msg) => {
                assert!(msg.contains("dashboard?key=***"));
                assert!(!msg.contains(KEY));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
