//! Kite Connect v3 REST client.
//!
//! Covers the two endpoints the scanner needs: historical candles and
//! regular market orders.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kitescan_core::error::{BrokerError, DataError};
use kitescan_core::traits::{HistoricalSource, OrderGateway};
use kitescan_core::types::{Bar, Interval, OrderIntent, OrderRecord};
use reqwest::{header, Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info};

const KITE_BASE_URL: &str = "https://api.kite.trade";

/// Kite API response envelope.
#[derive(Debug, Deserialize)]
struct KiteEnvelope<T> {
    status: String,
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    error_type: Option<String>,
}

/// Candle rows come as `[timestamp, open, high, low, close, volume]`.
type CandleRow = (String, f64, f64, f64, f64, f64);

#[derive(Debug, Default, Deserialize)]
struct CandleData {
    candles: Vec<CandleRow>,
}

#[derive(Debug, Default, Deserialize)]
struct OrderData {
    order_id: String,
}

/// Parse a candle row into a bar.
fn parse_candle_row(row: &CandleRow) -> Result<Bar, DataError> {
    // Kite timestamps carry a numeric offset, e.g. 2024-01-15T09:15:00+0530
    let timestamp = DateTime::parse_from_str(&row.0, "%Y-%m-%dT%H:%M:%S%z")
        .map_err(|e| DataError::ParseError(format!("bad candle timestamp {}: {}", row.0, e)))?
        .timestamp_millis();

    Ok(Bar::new(timestamp, row.1, row.2, row.3, row.4, row.5))
}

/// Client for the Kite Connect REST API.
#[derive(Clone)]
pub struct KiteClient {
    client: Client,
    base_url: String,
}

impl KiteClient {
    /// Create a new client.
    ///
    /// Every request carries the versioned auth header Kite expects.
    pub fn new(api_key: &str, access_token: &str) -> Result<Self, BrokerError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            "X-Kite-Version",
            header::HeaderValue::from_static("3"),
        );
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("token {}:{}", api_key, access_token))
                .map_err(|e| BrokerError::Configuration(e.to_string()))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| BrokerError::Connection(e.to_string()))?;

        Ok(Self {
            client,
            base_url: KITE_BASE_URL.to_string(),
        })
    }

    /// Override the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn status_error(status: StatusCode, body: String) -> BrokerError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                BrokerError::AuthenticationError(body)
            }
            _ => BrokerError::ApiError(format!("{}: {}", status, body)),
        }
    }

    /// Fetch historical candles for an instrument token.
    pub async fn historical_candles(
        &self,
        instrument_token: &str,
        interval: Interval,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Bar>, BrokerError> {
        let url = format!(
            "{}/instruments/historical/{}/{}",
            self.base_url,
            instrument_token,
            interval.as_api_str()
        );
        let params = [
            ("from", from.format("%Y-%m-%d %H:%M:%S").to_string()),
            ("to", to.format("%Y-%m-%d %H:%M:%S").to_string()),
        ];

        debug!("GET {} from={} to={}", url, params[0].1, params[1].1);

        let resp = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| BrokerError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(Self::status_error(status, text));
        }

        let envelope: KiteEnvelope<CandleData> = resp
            .json()
            .await
            .map_err(|e| BrokerError::ApiError(e.to_string()))?;

        if envelope.status != "success" {
            return Err(BrokerError::ApiError(
                envelope.message.unwrap_or_else(|| "unknown error".into()),
            ));
        }

        let data = envelope
            .data
            .ok_or_else(|| BrokerError::ApiError("response missing data".into()))?;

        let mut bars = data
            .candles
            .iter()
            .map(parse_candle_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| BrokerError::ApiError(e.to_string()))?;

        bars.sort_by_key(|b| b.timestamp);
        Ok(bars)
    }
}

#[async_trait]
impl HistoricalSource for KiteClient {
    async fn fetch_bars(
        &self,
        token: &str,
        interval: Interval,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Bar>, DataError> {
        self.historical_candles(token, interval, from, to)
            .await
            .map_err(|e| match e {
                BrokerError::Connection(msg) | BrokerError::NetworkError(msg) => {
                    DataError::ConnectionError(msg)
                }
                other => DataError::Internal(other.to_string()),
            })
    }

    fn name(&self) -> &str {
        "kite"
    }
}

#[async_trait]
impl OrderGateway for KiteClient {
    /// One blocking call, no retry; the caller logs failures and
    /// continues without an order id.
    async fn place_market_order(&self, intent: &OrderIntent) -> Result<OrderRecord, BrokerError> {
        let url = format!("{}/orders/regular", self.base_url);
        let form = [
            ("exchange", intent.exchange.clone()),
            ("tradingsymbol", intent.tradingsymbol.clone()),
            ("transaction_type", intent.action.to_string()),
            ("quantity", intent.quantity.to_string()),
            ("product", "MIS".to_string()),
            ("order_type", "MARKET".to_string()),
            ("validity", "DAY".to_string()),
        ];

        let resp = self
            .client
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(|e| BrokerError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    BrokerError::AuthenticationError(text)
                }
                _ => BrokerError::OrderRejected(format!("{}: {}", status, text)),
            });
        }

        let envelope: KiteEnvelope<OrderData> = resp
            .json()
            .await
            .map_err(|e| BrokerError::ApiError(e.to_string()))?;

        if envelope.status != "success" {
            return Err(BrokerError::OrderRejected(
                envelope.message.unwrap_or_else(|| "unknown error".into()),
            ));
        }

        let data = envelope
            .data
            .ok_or_else(|| BrokerError::ApiError("response missing data".into()))?;

        info!("Order executed: {}, Order ID: {}", intent, data.order_id);
        Ok(OrderRecord::live(data.order_id))
    }

    fn name(&self) -> &str {
        "kite"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_candle_row() {
        let row = (
            "2024-01-15T09:15:00+0530".to_string(),
            15010.0,
            15050.0,
            14990.0,
            15030.0,
            123456.0,
        );
        let bar = parse_candle_row(&row).unwrap();

        // 09:15 IST is 03:45 UTC
        assert_eq!(bar.datetime().format("%H:%M").to_string(), "03:45");
        assert!((bar.close - 15030.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_candle_row_bad_timestamp() {
        let row = ("yesterday".to_string(), 1.0, 2.0, 0.5, 1.5, 0.0);
        assert!(matches!(
            parse_candle_row(&row),
            Err(DataError::ParseError(_))
        ));
    }

    #[test]
    fn test_candles_envelope_parsing() {
        let json = r#"{
            "status": "success",
            "data": {
                "candles": [
                    ["2024-01-15T09:15:00+0530", 15010.0, 15050.0, 14990.0, 15030.0, 1200],
                    ["2024-01-15T09:20:00+0530", 15030.0, 15080.5, 15020.0, 15072.25, 800]
                ]
            }
        }"#;

        let envelope: KiteEnvelope<CandleData> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.status, "success");

        let data = envelope.data.unwrap();
        assert_eq!(data.candles.len(), 2);
        assert!((data.candles[1].4 - 15072.25).abs() < 1e-9);
    }

    #[test]
    fn test_error_envelope_parsing() {
        let json = r#"{
            "status": "error",
            "message": "Incorrect `api_key` or `access_token`.",
            "error_type": "TokenException"
        }"#;

        let envelope: KiteEnvelope<CandleData> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.status, "error");
        assert!(envelope.data.is_none());
        assert!(envelope.message.unwrap().contains("access_token"));
    }

    #[test]
    fn test_order_envelope_parsing() {
        let json = r#"{"status": "success", "data": {"order_id": "151220000000000"}}"#;

        let envelope: KiteEnvelope<OrderData> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data.unwrap().order_id, "151220000000000");
    }

    #[test]
    fn test_status_error_mapping() {
        assert!(matches!(
            KiteClient::status_error(StatusCode::FORBIDDEN, "denied".into()),
            BrokerError::AuthenticationError(_)
        ));
        assert!(matches!(
            KiteClient::status_error(StatusCode::INTERNAL_SERVER_ERROR, "boom".into()),
            BrokerError::ApiError(_)
        ));
    }
}
