// src/services/rate_provider.rs
use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A fresh exchange-rate quote for one ordered currency pair.
#[derive(Debug, Clone, PartialEq)]
pub struct RateQuote {
    /// Concatenated pair key, e.g. "EURUSD".
    pub pair: String,
    pub rate: f64,
}

#[derive(Debug, Error)]
pub enum RateError {
    #[error("rate service request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("rate service rejected the request (code {code}): {info}")]
    Api { code: u16, info: String },
    #[error("rate service response is missing the {pair} quote")]
    MissingPair { pair: String },
}

/// Live exchange-rate lookup for an ordered (source, target) ISO pair.
#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn get_rate(&self, source: &str, target: &str) -> Result<RateQuote, RateError>;
}

/// Client for a currencylayer-style quote service.
#[derive(Debug, Clone)]
pub struct CurrencyLayerClient {
    http: reqwest::Client,
    base_url: String,
    access_key: String,
}

impl CurrencyLayerClient {
    pub fn new(
        base_url: impl Into<String>,
        access_key: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let base_url = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_key: access_key.into(),
        })
    }
}

#[async_trait]
impl RateProvider for CurrencyLayerClient {
    async fn get_rate(&self, source: &str, target: &str) -> Result<RateQuote, RateError> {
        let pair = format!("{source}{target}");
        let response = self
            .http
            .get(format!("{}/live", self.base_url))
            .query(&[
                ("access_key", self.access_key.as_str()),
                ("currencies", target),
                ("source", source),
                ("format", "1"),
            ])
            .send()
            .await?
            .error_for_status()?;
        let payload: LivePayload = response.json().await?;
        let rate = quote_from_payload(payload, &pair)?;
        Ok(RateQuote { pair, rate })
    }
}

/// Body of a `/live` response. On failure `success` is false and `error`
/// carries the service's code and description.
#[derive(Debug, Deserialize)]
struct LivePayload {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    quotes: HashMap<String, f64>,
    #[serde(default)]
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: u16,
    #[serde(default)]
    info: String,
}

fn quote_from_payload(payload: LivePayload, pair: &str) -> Result<f64, RateError> {
    if !payload.success {
        let (code, info) = payload
            .error
            .map(|error| (error.code, error.info))
            .unwrap_or_else(|| (0, "request was not successful".to_string()));
        return Err(RateError::Api { code, info });
    }
    payload
        .quotes
        .get(pair)
        .copied()
        .ok_or_else(|| RateError::MissingPair {
            pair: pair.to_string(),
        })
}
