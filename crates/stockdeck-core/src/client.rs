use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::{ApiConfig, Operation};
use crate::http::{HttpClient, HttpMethod, HttpRequest};
use crate::models::{
    AnalysisResult, ExternalFetchResult, HistoryResult, LatestPriceResult, PortfolioResult,
    PriceSavePayload, SaveReceipt,
};
use crate::{ApiError, Symbol};

/// Typed client for the price service.
///
/// Stateless beyond its immutable configuration: cloning is cheap and a
/// single instance may serve any number of concurrent calls. Every
/// request injects `Content-Type: application/json`, and every failure
/// (transport, non-2xx status, malformed body) surfaces as one
/// [`ApiError`]. No retries, no status-code classification.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: Arc<dyn HttpClient>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, http: Arc<dyn HttpClient>) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Issue a request against a fully built URL and return the parsed
    /// JSON body.
    ///
    /// The body is parsed regardless of status. On a non-2xx status the
    /// error message is the body's `message` field when one exists,
    /// otherwise `HTTP <status>`; transport failures carry the transport
    /// message.
    pub async fn request(
        &self,
        method: HttpMethod,
        url: String,
        body: Option<String>,
    ) -> Result<Value, ApiError> {
        log::debug!("dispatching {method:?} {url}");

        let mut request = HttpRequest::new(method, url)
            .with_header("content-type", "application/json")
            .with_timeout_ms(self.config.timeout_ms());
        if let Some(body) = body {
            request = request.with_body(body);
        }

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|error| ApiError::new(error.message()))?;

        if !response.is_success() {
            let message = serde_json::from_str::<Value>(&response.body)
                .ok()
                .and_then(|parsed| {
                    parsed
                        .get("message")
                        .and_then(Value::as_str)
                        .map(str::to_owned)
                })
                .unwrap_or_else(|| format!("HTTP {}", response.status));
            return Err(ApiError::new(message));
        }

        serde_json::from_str(&response.body)
            .map_err(|error| ApiError::new(format!("malformed response body: {error}")))
    }

    /// `POST /stock`
    pub async fn save_price(&self, payload: &PriceSavePayload) -> Result<SaveReceipt, ApiError> {
        let url = self.config.url_for_plain(Operation::SavePrice);
        let body = serde_json::to_string(payload)
            .map_err(|error| ApiError::new(format!("failed to encode payload: {error}")))?;
        let value = self.request(HttpMethod::Post, url, Some(body)).await?;
        decode(value)
    }

    /// `GET /stock/{symbol}`
    pub async fn latest_price(&self, symbol: &Symbol) -> Result<LatestPriceResult, ApiError> {
        let url = self.config.url_for(Operation::LatestPrice, symbol);
        let value = self.request(HttpMethod::Get, url, None).await?;
        decode(value)
    }

    /// `GET /stock/{symbol}/history?days&limit`
    ///
    /// `days` and `limit` are passed through as raw form values; only
    /// query encoding is applied.
    pub async fn history(
        &self,
        symbol: &Symbol,
        days: &str,
        limit: &str,
    ) -> Result<HistoryResult, ApiError> {
        let url = format!(
            "{}?days={}&limit={}",
            self.config.url_for(Operation::History, symbol),
            urlencoding::encode(days),
            urlencoding::encode(limit),
        );
        let value = self.request(HttpMethod::Get, url, None).await?;
        decode(value)
    }

    /// `GET /analyze/{symbol}`
    pub async fn analyze(&self, symbol: &Symbol) -> Result<AnalysisResult, ApiError> {
        let url = self.config.url_for(Operation::Analyze, symbol);
        let value = self.request(HttpMethod::Get, url, None).await?;
        decode(value)
    }

    /// `GET /portfolio`
    pub async fn portfolio(&self) -> Result<PortfolioResult, ApiError> {
        let url = self.config.url_for_plain(Operation::Portfolio);
        let value = self.request(HttpMethod::Get, url, None).await?;
        decode(value)
    }

    /// `POST /stock/fetch/{symbol}` (no body)
    pub async fn external_fetch(&self, symbol: &Symbol) -> Result<ExternalFetchResult, ApiError> {
        let url = self.config.url_for(Operation::ExternalFetch, symbol);
        let value = self.request(HttpMethod::Post, url, None).await?;
        decode(value)
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value)
        .map_err(|error| ApiError::new(format!("unexpected response shape: {error}")))
}
