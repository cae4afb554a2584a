//! Wire shapes exchanged with the price service.
//!
//! These are transient payloads only; nothing here is persisted client
//! side. Unknown response fields are ignored, and optional request
//! fields are omitted from the serialized body rather than sent as null.

use serde::{Deserialize, Serialize};

/// Body for `POST /stock`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSavePayload {
    pub symbol: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_percent: Option<f64>,
}

/// Response of `POST /stock`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SaveReceipt {
    pub message: String,
    pub data: SavedPrice,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SavedPrice {
    pub symbol: String,
    pub price: f64,
    pub date: String,
}

/// Response of `GET /stock/{symbol}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LatestPriceResult {
    pub data: PriceRecord,
}

/// One stored price point. `timestamp` is unix seconds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PriceRecord {
    pub symbol: String,
    pub price: f64,
    pub timestamp: i64,
    #[serde(default)]
    pub volume: Option<i64>,
    #[serde(default)]
    pub change: Option<f64>,
    #[serde(default)]
    pub change_percent: Option<f64>,
}

/// Response of `GET /stock/{symbol}/history`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryResult {
    pub symbol: String,
    pub period: HistoryPeriod,
    pub statistics: HistoryStatistics,
    /// Server order, newest first. Not re-sorted client side.
    pub data: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryPeriod {
    pub days: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryStatistics {
    pub count: u64,
    pub max: f64,
    pub min: f64,
    pub avg: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: i64,
    pub price: f64,
}

/// Response of `GET /analyze/{symbol}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisResult {
    pub symbol: String,
    pub indicators: Indicators,
}

/// Indicator block computed server side. Every derived indicator is
/// optional; an absent field suppresses its display line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Indicators {
    pub analysis_date: String,
    pub data_points: u64,
    pub current_price: f64,
    #[serde(default)]
    pub sma_20: Option<f64>,
    #[serde(default)]
    pub ema_12: Option<f64>,
    #[serde(default)]
    pub volatility: Option<f64>,
    #[serde(default)]
    pub bollinger_bands: Option<BollingerBands>,
    #[serde(default)]
    pub recommendation: Option<Recommendation>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BollingerBands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recommendation {
    pub action: String,
    pub reason: String,
    pub confidence: String,
}

/// Response of `GET /portfolio`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PortfolioResult {
    pub statistics: PortfolioStatistics,
    /// Server order, one entry per symbol.
    pub portfolio: Vec<PortfolioEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PortfolioStatistics {
    pub total_symbols: u64,
    pub total_records: u64,
    pub price_stats: PriceStats,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PriceStats {
    pub highest: f64,
    pub lowest: f64,
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PortfolioEntry {
    pub symbol: String,
    pub price: f64,
    pub timestamp: i64,
}

/// Response of `POST /stock/fetch/{symbol}`.
///
/// `change_percent` arrives pre-formatted as a string (the upstream
/// provider includes the `%` suffix), unlike the numeric field of the
/// same name on [`PriceRecord`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExternalFetchResult {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: String,
    #[serde(default)]
    pub volume: Option<i64>,
    #[serde(default)]
    pub latest_trading_day: Option<String>,
    pub source: String,
}
