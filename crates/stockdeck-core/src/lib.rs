//! # stockdeck-core
//!
//! Typed client and rendering layer for the stockdeck price service.
//!
//! The crate is a thin integration shim over a remote HTTP API: it owns
//! no data and implements no market math. What it does own is the
//! contract between user actions and the service:
//!
//! - **Configuration**: an immutable [`ApiConfig`] holding the base URL,
//!   the symbolic endpoint map, and the request timeout
//! - **Transport**: the [`HttpClient`] trait with a reqwest-backed
//!   production implementation
//! - **Client**: [`ApiClient`]: JSON-header injection, status checking,
//!   and normalization of every failure into a single [`ApiError`]
//! - **Wire models**: the request/response payloads of the six
//!   operations
//! - **Renderers**: pure response-to-display-string formatting
//! - **View layer**: six idle/loading/success/error handlers publishing
//!   through injected [`DisplaySink`]s, with per-region generation
//!   gating for overlapping submissions
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stockdeck_core::{ApiClient, ApiConfig, ReqwestHttpClient, Symbol};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::new("https://api.example.com/prod");
//!     let client = ApiClient::new(config, Arc::new(ReqwestHttpClient::new()));
//!
//!     let symbol = Symbol::parse("AAPL")?;
//!     let latest = client.latest_price(&symbol).await?;
//!     println!("AAPL price: {:.2}", latest.data.price);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod render;
pub mod symbol;
pub mod view;

pub use client::ApiClient;
pub use config::{ApiConfig, EndpointMap, Operation, DEFAULT_TIMEOUT_MS};
pub use error::{ApiError, ValidationError};
pub use http::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient};
pub use models::{
    AnalysisResult, BollingerBands, ExternalFetchResult, HistoryEntry, HistoryPeriod,
    HistoryResult, HistoryStatistics, Indicators, LatestPriceResult, PortfolioEntry,
    PortfolioResult, PriceRecord, PriceSavePayload, PriceStats, Recommendation, SaveReceipt,
    SavedPrice,
};
pub use symbol::Symbol;
pub use view::{Dashboard, DisplaySink, HistoryForm, RegionId, Regions, ResultKind, SaveForm};
