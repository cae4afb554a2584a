//! View controllers for the six user actions.
//!
//! Each handler is the same small state machine: idle → loading →
//! (success | error), re-entered on every submission. Output goes
//! through an injected [`DisplaySink`] looked up by [`RegionId`], never
//! by ambient lookup, so the whole layer runs without a UI.
//!
//! Overlapping submissions on one region are resolved by a generation
//! counter: submitting bumps the region's generation, and a response may
//! only publish if its generation is still current. A stale response is
//! dropped with a debug log; the in-flight request itself is not
//! cancelled.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::client::ApiClient;
use crate::models::PriceSavePayload;
use crate::render;
use crate::{ApiError, Symbol, ValidationError};

/// Visual style of a published result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Info,
    Success,
    Error,
}

/// Output target for one region.
///
/// `reset_form` exists for sinks with editable input state (the original
/// front-end cleared its form after a successful save); sinks without
/// one keep the default no-op.
pub trait DisplaySink: Send + Sync {
    fn show_loading(&self);
    fn show_result(&self, message: &str, kind: ResultKind);
    fn reset_form(&self) {}
}

/// Logical names of the six output regions. No two handlers share a
/// region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RegionId {
    Save,
    Latest,
    History,
    Analyze,
    Portfolio,
    Fetch,
}

impl RegionId {
    pub const ALL: [RegionId; 6] = [
        RegionId::Save,
        RegionId::Latest,
        RegionId::History,
        RegionId::Analyze,
        RegionId::Portfolio,
        RegionId::Fetch,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            RegionId::Save => "save-result",
            RegionId::Latest => "get-result",
            RegionId::History => "history-result",
            RegionId::Analyze => "analyze-result",
            RegionId::Portfolio => "portfolio-result",
            RegionId::Fetch => "fetch-result",
        }
    }
}

struct Region {
    sink: Arc<dyn DisplaySink>,
    generation: AtomicU64,
}

impl Region {
    fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn publish(&self, generation: u64, message: &str, kind: ResultKind) -> bool {
        if self.generation.load(Ordering::SeqCst) != generation {
            log::debug!("dropping stale response for superseded submission (generation {generation})");
            return false;
        }
        self.sink.show_result(message, kind);
        true
    }
}

/// Explicit mapping from region name to its display sink.
#[derive(Default)]
pub struct Regions {
    map: BTreeMap<RegionId, Arc<Region>>,
}

impl Regions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, id: RegionId, sink: Arc<dyn DisplaySink>) -> Self {
        self.map.insert(
            id,
            Arc::new(Region {
                sink,
                generation: AtomicU64::new(0),
            }),
        );
        self
    }

    /// Log which regions are wired up and return the missing ones.
    pub fn verify(&self) -> Vec<RegionId> {
        let mut missing = Vec::new();
        for id in RegionId::ALL {
            if self.map.contains_key(&id) {
                log::debug!("display region registered: {}", id.name());
            } else {
                log::warn!("display region missing: {}", id.name());
                missing.push(id);
            }
        }
        missing
    }

    fn get(&self, id: RegionId) -> Option<&Arc<Region>> {
        self.map.get(&id)
    }
}

/// Raw form input for the save-price action. Fields hold what the user
/// typed; empty string means the field was left blank.
#[derive(Debug, Clone, Default)]
pub struct SaveForm {
    pub symbol: String,
    pub price: String,
    pub volume: String,
    pub change: String,
    pub change_percent: String,
}

/// Raw form input for the history query. `days` and `limit` are passed
/// through to the service unvalidated.
#[derive(Debug, Clone, Default)]
pub struct HistoryForm {
    pub symbol: String,
    pub days: String,
    pub limit: String,
}

/// The six view controllers bound to a client and a region map.
pub struct Dashboard {
    client: ApiClient,
    regions: Regions,
}

impl Dashboard {
    pub fn new(client: ApiClient, regions: Regions) -> Self {
        Self { client, regions }
    }

    pub fn regions(&self) -> &Regions {
        &self.regions
    }

    /// Validate the form, `POST /stock`, and echo the saved fields. A
    /// successful save also resets the sink's form.
    pub async fn save_price(&self, form: &SaveForm) -> ResultKind {
        let work = async {
            let payload = build_save_payload(form)?;
            let receipt = self.client.save_price(&payload).await?;
            Ok(render::render_save_receipt(&receipt))
        };
        self.run_region(RegionId::Save, true, work).await
    }

    /// `GET /stock/{symbol}` and render the latest stored price.
    pub async fn latest_price(&self, symbol: &str) -> ResultKind {
        let work = async {
            let symbol = Symbol::parse(symbol)?;
            let result = self.client.latest_price(&symbol).await?;
            Ok(render::render_latest_price(&result.data))
        };
        self.run_region(RegionId::Latest, false, work).await
    }

    /// `GET /stock/{symbol}/history` and render statistics plus the five
    /// most recent records.
    pub async fn history(&self, form: &HistoryForm) -> ResultKind {
        let work = async {
            let symbol = Symbol::parse(&form.symbol)?;
            let result = self.client.history(&symbol, &form.days, &form.limit).await?;
            Ok(render::render_history(&result))
        };
        self.run_region(RegionId::History, false, work).await
    }

    /// `GET /analyze/{symbol}` and render the indicator report.
    pub async fn analyze(&self, symbol: &str) -> ResultKind {
        let work = async {
            let symbol = Symbol::parse(symbol)?;
            let result = self.client.analyze(&symbol).await?;
            Ok(render::render_analysis(&result))
        };
        self.run_region(RegionId::Analyze, false, work).await
    }

    /// `GET /portfolio` and render the full holdings list.
    pub async fn portfolio(&self) -> ResultKind {
        let work = async {
            let result = self.client.portfolio().await?;
            Ok(render::render_portfolio(&result))
        };
        self.run_region(RegionId::Portfolio, false, work).await
    }

    /// `POST /stock/fetch/{symbol}` and render the refreshed quote. A
    /// successful refresh also resets the sink's form.
    pub async fn external_fetch(&self, symbol: &str) -> ResultKind {
        let work = async {
            let symbol = Symbol::parse(symbol)?;
            let result = self.client.external_fetch(&symbol).await?;
            Ok(render::render_external_fetch(&result))
        };
        self.run_region(RegionId::Fetch, true, work).await
    }

    async fn run_region(
        &self,
        id: RegionId,
        reset_on_success: bool,
        work: impl Future<Output = Result<String, ApiError>>,
    ) -> ResultKind {
        let Some(region) = self.regions.get(id) else {
            // Deliberate defensive no-op: an unregistered region logs and
            // swallows the update instead of propagating an error.
            log::warn!("no display sink registered for region {}", id.name());
            return ResultKind::Info;
        };

        let generation = region.begin();
        region.sink.show_loading();

        match work.await {
            Ok(message) => {
                if region.publish(generation, &message, ResultKind::Success) && reset_on_success {
                    region.sink.reset_form();
                }
                ResultKind::Success
            }
            Err(error) => {
                region.publish(generation, &render::error_line(error.message()), ResultKind::Error);
                ResultKind::Error
            }
        }
    }
}

fn build_save_payload(form: &SaveForm) -> Result<PriceSavePayload, ApiError> {
    let symbol = Symbol::parse(&form.symbol)?;

    let price = form.price.trim();
    if price.is_empty() {
        return Err(ValidationError::MissingField { field: "price" }.into());
    }
    let price: f64 = price.parse().map_err(|_| ValidationError::NotNumeric {
        field: "price",
        value: form.price.clone(),
    })?;

    let volume = parse_optional_int(&form.volume, "volume")?;
    let change = parse_optional_float(&form.change, "change")?;
    let change_percent = parse_optional_float(&form.change_percent, "change_percent")?;

    Ok(PriceSavePayload {
        symbol: symbol.as_str().to_owned(),
        price,
        volume,
        change,
        change_percent,
    })
}

fn parse_optional_int(input: &str, field: &'static str) -> Result<Option<i64>, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ValidationError::NotInteger {
            field,
            value: input.to_owned(),
        })
}

fn parse_optional_float(input: &str, field: &'static str) -> Result<Option<f64>, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ValidationError::NotNumeric {
            field,
            value: input.to_owned(),
        })
}
