use crate::Symbol;

/// Default per-request timeout applied to every API call.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Immutable client configuration.
///
/// Constructed once and handed to [`crate::ApiClient`]; nothing mutates
/// it afterwards. Holds the API base URL, the symbolic endpoint map, and
/// the request timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    endpoints: EndpointMap,
    environment: String,
    version: String,
    timeout_ms: u64,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            endpoints: EndpointMap::default(),
            environment: String::from("production"),
            version: String::from("2.0"),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Full URL for an operation against a symbol-bearing endpoint.
    pub fn url_for(&self, operation: Operation, symbol: &Symbol) -> String {
        format!(
            "{}{}",
            self.base_url,
            self.endpoints.path(operation).replace("{symbol}", &symbol.encoded())
        )
    }

    /// Full URL for an operation that takes no symbol.
    pub fn url_for_plain(&self, operation: Operation) -> String {
        format!("{}{}", self.base_url, self.endpoints.path(operation))
    }
}

/// Logical operation names exposed by the price service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    SavePrice,
    LatestPrice,
    History,
    Analyze,
    Portfolio,
    ExternalFetch,
}

/// Symbolic map from operation name to URL path template.
///
/// Templates use a `{symbol}` placeholder; the expanded value is always
/// percent-encoded before substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointMap {
    save: String,
    latest: String,
    history: String,
    analyze: String,
    portfolio: String,
    fetch: String,
}

impl Default for EndpointMap {
    fn default() -> Self {
        Self {
            save: String::from("/stock"),
            latest: String::from("/stock/{symbol}"),
            history: String::from("/stock/{symbol}/history"),
            analyze: String::from("/analyze/{symbol}"),
            portfolio: String::from("/portfolio"),
            fetch: String::from("/stock/fetch/{symbol}"),
        }
    }
}

impl EndpointMap {
    fn path(&self, operation: Operation) -> &str {
        match operation {
            Operation::SavePrice => &self.save,
            Operation::LatestPrice => &self.latest,
            Operation::History => &self.history,
            Operation::Analyze => &self.analyze,
            Operation::Portfolio => &self.portfolio,
            Operation::ExternalFetch => &self.fetch,
        }
    }
}
