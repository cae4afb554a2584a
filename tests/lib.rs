//! Shared test doubles for the stockdeck behavior tests: a scripted
//! HTTP transport and a recording display sink.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

pub use stockdeck_core::{
    ApiClient, ApiConfig, Dashboard, DisplaySink, HistoryForm, HttpClient, HttpError, HttpRequest,
    HttpResponse, RegionId, Regions, ResultKind, SaveForm, Symbol,
};

/// Canned transport outcome, optionally delayed to simulate a slow
/// in-flight request.
pub struct Scripted {
    pub delay_ms: u64,
    pub outcome: Result<HttpResponse, HttpError>,
}

impl Scripted {
    pub fn ok(status: u16, body: &str) -> Self {
        Self {
            delay_ms: 0,
            outcome: Ok(HttpResponse::with_status(status, body)),
        }
    }

    pub fn transport_failure(message: &str) -> Self {
        Self {
            delay_ms: 0,
            outcome: Err(HttpError::new(message)),
        }
    }

    pub fn delayed(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

/// Transport double that replays scripted outcomes in order and records
/// every request it saw.
#[derive(Default)]
pub struct ScriptedHttpClient {
    responses: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    pub fn new(responses: Vec<Scripted>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn single(response: Scripted) -> Arc<Self> {
        Self::new(vec![response])
    }

    pub fn recorded_requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);

        let scripted = self
            .responses
            .lock()
            .expect("response store should not be poisoned")
            .pop_front();

        Box::pin(async move {
            match scripted {
                Some(scripted) => {
                    if scripted.delay_ms > 0 {
                        tokio::time::sleep(std::time::Duration::from_millis(scripted.delay_ms))
                            .await;
                    }
                    scripted.outcome
                }
                None => Err(HttpError::new("no scripted response left")),
            }
        })
    }
}

/// Everything a sink was asked to display, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Loading,
    Result { message: String, kind: ResultKind },
    FormReset,
}

/// Display sink double that records the handler's state transitions.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SinkEvent>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<SinkEvent> {
        self.events
            .lock()
            .expect("event store should not be poisoned")
            .clone()
    }

    /// The most recent published result, if any.
    pub fn last_result(&self) -> Option<(String, ResultKind)> {
        self.events()
            .into_iter()
            .rev()
            .find_map(|event| match event {
                SinkEvent::Result { message, kind } => Some((message, kind)),
                _ => None,
            })
    }

    fn push(&self, event: SinkEvent) {
        self.events
            .lock()
            .expect("event store should not be poisoned")
            .push(event);
    }
}

impl DisplaySink for RecordingSink {
    fn show_loading(&self) {
        self.push(SinkEvent::Loading);
    }

    fn show_result(&self, message: &str, kind: ResultKind) {
        self.push(SinkEvent::Result {
            message: message.to_owned(),
            kind,
        });
    }

    fn reset_form(&self) {
        self.push(SinkEvent::FormReset);
    }
}

/// Client wired to a scripted transport against a fixed test base URL.
pub fn client_with(transport: Arc<ScriptedHttpClient>) -> ApiClient {
    ApiClient::new(ApiConfig::new("https://api.example.test/prod"), transport)
}

/// Dashboard with every region backed by its own recording sink.
pub fn dashboard_with(
    transport: Arc<ScriptedHttpClient>,
) -> (
    Dashboard,
    std::collections::BTreeMap<RegionId, Arc<RecordingSink>>,
) {
    let mut sinks = std::collections::BTreeMap::new();
    let mut regions = Regions::new();
    for id in RegionId::ALL {
        let sink = RecordingSink::new();
        regions = regions.register(id, sink.clone());
        sinks.insert(id, sink);
    }
    (Dashboard::new(client_with(transport), regions), sinks)
}
