//! Shared fixtures for unit tests: a scripted translator, a recording view and
//! a local chat-completion endpoint.

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub use crate::session::Screen;
use crate::session::View;
use crate::translation::{Language, TranslationError, TranslationResponse, Translator};

type Reply = Result<String, TranslationError>;

/// Translator double. Each call consumes the next scripted reply; replies
/// created with `gated_reply` only settle once the test sends on the gate.
#[derive(Default)]
pub struct FakeTranslator {
    calls: Mutex<Vec<(String, Language)>>,
    replies: Mutex<VecDeque<oneshot::Receiver<Reply>>>,
}

impl FakeTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a reply that is available immediately.
    pub fn reply(&self, reply: Reply) {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(reply);
        self.replies.lock().expect("replies lock").push_back(rx);
    }

    /// Queues a reply that resolves when the returned sender fires.
    pub fn gated_reply(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.replies.lock().expect("replies lock").push_back(rx);
        tx
    }

    pub fn calls(&self) -> Vec<(String, Language)> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl Translator for FakeTranslator {
    fn name(&self) -> &str {
        "fake"
    }

    async fn translate(&self, text: &str, target: Language) -> Result<String, TranslationError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push((text.to_string(), target));
        let next = self.replies.lock().expect("replies lock").pop_front();
        match next {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(TranslationError::MalformedResponse("gate dropped".into()))),
            None => Err(TranslationError::MalformedResponse("no scripted reply".into())),
        }
    }
}

/// One recorded call on `FakeView`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    ShowTranslating,
    HideTranslating,
    DisplayResults,
    DisplayError,
    ShowAlert,
    ShowInputView,
    ShowResultsView,
    Clear,
    SelectLanguage(Language),
    FocusInput,
}

/// View double that mirrors what a real screen would show.
#[derive(Debug, Default)]
pub struct FakeView {
    pub input: String,
    pub language: String,
    pub translating: bool,
    pub original: String,
    pub translated: String,
    pub alerts: Vec<String>,
    pub screen: Screen,
    pub focused: bool,
    pub calls: Vec<ViewCall>,
}

impl FakeView {
    pub fn with_input(input: &str) -> Self {
        Self {
            input: input.to_string(),
            language: Language::French.ui_value().to_string(),
            ..Self::default()
        }
    }
}

impl View for FakeView {
    fn input_text(&self) -> String {
        self.input.clone()
    }

    fn selected_language(&self) -> String {
        self.language.clone()
    }

    fn show_translating(&mut self) {
        self.translating = true;
        self.calls.push(ViewCall::ShowTranslating);
    }

    fn hide_translating(&mut self) {
        self.translating = false;
        self.calls.push(ViewCall::HideTranslating);
    }

    fn display_results(&mut self, response: &TranslationResponse) {
        self.original = response.original_text.clone();
        self.translated = response.translated_text.clone();
        self.calls.push(ViewCall::DisplayResults);
    }

    fn display_error(&mut self, original_text: &str, message: &str) {
        self.original = original_text.to_string();
        self.translated = message.to_string();
        self.calls.push(ViewCall::DisplayError);
    }

    fn show_alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
        self.calls.push(ViewCall::ShowAlert);
    }

    fn show_input_view(&mut self) {
        self.screen = Screen::Input;
        self.calls.push(ViewCall::ShowInputView);
    }

    fn show_results_view(&mut self) {
        self.screen = Screen::Results;
        self.calls.push(ViewCall::ShowResultsView);
    }

    fn clear(&mut self) {
        self.input.clear();
        self.original.clear();
        self.translated.clear();
        self.calls.push(ViewCall::Clear);
    }

    fn select_language(&mut self, language: Language) {
        self.language = language.ui_value().to_string();
        self.calls.push(ViewCall::SelectLanguage(language));
    }

    fn focus_input(&mut self) {
        self.focused = true;
        self.calls.push(ViewCall::FocusInput);
    }
}

/// Captured HTTP request data for assertions.
#[derive(Clone, Debug)]
pub struct CapturedRequest {
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct StubState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    status: StatusCode,
    body: Arc<String>,
}

/// Local chat-completion endpoint answering every request with a fixed
/// status and body.
pub struct StubServer {
    addr: SocketAddr,
    state: StubState,
    handle: JoinHandle<()>,
}

impl StubServer {
    pub async fn start(status: StatusCode, body: impl Into<String>) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("local addr");
        let state = StubState {
            requests: Arc::new(Mutex::new(Vec::new())),
            status,
            body: Arc::new(body.into()),
        };
        let app = Router::new()
            .route("/v1/chat/completions", post(chat_completion))
            .with_state(state.clone());
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        Self {
            addr,
            state,
            handle,
        }
    }

    /// An endpoint on a port nothing listens on.
    pub async fn unreachable_endpoint() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind probe listener");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);
        format!("http://{}/v1/chat/completions", addr)
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/v1/chat/completions", self.addr)
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().expect("requests lock").clone()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn chat_completion(
    State(state): State<StubState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let body = serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body));
    state
        .requests
        .lock()
        .expect("requests lock")
        .push(CapturedRequest { headers, body });
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.as_str().to_string(),
    )
}
