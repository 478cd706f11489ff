#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
};
use podsite_http::{ApiConfig, RetryPolicy};
use serde_json::Value as JsonValue;

#[derive(Clone)]
pub struct MockResponse {
    status: StatusCode,
    body: String,
    delay: Duration,
}

impl MockResponse {
    pub fn json(status: StatusCode, body: JsonValue) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::from_millis(0),
        }
    }

    /// Raw body, for responses that are deliberately not valid JSON.
    pub fn text(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_owned(),
            delay: Duration::from_millis(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Clone)]
struct MockState {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    hits: Arc<AtomicUsize>,
    seen_headers: Arc<Mutex<Vec<HeaderMap>>>,
}

/// Serves queued responses in order regardless of path; an empty queue
/// answers 500, which doubles as an always-failing backend.
async fn content_handler(State(state): State<MockState>, headers: HeaderMap) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    state
        .seen_headers
        .lock()
        .expect("header log mutex must not be poisoned")
        .push(headers);

    let response = {
        let mut queue = state
            .responses
            .lock()
            .expect("response queue mutex must not be poisoned");
        queue.pop_front().unwrap_or_else(|| {
            MockResponse::text(
                StatusCode::INTERNAL_SERVER_ERROR,
                r#"{"error":"no mock response available"}"#,
            )
        })
    };

    if !response.delay.is_zero() {
        tokio::time::sleep(response.delay).await;
    }

    (
        response.status,
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
}

pub struct TestServer {
    pub base_url: String,
    pub hits: Arc<AtomicUsize>,
    pub seen_headers: Arc<Mutex<Vec<HeaderMap>>>,
    task: tokio::task::JoinHandle<()>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub async fn spawn_server(responses: Vec<MockResponse>) -> TestServer {
    let state = MockState {
        responses: Arc::new(Mutex::new(responses.into())),
        hits: Arc::new(AtomicUsize::new(0)),
        seen_headers: Arc::new(Mutex::new(Vec::new())),
    };

    let app = axum::Router::new()
        .fallback(content_handler)
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("must bind test listener");
    let address = listener.local_addr().expect("must have local addr");
    let task = tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("mock server must run");
    });

    TestServer {
        base_url: format!("http://{address}"),
        hits: state.hits,
        seen_headers: state.seen_headers,
        task,
    }
}

/// Config pointed at the mock server with a short request timeout.
pub fn config(server: &TestServer, retry: RetryPolicy) -> ApiConfig {
    ApiConfig {
        base_url: server.base_url.clone(),
        timeout: Duration::from_secs(1),
        retry,
        ..ApiConfig::default()
    }
}

/// Retry policy with delays short enough for tests.
pub fn fast_retry(max_attempts: u32) -> RetryPolicy {
    RetryPolicy::new(max_attempts, Duration::from_millis(1), 2.0)
}

/// A base URL on which nothing listens (the port is bound, then released).
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("must bind probe listener");
    let address = listener.local_addr().expect("must have local addr");
    drop(listener);
    format!("http://{address}")
}
