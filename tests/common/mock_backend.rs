//! Local HTTP server standing in for the storefront API.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::{watch, Mutex};

/// What the server saw for one request.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl CapturedRequest {
    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Scripted reply. Requests with nothing queued get an empty JSON array.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
    pub delay: Duration,
}

impl Default for MockResponse {
    fn default() -> Self {
        Self::json("[]")
    }
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    /// Error body shaped like the API's own (`{"message": ...}`).
    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            ..Self::json(&serde_json::json!({ "message": message }).to_string())
        }
    }

    pub fn text(body: &str) -> Self {
        Self {
            content_type: "text/plain",
            ..Self::json(body)
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay = Duration::from_millis(ms);
        self
    }
}

#[derive(Default)]
struct Script {
    seen: Vec<CapturedRequest>,
    replies: VecDeque<MockResponse>,
}

type Shared = Arc<Mutex<Script>>;

pub struct MockBackend {
    pub addr: SocketAddr,
    script: Shared,
    stop: watch::Sender<bool>,
}

impl MockBackend {
    /// Bind an ephemeral port and start serving.
    pub async fn start() -> Self {
        let script: Shared = Arc::default();
        let (stop, mut stopped) = watch::channel(false);

        let app = Router::new()
            .route("/{*path}", any(reply))
            .with_state(script.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock API");
        let addr = listener.local_addr().expect("mock API address");

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = stopped.changed().await;
                })
                .await;
        });

        Self { addr, script, stop }
    }

    pub async fn enqueue_response(&self, response: MockResponse) {
        self.script.lock().await.replies.push_back(response);
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.script.lock().await.seen.clone()
    }

    /// Base URL with the same `/api/v1` prefix as the real service.
    pub fn base_url(&self) -> String {
        format!("http://{}/api/v1", self.addr)
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        let _ = self.stop.send(true);
    }
}

async fn reply(State(script): State<Shared>, req: Request<Body>) -> Response<Body> {
    let captured = CapturedRequest {
        method: req.method().to_string(),
        path: req.uri().path().to_string(),
        query: req.uri().query().map(str::to_string),
        headers: req
            .headers()
            .iter()
            .map(|(key, value)| {
                (key.to_string(), value.to_str().unwrap_or_default().to_string())
            })
            .collect(),
    };

    let response = {
        let mut script = script.lock().await;
        script.seen.push(captured);
        script.replies.pop_front().unwrap_or_default()
    };

    if !response.delay.is_zero() {
        tokio::time::sleep(response.delay).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(response.status).expect("valid status"))
        .header("content-type", response.content_type)
        .body(Body::from(response.body))
        .expect("mock response")
}
