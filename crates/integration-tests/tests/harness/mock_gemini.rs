//! Mock Google `generateContent` backend for integration tests
//!
//! Serves both the Generative Language API path and the Vertex AI path and
//! records every request it receives.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// How the mock answers
#[derive(Debug, Clone)]
pub enum MockReply {
    /// 200 with a single text candidate
    Text(String),
    /// Error status with a Google-style error body
    Error { status: u16, message: String },
    /// 200 with a blocked prompt and no candidates
    Blocked,
}

/// A recorded request
#[derive(Debug, Clone)]
pub struct Recorded {
    /// Path segment after `models/`, e.g. `gemini-2.0-flash-001:generateContent`
    pub action: String,
    /// Vertex AI project from the path, if any
    pub project: Option<String>,
    pub authorization: Option<String>,
    pub api_key: Option<String>,
    pub body: serde_json::Value,
}

/// Mock backend that returns a canned reply
pub struct MockGemini {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    reply: MockReply,
    requests: Mutex<Vec<Recorded>>,
}

impl MockGemini {
    /// Start a mock that answers every request with `reply`
    pub async fn start(reply: MockReply) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            reply,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v1beta/models/{action}", routing::post(handle_gemini_api))
            .route(
                "/v1/projects/{project}/locations/{location}/publishers/google/models/{action}",
                routing::post(handle_vertex),
            )
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Start a mock that answers with a summary
    pub async fn with_summary(summary: &str) -> anyhow::Result<Self> {
        Self::start(MockReply::Text(summary.to_owned())).await
    }

    /// Base URL for the developer-API backend
    pub fn gemini_api_url(&self) -> String {
        format!("http://{}/v1beta", self.addr)
    }

    /// Base URL for the Vertex AI backend
    pub fn vertex_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }
}

impl Drop for MockGemini {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_gemini_api(
    State(state): State<Arc<MockState>>,
    Path(action): Path<String>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    record(&state, action, None, &headers, body);
    reply(&state.reply)
}

async fn handle_vertex(
    State(state): State<Arc<MockState>>,
    Path((project, _location, action)): Path<(String, String, String)>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    record(&state, action, Some(project), &headers, body);
    reply(&state.reply)
}

fn record(state: &MockState, action: String, project: Option<String>, headers: &HeaderMap, body: serde_json::Value) {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(ToOwned::to_owned);

    state.requests.lock().unwrap().push(Recorded {
        action,
        project,
        authorization: header("authorization"),
        api_key: header("x-goog-api-key"),
        body,
    });
}

fn reply(reply: &MockReply) -> Response {
    match reply {
        MockReply::Text(text) => Json(serde_json::json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 120, "candidatesTokenCount": 30, "totalTokenCount": 150}
        }))
        .into_response(),
        MockReply::Error { status, message } => {
            let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let body = serde_json::json!({
                "error": {
                    "code": status.as_u16(),
                    "message": message,
                    "status": if status == StatusCode::BAD_REQUEST { "INVALID_ARGUMENT" } else { "INTERNAL" }
                }
            });
            (status, Json(body)).into_response()
        }
        MockReply::Blocked => Json(serde_json::json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        }))
        .into_response(),
    }
}
