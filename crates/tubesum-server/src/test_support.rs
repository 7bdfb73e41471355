//! Fakes and request helpers for router tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;
use tubesum_genai::{GenAiError, GenerationConfig, GenerativeModel, Part};

use crate::router;
use crate::state::{AppState, ClientHandle};

/// What the fake model returns
pub enum Reply {
    Text(String),
    InvalidInput(String),
    Upstream(String),
}

/// A single recorded `generate_content` call
#[derive(Debug, Clone)]
pub struct Call {
    pub model: String,
    pub parts: Vec<Part>,
    pub config: GenerationConfig,
}

/// In-memory model that records every call
pub struct FakeModel {
    reply: Reply,
    calls: Mutex<Vec<Call>>,
}

impl FakeModel {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeModel for FakeModel {
    fn name(&self) -> &str {
        "fake"
    }

    async fn generate_content(
        &self,
        model: &str,
        parts: Vec<Part>,
        config: GenerationConfig,
    ) -> Result<String, GenAiError> {
        self.calls.lock().unwrap().push(Call {
            model: model.to_owned(),
            parts,
            config,
        });

        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::InvalidInput(message) => Err(GenAiError::InvalidInput(message.clone())),
            Reply::Upstream(message) => Err(GenAiError::Upstream(message.clone())),
        }
    }
}

pub fn default_generation() -> GenerationConfig {
    GenerationConfig::from(&tubesum_config::GenerationConfig::default())
}

pub fn router_with(client: ClientHandle) -> Router {
    router(AppState::new(client, default_generation()))
}

/// Router backed by a fake model that answers with `reply`
pub fn router_with_reply(reply: Reply) -> (Router, Arc<FakeModel>) {
    let model = FakeModel::new(reply);
    let client: Arc<dyn GenerativeModel> = model.clone();
    let router = router_with(ClientHandle::Ready(client));
    (router, model)
}

pub fn router_with_model(summary: &str) -> (Router, Arc<FakeModel>) {
    router_with_reply(Reply::Text(summary.to_owned()))
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, http::HeaderMap, serde_json::Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, headers, body)
}

pub async fn get(router: Router, path: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::get(path).body(Body::empty()).unwrap();
    let (status, _, body) = send(router, request).await;
    (status, body)
}

pub async fn get_raw(router: Router, path: &str) -> (StatusCode, http::HeaderMap) {
    let request = Request::get(path).body(Body::empty()).unwrap();
    let (status, headers, _) = send(router, request).await;
    (status, headers)
}

pub async fn post_form(router: Router, path: &str, form: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::post(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_owned()))
        .unwrap();
    let (status, _, body) = send(router, request).await;
    (status, body)
}
