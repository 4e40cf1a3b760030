#![allow(dead_code)]

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::Value;
use std::net::{SocketAddr, TcpListener};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, Notify};

/// A stand-in for the remote support service.
#[derive(Clone)]
pub struct FakeSupport {
    pub addr: SocketAddr,
    inner: Arc<FakeInner>,
}

enum Reply {
    Json(Value),
    Text(String),
}

struct FakeInner {
    status: StatusCode,
    reply: Reply,
    hits: AtomicUsize,
    received: Mutex<Vec<Value>>,
    gate: Option<Arc<Notify>>,
}

impl FakeSupport {
    pub async fn start(body: Value) -> Self {
        Self::start_with(StatusCode::OK, body, None).await
    }

    pub async fn start_with(status: StatusCode, body: Value, gate: Option<Arc<Notify>>) -> Self {
        Self::spawn(status, Reply::Json(body), gate).await
    }

    /// Replies with a plain-text body that is not JSON.
    pub async fn start_text(status: StatusCode, body: &str) -> Self {
        Self::spawn(status, Reply::Text(body.to_string()), None).await
    }

    async fn spawn(status: StatusCode, reply: Reply, gate: Option<Arc<Notify>>) -> Self {
        let inner = Arc::new(FakeInner {
            status,
            reply,
            hits: AtomicUsize::new(0),
            received: Mutex::new(Vec::new()),
            gate,
        });
        let app = Router::new()
            .route("/support", post(respond))
            .with_state(Arc::clone(&inner));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, inner }
    }

    pub fn url(&self) -> String {
        format!("http://{}/support", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.inner.hits.load(Ordering::SeqCst)
    }

    pub async fn received(&self) -> Vec<Value> {
        self.inner.received.lock().await.clone()
    }
}

async fn respond(State(inner): State<Arc<FakeInner>>, Json(payload): Json<Value>) -> Response {
    inner.hits.fetch_add(1, Ordering::SeqCst);
    inner.received.lock().await.push(payload);
    if let Some(gate) = &inner.gate {
        gate.notified().await;
    }
    match &inner.reply {
        Reply::Json(body) => (inner.status, Json(body.clone())).into_response(),
        Reply::Text(body) => (inner.status, body.clone()).into_response(),
    }
}

/// An address nothing listens on.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/support")
}
