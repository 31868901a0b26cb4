use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Json;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use serde_json::{Value, json};

use crate::config::Env;

pub const TEST_API_KEY: &str = "test-key";

/// Fixed environment snapshot, for tests.
#[derive(Debug, Default, Clone)]
pub struct MapEnv(HashMap<String, String>);

impl MapEnv {
    pub fn new<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl Env for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

fn spawn_axum_server(app: axum::Router) -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local_addr");
    listener.set_nonblocking(true).expect("nonblocking");
    let listener = tokio::net::TcpListener::from_std(listener).expect("to tokio listener");
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    (addr, handle)
}

pub fn reserve_unused_local_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    listener.local_addr().expect("local_addr")
}

fn key_rejected() -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "errors": [{ "reason": "badRequest" }]
            }
        })),
    )
}

fn key_ok(headers: &HeaderMap) -> bool {
    headers
        .get("x-goog-api-key")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == TEST_API_KEY)
}

/// Local stand-in for the Translate v2 API.
///
/// `detect` always reports `detected` (no candidates when empty); `translate` answers
/// `"[{target}] {text}"`. Requests with a key other than [`TEST_API_KEY`] get a 400.
pub struct FakeApi {
    pub base_url: String,
    detect_hits: Arc<AtomicUsize>,
    translate_requests: Arc<Mutex<Vec<Value>>>,
    handle: tokio::task::JoinHandle<()>,
}

impl FakeApi {
    pub fn spawn(detected: &'static str) -> Self {
        let detect_hits = Arc::new(AtomicUsize::new(0));
        let translate_requests = Arc::new(Mutex::new(Vec::new()));

        let hits = detect_hits.clone();
        let recorded = translate_requests.clone();
        let app = axum::Router::new()
            .route(
                "/language/translate/v2/detect",
                post(move |headers: HeaderMap, Json(_body): Json<Value>| async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    if !key_ok(&headers) {
                        return key_rejected();
                    }
                    let detections = if detected.is_empty() {
                        json!([])
                    } else {
                        json!([[{ "language": detected, "isReliable": false, "confidence": 1 }]])
                    };
                    (StatusCode::OK, Json(json!({ "data": { "detections": detections } })))
                }),
            )
            .route(
                "/language/translate/v2",
                post(move |headers: HeaderMap, Json(body): Json<Value>| async move {
                    recorded.lock().expect("lock").push(body.clone());
                    if !key_ok(&headers) {
                        return key_rejected();
                    }
                    let target = body["target"].as_str().unwrap_or_default();
                    let text = body["q"][0].as_str().unwrap_or_default();
                    (
                        StatusCode::OK,
                        Json(json!({
                            "data": {
                                "translations": [{ "translatedText": format!("[{target}] {text}") }]
                            }
                        })),
                    )
                }),
            );
        let (addr, handle) = spawn_axum_server(app);

        Self {
            base_url: format!("http://{addr}/language/translate/v2"),
            detect_hits,
            translate_requests,
            handle,
        }
    }

    pub fn detect_hits(&self) -> usize {
        self.detect_hits.load(Ordering::SeqCst)
    }

    pub fn translate_requests(&self) -> Vec<Value> {
        self.translate_requests.lock().expect("lock").clone()
    }
}

impl Drop for FakeApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
