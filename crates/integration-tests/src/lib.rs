//! Test harness for the debate platform client.
//!
//! [`StubServer`] is an `axum` server on an ephemeral port that answers
//! canned responses and records every request it receives, so tests can
//! drive the real `reqwest`-based client end to end.
//!
//! ```rust,ignore
//! let server = StubServer::start().await;
//! server.respond("GET", "/api/ranking", 200, json!({ "ranking": [] }));
//!
//! let client = server.client(Session::in_memory());
//! client.ranking().get().await.unwrap();
//!
//! let request = server.last_request().unwrap();
//! assert!(request.header("authorization").is_none());
//! ```

#![allow(clippy::missing_panics_doc, clippy::expect_used)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use debate_platform_client::{ApiClient, ClientConfig, Navigator, Session};
use serde_json::{Value, json};
use url::Url;

/// One request as the server saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl RecordedRequest {
    /// Header value by lowercase name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Body parsed as JSON.
    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

#[derive(Debug, Clone)]
struct Canned {
    status: u16,
    body: String,
}

#[derive(Debug, Default)]
struct StubState {
    routes: Mutex<HashMap<(String, String), Canned>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Canned-response HTTP server. Unknown routes answer 404 with an `error`.
#[derive(Debug, Clone)]
pub struct StubServer {
    base_url: String,
    state: Arc<StubState>,
}

impl StubServer {
    pub async fn start() -> Self {
        let state = Arc::new(StubState::default());
        let app = Router::new().fallback(handle).with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub server");
        let addr = listener.local_addr().expect("stub server address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server");
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    /// Server root, without the `/api` prefix.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Client configured against `{base_url}/api`.
    #[must_use]
    pub fn config(&self) -> ClientConfig {
        ClientConfig {
            base_url: Url::parse(&format!("{}/api", self.base_url)).expect("stub URL"),
            ..ClientConfig::default()
        }
    }

    #[must_use]
    pub fn client(&self, session: Session) -> ApiClient {
        ApiClient::new(self.config(), session)
    }

    /// Answer `method path` (query ignored) with `status` and a JSON body.
    pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
        self.respond_raw(method, path, status, &body.to_string());
    }

    /// Answer `method path` with a body sent verbatim.
    pub fn respond_raw(&self, method: &str, path: &str, status: u16, body: &str) {
        self.state
            .routes
            .lock()
            .expect("routes lock")
            .insert(
                (method.to_string(), path.to_string()),
                Canned {
                    status,
                    body: body.to_string(),
                },
            );
    }

    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().expect("requests lock").clone()
    }

    #[must_use]
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests().pop()
    }
}

async fn handle(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let path = uri.path().to_string();
    state.requests.lock().expect("requests lock").push(RecordedRequest {
        method: method.to_string(),
        path: path.clone(),
        query: uri.query().map(ToString::to_string),
        headers: headers
            .iter()
            .map(|(k, v)| (k.as_str().to_string(), v.to_str().unwrap_or_default().to_string()))
            .collect(),
        body,
    });

    let canned = state
        .routes
        .lock()
        .expect("routes lock")
        .get(&(method.to_string(), path))
        .cloned();

    match canned {
        Some(Canned { status, body }) => (
            StatusCode::from_u16(status).expect("valid status"),
            [(CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            [(CONTENT_TYPE, "application/json")],
            json!({ "error": "Not found" }).to_string(),
        )
            .into_response(),
    }
}

/// Navigator that records every target.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().expect("visits lock").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, location: &str) {
        self.visits.lock().expect("visits lock").push(location.to_string());
    }
}

/// A complete profile as the server returns it.
#[must_use]
pub fn user_json(user_id: i32, nickname: &str, is_admin: bool) -> Value {
    json!({
        "user_id": user_id,
        "nickname": nickname,
        "avatar": null,
        "rating": 1500,
        "is_admin": is_admin
    })
}
