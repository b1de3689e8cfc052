//! Shared test helpers for integration tests.
//!
//! `MockBackOffice` is an in-process axum server standing in for the REST
//! back office: every request is recorded, and each `(method, path)` pair
//! answers with a canned status and body.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use parking_lot::Mutex;
use serde_json::Value;

use feedesk_auth::{AuthGateway, MemoryTokenStorage, SessionStore};
use feedesk_cli::AppContext;
use feedesk_core::config::ApiConfig;
use feedesk_core::traits::TokenStorage;

/// Storage key used by every test session.
pub const TOKEN_KEY: &str = "auth_token";

/// A request as the mock server saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method
    pub method: String,
    /// Raw (percent-encoded) path
    pub path: String,
    /// Raw query string, if any
    pub query: Option<String>,
    /// `Authorization` header, if any
    pub authorization: Option<String>,
    /// `Content-Type` header, if any
    pub content_type: Option<String>,
    /// Request body
    pub body: String,
}

impl RecordedRequest {
    /// Body parsed as JSON.
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body is not JSON")
    }
}

#[derive(Clone, Default)]
struct MockState {
    routes: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// In-process stand-in for the back office.
pub struct MockBackOffice {
    /// Base URL to point `ApiConfig` at
    pub base_url: String,
    state: MockState,
}

impl MockBackOffice {
    /// Start a server on an ephemeral local port.
    pub async fn start() -> Self {
        let state = MockState::default();
        let router = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("No local address");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Mock server failed");
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// Answer `method path` with `status` and `body`.
    pub fn respond(&self, method: &str, path: &str, status: u16, body: impl Into<String>) {
        self.state
            .routes
            .lock()
            .insert((method.to_string(), path.to_string()), (status, body.into()));
    }

    /// Answer `method path` with `status` and a JSON body.
    pub fn respond_json(&self, method: &str, path: &str, status: u16, body: Value) {
        self.respond(method, path, status, body.to_string());
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().clone()
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        self.state.requests.lock().len()
    }

    /// The only request received; panics otherwise.
    pub fn single_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request: {requests:?}");
        requests[0].clone()
    }
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.requests.lock().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body,
    });

    let canned = state
        .routes
        .lock()
        .get(&(method.to_string(), uri.path().to_string()))
        .cloned();

    match canned {
        Some((status, body)) => {
            let status = StatusCode::from_u16(status).expect("Invalid canned status");
            let content_type = if body.starts_with('{') || body.starts_with('[') {
                "application/json"
            } else {
                "text/plain"
            };
            (status, [(header::CONTENT_TYPE, content_type)], body).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Build an unsigned compact JWT whose `exp` is `exp_offset` seconds from now.
pub fn mint_token(sub: &str, roles: &str, exp_offset: i64) -> String {
    mint_token_with_header(
        serde_json::json!({"alg": "HS256", "typ": "JWT"}),
        sub,
        roles,
        exp_offset,
    )
}

/// Same as [`mint_token`] with an arbitrary JOSE header.
pub fn mint_token_with_header(header: Value, sub: &str, roles: &str, exp_offset: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let payload = serde_json::json!({
        "sub": sub,
        "roles": roles,
        "iat": now,
        "exp": now + exp_offset,
        "iss": "fee-backoffice",
    });
    format!(
        "{}.{}.c2lnbmF0dXJl",
        URL_SAFE_NO_PAD.encode(header.to_string()),
        URL_SAFE_NO_PAD.encode(payload.to_string())
    )
}

/// A token valid for the next hour.
pub fn valid_token() -> String {
    mint_token("testuser", "admin user", 3600)
}

/// `ApiConfig` pointing at `base_url`.
pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        ..ApiConfig::default()
    }
}

/// A gateway over in-memory storage, logged out.
pub fn gateway(base_url: &str) -> Arc<AuthGateway> {
    gateway_with_storage(base_url, Arc::new(MemoryTokenStorage::new()))
}

/// A gateway recovering its session from `storage`.
pub fn gateway_with_storage(base_url: &str, storage: Arc<dyn TokenStorage>) -> Arc<AuthGateway> {
    let session = SessionStore::initialize(storage, TOKEN_KEY);
    Arc::new(AuthGateway::new(session, api_config(base_url)).expect("Failed to build gateway"))
}

/// A context whose session holds a valid token.
pub fn logged_in_context(base_url: &str) -> (AppContext, String) {
    let token = valid_token();
    let storage = Arc::new(MemoryTokenStorage::with_item(TOKEN_KEY, token.clone()));
    let ctx = AppContext::new(gateway_with_storage(base_url, storage));
    (ctx, token)
}

/// A context with no session.
pub fn logged_out_context(base_url: &str) -> AppContext {
    AppContext::new(gateway(base_url))
}

/// Base URL of a port nothing listens on.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    drop(listener);
    format!("http://{}", addr)
}
