//! The per-request authorization contract shared by every resource client.
//!
//! 1. No present, unexpired token: log out and fail locally, nothing is sent.
//! 2. Otherwise send with `Authorization: Bearer <token>`.
//! 3. 401/403: log out and fail with `Unauthorized`.
//! 4. Other failures are classified without touching the session.
//!
//! Nothing is retried.

use std::sync::Arc;

use reqwest::{Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use feedesk_auth::AuthGateway;
use feedesk_auth::transport;
use feedesk_core::error::AppError;
use feedesk_core::result::AppResult;

/// Resource-specific wording for the classified errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceMessages {
    /// Message for 404.
    pub not_found: &'static str,
    /// Message for 409.
    pub conflict: &'static str,
}

/// An outbound request relative to the API base URL.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    segments: Vec<String>,
    query: Vec<(&'static str, String)>,
    body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// A request for the path made of `segments`; each segment is percent-encoded.
    pub fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
            body: None,
        }
    }

    /// `GET` request.
    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::GET, segments)
    }

    /// `POST` request.
    pub fn post<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::POST, segments)
    }

    /// `PUT` request.
    pub fn put<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::PUT, segments)
    }

    /// Append query-string pairs.
    pub fn query(mut self, params: impl IntoIterator<Item = (&'static str, String)>) -> Self {
        self.query.extend(params);
        self
    }

    /// Attach a JSON body.
    pub fn json<T: Serialize>(mut self, body: &T) -> AppResult<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Path as sent, for logging.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    fn url(&self, base: &str) -> AppResult<Url> {
        let mut url = Url::parse(base).map_err(|e| {
            AppError::configuration(format!("Invalid API base URL '{base}': {e}"))
        })?;
        url.path_segments_mut()
            .map_err(|_| AppError::configuration(format!("API base URL cannot be a base: {base}")))?
            .pop_if_empty()
            .extend(&self.segments);
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        Ok(url)
    }
}

/// Sends requests on behalf of a resource client under the authorization contract.
#[derive(Debug, Clone)]
pub struct AuthorizedClient {
    /// Session owner; read for every request, told to log out on rejection.
    gateway: Arc<AuthGateway>,
    /// Wording for 404/409.
    messages: ResourceMessages,
}

impl AuthorizedClient {
    /// Creates a client for one resource.
    pub fn new(gateway: Arc<AuthGateway>, messages: ResourceMessages) -> Self {
        Self { gateway, messages }
    }

    /// The current token if it may be sent; otherwise logs out and fails
    /// with `NoValidSession`.
    pub fn bearer_token(&self) -> AppResult<String> {
        match self.gateway.current_token() {
            Some(token) if !self.gateway.is_expired(&token) => Ok(token),
            present => {
                warn!(
                    had_token = present.is_some(),
                    "No usable session for authorized request, logging out"
                );
                self.gateway.logout();
                Err(AppError::no_valid_session())
            }
        }
    }

    /// Sends `request` and returns the successful response.
    pub async fn send(&self, request: ApiRequest) -> AppResult<reqwest::Response> {
        let token = self.bearer_token()?;
        let url = request.url(&self.gateway.api().base_url)?;
        debug!(method = %request.method, path = %request.path(), "Sending authorized request");

        let mut builder = self
            .gateway
            .http()
            .request(request.method.clone(), url)
            .bearer_auth(&token);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(transport::send_error)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        Err(self.reject(status, &request))
    }

    /// Sends `request` and decodes a JSON body.
    pub async fn json<T: DeserializeOwned>(&self, request: ApiRequest) -> AppResult<T> {
        let response = self.send(request).await?;
        response.json::<T>().await.map_err(transport::send_error)
    }

    /// Sends `request` and returns the body as text.
    pub async fn text(&self, request: ApiRequest) -> AppResult<String> {
        let response = self.send(request).await?;
        response.text().await.map_err(transport::send_error)
    }

    /// Sends `request` to an endpoint without a meaningful body.
    pub async fn empty(&self, request: ApiRequest) -> AppResult<()> {
        self.send(request).await.map(|_| ())
    }

    fn reject(&self, status: StatusCode, request: &ApiRequest) -> AppError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                warn!(
                    status = status.as_u16(),
                    path = %request.path(),
                    "Server rejected the session, logging out"
                );
                self.gateway.logout();
                AppError::unauthorized(status.as_u16())
            }
            StatusCode::NOT_FOUND => AppError::not_found(self.messages.not_found),
            StatusCode::CONFLICT => AppError::conflict(self.messages.conflict),
            other => {
                debug!(status = other.as_u16(), path = %request.path(), "Request failed");
                transport::status_error(other)
            }
        }
    }

    /// The gateway this client reports to.
    pub fn gateway(&self) -> &Arc<AuthGateway> {
        &self.gateway
    }
}
