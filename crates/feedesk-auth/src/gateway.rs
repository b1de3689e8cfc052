//! Login, logout, and the session queries derived from the current token.

use std::collections::BTreeSet;

use futures::StreamExt;
use futures::stream::BoxStream;
use reqwest::StatusCode;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use feedesk_core::config::ApiConfig;
use feedesk_core::error::{AppError, ErrorKind};
use feedesk_entity::auth::{LoginRequest, LoginResponse};

use crate::jwt::{Claims, TokenCodec};
use crate::session::SessionStore;
use crate::transport;

/// Path of the login endpoint.
pub const LOGIN_PATH: &str = "/api/auth/login";

/// One-way signals from the session layer to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The session ended; show the login view.
    Login,
}

/// Owns the session store and exposes the login/logout lifecycle.
///
/// Created once at start-up and shared by reference (`Arc`) with every
/// resource client.
pub struct AuthGateway {
    /// The process-wide token slot.
    session: SessionStore,
    /// Decoder for the current token.
    codec: TokenCodec,
    /// HTTP client shared with the resource clients.
    http: reqwest::Client,
    /// API location.
    api: ApiConfig,
    /// Navigation signal sender.
    navigation: broadcast::Sender<Navigation>,
}

impl std::fmt::Debug for AuthGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGateway")
            .field("api", &self.api)
            .field("logged_in", &self.is_logged_in())
            .finish()
    }
}

impl AuthGateway {
    /// Creates a gateway with its own HTTP client.
    pub fn new(session: SessionStore, api: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .user_agent(api.user_agent.clone())
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;
        Ok(Self::with_client(session, api, http))
    }

    /// Creates a gateway around an existing HTTP client.
    pub fn with_client(session: SessionStore, api: ApiConfig, http: reqwest::Client) -> Self {
        let (navigation, _) = broadcast::channel(16);
        Self {
            session,
            codec: TokenCodec::new(),
            http,
            api,
            navigation,
        }
    }

    /// Exchanges credentials for a token with exactly one request.
    ///
    /// On success the token replaces the current session. On any failure
    /// the session is left untouched.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), AppError> {
        let request = LoginRequest::new(username, password);
        let url = self.api.url(LOGIN_PATH);
        debug!(%url, username, "Sending login request");

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(transport::send_error)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            warn!(username, "Login rejected");
            return Err(AppError::invalid_credentials());
        }
        if !status.is_success() {
            warn!(username, status = status.as_u16(), "Login failed");
            return Err(transport::status_error(status));
        }

        let body: LoginResponse = response.json().await.map_err(transport::send_error)?;
        if body.token.trim().is_empty() {
            return Err(AppError::serialization(
                "Login response did not contain a token",
            ));
        }

        self.session.set(body.token);
        info!(username, "Login succeeded");
        Ok(())
    }

    /// Ends the session and tells the presentation layer to show the login view.
    ///
    /// Safe to call any number of times.
    pub fn logout(&self) {
        self.session.clear();
        // No receivers just means nobody is listening for navigation.
        let _ = self.navigation.send(Navigation::Login);
        info!("Logged out");
    }

    /// Whether `token` is expired; undecodable tokens count as expired.
    pub fn is_expired(&self, token: &str) -> bool {
        self.codec.is_expired(token)
    }

    /// `true` whenever the session holds a present, unexpired token.
    ///
    /// Emits immediately for the current token, then once per change.
    pub fn logged_in(&self) -> BoxStream<'static, bool> {
        let codec = self.codec;
        self.session
            .observe()
            .map(move |token| token.is_some_and(|t| !codec.is_expired(&t)))
            .boxed()
    }

    /// Snapshot of the logged-in state.
    pub fn is_logged_in(&self) -> bool {
        self.session
            .current()
            .is_some_and(|t| !self.codec.is_expired(&t))
    }

    /// Snapshot of the current token.
    pub fn current_token(&self) -> Option<String> {
        self.session.current()
    }

    /// Claims of the current token, if present and decodable.
    pub fn claims(&self) -> Option<Claims> {
        self.session
            .current()
            .and_then(|t| self.codec.decode(&t).ok())
    }

    /// Subject of the current token.
    pub fn username(&self) -> Option<String> {
        self.claims().and_then(|c| c.sub)
    }

    /// Roles of the current token; empty when logged out.
    pub fn roles(&self) -> BTreeSet<String> {
        self.claims().map(|c| c.role_set()).unwrap_or_default()
    }

    /// Subscribes to navigation signals.
    pub fn navigation(&self) -> broadcast::Receiver<Navigation> {
        self.navigation.subscribe()
    }

    /// The owned session store.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// The token decoder.
    pub fn codec(&self) -> TokenCodec {
        self.codec
    }

    /// The shared HTTP client.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// API location.
    pub fn api(&self) -> &ApiConfig {
        &self.api
    }
}
