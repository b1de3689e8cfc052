//! Fee table maintenance and lookup.

use std::sync::Arc;

use feedesk_auth::AuthGateway;
use feedesk_core::result::AppResult;
use feedesk_entity::fee::{FeeQuery, FeeRequest, FeeResponse, FeeUpdateRequest};

use crate::http::{ApiRequest, AuthorizedClient, ResourceMessages};

const BASE: [&str; 2] = ["api", "fees"];

/// Wording of fee-endpoint failures.
pub const FEE_MESSAGES: ResourceMessages = ResourceMessages {
    not_found: "Fee not found",
    conflict: "Fee already exists",
};

/// Client for `/api/fees`.
#[derive(Debug, Clone)]
pub struct FeeClient {
    client: AuthorizedClient,
}

impl FeeClient {
    /// Creates a fee client reporting to `gateway`.
    pub fn new(gateway: Arc<AuthGateway>) -> Self {
        Self {
            client: AuthorizedClient::new(gateway, FEE_MESSAGES),
        }
    }

    /// Creates a fee row.
    pub async fn create(&self, request: &FeeRequest) -> AppResult<()> {
        self.client.empty(ApiRequest::post(BASE).json(request)?).await
    }

    /// Updates the fee row identified by `request.id`. Returns the server's text.
    pub async fn update(&self, request: &FeeUpdateRequest) -> AppResult<String> {
        self.client.text(ApiRequest::put(BASE).json(request)?).await
    }

    /// Looks up the fee for a table, installment count and card flag.
    ///
    /// Fails with a validation error, without touching the session or the
    /// network, unless all three criteria are given.
    pub async fn find(&self, query: &FeeQuery) -> AppResult<FeeResponse> {
        let params = query.to_params()?;
        self.client.json(ApiRequest::get(BASE).query(params)).await
    }
}
