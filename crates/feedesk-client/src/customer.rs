//! Customer registration and lookup.

use std::sync::Arc;

use feedesk_auth::AuthGateway;
use feedesk_core::result::AppResult;
use feedesk_entity::customer::{CustomerRequest, CustomerResponse};

use crate::http::{ApiRequest, AuthorizedClient, ResourceMessages};

const BASE: [&str; 2] = ["api", "customer"];

/// Wording of customer-endpoint failures.
pub const CUSTOMER_MESSAGES: ResourceMessages = ResourceMessages {
    not_found: "Customer not found",
    conflict: "Customer already exists",
};

/// Client for `/api/customer`.
#[derive(Debug, Clone)]
pub struct CustomerClient {
    client: AuthorizedClient,
}

impl CustomerClient {
    /// Creates a customer client reporting to `gateway`.
    pub fn new(gateway: Arc<AuthGateway>) -> Self {
        Self {
            client: AuthorizedClient::new(gateway, CUSTOMER_MESSAGES),
        }
    }

    /// Registers a customer. Returns the server's confirmation text.
    pub async fn save(&self, request: &CustomerRequest) -> AppResult<String> {
        self.client.text(ApiRequest::post(BASE).json(request)?).await
    }

    /// Updates a customer. Returns the server's confirmation text.
    pub async fn update(&self, request: &CustomerRequest) -> AppResult<String> {
        self.client.text(ApiRequest::put(BASE).json(request)?).await
    }

    /// Looks a customer up by name.
    pub async fn find(&self, customer: &str) -> AppResult<CustomerResponse> {
        self.client
            .json(ApiRequest::get(["api", "customer", customer]))
            .await
    }
}
