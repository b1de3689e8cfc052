//! Loan creation and listing.

use std::sync::Arc;

use feedesk_auth::AuthGateway;
use feedesk_core::result::AppResult;
use feedesk_entity::fee::TableNumber;
use feedesk_entity::loan::{LoanRequest, LoanResponse};

use crate::http::{ApiRequest, AuthorizedClient, ResourceMessages};

/// Wording of loan-endpoint failures.
pub const LOAN_MESSAGES: ResourceMessages = ResourceMessages {
    not_found: "Customer not found",
    conflict: "Loan already exists",
};

/// Client for `/api/loan`.
#[derive(Debug, Clone)]
pub struct LoanClient {
    client: AuthorizedClient,
}

impl LoanClient {
    /// Creates a loan client reporting to `gateway`.
    pub fn new(gateway: Arc<AuthGateway>) -> Self {
        Self {
            client: AuthorizedClient::new(gateway, LOAN_MESSAGES),
        }
    }

    /// Issues a loan priced against `table`.
    pub async fn save(&self, table: TableNumber, request: &LoanRequest) -> AppResult<()> {
        let request = ApiRequest::post(["api", "loan", table.as_str()]).json(request)?;
        self.client.empty(request).await
    }

    /// Lists the loans of `customer`.
    pub async fn find_by_customer(&self, customer: &str) -> AppResult<Vec<LoanResponse>> {
        self.client
            .json(ApiRequest::get(["api", "loan", customer]))
            .await
    }
}
