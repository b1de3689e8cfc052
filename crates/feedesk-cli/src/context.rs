//! Process-wide wiring shared by every command.

use std::sync::Arc;

use feedesk_auth::{AuthGateway, SessionStore};
use feedesk_client::{CustomerClient, FeeClient, LoanClient};
use feedesk_core::config::AppConfig;
use feedesk_core::result::AppResult;

/// The single gateway and the resource clients bound to it.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Session owner.
    pub gateway: Arc<AuthGateway>,
    /// `/api/customer`
    pub customers: CustomerClient,
    /// `/api/fees`
    pub fees: FeeClient,
    /// `/api/loan`
    pub loans: LoanClient,
}

impl AppContext {
    /// Recovers the persisted session and builds the clients.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let session = SessionStore::from_config(&config.session)?;
        let gateway = AuthGateway::new(session, config.api.clone())?;
        Ok(Self::new(Arc::new(gateway)))
    }

    /// Binds the resource clients to an existing gateway.
    pub fn new(gateway: Arc<AuthGateway>) -> Self {
        Self {
            customers: CustomerClient::new(gateway.clone()),
            fees: FeeClient::new(gateway.clone()),
            loans: LoanClient::new(gateway.clone()),
            gateway,
        }
    }
}
