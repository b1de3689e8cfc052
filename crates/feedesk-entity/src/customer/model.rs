//! Customer entity models.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/customer` and `PUT /api/customer`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct CustomerRequest {
    /// Customer name; also the lookup key.
    #[validate(length(min = 3))]
    pub customer: String,
    /// Contact email address.
    #[validate(email)]
    pub email: String,
}

/// Body of `GET /api/customer/{name}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerResponse {
    /// Customer name.
    pub customer: String,
    /// Contact email address.
    pub email: String,
}

impl From<CustomerRequest> for CustomerResponse {
    fn from(request: CustomerRequest) -> Self {
        Self {
            customer: request.customer,
            email: request.email,
        }
    }
}
