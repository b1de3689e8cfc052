//! # feedesk-entity
//!
//! Wire models exchanged with the fee/loan back office. Field names
//! follow the API's camelCase JSON; request types carry the form rules
//! the front-end enforces before anything is sent.

pub mod auth;
pub mod customer;
pub mod fee;
pub mod loan;
pub mod validation;

pub use auth::{LoginRequest, LoginResponse};
pub use customer::{CustomerRequest, CustomerResponse};
pub use fee::{CardFlag, FeeQuery, FeeRequest, FeeResponse, FeeUpdateRequest, TableNumber};
pub use loan::{LoanRequest, LoanResponse};
pub use validation::validate_request;
